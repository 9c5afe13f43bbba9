//! Annealing run configuration.

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use ud_mis_anneal::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(100.0)
///     .with_final_temperature(0.01)
///     .with_steps(5000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Temperature at step 0. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature the geometric schedule decays toward by the last step.
    pub final_temperature: f64,

    /// Total number of Metropolis steps. The run always executes this
    /// fixed budget; there is no convergence detection.
    pub steps: usize,

    /// Observation cadence: the running energy is recorded every this
    /// many steps.
    pub sample_interval: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            final_temperature: 0.01,
            steps: 5000,
            sample_interval: 100,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_steps(mut self, n: usize) -> Self {
        self.steps = n;
        self
    }

    pub fn with_sample_interval(mut self, n: usize) -> Self {
        self.sample_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Both temperature endpoints must be positive and finite (a zero or
    /// negative base breaks the geometric interpolation), and the step
    /// and sampling counts must be nonzero.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            ));
        }
        if !self.final_temperature.is_finite() || self.final_temperature <= 0.0 {
            return Err(format!(
                "final_temperature must be positive, got {}",
                self.final_temperature
            ));
        }
        if self.steps == 0 {
            return Err("steps must be positive".into());
        }
        if self.sample_interval == 0 {
            return Err("sample_interval must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.final_temperature - 0.01).abs() < 1e-10);
        assert_eq!(config.steps, 5000);
        assert_eq!(config.sample_interval, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_initial_temperature() {
        assert!(AnnealConfig::default()
            .with_initial_temperature(0.0)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_initial_temperature(-5.0)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_initial_temperature(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_final_temperature() {
        assert!(AnnealConfig::default()
            .with_final_temperature(0.0)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_final_temperature(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_counts() {
        assert!(AnnealConfig::default().with_steps(0).validate().is_err());
        assert!(AnnealConfig::default()
            .with_sample_interval(0)
            .validate()
            .is_err());
    }
}
