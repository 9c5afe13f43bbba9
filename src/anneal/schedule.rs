//! Geometric temperature schedule.

/// Geometric interpolation from an initial to a final temperature:
/// `T(t) = T_initial * (T_final / T_initial)^(t / N)`.
///
/// Monotonically non-increasing whenever `T_final <= T_initial`, the
/// canonical annealing usage. The chain itself accepts any temperature
/// per step, so callers may substitute their own sequence.
#[derive(Debug, Clone, Copy)]
pub struct GeometricSchedule {
    t_initial: f64,
    t_final: f64,
    steps: usize,
}

impl GeometricSchedule {
    /// Creates the schedule over `steps` step indices.
    ///
    /// Both endpoints must be positive and finite; a zero or negative
    /// base would make the exponent undefined mid-run, so this is
    /// rejected eagerly.
    pub fn new(t_initial: f64, t_final: f64, steps: usize) -> Result<Self, String> {
        if !t_initial.is_finite() || t_initial <= 0.0 {
            return Err(format!("t_initial must be positive, got {t_initial}"));
        }
        if !t_final.is_finite() || t_final <= 0.0 {
            return Err(format!("t_final must be positive, got {t_final}"));
        }
        if steps == 0 {
            return Err("steps must be positive".into());
        }
        Ok(Self {
            t_initial,
            t_final,
            steps,
        })
    }

    /// Temperature at step index `t`. `temperature(0)` is the initial
    /// temperature; `temperature(steps)` is exactly the final one.
    pub fn temperature(&self, t: usize) -> f64 {
        self.t_initial * (self.t_final / self.t_initial).powf(t as f64 / self.steps as f64)
    }

    /// Number of step indices covered.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The full temperature sequence, one value per step index.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.steps).map(move |t| self.temperature(t))
    }
}
