//! Annealing execution loop.

use super::chain::MetropolisChain;
use super::config::AnnealConfig;
use super::schedule::GeometricSchedule;
use crate::energy::EnergyModel;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// Final configuration; `true` marks candidate independent-set
    /// membership.
    pub occupation: Vec<bool>,

    /// Energy of the final configuration.
    pub energy: f64,

    /// Lowest-energy configuration seen during the run.
    pub best_occupation: Vec<bool>,

    /// Energy of the best configuration.
    pub best_energy: f64,

    /// Metropolis steps executed.
    pub iterations: usize,

    /// Temperature at the last executed step.
    pub final_temperature: f64,

    /// Accepted moves, including improvements.
    pub accepted_moves: usize,

    /// Strictly energy-lowering moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Running energy sampled every `sample_interval` steps, starting
    /// with the initial configuration's energy.
    pub energy_history: Vec<f64>,
}

/// Drives a Metropolis chain across a geometric temperature schedule.
///
/// Runs a fixed step budget with no convergence detection; deadlines
/// beyond the budget are the caller's concern, hooked in through the
/// cancellation token.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs one annealing chain.
    pub fn run<M: EnergyModel>(model: &M, config: &AnnealConfig) -> Result<AnnealResult, String> {
        Self::run_with_cancel(model, config, None)
    }

    /// Runs one annealing chain with an optional cancellation token.
    ///
    /// If `cancel` is set to `true` the run stops before the next step
    /// and returns the state reached so far.
    pub fn run_with_cancel<M: EnergyModel>(
        model: &M,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult, String> {
        config.validate()?;
        let schedule = GeometricSchedule::new(
            config.initial_temperature,
            config.final_temperature,
            config.steps,
        )?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut chain = MetropolisChain::new(model, &mut rng);
        let mut best_occupation = chain.occupation().to_vec();
        let mut best_energy = chain.energy();
        let mut energy_history = vec![chain.energy()];
        let mut final_temperature = config.initial_temperature;
        let mut cancelled = false;

        for t in 0..config.steps {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let temperature = schedule.temperature(t);
            final_temperature = temperature;
            let energy = chain.step(temperature, &mut rng);

            if energy < best_energy {
                best_energy = energy;
                best_occupation = chain.occupation().to_vec();
            }

            if (t + 1).is_multiple_of(config.sample_interval) {
                energy_history.push(energy);
            }
        }

        if energy_history
            .last()
            .is_none_or(|&last| (last - chain.energy()).abs() > 1e-15)
        {
            energy_history.push(chain.energy());
        }

        Ok(AnnealResult {
            energy: chain.energy(),
            iterations: chain.steps(),
            accepted_moves: chain.accepted_moves(),
            improving_moves: chain.improving_moves(),
            occupation: chain.into_occupation(),
            best_occupation,
            best_energy,
            final_temperature,
            cancelled,
            energy_history,
        })
    }

    /// Runs several fully independent chains in parallel and returns the
    /// one with the lowest best energy.
    ///
    /// Each chain derives its own RNG stream from the configured seed, so
    /// no state is shared across chains; parallelism is across restarts,
    /// never within one chain.
    #[cfg(feature = "parallel")]
    pub fn run_chains<M: EnergyModel + Sync>(
        model: &M,
        config: &AnnealConfig,
        num_chains: usize,
    ) -> Result<AnnealResult, String> {
        config.validate()?;
        if num_chains == 0 {
            return Err("num_chains must be positive".into());
        }

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let results: Vec<AnnealResult> = (0..num_chains)
            .into_par_iter()
            .map(|index| {
                let chain_config = config.clone().with_seed(base_seed.wrapping_add(index as u64));
                Self::run(model, &chain_config)
            })
            .collect::<Result<_, String>>()?;

        results
            .into_iter()
            .min_by(|a, b| a.best_energy.total_cmp(&b.best_energy))
            .ok_or_else(|| "no chains executed".into())
    }
}
