//! Single-spin-flip Metropolis chain.

use crate::energy::EnergyModel;
use rand::Rng;

/// A Metropolis Markov chain over occupation configurations.
///
/// Owns the system's sole mutable state: the configuration plus a running
/// total energy, updated incrementally by the flip delta on every accepted
/// move. Randomness comes only from the RNG injected per call, so seeded
/// runs are reproducible and independent chains can run in parallel
/// without shared state.
#[derive(Debug, Clone)]
pub struct MetropolisChain<'a, M: EnergyModel> {
    model: &'a M,
    occupation: Vec<bool>,
    energy: f64,
    steps: usize,
    accepted_moves: usize,
    improving_moves: usize,
}

impl<'a, M: EnergyModel> MetropolisChain<'a, M> {
    /// Starts a chain from the maximum-entropy configuration: each site
    /// independently occupied with probability ½.
    pub fn new<R: Rng>(model: &'a M, rng: &mut R) -> Self {
        let occupation: Vec<bool> = (0..model.num_sites()).map(|_| rng.random()).collect();
        let energy = model.total_energy(&occupation);
        Self {
            model,
            occupation,
            energy,
            steps: 0,
            accepted_moves: 0,
            improving_moves: 0,
        }
    }

    /// Starts a chain from a caller-supplied configuration.
    pub fn from_occupation(model: &'a M, occupation: Vec<bool>) -> Result<Self, String> {
        if occupation.len() != model.num_sites() {
            return Err(format!(
                "occupation has {} sites, model has {}",
                occupation.len(),
                model.num_sites()
            ));
        }
        let energy = model.total_energy(&occupation);
        Ok(Self {
            model,
            occupation,
            energy,
            steps: 0,
            accepted_moves: 0,
            improving_moves: 0,
        })
    }

    /// One Metropolis step at the given temperature. Returns the running
    /// total energy, unchanged on rejection.
    ///
    /// A uniformly chosen site is proposed for a flip. Non-positive
    /// deltas are always accepted; a positive delta is accepted with
    /// probability `exp(-delta / temperature)`. Non-positive temperatures
    /// fall back to the strict greedy rule instead of evaluating the
    /// undefined `exp(-delta / 0)`.
    pub fn step<R: Rng>(&mut self, temperature: f64, rng: &mut R) -> f64 {
        let site = rng.random_range(0..self.model.num_sites());
        let delta = self.model.flip_delta(&self.occupation, site);

        let accept = if delta <= 0.0 {
            if delta < 0.0 {
                self.improving_moves += 1;
            }
            true
        } else if temperature > 0.0 {
            rng.random_range(0.0..1.0) < (-delta / temperature).exp()
        } else {
            false
        };

        if accept {
            self.occupation[site] = !self.occupation[site];
            self.energy += delta;
            self.accepted_moves += 1;
        }
        self.steps += 1;
        self.energy
    }

    /// Current configuration.
    pub fn occupation(&self) -> &[bool] {
        &self.occupation
    }

    /// Consumes the chain, yielding the configuration.
    pub fn into_occupation(self) -> Vec<bool> {
        self.occupation
    }

    /// Running total energy.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// The energy model this chain anneals.
    pub fn model(&self) -> &'a M {
        self.model
    }

    /// Steps executed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Accepted moves, including improvements.
    pub fn accepted_moves(&self) -> usize {
        self.accepted_moves
    }

    /// Strictly energy-lowering moves.
    pub fn improving_moves(&self) -> usize {
        self.improving_moves
    }
}
