//! Simulated annealing over an energy model.
//!
//! A single-spin-flip Metropolis chain driven across a geometric
//! temperature schedule. Early high-temperature steps explore freely;
//! as the temperature decays the Gibbs acceptance rule concentrates the
//! chain on low-energy configurations.
//!
//! # References
//!
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated
//!   Annealing"

mod chain;
mod config;
mod runner;
mod schedule;

pub use chain::MetropolisChain;
pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
pub use schedule::GeometricSchedule;
