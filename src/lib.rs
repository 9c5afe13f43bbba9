//! Unit-disk maximum independent set via simulated annealing.
//!
//! Recasts UD-MIS as minimizing the pseudo-Boolean energy
//! `E = u * Σ_{(i,j)∈E} n_i n_j − Σ_i n_i` over boolean vertex
//! occupations, then anneals a single-spin-flip Metropolis chain toward
//! a ground state. Occupied vertices of a low-energy configuration form
//! a (near-)maximum independent set; the interaction strength `u` sets
//! the penalty for occupying adjacent vertices. This is a stochastic
//! local-search heuristic, not a proof of optimality.
//!
//! # Architecture
//!
//! - [`graph`]: unit-disk adjacency derived from plane coordinates,
//!   immutable after construction.
//! - [`energy`]: the [`energy::EnergyModel`] trait (full energy plus an
//!   O(degree) single-flip delta) and the UD-MIS functional implementing
//!   it. Any other energy model can be annealed through the same trait.
//! - [`anneal`]: the Metropolis chain, the geometric temperature
//!   schedule, and the runner that drives a fixed step budget.
//!
//! # Example
//!
//! ```
//! use ud_mis_anneal::anneal::{AnnealConfig, AnnealRunner};
//! use ud_mis_anneal::energy::UdMisEnergy;
//! use ud_mis_anneal::graph::UnitDiskGraph;
//!
//! let graph = UnitDiskGraph::from_points(&[(0.0, 0.0), (0.8, 0.0), (3.0, 3.0)]);
//! let model = UdMisEnergy::new(graph, 1.35)?;
//! let config = AnnealConfig::default().with_seed(42);
//! let result = AnnealRunner::run(&model, &config)?;
//! assert_eq!(result.occupation.len(), 3);
//! assert!(model.is_independent(&result.best_occupation));
//! # Ok::<(), String>(())
//! ```

pub mod anneal;
pub mod energy;
pub mod graph;
