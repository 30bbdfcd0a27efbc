//! Evolutionary loop and operator library.
//!
//! A generic evolutionary-search engine: a population of integer-gene
//! chromosomes is repeatedly selected, recombined, and mutated, guided by a
//! pluggable [`FitnessEvaluator`], until a termination condition holds.
//!
//! # Core Types
//!
//! - [`Individual`] / [`Population`]: one chromosome with cached fitness,
//!   and a fixed-size fitness-rankable collection of them
//! - [`FitnessEvaluator`]: problem definition (chromosome domain, random
//!   individuals, scoring)
//! - [`EngineConfig`]: validated parameters (rates, elitism, strategies,
//!   termination)
//! - [`Evolution`]: the per-generation contract and the full run loop
//!
//! # Operator Library
//!
//! - [`Selection`]: roulette-wheel, tournament
//! - [`Crossover`]: uniform, single-point, ordered (permutation-preserving)
//! - [`Mutation`]: bit-flip, pairwise swap, gene replacement
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod individual;
mod population;
mod runner;
mod selection;
mod types;

pub mod operators;

pub use config::{EliteExemption, EngineConfig, Termination};
pub use individual::{Individual, UNEVALUATED};
pub use operators::{Crossover, Mutation};
pub use population::Population;
pub use runner::{Evolution, EvolutionResult};
pub use selection::Selection;
pub use types::FitnessEvaluator;
