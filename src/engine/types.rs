//! Core trait definitions.
//!
//! [`FitnessEvaluator`] is the contract between the generic engine and a
//! problem domain. The evaluator owns the immutable reference data for its
//! problem (a maze grid, a timetable data set) and knows how to build legal
//! random chromosomes from it and how to score an individual against it.
//! The engine never constructs or inspects reference data itself.

use rand::Rng;

use super::individual::Individual;

/// Scores individuals for one problem domain.
///
/// Higher fitness is better (maximization). A perfect solution scores a
/// problem-defined target value, typically 1.0 for normalized evaluators.
///
/// # Purity
///
/// [`score`](FitnessEvaluator::score) must be pure with respect to the
/// population: it may build and mutate scratch state owned by that call
/// (a decoded action table, a simulated robot, a derived class list) but
/// must not retain it or share it between calls. This is what makes
/// population evaluation safe to parallelize.
///
/// # Thread safety
///
/// Evaluators must be `Send + Sync`; the engine evaluates individuals with
/// rayon when configured to.
pub trait FitnessEvaluator: Send + Sync {
    /// Number of genes in a chromosome for this problem's encoding.
    fn chromosome_length(&self) -> usize;

    /// Builds a random individual whose genes are all drawn from the legal
    /// domain of this problem's encoding.
    ///
    /// Used for initial populations and as the donor source for
    /// gene-replacement mutation, which keeps replacement values inside the
    /// legal domain for each gene's role.
    fn random_individual<R: Rng>(&self, rng: &mut R) -> Individual;

    /// Scores one individual.
    ///
    /// # Panics
    /// Implementations fail fast (panic) when the chromosome length does
    /// not match [`chromosome_length`](FitnessEvaluator::chromosome_length),
    /// rather than produce a silently wrong fitness.
    fn score(&self, individual: &Individual) -> f64;
}
