//! Engine configuration.
//!
//! [`EngineConfig`] holds every parameter of the evolutionary loop. All
//! values are caller-supplied; validation fails fast with a descriptive
//! error and never clamps silently.

use super::operators::{Crossover, Mutation};
use super::selection::Selection;

/// Termination condition for a run.
///
/// The engine is configured with exactly one mode per run; both are polled
/// at generation boundaries, never mid-generation. Reaching a generation
/// ceiling is a normal termination path, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Stop once the generation counter exceeds this ceiling.
    GenerationLimit(usize),

    /// Stop once the best individual's fitness reaches the target
    /// (problem-specific: 1.0 for normalized evaluators, the chromosome
    /// length for count-based ones).
    FitnessTarget(f64),
}

/// Which ranks are shielded from mutation.
///
/// The elitism boundary for mutation differs per problem family and the
/// difference is deliberate, so it is a configuration choice rather than a
/// unified rule. Crossover candidacy always uses the exact boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EliteExemption {
    /// Ranks below the elitism count are exempt: exactly the elites.
    Exact,

    /// Ranks up to and including the elitism count are exempt: the elites
    /// plus the first non-elite rank.
    Inclusive,
}

impl EliteExemption {
    /// Whether the individual at `rank` (0 = fittest) skips mutation.
    pub fn exempts(self, rank: usize, elitism_count: usize) -> bool {
        match self {
            EliteExemption::Exact => rank < elitism_count,
            EliteExemption::Inclusive => rank <= elitism_count,
        }
    }
}

/// Configuration for the evolutionary loop.
///
/// # Examples
///
/// ```
/// use evosearch::engine::{
///     Crossover, EngineConfig, Mutation, Selection, Termination,
/// };
///
/// let config = EngineConfig::new(200, 0.05, 0.9, 2, Termination::GenerationLimit(1000))
///     .with_selection(Selection::Tournament(10))
///     .with_crossover(Crossover::SinglePoint)
///     .with_mutation(Mutation::BitFlip);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of individuals in every generation. Must be positive.
    pub population_size: usize,

    /// Per-gene probability of mutation, in [0, 1].
    pub mutation_rate: f64,

    /// Probability that a non-elite individual becomes a crossover
    /// candidate, in [0, 1].
    pub crossover_rate: f64,

    /// Number of top-ranked individuals carried over unchanged each
    /// generation. Must be smaller than the population size.
    pub elitism_count: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Recombination strategy for crossover candidates.
    pub crossover: Crossover,

    /// Mutation strategy for non-exempt individuals.
    pub mutation: Mutation,

    /// Elitism boundary used by mutation.
    pub elite_exemption: EliteExemption,

    /// The single termination condition for the run.
    pub termination: Termination,

    /// Whether to evaluate individuals in parallel using rayon.
    pub parallel: bool,
}

impl EngineConfig {
    /// Creates a configuration from the core parameters.
    ///
    /// Strategy fields start at the simplest choices (roulette-wheel
    /// selection, uniform crossover, bit-flip mutation, exact elitism
    /// boundary, sequential evaluation); override them with the `with_*`
    /// builders.
    pub fn new(
        population_size: usize,
        mutation_rate: f64,
        crossover_rate: f64,
        elitism_count: usize,
        termination: Termination,
    ) -> Self {
        Self {
            population_size,
            mutation_rate,
            crossover_rate,
            elitism_count,
            selection: Selection::RouletteWheel,
            crossover: Crossover::Uniform,
            mutation: Mutation::BitFlip,
            elite_exemption: EliteExemption::Exact,
            termination,
            parallel: false,
        }
    }

    /// Sets the parent selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets the elitism boundary used by mutation.
    pub fn with_elite_exemption(mut self, exemption: EliteExemption) -> Self {
        self.elite_exemption = exemption;
        self
    }

    /// Enables or disables parallel population evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-range values are reported, never clamped.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(format!(
                "crossover_rate must be within [0, 1], got {}",
                self.crossover_rate
            ));
        }
        if self.elitism_count >= self.population_size {
            return Err(format!(
                "elitism_count {} must be smaller than population_size {}",
                self.elitism_count, self.population_size
            ));
        }
        if let Selection::Tournament(size) = self.selection {
            if size == 0 {
                return Err("tournament size must be at least 1".into());
            }
            if size > self.population_size {
                return Err(format!(
                    "tournament size {} exceeds population_size {}",
                    size, self.population_size
                ));
            }
        }
        if let Termination::GenerationLimit(0) = self.termination {
            return Err("generation limit must be at least 1".into());
        }
        Ok(())
    }
}
