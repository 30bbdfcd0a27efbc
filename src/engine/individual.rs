//! Candidate solutions.
//!
//! An [`Individual`] owns one chromosome, an ordered fixed-length sequence
//! of integer genes, plus a cached fitness value. Three encoding families
//! share this representation:
//!
//! - **binary**: every gene is 0 or 1
//! - **permutation**: the genes are a permutation of `0..N-1`
//! - **segmented-integer**: the sequence is a run of fixed-size tuples,
//!   e.g. `[timeslot, room, professor]` per scheduled class
//!
//! The engine never interprets genes itself; decoding is the fitness
//! evaluator's job.

use rand::Rng;

/// Fitness sentinel for individuals (and populations) that have not been
/// evaluated yet. Sorts below every real fitness value.
pub const UNEVALUATED: f64 = -1.0;

/// One candidate solution: a chromosome and its cached fitness.
///
/// Fitness starts at [`UNEVALUATED`] and is reset to it whenever a gene is
/// written, so a stale score can never survive a chromosome change.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: Vec<i32>,
    fitness: f64,
}

impl Individual {
    /// Wraps an existing chromosome. Fitness starts unset.
    pub fn new(chromosome: Vec<i32>) -> Self {
        Self {
            chromosome,
            fitness: UNEVALUATED,
        }
    }

    /// Creates a random binary individual: each gene is 0 or 1 with equal
    /// probability.
    pub fn random_binary<R: Rng>(length: usize, rng: &mut R) -> Self {
        let chromosome = (0..length).map(|_| i32::from(rng.random_bool(0.5))).collect();
        Self::new(chromosome)
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    /// Whether the chromosome holds no genes.
    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }

    /// The full gene sequence.
    pub fn chromosome(&self) -> &[i32] {
        &self.chromosome
    }

    /// Gene at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn gene(&self, index: usize) -> i32 {
        self.chromosome[index]
    }

    /// Writes the gene at `index` and invalidates the cached fitness.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set_gene(&mut self, index: usize, gene: i32) {
        self.chromosome[index] = gene;
        self.fitness = UNEVALUATED;
    }

    /// Whether any gene equals `gene`. Used by permutation operators to
    /// avoid duplicating a value in an offspring.
    pub fn contains_gene(&self, gene: i32) -> bool {
        self.chromosome.contains(&gene)
    }

    /// Cached fitness, or [`UNEVALUATED`].
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Stores an evaluated fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Whether this individual has been scored since its last change.
    pub fn is_evaluated(&self) -> bool {
        self.fitness != UNEVALUATED
    }
}
