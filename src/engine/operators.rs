//! Crossover and mutation strategies.
//!
//! Each encoding family gets operators that cannot produce an illegal
//! chromosome for it:
//!
//! - binary: [`uniform_crossover`], [`bit_flip_mutation`]
//! - sequential/binary: [`single_point_crossover`]
//! - permutation: [`ordered_crossover`] (every domain value appears exactly
//!   once in the offspring), [`swap_mutation`]
//! - segmented-integer: [`gene_replacement_mutation`] (replacement genes
//!   come from a donor built from the same fixed reference data)
//!
//! The [`Crossover`] and [`Mutation`] enums are the configuration-level
//! handles the engine dispatches through.

use rand::Rng;

use super::individual::Individual;
use super::types::FitnessEvaluator;

// ============================================================================
// Crossover
// ============================================================================

/// Recombination strategy applied to crossover candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Per gene, copy from either parent with probability 0.5.
    ///
    /// Suitable for binary and segmented-integer encodings, where any
    /// gene-wise mix of two legal chromosomes is legal.
    Uniform,

    /// One random cut point; genes before it come from parent 1, the rest
    /// from parent 2. Preserves contiguous gene runs.
    SinglePoint,

    /// Permutation-preserving ordered crossover. Required whenever every
    /// domain value must appear exactly once (route/tour chromosomes).
    Ordered,
}

impl Crossover {
    /// Produces one offspring from two parents. The offspring's fitness
    /// starts unset.
    ///
    /// # Panics
    /// Panics if the parents have different lengths, or are empty for
    /// [`Crossover::Ordered`].
    pub fn recombine<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Individual {
        let genes = match self {
            Crossover::Uniform => uniform_crossover(parent1.chromosome(), parent2.chromosome(), rng),
            Crossover::SinglePoint => {
                single_point_crossover(parent1.chromosome(), parent2.chromosome(), rng)
            }
            Crossover::Ordered => ordered_crossover(parent1.chromosome(), parent2.chromosome(), rng),
        };
        Individual::new(genes)
    }
}

/// Uniform crossover: each gene position copies from parent 1 or parent 2
/// with equal probability.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn uniform_crossover<R: Rng>(parent1: &[i32], parent2: &[i32], rng: &mut R) -> Vec<i32> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");

    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect()
}

/// Single-point crossover: one cut in `[0, length]`; genes before the cut
/// from parent 1, at and after it from parent 2.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn single_point_crossover<R: Rng>(parent1: &[i32], parent2: &[i32], rng: &mut R) -> Vec<i32> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");

    let point = rng.random_range(0..=parent1.len());
    let mut genes = Vec::with_capacity(parent1.len());
    genes.extend_from_slice(&parent1[..point]);
    genes.extend_from_slice(&parent2[point..]);
    genes
}

/// Ordered crossover for permutation chromosomes.
///
/// Draws two random cut points ordered as `(start, end)`, copies
/// `parent1[start..end]` into the offspring at the same positions, then
/// scans parent 2 beginning at `end` and wrapping around, placing each gene
/// not yet present into the first open offspring slot. Every value of the
/// domain therefore appears exactly once in the offspring.
///
/// # Panics
/// Panics if the parents have different lengths or are empty. Genes must be
/// non-negative (an internal `-1` marks unfilled slots).
pub fn ordered_crossover<R: Rng>(parent1: &[i32], parent2: &[i32], rng: &mut R) -> Vec<i32> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (start, end) = (a.min(b), a.max(b));

    let mut offspring = vec![-1; n];
    offspring[start..end].copy_from_slice(&parent1[start..end]);

    for offset in 0..n {
        let gene = parent2[(end + offset) % n];
        if !offspring.contains(&gene) {
            let slot = offspring
                .iter()
                .position(|&g| g == -1)
                .expect("open slot must exist for an unseen gene");
            offspring[slot] = gene;
        }
    }

    offspring
}

// ============================================================================
// Mutation
// ============================================================================

/// Mutation strategy applied to non-exempt individuals.
///
/// Every strategy visits each gene index and mutates it with probability
/// equal to the engine's mutation rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Flip 0 to 1 and back (binary encodings).
    BitFlip,

    /// Exchange the gene with one at a second random index (keeps
    /// permutations valid).
    Swap,

    /// Copy the gene at the same position from a fresh random individual
    /// built by the evaluator, so replacements stay inside the legal domain
    /// for that gene's role (segmented-integer encodings).
    GeneReplacement,
}

impl Mutation {
    /// Mutates `individual` in place at `mutation_rate` per gene.
    ///
    /// [`Mutation::GeneReplacement`] draws one donor individual from the
    /// evaluator per call; the other strategies never touch the evaluator.
    pub fn apply<E: FitnessEvaluator, R: Rng>(
        &self,
        individual: &mut Individual,
        mutation_rate: f64,
        evaluator: &E,
        rng: &mut R,
    ) {
        match self {
            Mutation::BitFlip => bit_flip_mutation(individual, mutation_rate, rng),
            Mutation::Swap => swap_mutation(individual, mutation_rate, rng),
            Mutation::GeneReplacement => {
                let donor = evaluator.random_individual(rng);
                gene_replacement_mutation(individual, &donor, mutation_rate, rng);
            }
        }
    }
}

/// Bit-flip mutation: each gene flips 0<->1 with probability
/// `mutation_rate`.
pub fn bit_flip_mutation<R: Rng>(individual: &mut Individual, mutation_rate: f64, rng: &mut R) {
    for index in 0..individual.len() {
        if rng.random_range(0.0..1.0) < mutation_rate {
            let flipped = if individual.gene(index) == 1 { 0 } else { 1 };
            individual.set_gene(index, flipped);
        }
    }
}

/// Swap mutation: each gene index, with probability `mutation_rate`,
/// exchanges values with a second uniformly drawn index.
pub fn swap_mutation<R: Rng>(individual: &mut Individual, mutation_rate: f64, rng: &mut R) {
    let n = individual.len();
    if n < 2 {
        return;
    }
    for index in 0..n {
        if rng.random_range(0.0..1.0) < mutation_rate {
            let other = rng.random_range(0..n);
            let a = individual.gene(index);
            let b = individual.gene(other);
            individual.set_gene(index, b);
            individual.set_gene(other, a);
        }
    }
}

/// Gene-replacement mutation: each gene, with probability `mutation_rate`,
/// is overwritten by the donor's gene at the same position.
///
/// # Panics
/// Panics if the donor's length differs from the individual's.
pub fn gene_replacement_mutation<R: Rng>(
    individual: &mut Individual,
    donor: &Individual,
    mutation_rate: f64,
    rng: &mut R,
) {
    assert_eq!(
        individual.len(),
        donor.len(),
        "donor chromosome length must match"
    );
    for index in 0..individual.len() {
        if rng.random_range(0.0..1.0) < mutation_rate {
            individual.set_gene(index, donor.gene(index));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
