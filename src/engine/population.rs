//! Populations of candidate solutions.
//!
//! A [`Population`] is a fixed-size ordered collection of individuals with
//! an aggregate fitness. Individuals may be replaced by index, but the
//! sequence length never changes during a generation.

use rand::seq::SliceRandom;
use rand::Rng;

use super::individual::{Individual, UNEVALUATED};

/// A fixed-size collection of individuals.
///
/// Supports fitness-ranked retrieval ([`fittest`](Population::fittest)) and
/// in-place shuffling. The ranked view is realized as a descending sort of
/// the backing vector, cached until the next mutation of the collection, so
/// rank 0 always reflects the current fittest individual without resorting
/// on every access.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
    population_fitness: f64,
    ranked: bool,
}

impl Population {
    /// Wraps a vector of individuals. Aggregate fitness starts unset.
    ///
    /// # Panics
    /// Panics if `individuals` is empty.
    pub fn new(individuals: Vec<Individual>) -> Self {
        assert!(!individuals.is_empty(), "population must not be empty");
        Self {
            individuals,
            population_fitness: UNEVALUATED,
            ranked: false,
        }
    }

    /// Number of individuals. Constant for the population's lifetime.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Individual at `index` in storage order.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn individual(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }

    /// Replaces the individual at `index`. The population size is fixed, so
    /// this is the only way to put new individuals into an existing
    /// population.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set_individual(&mut self, index: usize, individual: Individual) {
        self.individuals[index] = individual;
        self.ranked = false;
    }

    /// All individuals in storage order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Mutable access to all individuals. Invalidates the ranked view.
    pub fn individuals_mut(&mut self) -> &mut [Individual] {
        self.ranked = false;
        &mut self.individuals
    }

    /// Individual at `rank` in fitness order: rank 0 is the fittest, rank
    /// `size() - 1` the weakest. Unevaluated individuals sort last.
    ///
    /// # Panics
    /// Panics if `rank` is out of bounds.
    pub fn fittest(&mut self, rank: usize) -> &Individual {
        self.ensure_ranked();
        &self.individuals[rank]
    }

    fn ensure_ranked(&mut self) {
        if !self.ranked {
            self.individuals.sort_by(|a, b| {
                b.fitness()
                    .partial_cmp(&a.fitness())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            self.ranked = true;
        }
    }

    /// Shuffles the individuals in place. Tournament selection calls this
    /// on the live population; the reordering is an accepted, observable
    /// side effect.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.individuals.shuffle(rng);
        self.ranked = false;
    }

    /// Aggregate fitness (sum over individuals), or [`UNEVALUATED`].
    pub fn population_fitness(&self) -> f64 {
        self.population_fitness
    }

    /// Stores the aggregate fitness.
    pub fn set_population_fitness(&mut self, fitness: f64) {
        self.population_fitness = fitness;
    }
}
