//! Evolutionary loop execution.
//!
//! [`Evolution`] orchestrates one generation at a time: evaluate, check
//! termination, recombine, mutate, re-evaluate. The per-generation steps
//! are public so a driver can interleave its own reporting; [`Evolution::run`]
//! composes them into the complete loop.

use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;

use super::config::{EngineConfig, Termination};
use super::individual::Individual;
use super::population::Population;
use super::types::FitnessEvaluator;

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The fittest individual of the final population.
    pub best: Individual,

    /// Number of completed generational cycles (crossover, mutation,
    /// re-evaluation). Zero means the initial population already met the
    /// termination condition.
    pub generations: usize,

    /// Best fitness after each evaluation, starting with the initial
    /// population. Always holds `generations + 1` entries.
    pub fitness_history: Vec<f64>,
}

/// The evolutionary-search engine.
///
/// Owns a validated [`EngineConfig`]; all problem knowledge lives in the
/// [`FitnessEvaluator`] passed to each operation, and all randomness comes
/// from the caller's RNG.
///
/// # Examples
///
/// ```
/// use evosearch::engine::{EngineConfig, Evolution, FitnessEvaluator, Individual, Termination};
/// use rand::Rng;
///
/// struct AllOnes {
///     length: usize,
/// }
///
/// impl FitnessEvaluator for AllOnes {
///     fn chromosome_length(&self) -> usize {
///         self.length
///     }
///     fn random_individual<R: Rng>(&self, rng: &mut R) -> Individual {
///         Individual::random_binary(self.length, rng)
///     }
///     fn score(&self, individual: &Individual) -> f64 {
///         let ones = individual.chromosome().iter().filter(|&&g| g == 1).count();
///         ones as f64 / individual.len() as f64
///     }
/// }
///
/// let config = EngineConfig::new(50, 0.001, 0.95, 2, Termination::FitnessTarget(1.0));
/// let engine = Evolution::new(config).unwrap();
/// let mut rng = evosearch::random::create_rng(42);
/// let result = engine.run(&AllOnes { length: 20 }, &mut rng);
/// assert_eq!(result.best.fitness(), 1.0);
/// ```
pub struct Evolution {
    config: EngineConfig,
}

impl Evolution {
    /// Creates an engine, failing fast on an invalid configuration.
    pub fn new(config: EngineConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds the initial population from evaluator-supplied random
    /// individuals.
    pub fn init_population<E: FitnessEvaluator, R: Rng>(
        &self,
        evaluator: &E,
        rng: &mut R,
    ) -> Population {
        let individuals = (0..self.config.population_size)
            .map(|_| evaluator.random_individual(rng))
            .collect();
        Population::new(individuals)
    }

    /// Scores every individual and stores the sum as the population's
    /// aggregate fitness.
    ///
    /// With `parallel` enabled, individuals are scored concurrently; each
    /// evaluation owns its scratch state and the sum is order-independent,
    /// so the outcome matches sequential evaluation.
    pub fn evaluate_population<E: FitnessEvaluator>(
        &self,
        population: &mut Population,
        evaluator: &E,
    ) {
        if self.config.parallel {
            population.individuals_mut().par_iter_mut().for_each(|individual| {
                let fitness = evaluator.score(individual);
                individual.set_fitness(fitness);
            });
        } else {
            for individual in population.individuals_mut() {
                let fitness = evaluator.score(individual);
                individual.set_fitness(fitness);
            }
        }

        let total = population
            .individuals()
            .iter()
            .map(Individual::fitness)
            .sum();
        population.set_population_fitness(total);
    }

    /// Whether the configured termination condition holds at the start of
    /// `generation` (1-based).
    pub fn is_termination_met(&self, generation: usize, population: &mut Population) -> bool {
        match self.config.termination {
            Termination::GenerationLimit(max_generations) => generation > max_generations,
            Termination::FitnessTarget(target) => population.fittest(0).fitness() >= target,
        }
    }

    /// Produces the next population by elitism and crossover.
    ///
    /// Individuals are visited in fitness-descending order. Ranks below the
    /// elitism count are copied unchanged. Every other rank becomes a
    /// crossover candidate with probability equal to the crossover rate; on
    /// success the second parent comes from the configured selection
    /// strategy and the offspring replaces the candidate, otherwise the
    /// candidate is copied unchanged.
    pub fn crossover_population<R: Rng>(
        &self,
        population: &mut Population,
        rng: &mut R,
    ) -> Population {
        let size = population.size();
        let mut next = Vec::with_capacity(size);

        for rank in 0..size {
            let parent1 = population.fittest(rank).clone();

            if rank >= self.config.elitism_count
                && rng.random_range(0.0..1.0) < self.config.crossover_rate
            {
                let parent2 = self.config.selection.select_parent(population, rng);
                next.push(self.config.crossover.recombine(&parent1, &parent2, rng));
            } else {
                next.push(parent1);
            }
        }

        Population::new(next)
    }

    /// Produces the next population by mutation.
    ///
    /// Individuals are visited in fitness-descending order; ranks covered
    /// by the configured [`EliteExemption`](super::EliteExemption) pass
    /// through untouched, the rest mutate gene-wise at the mutation rate.
    pub fn mutate_population<E: FitnessEvaluator, R: Rng>(
        &self,
        population: &mut Population,
        evaluator: &E,
        rng: &mut R,
    ) -> Population {
        let size = population.size();
        let mut next = Vec::with_capacity(size);

        for rank in 0..size {
            let mut individual = population.fittest(rank).clone();
            if !self
                .config
                .elite_exemption
                .exempts(rank, self.config.elitism_count)
            {
                self.config
                    .mutation
                    .apply(&mut individual, self.config.mutation_rate, evaluator, rng);
            }
            next.push(individual);
        }

        Population::new(next)
    }

    /// Runs the complete loop: initialize, evaluate, then
    /// crossover/mutate/re-evaluate until the termination condition holds.
    pub fn run<E: FitnessEvaluator, R: Rng>(&self, evaluator: &E, rng: &mut R) -> EvolutionResult {
        let mut population = self.init_population(evaluator, rng);
        self.evaluate_population(&mut population, evaluator);

        let mut fitness_history = vec![population.fittest(0).fitness()];
        let mut generation = 1;

        while !self.is_termination_met(generation, &mut population) {
            debug!(
                "generation {}: best fitness {:.6}, population fitness {:.6}",
                generation,
                population.fittest(0).fitness(),
                population.population_fitness()
            );

            population = self.crossover_population(&mut population, rng);
            population = self.mutate_population(&mut population, evaluator, rng);
            self.evaluate_population(&mut population, evaluator);

            fitness_history.push(population.fittest(0).fitness());
            generation += 1;
        }

        let best = population.fittest(0).clone();
        info!(
            "evolution stopped after {} generations, best fitness {:.6}",
            generation - 1,
            best.fitness()
        );

        EvolutionResult {
            best,
            generations: generation - 1,
            fitness_history,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
