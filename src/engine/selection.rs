//! Parent selection strategies.
//!
//! Selection chooses the second parent for each crossover. Both strategies
//! assume maximization (higher fitness = better).

use rand::Rng;

use super::individual::Individual;
use super::population::Population;

/// Strategy for choosing a crossover parent.
///
/// # Examples
///
/// ```
/// use evosearch::engine::Selection;
///
/// // Fitness-proportionate selection
/// let sel = Selection::RouletteWheel;
///
/// // Tournament over 10 shuffled individuals
/// let sel = Selection::Tournament(10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette-wheel) selection.
    ///
    /// Each individual's share of the wheel is its raw fitness over the
    /// population's aggregate fitness. A zero (or unset) aggregate would
    /// make the wheel undefined, so that case falls back to uniform
    /// selection instead of faulting.
    ///
    /// # Complexity
    /// O(n) per selection (linear walk)
    RouletteWheel,

    /// Tournament selection: shuffle the population in place, take the
    /// first `k` individuals, return the fittest of that subset.
    ///
    /// Shuffling the live population is an accepted, observable side
    /// effect. Higher `k` means stronger selection pressure.
    ///
    /// # Complexity
    /// O(n) per selection (shuffle)
    Tournament(usize),
}

impl Selection {
    /// Selects a parent from the population, returning a clone.
    ///
    /// # Panics
    /// Panics if a tournament size is zero or exceeds the population size.
    /// Engine construction validates this up front.
    pub fn select_parent<R: Rng>(&self, population: &mut Population, rng: &mut R) -> Individual {
        match self {
            Selection::RouletteWheel => roulette_wheel(population, rng),
            Selection::Tournament(size) => tournament(population, *size, rng),
        }
    }
}

/// Spin the wheel: walk individuals accumulating fitness until the running
/// sum reaches a uniform draw in [0, aggregate).
fn roulette_wheel<R: Rng>(population: &Population, rng: &mut R) -> Individual {
    let total = population.population_fitness();
    if total <= 0.0 {
        // Degenerate aggregate (all-zero or unevaluated): uniform fallback.
        let index = rng.random_range(0..population.size());
        return population.individual(index).clone();
    }

    let position = rng.random_range(0.0..total);
    let mut wheel = 0.0;
    for individual in population.individuals() {
        wheel += individual.fitness();
        if wheel >= position {
            return individual.clone();
        }
    }

    // Floating-point rounding can leave the draw unreached; the last
    // individual absorbs that sliver.
    population.individual(population.size() - 1).clone()
}

fn tournament<R: Rng>(population: &mut Population, size: usize, rng: &mut R) -> Individual {
    assert!(size >= 1, "tournament size must be at least 1");
    assert!(
        size <= population.size(),
        "tournament size {} exceeds population size {}",
        size,
        population.size()
    );

    population.shuffle(rng);
    let contenders = &population.individuals()[..size];
    let mut best = &contenders[0];
    for contender in &contenders[1..] {
        if contender.fitness() > best.fitness() {
            best = contender;
        }
    }
    best.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn population_with_fitness(values: &[f64]) -> Population {
        let individuals = values
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                let mut ind = Individual::new(vec![i as i32]);
                ind.set_fitness(f);
                ind
            })
            .collect();
        let mut pop = Population::new(individuals);
        pop.set_population_fitness(values.iter().sum());
        pop
    }

    #[test]
    fn test_roulette_is_fitness_proportionate() {
        // With fitness [1, 2, 3, 4] (sum 10), the last individual should be
        // picked ~40% of the time.
        let mut pop = population_with_fitness(&[1.0, 2.0, 3.0, 4.0]);
        let mut rng = create_rng(42);

        let trials = 10_000;
        let mut hits = 0u32;
        for _ in 0..trials {
            let parent = Selection::RouletteWheel.select_parent(&mut pop, &mut rng);
            if parent.gene(0) == 3 {
                hits += 1;
            }
        }

        let fraction = f64::from(hits) / f64::from(trials);
        assert!(
            (fraction - 0.4).abs() < 0.03,
            "expected selection fraction near 0.4, got {fraction}"
        );
    }

    #[test]
    fn test_roulette_zero_aggregate_falls_back_to_uniform() {
        let mut pop = population_with_fitness(&[0.0, 0.0, 0.0, 0.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..8_000 {
            let parent = Selection::RouletteWheel.select_parent(&mut pop, &mut rng);
            counts[parent.gene(0) as usize] += 1;
        }
        for &c in &counts {
            assert!(c > 1_500, "expected roughly uniform fallback, got {counts:?}");
        }
    }

    #[test]
    fn test_full_size_tournament_returns_global_fittest() {
        let mut pop = population_with_fitness(&[3.0, 9.0, 1.0, 5.0]);
        let mut rng = create_rng(42);

        for _ in 0..50 {
            let parent = Selection::Tournament(4).select_parent(&mut pop, &mut rng);
            assert_eq!(parent.fitness(), 9.0);
        }
    }

    #[test]
    fn test_tournament_shuffles_live_population() {
        let mut pop = population_with_fitness(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let original: Vec<i32> = pop.individuals().iter().map(|i| i.gene(0)).collect();
        let mut rng = create_rng(42);

        let mut reordered = false;
        for _ in 0..10 {
            Selection::Tournament(2).select_parent(&mut pop, &mut rng);
            let now: Vec<i32> = pop.individuals().iter().map(|i| i.gene(0)).collect();
            if now != original {
                reordered = true;
                break;
            }
        }
        assert!(reordered, "tournament selection should reorder the population");
    }

    #[test]
    fn test_single_individual() {
        let mut pop = population_with_fitness(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(
            Selection::RouletteWheel
                .select_parent(&mut pop, &mut rng)
                .gene(0),
            0
        );
        assert_eq!(
            Selection::Tournament(1).select_parent(&mut pop, &mut rng).gene(0),
            0
        );
    }

    #[test]
    #[should_panic(expected = "tournament size")]
    fn test_oversized_tournament_panics() {
        let mut pop = population_with_fitness(&[1.0, 2.0]);
        let mut rng = create_rng(42);
        Selection::Tournament(3).select_parent(&mut pop, &mut rng);
    }
}
