//! Maze fitness evaluation.

use rand::Rng;

use crate::engine::{FitnessEvaluator, Individual};

use super::grid::Maze;
use super::robot::{Robot, CHROMOSOME_LENGTH};

/// Scores maze-controller chromosomes by simulation.
///
/// Owns the immutable maze grid (collaborator-supplied) and the move cap.
/// Each call to [`score`](FitnessEvaluator::score) builds one [`Robot`],
/// runs it, and scores the recorded route; nothing is shared between
/// evaluations, so parallel evaluation is safe.
pub struct MazeEvaluator {
    maze: Maze,
    max_moves: usize,
}

impl MazeEvaluator {
    /// Creates an evaluator for `maze` with the given simulation move cap.
    pub fn new(maze: Maze, max_moves: usize) -> Self {
        Self { maze, max_moves }
    }

    /// The maze being navigated.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Runs one simulation and returns the visited route, for drivers that
    /// report the best controller's path.
    ///
    /// # Panics
    /// Panics if the chromosome length is not [`CHROMOSOME_LENGTH`].
    pub fn trace(&self, individual: &Individual) -> Vec<(i32, i32)> {
        let mut robot = Robot::new(individual.chromosome(), &self.maze, self.max_moves);
        robot.run();
        robot.route().to_vec()
    }
}

impl FitnessEvaluator for MazeEvaluator {
    fn chromosome_length(&self) -> usize {
        CHROMOSOME_LENGTH
    }

    fn random_individual<R: Rng>(&self, rng: &mut R) -> Individual {
        Individual::random_binary(CHROMOSOME_LENGTH, rng)
    }

    /// Fitness is the number of distinct route cells the controller's
    /// simulation visits.
    fn score(&self, individual: &Individual) -> f64 {
        let mut robot = Robot::new(individual.chromosome(), &self.maze, self.max_moves);
        robot.run();
        f64::from(self.maze.score_route(robot.route()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Crossover, EngineConfig, Evolution, Selection, Termination};
    use crate::random::create_rng;

    /// The hand-built 9x9 reference maze. Its correct path consists of 29
    /// route cells, so a perfect controller scores 29.
    fn reference_maze() -> Maze {
        Maze::from_codes(&[
            vec![0, 0, 0, 0, 1, 0, 1, 3, 2],
            vec![1, 0, 1, 1, 1, 0, 1, 3, 1],
            vec![1, 0, 0, 1, 3, 3, 3, 3, 1],
            vec![3, 3, 3, 1, 3, 1, 1, 0, 1],
            vec![3, 1, 3, 3, 3, 1, 1, 0, 0],
            vec![3, 3, 1, 1, 1, 1, 0, 1, 1],
            vec![1, 3, 0, 1, 3, 3, 3, 3, 3],
            vec![0, 3, 1, 1, 3, 1, 0, 1, 3],
            vec![1, 3, 3, 3, 3, 1, 1, 1, 4],
        ])
    }

    /// The 29 route cells of the reference maze, in walking order from the
    /// start at (8, 0) to the goal at (8, 8).
    fn reference_route() -> Vec<(i32, i32)> {
        vec![
            (7, 0),
            (7, 1),
            (7, 2),
            (6, 2),
            (5, 2),
            (4, 2),
            (4, 3),
            (4, 4),
            (3, 4),
            (2, 4),
            (2, 3),
            (1, 3),
            (0, 3),
            (0, 4),
            (0, 5),
            (1, 5),
            (1, 6),
            (1, 7),
            (1, 8),
            (2, 8),
            (3, 8),
            (4, 8),
            (4, 7),
            (4, 6),
            (5, 6),
            (6, 6),
            (7, 6),
            (8, 6),
            (8, 7),
        ]
    }

    #[test]
    fn test_reference_route_scores_29() {
        let maze = reference_maze();
        let mut route = vec![maze.start_position()];
        route.extend(reference_route());
        route.push((8, 8));

        assert_eq!(maze.score_route(&route), 29);
    }

    #[test]
    fn test_reference_route_is_walkable() {
        // Every step of the known route moves to an adjacent non-wall cell.
        let maze = reference_maze();
        let mut route = vec![maze.start_position()];
        route.extend(reference_route());
        route.push((8, 8));

        for pair in route.windows(2) {
            let (ax, ay) = pair[0];
            let (bx, by) = pair[1];
            assert_eq!((ax - bx).abs() + (ay - by).abs(), 1, "non-adjacent step");
            assert!(!maze.is_wall(bx, by), "route steps into a wall at ({bx}, {by})");
        }
    }

    #[test]
    fn test_revisits_never_rescore() {
        let maze = reference_maze();
        let once = vec![(7, 0), (7, 1)];
        let twice = vec![(7, 0), (7, 1), (7, 0), (7, 1)];
        assert_eq!(maze.score_route(&once), maze.score_route(&twice));
    }

    #[test]
    fn test_score_matches_traced_route() {
        let evaluator = MazeEvaluator::new(reference_maze(), 100);
        let mut rng = create_rng(42);

        for _ in 0..20 {
            let individual = evaluator.random_individual(&mut rng);
            let traced = evaluator.trace(&individual);
            assert_eq!(
                evaluator.score(&individual),
                f64::from(evaluator.maze().score_route(&traced))
            );
        }
    }

    #[test]
    fn test_evolution_improves_controllers() {
        // Search over the reference maze must discover controllers that
        // collect at least part of the route.
        let evaluator = MazeEvaluator::new(reference_maze(), 100);
        let config = EngineConfig::new(100, 0.05, 0.9, 2, Termination::GenerationLimit(60))
            .with_selection(Selection::Tournament(10))
            .with_crossover(Crossover::SinglePoint);
        let engine = Evolution::new(config).unwrap();
        let mut rng = create_rng(42);

        let result = engine.run(&evaluator, &mut rng);
        assert!(
            result.best.fitness() >= 2.0,
            "expected a controller scoring at least 2, got {}",
            result.best.fitness()
        );
        assert_eq!(result.generations, 60);
    }

    #[test]
    #[should_panic(expected = "robot chromosome must hold")]
    fn test_wrong_length_chromosome_fails_fast() {
        let evaluator = MazeEvaluator::new(reference_maze(), 100);
        evaluator.score(&Individual::new(vec![0, 1, 1, 0]));
    }
}
