//! Grid-maze robot fitness evaluator.
//!
//! Scores binary chromosomes by decoding them into sensor-to-action lookup
//! tables and simulating the resulting controller through a maze:
//!
//! - [`Maze`]: immutable grid of [`Cell`] codes with route scoring
//! - [`Robot`]: one bounded simulation run (position, heading, decoded
//!   action table, visited route)
//! - [`MazeEvaluator`]: the [`FitnessEvaluator`](crate::engine::FitnessEvaluator)
//!   implementation wiring the two together
//!
//! The maze grid itself is collaborator-supplied; this module never
//! constructs example mazes.

mod evaluator;
mod grid;
mod robot;

pub use evaluator::MazeEvaluator;
pub use grid::{Cell, Maze};
pub use robot::{Action, Heading, Robot, CHROMOSOME_LENGTH, SENSOR_STATES};
