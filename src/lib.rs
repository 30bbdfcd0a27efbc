//! Generic evolutionary-search engine.
//!
//! A population of candidate solutions, encoded as integer-gene
//! chromosomes, is repeatedly selected, recombined, and mutated under a
//! pluggable fitness evaluator until a termination condition holds.
//!
//! # Modules
//!
//! - [`engine`]: the evolutionary loop, populations, and the operator
//!   library (selection, crossover, mutation, elitism)
//! - [`maze`]: a fitness evaluator that scores sensor-driven robot
//!   controllers by simulation through a grid maze
//! - [`timetable`]: a fitness evaluator that scores decoded class
//!   schedules by counting constraint violations
//! - [`random`]: seeded RNG construction for reproducible runs
//!
//! # Design
//!
//! The engine owns no problem knowledge: reference data (a maze grid, a
//! timetable data set) is supplied by the caller and owned by the
//! evaluator, and all randomness flows through an explicit `&mut impl Rng`
//! so seeded runs replay exactly.
//!
//! ```
//! use evosearch::engine::{EngineConfig, Evolution, Mutation, Selection, Termination};
//! use evosearch::timetable::{Timetable, TimetableEvaluator};
//!
//! let mut timetable = Timetable::new();
//! timetable.add_room(1, "A1", 40);
//! timetable.add_room(2, "B2", 40);
//! timetable.add_professor(1, "Dr Smith");
//! timetable.add_module(1, "cs1", "Computer Science", vec![1]);
//! timetable.add_group(1, 30, vec![1]);
//! timetable.add_timeslot(1, "Mon 9:00 - 11:00");
//! timetable.add_timeslot(2, "Mon 11:00 - 13:00");
//!
//! let config = EngineConfig::new(50, 0.01, 0.9, 2, Termination::FitnessTarget(1.0))
//!     .with_selection(Selection::Tournament(5))
//!     .with_mutation(Mutation::GeneReplacement);
//! let engine = Evolution::new(config).unwrap();
//!
//! let mut rng = evosearch::random::create_rng(42);
//! let result = engine.run(&TimetableEvaluator::new(timetable), &mut rng);
//! assert_eq!(result.best.fitness(), 1.0);
//! ```

pub mod engine;
pub mod maze;
pub mod random;
pub mod timetable;
