//! Timetable clash fitness evaluator.
//!
//! Scores segmented-integer chromosomes against a fixed scheduling data
//! set:
//!
//! - [`Timetable`]: the immutable reference data (rooms, professors,
//!   modules, groups, timeslots), collaborator-supplied via builder calls
//! - [`ScheduledClass`]: per-evaluation records decoded from a chromosome
//! - [`TimetableEvaluator`]: decode plus O(n^2) clash counting; fitness is
//!   `1 / (clashes + 1)`

mod data;
mod evaluator;

pub use data::{
    CourseModule, Professor, Room, ScheduledClass, StudentGroup, Timeslot, Timetable,
};
pub use evaluator::{TimetableEvaluator, GENES_PER_CLASS};
