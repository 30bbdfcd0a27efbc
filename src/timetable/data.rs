//! Timetable reference data.
//!
//! Rooms, professors, course modules, student groups, and timeslots are
//! immutable reference data, independent of any chromosome. They are
//! collaborator-supplied through the [`Timetable`] builder API and shared
//! read-only by every fitness evaluation.
//!
//! [`ScheduledClass`] is the one derived type: a per-evaluation record
//! rebuilt from a chromosome and discarded after clash counting.

use std::collections::BTreeMap;

use rand::seq::{IndexedRandom, IteratorRandom};
use rand::Rng;

/// A room with a seating capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id: i32,
    pub number: String,
    pub capacity: u32,
}

/// A professor available for teaching.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Professor {
    pub id: i32,
    pub name: String,
}

/// A course module and the professors eligible to teach it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseModule {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub professor_ids: Vec<i32>,
}

impl CourseModule {
    /// A uniformly drawn eligible professor id.
    ///
    /// # Panics
    /// Panics if the module has no eligible professors.
    pub fn random_professor<R: Rng>(&self, rng: &mut R) -> i32 {
        *self
            .professor_ids
            .choose(rng)
            .expect("module has no eligible professors")
    }
}

/// A group of students enrolled in a list of modules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentGroup {
    pub id: i32,
    pub size: u32,
    pub module_ids: Vec<i32>,
}

/// A bookable timeslot, e.g. "Mon 9:00 - 11:00".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeslot {
    pub id: i32,
    pub label: String,
}

/// A derived class record: one (group, module) pair with the timeslot,
/// room, and professor a chromosome assigns to it.
///
/// The number of classes equals the total (group x enrolled module) count,
/// fixed by the reference data and independent of population churn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledClass {
    pub id: usize,
    pub group_id: i32,
    pub module_id: i32,
    pub timeslot_id: i32,
    pub room_id: i32,
    pub professor_id: i32,
}

/// The fixed reference data set for one scheduling problem.
///
/// Entities are kept in id-ordered maps, so walking
/// [`groups`](Timetable::groups) during decode is deterministic. The same
/// walk order is used when generating random individuals, keeping gene
/// positions and class slots aligned.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timetable {
    rooms: BTreeMap<i32, Room>,
    professors: BTreeMap<i32, Professor>,
    modules: BTreeMap<i32, CourseModule>,
    groups: BTreeMap<i32, StudentGroup>,
    timeslots: BTreeMap<i32, Timeslot>,
}

impl Timetable {
    /// Creates an empty data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room.
    pub fn add_room(&mut self, id: i32, number: &str, capacity: u32) {
        self.rooms.insert(
            id,
            Room {
                id,
                number: number.to_string(),
                capacity,
            },
        );
    }

    /// Adds a professor.
    pub fn add_professor(&mut self, id: i32, name: &str) {
        self.professors.insert(
            id,
            Professor {
                id,
                name: name.to_string(),
            },
        );
    }

    /// Adds a course module with its eligible professors.
    pub fn add_module(&mut self, id: i32, code: &str, name: &str, professor_ids: Vec<i32>) {
        self.modules.insert(
            id,
            CourseModule {
                id,
                code: code.to_string(),
                name: name.to_string(),
                professor_ids,
            },
        );
    }

    /// Adds a student group with its enrolled modules.
    pub fn add_group(&mut self, id: i32, size: u32, module_ids: Vec<i32>) {
        self.groups.insert(
            id,
            StudentGroup {
                id,
                size,
                module_ids,
            },
        );
    }

    /// Adds a timeslot.
    pub fn add_timeslot(&mut self, id: i32, label: &str) {
        self.timeslots.insert(
            id,
            Timeslot {
                id,
                label: label.to_string(),
            },
        );
    }

    /// Room by id.
    pub fn room(&self, id: i32) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Professor by id.
    pub fn professor(&self, id: i32) -> Option<&Professor> {
        self.professors.get(&id)
    }

    /// Module by id.
    pub fn module(&self, id: i32) -> Option<&CourseModule> {
        self.modules.get(&id)
    }

    /// Group by id.
    pub fn group(&self, id: i32) -> Option<&StudentGroup> {
        self.groups.get(&id)
    }

    /// Timeslot by id.
    pub fn timeslot(&self, id: i32) -> Option<&Timeslot> {
        self.timeslots.get(&id)
    }

    /// Groups in ascending id order: the stable walk order shared by
    /// chromosome decode and random individual construction.
    pub fn groups(&self) -> impl Iterator<Item = &StudentGroup> {
        self.groups.values()
    }

    /// Whether any rooms exist.
    pub fn has_rooms(&self) -> bool {
        !self.rooms.is_empty()
    }

    /// Whether any timeslots exist.
    pub fn has_timeslots(&self) -> bool {
        !self.timeslots.is_empty()
    }

    /// Total number of classes to schedule: one per (group, enrolled
    /// module) pair.
    pub fn num_classes(&self) -> usize {
        self.groups.values().map(|g| g.module_ids.len()).sum()
    }

    /// A uniformly drawn room.
    ///
    /// # Panics
    /// Panics if no rooms exist.
    pub fn random_room<R: Rng>(&self, rng: &mut R) -> &Room {
        self.rooms
            .values()
            .choose(rng)
            .expect("timetable has no rooms")
    }

    /// A uniformly drawn timeslot.
    ///
    /// # Panics
    /// Panics if no timeslots exist.
    pub fn random_timeslot<R: Rng>(&self, rng: &mut R) -> &Timeslot {
        self.timeslots
            .values()
            .choose(rng)
            .expect("timetable has no timeslots")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn sample_timetable() -> Timetable {
        let mut timetable = Timetable::new();
        timetable.add_room(1, "A1", 30);
        timetable.add_room(2, "B2", 60);
        timetable.add_professor(1, "Dr Smith");
        timetable.add_professor(2, "Mrs Jones");
        timetable.add_module(1, "cs1", "Computer Science", vec![1, 2]);
        timetable.add_module(2, "en1", "English", vec![2]);
        timetable.add_group(1, 25, vec![1, 2]);
        timetable.add_group(2, 50, vec![2]);
        timetable.add_timeslot(1, "Mon 9:00 - 11:00");
        timetable.add_timeslot(2, "Mon 11:00 - 13:00");
        timetable
    }

    #[test]
    fn test_num_classes_counts_group_module_pairs() {
        let timetable = sample_timetable();
        assert_eq!(timetable.num_classes(), 3);
    }

    #[test]
    fn test_groups_walk_in_id_order() {
        let timetable = sample_timetable();
        let ids: Vec<i32> = timetable.groups().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_lookups() {
        let timetable = sample_timetable();
        assert_eq!(timetable.room(2).unwrap().capacity, 60);
        assert_eq!(timetable.professor(1).unwrap().name, "Dr Smith");
        assert_eq!(timetable.module(1).unwrap().professor_ids, vec![1, 2]);
        assert!(timetable.room(99).is_none());
    }

    #[test]
    fn test_random_draws_stay_in_domain() {
        let timetable = sample_timetable();
        let mut rng = create_rng(42);

        for _ in 0..100 {
            let room = timetable.random_room(&mut rng);
            assert!(timetable.room(room.id).is_some());

            let slot = timetable.random_timeslot(&mut rng);
            assert!(timetable.timeslot(slot.id).is_some());

            let professor = timetable.module(2).unwrap().random_professor(&mut rng);
            assert_eq!(professor, 2);
        }
    }
}
