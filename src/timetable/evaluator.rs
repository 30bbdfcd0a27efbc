//! Timetable clash scoring.

use rand::Rng;

use crate::engine::{FitnessEvaluator, Individual};

use super::data::{ScheduledClass, Timetable};

/// Genes consumed per scheduled class: timeslot, room, professor.
pub const GENES_PER_CLASS: usize = 3;

/// Scores timetable chromosomes by counting hard-constraint violations.
///
/// A chromosome is decoded into one [`ScheduledClass`] per (group, module)
/// pair by consuming consecutive `[timeslot, room, professor]` triplets;
/// the decoded list is scratch state owned by a single evaluation. Fitness
/// is `1 / (clashes + 1)`, so a clash-free schedule scores exactly 1.0.
pub struct TimetableEvaluator {
    timetable: Timetable,
}

impl TimetableEvaluator {
    /// Creates an evaluator over a populated reference data set.
    ///
    /// # Panics
    /// Panics if the data set has nothing to schedule, or lacks the rooms
    /// or timeslots needed to build any individual.
    pub fn new(timetable: Timetable) -> Self {
        assert!(
            timetable.num_classes() > 0,
            "timetable has no classes to schedule"
        );
        assert!(timetable.has_rooms(), "timetable has no rooms");
        assert!(timetable.has_timeslots(), "timetable has no timeslots");
        for group in timetable.groups() {
            for &module_id in &group.module_ids {
                let module = timetable
                    .module(module_id)
                    .unwrap_or_else(|| panic!("group {} references unknown module {module_id}", group.id));
                assert!(
                    !module.professor_ids.is_empty(),
                    "module {module_id} has no eligible professors"
                );
            }
        }
        Self { timetable }
    }

    /// The reference data set.
    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    /// Rebuilds the class records encoded by a chromosome.
    ///
    /// Groups are walked in stable id order, each group's modules in their
    /// listed order, consuming one gene triplet per class.
    ///
    /// # Panics
    /// Panics if the chromosome length does not match the class count.
    pub fn decode(&self, individual: &Individual) -> Vec<ScheduledClass> {
        let expected = self.timetable.num_classes() * GENES_PER_CLASS;
        assert_eq!(
            individual.len(),
            expected,
            "chromosome holds {} genes but this timetable requires {expected}",
            individual.len()
        );

        let chromosome = individual.chromosome();
        let mut classes = Vec::with_capacity(self.timetable.num_classes());
        let mut cursor = 0;

        for group in self.timetable.groups() {
            for &module_id in &group.module_ids {
                classes.push(ScheduledClass {
                    id: classes.len(),
                    group_id: group.id,
                    module_id,
                    timeslot_id: chromosome[cursor],
                    room_id: chromosome[cursor + 1],
                    professor_id: chromosome[cursor + 2],
                });
                cursor += GENES_PER_CLASS;
            }
        }

        classes
    }

    /// Counts constraint violations across a decoded schedule.
    ///
    /// For every class: +1 when its room is too small for its group, +1
    /// when any other class occupies the same room and timeslot, +1 when
    /// any other class claims the same professor and timeslot. The
    /// categories are independent and additive, and each contributes at
    /// most once per class. The pairwise scan is O(n^2) in the class count.
    ///
    /// # Panics
    /// Panics if a class references a room or group missing from the
    /// reference data.
    pub fn clashes(&self, classes: &[ScheduledClass]) -> u32 {
        let mut clashes = 0;

        for a in classes {
            let capacity = self
                .timetable
                .room(a.room_id)
                .unwrap_or_else(|| panic!("chromosome references unknown room {}", a.room_id))
                .capacity;
            let group_size = self
                .timetable
                .group(a.group_id)
                .unwrap_or_else(|| panic!("class references unknown group {}", a.group_id))
                .size;
            if capacity < group_size {
                clashes += 1;
            }

            if classes
                .iter()
                .any(|b| b.id != a.id && b.room_id == a.room_id && b.timeslot_id == a.timeslot_id)
            {
                clashes += 1;
            }

            if classes.iter().any(|b| {
                b.id != a.id
                    && b.professor_id == a.professor_id
                    && b.timeslot_id == a.timeslot_id
            }) {
                clashes += 1;
            }
        }

        clashes
    }
}

impl FitnessEvaluator for TimetableEvaluator {
    fn chromosome_length(&self) -> usize {
        self.timetable.num_classes() * GENES_PER_CLASS
    }

    /// Random individuals assign a random timeslot, a random room, and a
    /// professor drawn from the module's eligible list, per class; every
    /// gene is therefore within its legal domain.
    fn random_individual<R: Rng>(&self, rng: &mut R) -> Individual {
        let mut chromosome = Vec::with_capacity(self.chromosome_length());

        for group in self.timetable.groups() {
            for &module_id in &group.module_ids {
                chromosome.push(self.timetable.random_timeslot(rng).id);
                chromosome.push(self.timetable.random_room(rng).id);
                let module = self
                    .timetable
                    .module(module_id)
                    .expect("group references unknown module");
                chromosome.push(module.random_professor(rng));
            }
        }

        Individual::new(chromosome)
    }

    fn score(&self, individual: &Individual) -> f64 {
        let classes = self.decode(individual);
        1.0 / f64::from(self.clashes(&classes) + 1)
    }
}
