use std::{borrow::Borrow, collections::BTreeSet, slice::Iter};

use derive_more::{Deref, Display};

use crate::{MuscleGroup, Stimulus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub category: Category,
    pub equipment: Equipment,
    pub primary_muscles: BTreeSet<MuscleGroup>,
    pub secondary_muscles: BTreeSet<MuscleGroup>,
}

impl Exercise {
    /// Stand-in for an exercise id the catalog does not know.
    ///
    /// The placeholder targets no muscles, so any volume logged against it is
    /// not attributed to a muscle group.
    #[must_use]
    pub fn placeholder(id: ExerciseID) -> Self {
        Self {
            name: id.to_string(),
            id,
            category: Category::Compound,
            equipment: Equipment::None,
            primary_muscles: BTreeSet::new(),
            secondary_muscles: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.primary_muscles.is_empty() && self.secondary_muscles.is_empty()
    }

    /// All targeted muscles, primary muscles first.
    pub fn muscle_stimulus(&self) -> impl Iterator<Item = (MuscleGroup, Stimulus)> + '_ {
        self.primary_muscles
            .iter()
            .map(|m| (*m, Stimulus::PRIMARY))
            .chain(
                self.secondary_muscles
                    .iter()
                    .map(|m| (*m, Stimulus::SECONDARY)),
            )
    }

    #[must_use]
    pub fn targets(&self, muscle: MuscleGroup) -> bool {
        self.primary_muscles.contains(&muscle) || self.secondary_muscles.contains(&muscle)
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.trim().to_string())
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl Borrow<str> for ExerciseID {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Compound,
    Isolation,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 2] = [Category::Compound, Category::Isolation];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Compound => "Compound",
            Category::Isolation => "Isolation",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    None,
    Barbell,
    Box,
    Cable,
    CampusBoard,
    Dumbbell,
    Fingerboard,
    Kettlebell,
    Machine,
    ParallelBars,
    PullUpBar,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 11] = [
            Equipment::None,
            Equipment::Barbell,
            Equipment::Box,
            Equipment::Cable,
            Equipment::CampusBoard,
            Equipment::Dumbbell,
            Equipment::Fingerboard,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::ParallelBars,
            Equipment::PullUpBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::None => "Bodyweight",
            Equipment::Barbell => "Barbell",
            Equipment::Box => "Box",
            Equipment::Cable => "Cable",
            Equipment::CampusBoard => "Campus Board",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Fingerboard => "Fingerboard",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::ParallelBars => "Parallel Bars",
            Equipment::PullUpBar => "Pull Up Bar",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_exercise_muscle_stimulus() {
        assert_eq!(
            Exercise {
                id: "bench-press".into(),
                name: "Barbell Bench Press".to_string(),
                category: Category::Compound,
                equipment: Equipment::Barbell,
                primary_muscles: BTreeSet::from([MuscleGroup::Chest]),
                secondary_muscles: BTreeSet::from([MuscleGroup::Triceps, MuscleGroup::FrontDelts]),
            }
            .muscle_stimulus()
            .collect::<Vec<_>>(),
            vec![
                (MuscleGroup::Chest, Stimulus::PRIMARY),
                (MuscleGroup::FrontDelts, Stimulus::SECONDARY),
                (MuscleGroup::Triceps, Stimulus::SECONDARY),
            ]
        );
    }

    #[test]
    fn test_exercise_placeholder() {
        let placeholder = Exercise::placeholder("unknown-lift".into());

        assert_eq!(placeholder.id, ExerciseID::from("unknown-lift"));
        assert_eq!(placeholder.name, "unknown-lift");
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.muscle_stimulus().count(), 0);
        assert!(!MuscleGroup::iter().any(|m| placeholder.targets(*m)));
    }

    #[rstest]
    #[case("squat", "squat")]
    #[case("  squat ", "squat")]
    #[case("", "")]
    fn test_exercise_id_new(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(ExerciseID::new(value), ExerciseID(expected.to_string()));
    }

    #[test]
    fn test_category_name() {
        let mut names = HashSet::new();

        for category in Category::iter() {
            let name = category.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_equipment_name() {
        let mut names = HashSet::new();

        for equipment in Equipment::iter() {
            let name = equipment.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }
}
