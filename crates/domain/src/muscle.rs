use std::{fmt, slice::Iter};

use derive_more::Deref;

use crate::Property;

/// Anatomical regions used for volume attribution.
///
/// The declaration order is significant: it breaks ties when muscle loads are
/// ranked by volume.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    // Chest
    Chest,
    // Shoulders
    FrontDelts,
    SideDelts,
    RearDelts,
    // Arms
    Biceps,
    Triceps,
    Forearms,
    // Back
    UpperBack,
    Lats,
    LowerBack,
    // Core
    Abs,
    Obliques,
    // Legs
    Glutes,
    Quads,
    Hamstrings,
    Calves,
    // Neck
    Traps,
    Neck,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLES: [MuscleGroup; 18] = [
            MuscleGroup::Chest,
            MuscleGroup::FrontDelts,
            MuscleGroup::SideDelts,
            MuscleGroup::RearDelts,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::UpperBack,
            MuscleGroup::Lats,
            MuscleGroup::LowerBack,
            MuscleGroup::Abs,
            MuscleGroup::Obliques,
            MuscleGroup::Glutes,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Calves,
            MuscleGroup::Traps,
            MuscleGroup::Neck,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::FrontDelts => "Front Delts",
            MuscleGroup::SideDelts => "Side Delts",
            MuscleGroup::RearDelts => "Rear Delts",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::UpperBack => "Upper Back",
            MuscleGroup::Lats => "Lats",
            MuscleGroup::LowerBack => "Lower Back",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Obliques => "Obliques",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Traps => "Traps",
            MuscleGroup::Neck => "Neck",
        }
    }
}

impl MuscleGroup {
    /// Stable identifier used by collaborators (`front_delts`, `upper_back`, ...).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::FrontDelts => "front_delts",
            MuscleGroup::SideDelts => "side_delts",
            MuscleGroup::RearDelts => "rear_delts",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Forearms => "forearms",
            MuscleGroup::UpperBack => "upper_back",
            MuscleGroup::Lats => "lats",
            MuscleGroup::LowerBack => "lower_back",
            MuscleGroup::Abs => "abs",
            MuscleGroup::Obliques => "obliques",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Traps => "traps",
            MuscleGroup::Neck => "neck",
        }
    }

    #[must_use]
    pub fn is_lower_body(self) -> bool {
        matches!(
            self,
            MuscleGroup::Quads | MuscleGroup::Hamstrings | MuscleGroup::Glutes | MuscleGroup::Calves
        )
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MuscleGroup::iter()
            .find(|m| m.key() == value)
            .copied()
            .ok_or(MuscleGroupError::Invalid)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Invalid muscle group")]
    Invalid,
}

#[derive(Deref, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stimulus(u32);

impl Stimulus {
    pub const PRIMARY: Stimulus = Stimulus(100);
    pub const SECONDARY: Stimulus = Stimulus(50);
    pub const NONE: Stimulus = Stimulus(0);

    /// Share of a set's volume credited to a muscle with this stimulus.
    #[must_use]
    pub fn volume_share(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_muscle_group_iter() {
        let muscles = MuscleGroup::iter().copied().collect::<Vec<_>>();
        let mut sorted = muscles.clone();
        sorted.sort();

        assert_eq!(muscles.len(), 18);
        assert_eq!(muscles, sorted);
    }

    #[test]
    fn test_muscle_group_name() {
        let mut names = HashSet::new();

        for muscle in MuscleGroup::iter() {
            let name = muscle.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_muscle_group_try_from_key() {
        for muscle in MuscleGroup::iter() {
            assert_eq!(MuscleGroup::try_from(muscle.key()), Ok(*muscle));
        }
    }

    #[rstest]
    #[case("front_delts", Ok(MuscleGroup::FrontDelts))]
    #[case("Front Delts", Err(MuscleGroupError::Invalid))]
    #[case("", Err(MuscleGroupError::Invalid))]
    fn test_muscle_group_try_from(
        #[case] value: &str,
        #[case] expected: Result<MuscleGroup, MuscleGroupError>,
    ) {
        assert_eq!(MuscleGroup::try_from(value), expected);
    }

    #[test]
    fn test_muscle_group_is_lower_body() {
        assert_eq!(
            MuscleGroup::iter()
                .filter(|m| m.is_lower_body())
                .copied()
                .collect::<Vec<_>>(),
            vec![
                MuscleGroup::Glutes,
                MuscleGroup::Quads,
                MuscleGroup::Hamstrings,
                MuscleGroup::Calves
            ]
        );
    }

    #[test]
    fn test_stimulus_volume_share() {
        assert_eq!(Stimulus::PRIMARY.volume_share(), 1.0);
        assert_eq!(Stimulus::SECONDARY.volume_share(), 0.5);
        assert_eq!(Stimulus::NONE.volume_share(), 0.0);
    }
}
