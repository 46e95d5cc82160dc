use std::{borrow::Cow, collections::BTreeMap, sync::LazyLock};

use log::debug;

use crate::{Category, Equipment, Exercise, ExerciseID, MuscleGroup};

/// Read-only registry of exercises and their muscle mappings.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: BTreeMap<ExerciseID, Exercise>,
}

impl ExerciseCatalog {
    #[must_use]
    pub fn new(exercises: impl IntoIterator<Item = Exercise>) -> Self {
        Self {
            exercises: exercises
                .into_iter()
                .map(|exercise| (exercise.id.clone(), exercise))
                .collect(),
        }
    }

    /// The catalog built from the seed table, initialized on first use.
    #[must_use]
    pub fn builtin() -> &'static ExerciseCatalog {
        &BUILTIN
    }

    pub fn lookup(&self, id: &str) -> Result<&Exercise, CatalogError> {
        self.exercises
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Never fails: ids missing from the catalog yield [`Exercise::placeholder`].
    #[must_use]
    pub fn exercise_or_placeholder(&self, id: &ExerciseID) -> Cow<'_, Exercise> {
        if let Some(exercise) = self.exercises.get(id) {
            Cow::Borrowed(exercise)
        } else {
            debug!("unknown exercise {id}, using placeholder");
            Cow::Owned(Exercise::placeholder(id.clone()))
        }
    }

    /// Exercises with `muscle` as primary or secondary muscle, ordered by id.
    #[must_use]
    pub fn exercises_targeting(&self, muscle: MuscleGroup) -> Vec<&Exercise> {
        self.exercises
            .values()
            .filter(|exercise| exercise.targets(muscle))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.values()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.exercises.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Exercise not found: {0}")]
    NotFound(String),
}

impl From<CatalogEntry> for Exercise {
    fn from(value: CatalogEntry) -> Self {
        Exercise {
            id: ExerciseID::new(value.id),
            name: value.name.to_string(),
            category: value.category,
            equipment: value.equipment,
            primary_muscles: value.primary.iter().copied().collect(),
            secondary_muscles: value.secondary.iter().copied().collect(),
        }
    }
}

#[derive(Clone, Copy)]
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    category: Category,
    equipment: Equipment,
    primary: &'static [MuscleGroup],
    secondary: &'static [MuscleGroup],
}

static BUILTIN: LazyLock<ExerciseCatalog> =
    LazyLock::new(|| ExerciseCatalog::new(SEED.iter().copied().map(Exercise::from)));

const SEED: &[CatalogEntry] = &[
    CatalogEntry {
        id: "bench-press",
        name: "Barbell Bench Press",
        category: Category::Compound,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::FrontDelts, MuscleGroup::Triceps],
    },
    CatalogEntry {
        id: "incline-bench-press",
        name: "Incline Barbell Bench Press",
        category: Category::Compound,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::FrontDelts, MuscleGroup::Triceps],
    },
    CatalogEntry {
        id: "db-bench-press",
        name: "Dumbbell Bench Press",
        category: Category::Compound,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::FrontDelts, MuscleGroup::Triceps],
    },
    CatalogEntry {
        id: "db-incline-press",
        name: "Dumbbell Incline Bench Press",
        category: Category::Compound,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::Chest, MuscleGroup::FrontDelts],
        secondary: &[MuscleGroup::Triceps],
    },
    CatalogEntry {
        id: "close-grip-bench",
        name: "Close-Grip Bench Press",
        category: Category::Compound,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::Triceps, MuscleGroup::Chest],
        secondary: &[MuscleGroup::FrontDelts],
    },
    CatalogEntry {
        id: "dumbbell-fly",
        name: "Dumbbell Fly",
        category: Category::Isolation,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::FrontDelts],
    },
    CatalogEntry {
        id: "cable-crossover",
        name: "Cable Crossover",
        category: Category::Isolation,
        equipment: Equipment::Cable,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::FrontDelts],
    },
    CatalogEntry {
        id: "pec-deck",
        name: "Pec Deck",
        category: Category::Isolation,
        equipment: Equipment::Machine,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::FrontDelts],
    },
    CatalogEntry {
        id: "push-up",
        name: "Push-Up",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::FrontDelts, MuscleGroup::Triceps, MuscleGroup::Abs],
    },
    CatalogEntry {
        id: "decline-push-up",
        name: "Decline Push-Up",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Chest, MuscleGroup::FrontDelts],
        secondary: &[MuscleGroup::Triceps],
    },
    CatalogEntry {
        id: "diamond-push-up",
        name: "Diamond Push-Up",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Triceps, MuscleGroup::Chest],
        secondary: &[MuscleGroup::FrontDelts],
    },
    CatalogEntry {
        id: "dip",
        name: "Parallel Bar Dip",
        category: Category::Compound,
        equipment: Equipment::ParallelBars,
        primary: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        secondary: &[MuscleGroup::FrontDelts],
    },
    CatalogEntry {
        id: "deadlift",
        name: "Conventional Deadlift",
        category: Category::Compound,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::LowerBack, MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        secondary: &[
            MuscleGroup::UpperBack,
            MuscleGroup::Traps,
            MuscleGroup::Forearms,
            MuscleGroup::Quads,
        ],
    },
    CatalogEntry {
        id: "barbell-row",
        name: "Barbell Bent-Over Row",
        category: Category::Compound,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::UpperBack, MuscleGroup::Lats],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::RearDelts, MuscleGroup::Forearms],
    },
    CatalogEntry {
        id: "db-row",
        name: "One-Arm Dumbbell Row",
        category: Category::Compound,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::Lats, MuscleGroup::UpperBack],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::RearDelts],
    },
    CatalogEntry {
        id: "pull-up",
        name: "Pull-Up",
        category: Category::Compound,
        equipment: Equipment::PullUpBar,
        primary: &[MuscleGroup::Lats, MuscleGroup::UpperBack],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::Forearms],
    },
    CatalogEntry {
        id: "chin-up",
        name: "Chin-Up",
        category: Category::Compound,
        equipment: Equipment::PullUpBar,
        primary: &[MuscleGroup::Lats, MuscleGroup::Biceps],
        secondary: &[MuscleGroup::UpperBack, MuscleGroup::Forearms],
    },
    CatalogEntry {
        id: "inverted-row",
        name: "Inverted Row",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::UpperBack, MuscleGroup::Lats],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::RearDelts],
    },
    CatalogEntry {
        id: "lat-pulldown",
        name: "Lat Pulldown",
        category: Category::Compound,
        equipment: Equipment::Cable,
        primary: &[MuscleGroup::Lats],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::UpperBack],
    },
    CatalogEntry {
        id: "seated-cable-row",
        name: "Seated Cable Row",
        category: Category::Compound,
        equipment: Equipment::Cable,
        primary: &[MuscleGroup::UpperBack, MuscleGroup::Lats],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::RearDelts],
    },
    CatalogEntry {
        id: "muscle-up",
        name: "Muscle-Up",
        category: Category::Compound,
        equipment: Equipment::PullUpBar,
        primary: &[MuscleGroup::Lats, MuscleGroup::Chest, MuscleGroup::Triceps],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::UpperBack, MuscleGroup::Forearms],
    },
    CatalogEntry {
        id: "front-lever",
        name: "Front Lever",
        category: Category::Compound,
        equipment: Equipment::PullUpBar,
        primary: &[MuscleGroup::Lats, MuscleGroup::Abs],
        secondary: &[MuscleGroup::UpperBack, MuscleGroup::RearDelts, MuscleGroup::Forearms],
    },
    CatalogEntry {
        id: "dead-hang",
        name: "Dead Hang",
        category: Category::Isolation,
        equipment: Equipment::PullUpBar,
        primary: &[MuscleGroup::Forearms],
        secondary: &[MuscleGroup::Lats, MuscleGroup::UpperBack],
    },
    CatalogEntry {
        id: "overhead-press",
        name: "Overhead Press",
        category: Category::Compound,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::FrontDelts, MuscleGroup::SideDelts],
        secondary: &[MuscleGroup::Triceps, MuscleGroup::Traps, MuscleGroup::UpperBack],
    },
    CatalogEntry {
        id: "db-shoulder-press",
        name: "Dumbbell Shoulder Press",
        category: Category::Compound,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::FrontDelts, MuscleGroup::SideDelts],
        secondary: &[MuscleGroup::Triceps, MuscleGroup::Traps],
    },
    CatalogEntry {
        id: "pike-push-up",
        name: "Pike Push-Up",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::FrontDelts, MuscleGroup::SideDelts],
        secondary: &[MuscleGroup::Triceps, MuscleGroup::UpperBack],
    },
    CatalogEntry {
        id: "handstand-push-up",
        name: "Handstand Push-Up",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::FrontDelts, MuscleGroup::SideDelts, MuscleGroup::Triceps],
        secondary: &[MuscleGroup::Traps, MuscleGroup::UpperBack],
    },
    CatalogEntry {
        id: "planche",
        name: "Planche",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::FrontDelts, MuscleGroup::Chest],
        secondary: &[MuscleGroup::Triceps, MuscleGroup::Abs, MuscleGroup::Biceps],
    },
    CatalogEntry {
        id: "lateral-raise",
        name: "Dumbbell Lateral Raise",
        category: Category::Isolation,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::SideDelts],
        secondary: &[MuscleGroup::Traps],
    },
    CatalogEntry {
        id: "rear-delt-fly",
        name: "Rear Delt Fly",
        category: Category::Isolation,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::RearDelts],
        secondary: &[MuscleGroup::UpperBack],
    },
    CatalogEntry {
        id: "face-pull",
        name: "Face Pull",
        category: Category::Isolation,
        equipment: Equipment::Cable,
        primary: &[MuscleGroup::RearDelts],
        secondary: &[MuscleGroup::UpperBack, MuscleGroup::Traps],
    },
    CatalogEntry {
        id: "barbell-shrug",
        name: "Barbell Shrug",
        category: Category::Isolation,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::Traps],
        secondary: &[MuscleGroup::Forearms],
    },
    CatalogEntry {
        id: "barbell-curl",
        name: "Barbell Curl",
        category: Category::Isolation,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::Biceps],
        secondary: &[MuscleGroup::Forearms],
    },
    CatalogEntry {
        id: "hammer-curl",
        name: "Hammer Curl",
        category: Category::Isolation,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::Biceps, MuscleGroup::Forearms],
        secondary: &[],
    },
    CatalogEntry {
        id: "concentration-curl",
        name: "Concentration Curl",
        category: Category::Isolation,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::Biceps],
        secondary: &[],
    },
    CatalogEntry {
        id: "tricep-pushdown",
        name: "Tricep Pushdown",
        category: Category::Isolation,
        equipment: Equipment::Cable,
        primary: &[MuscleGroup::Triceps],
        secondary: &[],
    },
    CatalogEntry {
        id: "skull-crusher",
        name: "Skull Crusher",
        category: Category::Isolation,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::Triceps],
        secondary: &[],
    },
    CatalogEntry {
        id: "overhead-tricep-ext",
        name: "Overhead Tricep Extension",
        category: Category::Isolation,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::Triceps],
        secondary: &[],
    },
    CatalogEntry {
        id: "bench-dip",
        name: "Bench Dip",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Triceps],
        secondary: &[MuscleGroup::Chest, MuscleGroup::FrontDelts],
    },
    CatalogEntry {
        id: "wrist-curl",
        name: "Wrist Curl",
        category: Category::Isolation,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::Forearms],
        secondary: &[],
    },
    CatalogEntry {
        id: "squat",
        name: "Barbell Back Squat",
        category: Category::Compound,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings, MuscleGroup::LowerBack, MuscleGroup::Abs],
    },
    CatalogEntry {
        id: "front-squat",
        name: "Front Squat",
        category: Category::Compound,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::Quads],
        secondary: &[MuscleGroup::Glutes, MuscleGroup::Abs, MuscleGroup::UpperBack],
    },
    CatalogEntry {
        id: "goblet-squat",
        name: "Goblet Squat",
        category: Category::Compound,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Abs, MuscleGroup::UpperBack],
    },
    CatalogEntry {
        id: "bodyweight-squat",
        name: "Bodyweight Squat",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings],
    },
    CatalogEntry {
        id: "pistol-squat",
        name: "Pistol Squat",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings, MuscleGroup::Abs],
    },
    CatalogEntry {
        id: "bulgarian-split-squat",
        name: "Bulgarian Split Squat",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings],
    },
    CatalogEntry {
        id: "lunge",
        name: "Dumbbell Lunge",
        category: Category::Compound,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings, MuscleGroup::Calves],
    },
    CatalogEntry {
        id: "walking-lunge",
        name: "Walking Lunge",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings, MuscleGroup::Calves],
    },
    CatalogEntry {
        id: "leg-press",
        name: "Leg Press",
        category: Category::Compound,
        equipment: Equipment::Machine,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings],
    },
    CatalogEntry {
        id: "romanian-deadlift",
        name: "Romanian Deadlift",
        category: Category::Compound,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::LowerBack, MuscleGroup::Forearms],
    },
    CatalogEntry {
        id: "leg-curl",
        name: "Leg Curl",
        category: Category::Isolation,
        equipment: Equipment::Machine,
        primary: &[MuscleGroup::Hamstrings],
        secondary: &[],
    },
    CatalogEntry {
        id: "nordic-curl",
        name: "Nordic Curl",
        category: Category::Isolation,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Hamstrings],
        secondary: &[MuscleGroup::Glutes],
    },
    CatalogEntry {
        id: "leg-extension",
        name: "Leg Extension",
        category: Category::Isolation,
        equipment: Equipment::Machine,
        primary: &[MuscleGroup::Quads],
        secondary: &[],
    },
    CatalogEntry {
        id: "wall-sit",
        name: "Wall Sit",
        category: Category::Isolation,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Quads],
        secondary: &[MuscleGroup::Glutes],
    },
    CatalogEntry {
        id: "glute-bridge",
        name: "Glute Bridge",
        category: Category::Isolation,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings],
    },
    CatalogEntry {
        id: "calf-raise",
        name: "Standing Calf Raise",
        category: Category::Isolation,
        equipment: Equipment::Machine,
        primary: &[MuscleGroup::Calves],
        secondary: &[],
    },
    CatalogEntry {
        id: "plank",
        name: "Plank",
        category: Category::Isolation,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Abs],
        secondary: &[MuscleGroup::Obliques, MuscleGroup::LowerBack],
    },
    CatalogEntry {
        id: "side-plank",
        name: "Side Plank",
        category: Category::Isolation,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Obliques],
        secondary: &[MuscleGroup::Abs, MuscleGroup::Glutes],
    },
    CatalogEntry {
        id: "cable-crunch",
        name: "Cable Crunch",
        category: Category::Isolation,
        equipment: Equipment::Cable,
        primary: &[MuscleGroup::Abs],
        secondary: &[MuscleGroup::Obliques],
    },
    CatalogEntry {
        id: "hanging-leg-raise",
        name: "Hanging Leg Raise",
        category: Category::Isolation,
        equipment: Equipment::PullUpBar,
        primary: &[MuscleGroup::Abs, MuscleGroup::Obliques],
        secondary: &[MuscleGroup::Forearms],
    },
    CatalogEntry {
        id: "l-sit",
        name: "L-Sit",
        category: Category::Isolation,
        equipment: Equipment::ParallelBars,
        primary: &[MuscleGroup::Abs],
        secondary: &[MuscleGroup::Quads, MuscleGroup::Triceps],
    },
    CatalogEntry {
        id: "dragon-flag",
        name: "Dragon Flag",
        category: Category::Isolation,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Abs],
        secondary: &[MuscleGroup::Obliques, MuscleGroup::LowerBack],
    },
    CatalogEntry {
        id: "russian-twist",
        name: "Russian Twist",
        category: Category::Isolation,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Obliques],
        secondary: &[MuscleGroup::Abs],
    },
    CatalogEntry {
        id: "bicycle-crunch",
        name: "Bicycle Crunch",
        category: Category::Isolation,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Abs],
        secondary: &[MuscleGroup::Obliques],
    },
    CatalogEntry {
        id: "mountain-climber",
        name: "Mountain Climber",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Abs, MuscleGroup::Quads],
        secondary: &[MuscleGroup::FrontDelts, MuscleGroup::Obliques],
    },
    CatalogEntry {
        id: "burpee",
        name: "Burpee",
        category: Category::Compound,
        equipment: Equipment::None,
        primary: &[MuscleGroup::Quads, MuscleGroup::Chest],
        secondary: &[
            MuscleGroup::Glutes,
            MuscleGroup::FrontDelts,
            MuscleGroup::Triceps,
            MuscleGroup::Abs,
        ],
    },
    CatalogEntry {
        id: "box-jump",
        name: "Box Jump",
        category: Category::Compound,
        equipment: Equipment::Box,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Calves, MuscleGroup::Hamstrings],
    },
    CatalogEntry {
        id: "kettlebell-swing",
        name: "Kettlebell Swing",
        category: Category::Compound,
        equipment: Equipment::Kettlebell,
        primary: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
        secondary: &[MuscleGroup::LowerBack, MuscleGroup::FrontDelts, MuscleGroup::Forearms],
    },
    CatalogEntry {
        id: "thruster",
        name: "Thruster",
        category: Category::Compound,
        equipment: Equipment::Barbell,
        primary: &[MuscleGroup::Quads, MuscleGroup::FrontDelts],
        secondary: &[MuscleGroup::Glutes, MuscleGroup::Triceps, MuscleGroup::UpperBack],
    },
    CatalogEntry {
        id: "campus-board",
        name: "Campus Board Ladder",
        category: Category::Compound,
        equipment: Equipment::CampusBoard,
        primary: &[MuscleGroup::Lats, MuscleGroup::Forearms],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::UpperBack],
    },
    CatalogEntry {
        id: "lock-off",
        name: "Lock-Off",
        category: Category::Compound,
        equipment: Equipment::PullUpBar,
        primary: &[MuscleGroup::Lats, MuscleGroup::Biceps],
        secondary: &[MuscleGroup::Forearms, MuscleGroup::UpperBack],
    },
    CatalogEntry {
        id: "fingerboard-hang",
        name: "Fingerboard Hang",
        category: Category::Isolation,
        equipment: Equipment::Fingerboard,
        primary: &[MuscleGroup::Forearms],
        secondary: &[MuscleGroup::Lats],
    },
    CatalogEntry {
        id: "farmer-walk",
        name: "Farmer's Walk",
        category: Category::Compound,
        equipment: Equipment::Dumbbell,
        primary: &[MuscleGroup::Forearms, MuscleGroup::Traps],
        secondary: &[MuscleGroup::UpperBack, MuscleGroup::Abs, MuscleGroup::Quads],
    },
];
