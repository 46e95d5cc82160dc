//! Canonical template days of every goal.
//!
//! Set counts are given for intermediate athletes and scaled by level during
//! synthesis. Rep ranges and rest durations are used unchanged.

use crate::{DaysPerWeek, EquipmentProfile, Goal, Level, RepRange};

pub(crate) struct TemplateDay {
    pub name: &'static str,
    pub focus: &'static str,
    pub exercises: &'static [TemplateExercise],
}

#[derive(Clone, Copy)]
pub(crate) struct TemplateExercise {
    pub exercise: &'static str,
    pub bodyweight: Option<&'static str>,
    pub advanced: Option<&'static str>,
    pub sets: u32,
    pub reps: RepRange,
    pub rest_seconds: u32,
    pub note: Option<&'static str>,
}

impl TemplateExercise {
    const fn bodyweight(self, exercise: &'static str) -> Self {
        Self {
            bodyweight: Some(exercise),
            ..self
        }
    }

    const fn advanced(self, exercise: &'static str) -> Self {
        Self {
            advanced: Some(exercise),
            ..self
        }
    }

    const fn note(self, note: &'static str) -> Self {
        Self {
            note: Some(note),
            ..self
        }
    }

    pub fn resolve(&self, level: Level, equipment: EquipmentProfile) -> &'static str {
        let exercise = match self.advanced {
            Some(advanced) if level == Level::Advanced => advanced,
            _ => self.exercise,
        };
        match self.bodyweight {
            Some(bodyweight) if equipment == EquipmentProfile::Bodyweight => bodyweight,
            _ => exercise,
        }
    }
}

const fn slot(
    exercise: &'static str,
    sets: u32,
    reps_min: u32,
    reps_max: u32,
    rest_seconds: u32,
) -> TemplateExercise {
    TemplateExercise {
        exercise,
        bodyweight: None,
        advanced: None,
        sets,
        reps: match RepRange::new(reps_min, reps_max) {
            Ok(reps) => reps,
            Err(_) => panic!("invalid rep range"),
        },
        rest_seconds,
        note: None,
    }
}

pub(crate) fn pool(goal: Goal, days: DaysPerWeek) -> &'static [TemplateDay] {
    match goal {
        Goal::Bodybuilding => match *days {
            0..=3 => BODYBUILDING_PPL,
            4 => BODYBUILDING_PPL_ARMS,
            _ => BODYBUILDING_BRO_SPLIT,
        },
        Goal::Calisthenics => CALISTHENICS,
        Goal::Climbing => CLIMBING,
        Goal::Powerlifting => POWERLIFTING,
        Goal::General => GENERAL,
        Goal::WeightLoss => WEIGHT_LOSS,
    }
}

/// The first `count` days of the endlessly repeated pool. Repeated days are
/// numbered from 2 on ("Push Day 2").
pub(crate) fn cycle_days(
    pool: &'static [TemplateDay],
    count: usize,
) -> impl Iterator<Item = (String, &'static TemplateDay)> {
    pool.iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(move |(i, template)| match i / pool.len() {
            0 => (template.name.to_string(), template),
            round => (format!("{} {}", template.name, round + 1), template),
        })
}

pub(crate) fn plan_name(goal: Goal, level: Level) -> &'static str {
    match (goal, level) {
        (Goal::Bodybuilding, Level::Beginner) => "Foundation Split",
        (Goal::Bodybuilding, Level::Intermediate) => "Hypertrophy Split",
        (Goal::Bodybuilding, Level::Advanced) => "Advanced Hypertrophy Split",
        (Goal::Calisthenics, Level::Beginner) => "Foundation Calisthenics",
        (Goal::Calisthenics, Level::Intermediate) => "Progressive Calisthenics",
        (Goal::Calisthenics, Level::Advanced) => "Advanced Calisthenics",
        (Goal::Climbing, Level::Beginner) => "Foundation Climbing Program",
        (Goal::Climbing, Level::Intermediate) => "Performance Climbing Program",
        (Goal::Climbing, Level::Advanced) => "Send Climbing Program",
        (Goal::Powerlifting, Level::Beginner) => "Starting Strength Powerlifting",
        (Goal::Powerlifting, Level::Intermediate) => "Intermediate Powerlifting",
        (Goal::Powerlifting, Level::Advanced) => "Advanced Powerlifting",
        (Goal::General, Level::Beginner) => "Starter Fitness",
        (Goal::General, Level::Intermediate) => "Balanced Fitness",
        (Goal::General, Level::Advanced) => "Performance Fitness",
        (Goal::WeightLoss, Level::Beginner) => "Kickstart Fat Burn",
        (Goal::WeightLoss, Level::Intermediate) => "Shred Fat Burn",
        (Goal::WeightLoss, Level::Advanced) => "Elite Fat Burn",
    }
}

pub(crate) fn plan_description(goal: Goal, level: Level, days: DaysPerWeek) -> String {
    match goal {
        Goal::Bodybuilding => format!(
            "A {days}-day {} bodybuilding program focused on progressive overload and muscle \
             hypertrophy.",
            level.key()
        ),
        Goal::Calisthenics => format!(
            "A {days}-day calisthenics program focusing on bodyweight mastery{}.",
            if level == Level::Advanced {
                " with advanced static holds"
            } else {
                ""
            }
        ),
        Goal::Climbing => format!(
            "A {days}-day climbing-specific program to build grip strength, pulling power, and \
             antagonist balance."
        ),
        Goal::Powerlifting => format!(
            "A {days}-day powerlifting program that prioritizes the big 3 lifts with progressive \
             overload."
        ),
        Goal::General => format!(
            "A {days}-day balanced fitness program for overall strength, endurance, and health."
        ),
        Goal::WeightLoss => format!(
            "A {days}-day circuit-based program with minimal rest to maximize calorie burn and \
             build lean muscle."
        ),
    }
}

// Bodybuilding

const PUSH_DAY: TemplateDay = TemplateDay {
    name: "Push Day",
    focus: "Chest, Shoulders, Triceps",
    exercises: &[
        slot("bench-press", 4, 6, 10, 90).bodyweight("push-up"),
        slot("db-incline-press", 3, 8, 12, 90).bodyweight("decline-push-up"),
        slot("db-shoulder-press", 3, 8, 12, 60).bodyweight("pike-push-up"),
        slot("lateral-raise", 3, 12, 15, 45).bodyweight("pike-push-up"),
        slot("tricep-pushdown", 3, 10, 15, 45).bodyweight("diamond-push-up"),
        slot("pec-deck", 3, 12, 15, 45).bodyweight("push-up"),
    ],
};

const PULL_DAY: TemplateDay = TemplateDay {
    name: "Pull Day",
    focus: "Back, Biceps",
    exercises: &[
        slot("barbell-row", 4, 6, 10, 90).bodyweight("pull-up"),
        slot("pull-up", 3, 6, 12, 90),
        slot("seated-cable-row", 3, 8, 12, 60).bodyweight("inverted-row"),
        slot("lat-pulldown", 3, 8, 12, 60).bodyweight("chin-up"),
        slot("barbell-curl", 3, 10, 15, 45).bodyweight("chin-up"),
        slot("face-pull", 3, 12, 20, 45),
    ],
};

const LEG_DAY: TemplateDay = TemplateDay {
    name: "Leg Day",
    focus: "Quads, Hamstrings, Glutes, Calves",
    exercises: &[
        slot("squat", 4, 6, 10, 120).bodyweight("bodyweight-squat"),
        slot("romanian-deadlift", 3, 8, 12, 90).bodyweight("nordic-curl"),
        slot("leg-press", 3, 10, 12, 90).bodyweight("bulgarian-split-squat"),
        slot("leg-curl", 3, 10, 15, 60).bodyweight("glute-bridge"),
        slot("leg-extension", 3, 12, 15, 45).bodyweight("wall-sit"),
        slot("calf-raise", 4, 12, 20, 45),
    ],
};

const BODYBUILDING_PPL: &[TemplateDay] = &[PUSH_DAY, PULL_DAY, LEG_DAY];

const BODYBUILDING_PPL_ARMS: &[TemplateDay] = &[
    TemplateDay {
        name: "Upper Push",
        ..PUSH_DAY
    },
    PULL_DAY,
    LEG_DAY,
    TemplateDay {
        name: "Shoulders & Arms",
        focus: "Delts, Biceps, Triceps",
        exercises: &[
            slot("overhead-press", 4, 6, 10, 90).bodyweight("handstand-push-up"),
            slot("lateral-raise", 3, 12, 15, 45).bodyweight("pike-push-up"),
            slot("barbell-curl", 3, 10, 12, 60).bodyweight("chin-up"),
            slot("skull-crusher", 3, 10, 12, 60).bodyweight("bench-dip"),
            slot("face-pull", 3, 15, 20, 45),
        ],
    },
];

const BODYBUILDING_BRO_SPLIT: &[TemplateDay] = &[
    TemplateDay {
        name: "Chest",
        focus: "Chest Focus",
        exercises: &[
            slot("bench-press", 4, 6, 10, 90).bodyweight("push-up"),
            slot("db-incline-press", 3, 8, 12, 90).bodyweight("decline-push-up"),
            slot("dumbbell-fly", 3, 10, 15, 60).bodyweight("push-up"),
            slot("cable-crossover", 3, 12, 15, 45).bodyweight("diamond-push-up"),
        ],
    },
    TemplateDay {
        name: "Back",
        focus: "Back Focus",
        exercises: &[
            slot("deadlift", 4, 3, 6, 180).bodyweight("pull-up"),
            slot("barbell-row", 3, 8, 12, 90).bodyweight("inverted-row"),
            slot("lat-pulldown", 3, 8, 12, 60).bodyweight("chin-up"),
            slot("seated-cable-row", 3, 10, 12, 60).bodyweight("inverted-row"),
        ],
    },
    TemplateDay {
        name: "Shoulders",
        focus: "Delts & Traps",
        exercises: &[
            slot("overhead-press", 4, 6, 10, 90).bodyweight("pike-push-up"),
            slot("lateral-raise", 4, 12, 15, 45).bodyweight("pike-push-up"),
            slot("rear-delt-fly", 3, 12, 15, 45),
            slot("barbell-shrug", 3, 10, 15, 60).bodyweight("dead-hang"),
        ],
    },
    LEG_DAY,
    TemplateDay {
        name: "Arms",
        focus: "Biceps & Triceps",
        exercises: &[
            slot("barbell-curl", 3, 8, 12, 60).bodyweight("chin-up"),
            slot("skull-crusher", 3, 8, 12, 60).bodyweight("bench-dip"),
            slot("hammer-curl", 3, 10, 12, 45).bodyweight("chin-up"),
            slot("overhead-tricep-ext", 3, 10, 15, 45).bodyweight("diamond-push-up"),
            slot("concentration-curl", 2, 12, 15, 45).bodyweight("chin-up"),
        ],
    },
    TemplateDay {
        name: "Core & Conditioning",
        focus: "Abs, Cardio",
        exercises: &[
            slot("hanging-leg-raise", 3, 10, 15, 60),
            slot("russian-twist", 3, 15, 20, 45),
            slot("plank", 3, 30, 60, 45).note("seconds hold"),
            slot("mountain-climber", 3, 15, 20, 30),
            slot("burpee", 3, 8, 12, 60),
        ],
    },
];

// Calisthenics

const UPPER_BODY: TemplateDay = TemplateDay {
    name: "Upper Body",
    focus: "Push & Pull Skills",
    exercises: &[
        slot("pull-up", 4, 3, 8, 120).advanced("muscle-up"),
        slot("dip", 4, 6, 12, 90),
        slot("pike-push-up", 3, 5, 10, 90).advanced("handstand-push-up"),
        slot("inverted-row", 3, 8, 12, 60),
        slot("diamond-push-up", 3, 8, 15, 60),
        slot("plank", 3, 15, 30, 60)
            .advanced("l-sit")
            .note("seconds hold"),
    ],
};

const LOWER_BODY: TemplateDay = TemplateDay {
    name: "Lower Body",
    focus: "Legs & Core",
    exercises: &[
        slot("bodyweight-squat", 4, 5, 12, 90).advanced("pistol-squat"),
        slot("bulgarian-split-squat", 3, 8, 12, 90),
        slot("nordic-curl", 3, 3, 8, 90),
        slot("glute-bridge", 3, 12, 20, 60),
        slot("hanging-leg-raise", 3, 8, 15, 60),
        slot("bicycle-crunch", 3, 6, 12, 60).advanced("dragon-flag"),
    ],
};

const SKILL_DAY: TemplateDay = TemplateDay {
    name: "Skill Day",
    focus: "Static Holds & Advanced Movements",
    exercises: &[
        slot("dead-hang", 4, 5, 15, 120)
            .advanced("front-lever")
            .note("seconds hold or tuck progressions"),
        slot("push-up", 4, 5, 15, 120)
            .advanced("planche")
            .note("lean progressions"),
        slot("pull-up", 3, 3, 6, 120).advanced("muscle-up"),
        slot("pike-push-up", 3, 3, 8, 90).advanced("handstand-push-up"),
        slot("l-sit", 3, 10, 30, 60).note("seconds hold"),
    ],
};

const CALISTHENICS: &[TemplateDay] = &[
    UPPER_BODY,
    LOWER_BODY,
    SKILL_DAY,
    TemplateDay {
        name: "Upper Body 2",
        ..UPPER_BODY
    },
    TemplateDay {
        name: "Lower Body 2",
        ..LOWER_BODY
    },
    TemplateDay {
        name: "Skills 2",
        ..SKILL_DAY
    },
];

// Climbing

const PULL_STRENGTH: TemplateDay = TemplateDay {
    name: "Pull Strength",
    focus: "Pulling Power & Grip",
    exercises: &[
        slot("pull-up", 4, 3, 8, 120).advanced("campus-board"),
        slot("lock-off", 3, 5, 10, 90).note("seconds hold at 90°"),
        slot("inverted-row", 3, 8, 12, 60),
        slot("fingerboard-hang", 4, 7, 10, 120).note("seconds per hang"),
        slot("dead-hang", 3, 20, 45, 90).note("seconds"),
        slot("wrist-curl", 3, 12, 20, 45),
    ],
};

const ANTAGONIST: TemplateDay = TemplateDay {
    name: "Antagonist & Core",
    focus: "Push Muscles & Core Stability",
    exercises: &[
        slot("push-up", 3, 10, 20, 60),
        slot("dip", 3, 8, 12, 60),
        slot("pike-push-up", 3, 8, 12, 60),
        slot("hanging-leg-raise", 3, 5, 12, 90).advanced("front-lever"),
        slot("plank", 3, 30, 60, 45).note("seconds hold"),
        slot("side-plank", 3, 20, 40, 45).note("seconds each side"),
    ],
};

const POWER_ENDURANCE: TemplateDay = TemplateDay {
    name: "Power & Endurance",
    focus: "Explosive Pulling & Stamina",
    exercises: &[
        slot("pull-up", 4, 3, 6, 120)
            .advanced("muscle-up")
            .note("explosive"),
        slot("chin-up", 3, 6, 12, 90),
        slot("fingerboard-hang", 3, 7, 10, 120).note("different grips"),
        slot("farmer-walk", 3, 30, 60, 90).note("seconds"),
        slot("bodyweight-squat", 3, 15, 25, 45),
        slot("russian-twist", 3, 15, 20, 45),
    ],
};

const CLIMBING: &[TemplateDay] = &[
    PULL_STRENGTH,
    ANTAGONIST,
    POWER_ENDURANCE,
    TemplateDay {
        name: "Pull Strength 2",
        ..PULL_STRENGTH
    },
    TemplateDay {
        name: "Antagonist 2",
        ..ANTAGONIST
    },
    TemplateDay {
        name: "Power 2",
        ..POWER_ENDURANCE
    },
];

// Powerlifting

const SQUAT_DAY: TemplateDay = TemplateDay {
    name: "Squat Day",
    focus: "Squat & Quad Accessories",
    exercises: &[
        slot("squat", 5, 3, 5, 180),
        slot("front-squat", 3, 5, 8, 120),
        slot("leg-press", 3, 8, 12, 90),
        slot("leg-extension", 3, 10, 15, 60),
        slot("hanging-leg-raise", 3, 10, 15, 60),
    ],
};

const BENCH_DAY: TemplateDay = TemplateDay {
    name: "Bench Day",
    focus: "Bench Press & Upper Body Accessories",
    exercises: &[
        slot("bench-press", 5, 3, 5, 180),
        slot("close-grip-bench", 3, 6, 10, 120),
        slot("db-incline-press", 3, 8, 12, 90),
        slot("barbell-row", 3, 6, 10, 90),
        slot("tricep-pushdown", 3, 10, 15, 60),
    ],
};

const POWERLIFTING: &[TemplateDay] = &[
    SQUAT_DAY,
    BENCH_DAY,
    TemplateDay {
        name: "Deadlift Day",
        focus: "Deadlift & Posterior Chain",
        exercises: &[
            slot("deadlift", 5, 2, 5, 240),
            slot("romanian-deadlift", 3, 6, 10, 120),
            slot("barbell-row", 3, 6, 10, 90),
            slot("pull-up", 3, 6, 10, 90),
            slot("barbell-shrug", 3, 10, 15, 60),
        ],
    },
    TemplateDay {
        name: "Accessory Day",
        focus: "Weak Points & Hypertrophy",
        exercises: &[
            slot("overhead-press", 4, 5, 8, 120),
            slot("lat-pulldown", 3, 8, 12, 60),
            slot("face-pull", 3, 15, 20, 45),
            slot("barbell-curl", 3, 10, 12, 60),
            slot("plank", 3, 30, 60, 45).note("seconds hold"),
        ],
    },
    TemplateDay {
        name: "Squat Variation",
        ..SQUAT_DAY
    },
    TemplateDay {
        name: "Bench Variation",
        ..BENCH_DAY
    },
];

// General fitness

const FULL_BODY_A: TemplateDay = TemplateDay {
    name: "Full Body A",
    focus: "Push Emphasis",
    exercises: &[
        slot("squat", 3, 8, 12, 90).bodyweight("bodyweight-squat"),
        slot("bench-press", 3, 8, 12, 90).bodyweight("push-up"),
        slot("db-row", 3, 8, 12, 60).bodyweight("inverted-row"),
        slot("overhead-press", 3, 8, 12, 60).bodyweight("pike-push-up"),
        slot("plank", 3, 30, 60, 45).note("seconds hold"),
    ],
};

const FULL_BODY_B: TemplateDay = TemplateDay {
    name: "Full Body B",
    focus: "Pull Emphasis",
    exercises: &[
        slot("deadlift", 3, 6, 10, 120).bodyweight("glute-bridge"),
        slot("pull-up", 3, 5, 10, 90),
        slot("db-bench-press", 3, 8, 12, 60).bodyweight("push-up"),
        slot("lunge", 3, 10, 12, 60).bodyweight("walking-lunge"),
        slot("hanging-leg-raise", 3, 8, 15, 60),
    ],
};

const FULL_BODY_C: TemplateDay = TemplateDay {
    name: "Full Body C",
    focus: "Balanced",
    exercises: &[
        slot("goblet-squat", 3, 10, 15, 60).bodyweight("bodyweight-squat"),
        slot("barbell-row", 3, 8, 12, 60).bodyweight("inverted-row"),
        slot("db-shoulder-press", 3, 8, 12, 60).bodyweight("pike-push-up"),
        slot("romanian-deadlift", 3, 8, 12, 60).bodyweight("nordic-curl"),
        slot("russian-twist", 3, 15, 20, 45),
    ],
};

const GENERAL: &[TemplateDay] = &[
    FULL_BODY_A,
    FULL_BODY_B,
    FULL_BODY_C,
    TemplateDay {
        name: "Full Body D",
        ..FULL_BODY_A
    },
    TemplateDay {
        name: "Full Body E",
        ..FULL_BODY_B
    },
    TemplateDay {
        name: "Full Body F",
        ..FULL_BODY_C
    },
];

// Weight loss

const CIRCUIT_A: TemplateDay = TemplateDay {
    name: "Circuit A",
    focus: "Upper Body + Cardio Burn",
    exercises: &[
        slot("bench-press", 3, 10, 15, 30).bodyweight("push-up"),
        slot("burpee", 3, 8, 12, 30),
        slot("barbell-row", 3, 10, 15, 30).bodyweight("inverted-row"),
        slot("mountain-climber", 3, 15, 25, 30),
        slot("overhead-press", 3, 10, 15, 30).bodyweight("pike-push-up"),
        slot("plank", 3, 30, 60, 30).note("seconds hold"),
    ],
};

const CIRCUIT_B: TemplateDay = TemplateDay {
    name: "Circuit B",
    focus: "Lower Body + Cardio Burn",
    exercises: &[
        slot("squat", 3, 12, 20, 30).bodyweight("bodyweight-squat"),
        slot("box-jump", 3, 8, 12, 30),
        slot("lunge", 3, 10, 15, 30).note("each leg"),
        slot("kettlebell-swing", 3, 12, 20, 30).bodyweight("burpee"),
        slot("glute-bridge", 3, 15, 25, 30),
        slot("bicycle-crunch", 3, 15, 25, 30),
    ],
};

const CIRCUIT_C: TemplateDay = TemplateDay {
    name: "Circuit C",
    focus: "Full Body HIIT",
    exercises: &[
        slot("thruster", 4, 8, 12, 30).bodyweight("burpee"),
        slot("pull-up", 3, 5, 10, 45),
        slot("push-up", 3, 12, 20, 30),
        slot("bodyweight-squat", 3, 15, 25, 30),
        slot("mountain-climber", 3, 20, 30, 30),
        slot("russian-twist", 3, 15, 20, 30),
    ],
};

const WEIGHT_LOSS: &[TemplateDay] = &[
    CIRCUIT_A,
    CIRCUIT_B,
    CIRCUIT_C,
    TemplateDay {
        name: "Circuit D",
        ..CIRCUIT_A
    },
    TemplateDay {
        name: "Circuit E",
        ..CIRCUIT_B
    },
    TemplateDay {
        name: "Circuit F",
        ..CIRCUIT_C
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{ExerciseCatalog, Property};

    fn all_pools() -> impl Iterator<Item = &'static [TemplateDay]> {
        Goal::iter().flat_map(|goal| {
            (DaysPerWeek::MIN..=DaysPerWeek::MAX)
                .map(move |days| pool(*goal, DaysPerWeek::new(days).unwrap()))
        })
    }

    #[test]
    fn test_pools_cover_supported_day_counts() {
        for goal in Goal::iter() {
            for days in DaysPerWeek::MIN..=DaysPerWeek::MAX {
                assert!(pool(*goal, DaysPerWeek::new(days).unwrap()).len() >= usize::from(days));
            }
        }
    }

    #[test]
    fn test_template_exercises_in_catalog() {
        let catalog = ExerciseCatalog::builtin();

        for day in all_pools().flatten() {
            assert!(!day.exercises.is_empty(), "{}", day.name);
            for exercise in day.exercises {
                for id in [Some(exercise.exercise), exercise.bodyweight, exercise.advanced]
                    .into_iter()
                    .flatten()
                {
                    assert!(catalog.contains(id), "{id} in {}", day.name);
                }
            }
        }
    }

    #[test]
    fn test_bodyweight_analogues_need_no_barbell() {
        let catalog = ExerciseCatalog::builtin();

        for exercise in all_pools().flatten().flat_map(|d| d.exercises) {
            if let Some(id) = exercise.bodyweight {
                assert!(
                    !matches!(
                        catalog.lookup(id).unwrap().equipment,
                        crate::Equipment::Barbell | crate::Equipment::Machine
                    ),
                    "{id}"
                );
            }
        }
    }

    #[rstest]
    #[case(Goal::Calisthenics)]
    #[case(Goal::Climbing)]
    #[case(Goal::Powerlifting)]
    fn test_no_bodyweight_analogues(#[case] goal: Goal) {
        assert!(
            pool(goal, DaysPerWeek::new(6).unwrap())
                .iter()
                .flat_map(|d| d.exercises)
                .all(|e| e.bodyweight.is_none())
        );
    }

    #[rstest]
    #[case(Level::Beginner, EquipmentProfile::FullGym, "pull-up")]
    #[case(Level::Advanced, EquipmentProfile::FullGym, "muscle-up")]
    #[case(Level::Advanced, EquipmentProfile::Bodyweight, "muscle-up")]
    fn test_template_exercise_resolve_advanced(
        #[case] level: Level,
        #[case] equipment: EquipmentProfile,
        #[case] expected: &str,
    ) {
        assert_eq!(UPPER_BODY.exercises[0].resolve(level, equipment), expected);
    }

    #[rstest]
    #[case(EquipmentProfile::FullGym, "bench-press")]
    #[case(EquipmentProfile::HomeGym, "bench-press")]
    #[case(EquipmentProfile::Bodyweight, "push-up")]
    fn test_template_exercise_resolve_bodyweight(
        #[case] equipment: EquipmentProfile,
        #[case] expected: &str,
    ) {
        assert_eq!(
            PUSH_DAY.exercises[0].resolve(Level::Advanced, equipment),
            expected
        );
    }

    #[test]
    fn test_cycle_days() {
        static SHORT_POOL: &[TemplateDay] = &[
            TemplateDay {
                name: "Upper Body",
                focus: "Upper",
                exercises: &[slot("push-up", 3, 8, 12, 60)],
            },
            TemplateDay {
                name: "Lower Body",
                focus: "Lower",
                exercises: &[slot("squat", 3, 8, 12, 90)],
            },
        ];

        assert_eq!(
            cycle_days(SHORT_POOL, 5)
                .map(|(name, template)| (name, template.focus))
                .collect::<Vec<_>>(),
            vec![
                ("Upper Body".to_string(), "Upper"),
                ("Lower Body".to_string(), "Lower"),
                ("Upper Body 2".to_string(), "Upper"),
                ("Lower Body 2".to_string(), "Lower"),
                ("Upper Body 3".to_string(), "Upper"),
            ]
        );
        assert_eq!(cycle_days(SHORT_POOL, 1).count(), 1);
        assert_eq!(cycle_days(SHORT_POOL, 0).count(), 0);
    }

    #[rstest]
    #[case(EquipmentProfile::FullGym)]
    #[case(EquipmentProfile::Bodyweight)]
    fn test_weight_loss_lunge_kept(#[case] equipment: EquipmentProfile) {
        let lunge = CIRCUIT_B
            .exercises
            .iter()
            .find(|e| e.exercise == "lunge")
            .unwrap();

        assert_eq!(lunge.resolve(Level::Beginner, equipment), "lunge");
    }

    #[test]
    fn test_plan_name() {
        for goal in Goal::iter() {
            let names = Level::iter()
                .map(|level| plan_name(*goal, *level))
                .collect::<std::collections::HashSet<_>>();

            assert_eq!(names.len(), 3);
        }
    }
}
