use chrono::{DateTime, Utc};

use crate::ExerciseID;

/// A logged training session.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub started_at: DateTime<Utc>,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    /// Total volume of all working sets in kg.
    #[must_use]
    pub fn volume_load(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter(|s| s.is_working())
            .map(WorkoutSet::volume)
            .sum()
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter(|s| s.is_working())
            .count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub exercise_id: ExerciseID,
    pub sets: Vec<WorkoutSet>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutSet {
    pub reps: u32,
    pub weight_kg: f64,
    pub is_warmup: bool,
}

impl WorkoutSet {
    #[must_use]
    pub fn is_working(&self) -> bool {
        !self.is_warmup
    }

    /// Reps times weight. Negative weights count as zero.
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight_kg.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(5, 100.0, 500.0)]
    #[case(10, 0.0, 0.0)]
    #[case(0, 60.0, 0.0)]
    #[case(8, -20.0, 0.0)]
    #[case(3, 22.5, 67.5)]
    fn test_workout_set_volume(#[case] reps: u32, #[case] weight_kg: f64, #[case] expected: f64) {
        assert_approx_eq!(
            WorkoutSet {
                reps,
                weight_kg,
                is_warmup: false
            }
            .volume(),
            expected
        );
    }

    #[test]
    fn test_workout_volume_load() {
        let workout = Workout {
            started_at: Utc.with_ymd_and_hms(2026, 3, 2, 18, 0, 0).unwrap(),
            exercises: vec![
                WorkoutExercise {
                    exercise_id: "squat".into(),
                    sets: vec![
                        WorkoutSet {
                            reps: 10,
                            weight_kg: 60.0,
                            is_warmup: true,
                        },
                        WorkoutSet {
                            reps: 5,
                            weight_kg: 100.0,
                            is_warmup: false,
                        },
                    ],
                },
                WorkoutExercise {
                    exercise_id: "plank".into(),
                    sets: vec![WorkoutSet {
                        reps: 60,
                        weight_kg: 0.0,
                        is_warmup: false,
                    }],
                },
            ],
        };

        assert_approx_eq!(workout.volume_load(), 500.0);
        assert_eq!(workout.num_sets(), 2);
    }
}
