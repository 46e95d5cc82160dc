use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::{ExerciseCatalog, MuscleGroup, Settings, Workout};

/// Training load of a single muscle within the analysis window.
#[derive(Debug, Clone, PartialEq)]
pub struct MuscleLoad {
    pub muscle: MuscleGroup,
    /// Attributed volume in kg.
    pub total_volume: f64,
    pub total_sets: u32,
    /// Share of the total volume of all muscles, rounded to whole percent.
    pub percentage: u32,
    /// Volume relative to the muscle with the highest volume.
    pub intensity: f64,
}

impl MuscleLoad {
    #[must_use]
    pub fn heat(&self) -> Heat {
        Heat::from(self.intensity)
    }
}

/// Coarse intensity band used for heatmap display.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Heat {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl From<f64> for Heat {
    fn from(intensity: f64) -> Self {
        if intensity <= 0.0 {
            Heat::None
        } else if intensity < 0.25 {
            Heat::Low
        } else if intensity < 0.5 {
            Heat::Medium
        } else if intensity < 0.75 {
            Heat::High
        } else {
            Heat::Max
        }
    }
}

/// Per-muscle training load of all workouts started within the last
/// `window_days` days, ordered by volume.
#[must_use]
pub fn aggregate(
    catalog: &ExerciseCatalog,
    workouts: &[Workout],
    window_days: u32,
) -> Vec<MuscleLoad> {
    aggregate_at(catalog, workouts, window_days, Utc::now())
}

/// Per-muscle training load within the analysis window of `settings`.
#[must_use]
pub fn aggregate_with(
    catalog: &ExerciseCatalog,
    workouts: &[Workout],
    settings: &Settings,
) -> Vec<MuscleLoad> {
    aggregate(catalog, workouts, settings.analysis_window_days)
}

/// Per-muscle training load of all workouts started at or after
/// `now - window_days`.
///
/// Every working set credits its full volume to the primary muscles and half
/// of it to the secondary muscles of the exercise. Both count the set once.
/// The result is sorted by descending volume, ties in declaration order of
/// [`MuscleGroup`].
#[must_use]
pub fn aggregate_at(
    catalog: &ExerciseCatalog,
    workouts: &[Workout],
    window_days: u32,
    now: DateTime<Utc>,
) -> Vec<MuscleLoad> {
    let mut totals: BTreeMap<MuscleGroup, (f64, u32)> = BTreeMap::new();

    for workout in workouts
        .iter()
        .filter(|w| in_window(w.started_at, window_days, now))
    {
        for workout_exercise in &workout.exercises {
            let exercise = catalog.exercise_or_placeholder(&workout_exercise.exercise_id);
            for set in workout_exercise.sets.iter().filter(|s| s.is_working()) {
                let volume = set.volume();
                for (muscle, stimulus) in exercise.muscle_stimulus() {
                    let (total_volume, total_sets) = totals.entry(muscle).or_insert((0.0, 0));
                    *total_volume += volume * stimulus.volume_share();
                    *total_sets += 1;
                }
            }
        }
    }

    let max_volume = non_zero(totals.values().map(|(v, _)| *v).fold(0.0, f64::max));
    let sum_volume = non_zero(totals.values().map(|(v, _)| *v).sum());

    let mut loads = totals
        .into_iter()
        .map(|(muscle, (total_volume, total_sets))| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let percentage = (total_volume / sum_volume * 100.0).round() as u32;
            MuscleLoad {
                muscle,
                total_volume,
                total_sets,
                percentage,
                intensity: total_volume / max_volume,
            }
        })
        .collect::<Vec<_>>();
    loads.sort_by(|a, b| b.total_volume.total_cmp(&a.total_volume));
    loads
}

/// Number of workouts within the window per weekday, starting on Monday.
#[must_use]
pub fn workouts_per_weekday(
    workouts: &[Workout],
    window_days: u32,
    now: DateTime<Utc>,
) -> [u32; 7] {
    let mut result = [0; 7];
    for workout in workouts
        .iter()
        .filter(|w| in_window(w.started_at, window_days, now))
    {
        result[workout.started_at.weekday().num_days_from_monday() as usize] += 1;
    }
    result
}

fn in_window(started_at: DateTime<Utc>, window_days: u32, now: DateTime<Utc>) -> bool {
    match now.checked_sub_signed(Duration::days(i64::from(window_days))) {
        Some(cutoff) => started_at >= cutoff,
        None => true,
    }
}

fn non_zero(value: f64) -> f64 {
    if value > 0.0 { value } else { 1.0 }
}
