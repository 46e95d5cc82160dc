use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use log::{debug, error, warn};

use crate::{ExerciseID, ReadError, StorageError, UpdateError, UserID, Workout, WorkoutSet};

#[allow(async_fn_in_trait)]
pub trait PersonalRecordRepository {
    async fn read_personal_record(
        &self,
        user_id: UserID,
        exercise_id: &ExerciseID,
    ) -> Result<Option<PersonalRecord>, ReadError>;
    async fn read_personal_records(&self, user_id: UserID)
    -> Result<Vec<PersonalRecord>, ReadError>;
    /// Stores `record` if the stored record of the same user and exercise is
    /// equal to `previous`, and fails with [`UpdateError::Conflict`] otherwise.
    async fn write_personal_record(
        &self,
        record: PersonalRecord,
        previous: Option<&PersonalRecord>,
    ) -> Result<PersonalRecord, UpdateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalRecord {
    pub user_id: UserID,
    pub exercise_id: ExerciseID,
    pub best_weight_kg: f64,
    pub best_reps: u32,
    pub estimated_one_rep_max: f64,
    pub achieved_at: DateTime<Utc>,
}

/// One-rep max estimated by the Epley formula, rounded to one decimal.
#[must_use]
pub fn estimated_one_rep_max(weight_kg: f64, reps: u32) -> f64 {
    (weight_kg * (1.0 + f64::from(reps) / 30.0) * 10.0).round() / 10.0
}

/// Whether a set is taken into account for personal records at all.
#[must_use]
pub fn qualifies_for_personal_record(set: &WorkoutSet) -> bool {
    !set.is_warmup && set.reps > 0 && set.weight_kg > 0.0
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

type Key = (UserID, ExerciseID);

/// Keeps the best set per user and exercise.
///
/// Updates of the same user and exercise are serialized. A write that
/// nevertheless conflicts with a concurrent writer is re-evaluated against
/// the newly stored record.
pub struct PersonalRecordTracker<R> {
    repository: R,
    locks: Mutex<HashMap<Key, Arc<futures_util::lock::Mutex<()>>>>,
}

impl<R: PersonalRecordRepository> PersonalRecordTracker<R> {
    const MAX_RETRIES: u32 = 3;

    pub fn new(repository: R) -> Self {
        Self {
            repository,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the new record if the set strictly improves the estimated
    /// one-rep max of the user for this exercise.
    pub async fn record_set_if_pr(
        &self,
        user_id: UserID,
        exercise_id: &ExerciseID,
        set: &WorkoutSet,
        achieved_at: DateTime<Utc>,
    ) -> Result<Option<PersonalRecord>, UpdateError> {
        if !qualifies_for_personal_record(set) {
            return Ok(None);
        }

        let key = (user_id, exercise_id.clone());
        let lock = self.lock(&key);
        let result = {
            let _guard = lock.lock().await;
            self.update(user_id, exercise_id, set, achieved_at).await
        };
        drop(lock);
        self.release_locks();
        result
    }

    /// Evaluates all working sets of a completed workout.
    ///
    /// Different exercises are evaluated concurrently, the sets of an exercise
    /// in the order they were performed. Returns the final record of every
    /// exercise that was improved.
    pub async fn record_workout(
        &self,
        user_id: UserID,
        workout: &Workout,
        completed_at: DateTime<Utc>,
    ) -> Result<Vec<PersonalRecord>, UpdateError> {
        let mut sets_per_exercise: Vec<(&ExerciseID, Vec<&WorkoutSet>)> = vec![];
        for workout_exercise in &workout.exercises {
            let sets = workout_exercise.sets.iter();
            if let Some(i) = sets_per_exercise
                .iter()
                .position(|(id, _)| **id == workout_exercise.exercise_id)
            {
                sets_per_exercise[i].1.extend(sets);
            } else {
                sets_per_exercise.push((&workout_exercise.exercise_id, sets.collect()));
            }
        }

        let records = try_join_all(sets_per_exercise.into_iter().map(
            |(exercise_id, sets)| async move {
                let mut best = None;
                for set in sets {
                    if let Some(record) = self
                        .record_set_if_pr(user_id, exercise_id, set, completed_at)
                        .await?
                    {
                        best = Some(record);
                    }
                }
                Ok::<_, UpdateError>(best)
            },
        ))
        .await?;

        Ok(records.into_iter().flatten().collect())
    }

    /// All records of a user, newest first.
    pub async fn personal_records(
        &self,
        user_id: UserID,
    ) -> Result<Vec<PersonalRecord>, ReadError> {
        let mut records = log_on_error!(
            self.repository.read_personal_records(user_id),
            ReadError,
            "get",
            "personal records"
        )?;
        records.sort_by(|a, b| b.achieved_at.cmp(&a.achieved_at));
        Ok(records)
    }

    async fn update(
        &self,
        user_id: UserID,
        exercise_id: &ExerciseID,
        set: &WorkoutSet,
        achieved_at: DateTime<Utc>,
    ) -> Result<Option<PersonalRecord>, UpdateError> {
        let estimated_one_rep_max = estimated_one_rep_max(set.weight_kg, set.reps);

        for _ in 0..=Self::MAX_RETRIES {
            let stored = log_on_error!(
                self.repository.read_personal_record(user_id, exercise_id),
                ReadError,
                "get",
                "personal record"
            )?;

            if stored
                .as_ref()
                .is_some_and(|r| r.estimated_one_rep_max >= estimated_one_rep_max)
            {
                return Ok(None);
            }

            let record = PersonalRecord {
                user_id,
                exercise_id: exercise_id.clone(),
                best_weight_kg: set.weight_kg,
                best_reps: set.reps,
                estimated_one_rep_max,
                achieved_at,
            };

            match self
                .repository
                .write_personal_record(record, stored.as_ref())
                .await
            {
                Ok(record) => return Ok(Some(record)),
                Err(UpdateError::Conflict) => {
                    debug!("conflicting update of personal record for {exercise_id}, retrying");
                }
                Err(err) => {
                    if matches!(err, UpdateError::Storage(StorageError::NoConnection)) {
                        debug!("failed to update personal record: {err}");
                    } else {
                        error!("failed to update personal record: {err}");
                    }
                    return Err(err);
                }
            }
        }

        warn!(
            "giving up update of personal record for {exercise_id} after {} conflicts",
            Self::MAX_RETRIES + 1
        );
        Ok(None)
    }

    fn lock(&self, key: &Key) -> Arc<futures_util::lock::Mutex<()>> {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key.clone())
            .or_default()
            .clone()
    }

    fn release_locks(&self) {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|_, lock| Arc::strong_count(lock) > 1);
    }
}
