use std::{
    collections::BTreeMap,
    sync::{Mutex, PoisonError},
};

use liftlab_domain::{
    ExerciseID, PersonalRecord, PersonalRecordRepository, ReadError, UpdateError, UserID,
};

/// Personal records kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    personal_records: Mutex<BTreeMap<(UserID, ExerciseID), PersonalRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.personal_records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PersonalRecordRepository for MemoryStore {
    async fn read_personal_record(
        &self,
        user_id: UserID,
        exercise_id: &ExerciseID,
    ) -> Result<Option<PersonalRecord>, ReadError> {
        Ok(self
            .personal_records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(user_id, exercise_id.clone()))
            .cloned())
    }

    async fn read_personal_records(
        &self,
        user_id: UserID,
    ) -> Result<Vec<PersonalRecord>, ReadError> {
        Ok(self
            .personal_records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn write_personal_record(
        &self,
        record: PersonalRecord,
        previous: Option<&PersonalRecord>,
    ) -> Result<PersonalRecord, UpdateError> {
        let mut personal_records = self
            .personal_records
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let key = (record.user_id, record.exercise_id.clone());
        if personal_records.get(&key) != previous {
            return Err(UpdateError::Conflict);
        }
        personal_records.insert(key, record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use liftlab_domain::{PersonalRecordTracker, Workout, WorkoutExercise, WorkoutSet};
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, hour, 0, 0).unwrap()
    }

    fn record(user_id: u128, exercise_id: &str, weight_kg: f64, hour: u32) -> PersonalRecord {
        PersonalRecord {
            user_id: user_id.into(),
            exercise_id: exercise_id.into(),
            best_weight_kg: weight_kg,
            best_reps: 1,
            estimated_one_rep_max: liftlab_domain::estimated_one_rep_max(weight_kg, 1),
            achieved_at: at(hour),
        }
    }

    #[tokio::test]
    async fn test_write_personal_record_insert() {
        let store = MemoryStore::new();

        assert_eq!(
            store
                .write_personal_record(record(1, "squat", 100.0, 8), None)
                .await
                .unwrap(),
            record(1, "squat", 100.0, 8)
        );
        assert_eq!(
            store
                .read_personal_record(1.into(), &"squat".into())
                .await
                .unwrap(),
            Some(record(1, "squat", 100.0, 8))
        );
        assert_eq!(
            store
                .read_personal_record(2.into(), &"squat".into())
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_write_personal_record_compare_and_set() {
        let store = MemoryStore::new();
        let first = record(1, "squat", 100.0, 8);
        let second = record(1, "squat", 110.0, 9);
        store.write_personal_record(first.clone(), None).await.unwrap();

        assert!(matches!(
            store.write_personal_record(second.clone(), None).await,
            Err(UpdateError::Conflict)
        ));
        assert!(matches!(
            store
                .write_personal_record(record(1, "squat", 120.0, 10), Some(&second))
                .await,
            Err(UpdateError::Conflict)
        ));
        assert_eq!(
            store
                .write_personal_record(second.clone(), Some(&first))
                .await
                .unwrap(),
            second
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_read_personal_records() {
        let store = MemoryStore::new();
        for r in [
            record(1, "squat", 100.0, 8),
            record(2, "squat", 80.0, 9),
            record(1, "deadlift", 140.0, 10),
        ] {
            store.write_personal_record(r, None).await.unwrap();
        }

        assert_eq!(
            store.read_personal_records(1.into()).await.unwrap(),
            vec![
                record(1, "deadlift", 140.0, 10),
                record(1, "squat", 100.0, 8),
            ]
        );
        assert_eq!(store.read_personal_records(3.into()).await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_tracker_with_memory_store() {
        let tracker = PersonalRecordTracker::new(MemoryStore::new());
        let workout = Workout {
            started_at: at(7),
            exercises: vec![WorkoutExercise {
                exercise_id: "bench-press".into(),
                sets: vec![
                    WorkoutSet {
                        reps: 10,
                        weight_kg: 40.0,
                        is_warmup: true,
                    },
                    WorkoutSet {
                        reps: 5,
                        weight_kg: 80.0,
                        is_warmup: false,
                    },
                ],
            }],
        };

        let records = tracker
            .record_workout(1.into(), &workout, at(8))
            .await
            .unwrap();
        let repeated = tracker
            .record_workout(1.into(), &workout, at(9))
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].best_weight_kg, 80.0);
        assert_eq!(records[0].best_reps, 5);
        assert_eq!(repeated, vec![]);
        assert_eq!(tracker.repository().len(), 1);
    }
}
