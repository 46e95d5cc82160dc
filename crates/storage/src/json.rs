//! Wire format of the data exchanged with collaborators.

use chrono::{DateTime, Utc};
use liftlab_domain::{self as domain, Property};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::Error;

pub fn parse_workouts(json: &str) -> Result<Vec<domain::Workout>, Error> {
    Ok(serde_json::from_str::<Vec<Workout>>(json)?
        .into_iter()
        .map(domain::Workout::from)
        .collect())
}

/// Parses a synthesis request. Unknown or missing values are replaced by
/// their defaults, only input that is not a well-typed JSON object is
/// rejected.
pub fn parse_synthesis_request(json: &str) -> Result<domain::SynthesisRequest, Error> {
    Ok(from_object::<SynthesisRequest>(json)?.into())
}

/// Deserializes a JSON object. Other values are rejected even if `T` could be
/// built from them, e.g. an empty array for a struct with defaults.
pub(crate) fn from_object<T: DeserializeOwned>(json: &str) -> Result<T, Error> {
    let object = serde_json::from_str::<Map<String, Value>>(json)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
}

impl From<domain::Workout> for Workout {
    fn from(value: domain::Workout) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            started_at: value.started_at,
            exercises: value.exercises.iter().map(WorkoutExercise::from).collect(),
        }
    }
}

impl From<Workout> for domain::Workout {
    fn from(value: Workout) -> Self {
        Self {
            started_at: value.started_at,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::from)
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub exercise_id: String,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl From<&domain::WorkoutExercise> for WorkoutExercise {
    fn from(value: &domain::WorkoutExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.to_string(),
            sets: value.sets.iter().map(WorkoutSet::from).collect(),
        }
    }
}

impl From<WorkoutExercise> for domain::WorkoutExercise {
    fn from(value: WorkoutExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.into(),
            sets: value.sets.into_iter().map(domain::WorkoutSet::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    pub reps: i64,
    pub weight_kg: f64,
    #[serde(default)]
    pub is_warmup: bool,
}

impl From<&domain::WorkoutSet> for WorkoutSet {
    fn from(value: &domain::WorkoutSet) -> Self {
        Self {
            reps: i64::from(value.reps),
            weight_kg: value.weight_kg,
            is_warmup: value.is_warmup,
        }
    }
}

impl From<WorkoutSet> for domain::WorkoutSet {
    fn from(value: WorkoutSet) -> Self {
        Self {
            reps: u32::try_from(value.reps.max(0)).unwrap_or(u32::MAX),
            weight_kg: value.weight_kg,
            is_warmup: value.is_warmup,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthesisRequest {
    pub goal: String,
    pub level: String,
    pub equipment_profile: String,
    pub days_per_week: i64,
}

impl Default for SynthesisRequest {
    fn default() -> Self {
        Self::from(&domain::SynthesisRequest::new(
            domain::Goal::General,
            domain::Level::Beginner,
            domain::EquipmentProfile::Bodyweight,
            domain::DaysPerWeek::default(),
        ))
    }
}

impl From<&domain::SynthesisRequest> for SynthesisRequest {
    fn from(value: &domain::SynthesisRequest) -> Self {
        Self {
            goal: value.goal.key().to_string(),
            level: value.level.key().to_string(),
            equipment_profile: value.equipment.key().to_string(),
            days_per_week: i64::from(*value.days_per_week),
        }
    }
}

impl From<SynthesisRequest> for domain::SynthesisRequest {
    fn from(value: SynthesisRequest) -> Self {
        Self::lenient(
            &value.goal,
            &value.level,
            &value.equipment_profile,
            value.days_per_week,
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoutinePlan {
    pub name: String,
    pub description: String,
    pub goal: String,
    pub level: String,
    pub days_per_week: u8,
    pub days: Vec<TrainingDay>,
}

impl From<domain::RoutinePlan> for RoutinePlan {
    fn from(value: domain::RoutinePlan) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::RoutinePlan> for RoutinePlan {
    fn from(value: &domain::RoutinePlan) -> Self {
        Self {
            name: value.name.clone(),
            description: value.description.clone(),
            goal: value.goal.key().to_string(),
            level: value.level.key().to_string(),
            days_per_week: *value.days_per_week,
            days: value.days.iter().map(TrainingDay::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDay {
    pub name: String,
    pub focus: String,
    pub prescriptions: Vec<TrainingPrescription>,
}

impl From<&domain::TrainingDay> for TrainingDay {
    fn from(value: &domain::TrainingDay) -> Self {
        Self {
            name: value.name.clone(),
            focus: value.focus.clone(),
            prescriptions: value
                .prescriptions
                .iter()
                .map(TrainingPrescription::from)
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPrescription {
    pub exercise_id: String,
    pub sets: u32,
    pub rep_min: u32,
    pub rep_max: u32,
    pub rest_seconds: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<&domain::TrainingPrescription> for TrainingPrescription {
    fn from(value: &domain::TrainingPrescription) -> Self {
        Self {
            exercise_id: value.exercise_id.to_string(),
            sets: value.sets,
            rep_min: value.reps.min(),
            rep_max: value.reps.max(),
            rest_seconds: value.rest_seconds,
            note: value.note.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MuscleLoad {
    pub muscle: String,
    pub name: String,
    pub total_volume: f64,
    pub total_sets: u32,
    pub percentage: u32,
    pub intensity: f64,
}

impl From<domain::MuscleLoad> for MuscleLoad {
    fn from(value: domain::MuscleLoad) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::MuscleLoad> for MuscleLoad {
    fn from(value: &domain::MuscleLoad) -> Self {
        Self {
            muscle: value.muscle.key().to_string(),
            name: value.muscle.name().to_string(),
            total_volume: value.total_volume,
            total_sets: value.total_sets,
            percentage: value.percentage,
            intensity: value.intensity,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub rationale: String,
}

impl From<domain::Suggestion> for Suggestion {
    fn from(value: domain::Suggestion) -> Self {
        Self {
            id: value.id,
            category: value.category.name().to_string(),
            title: value.title,
            description: value.description,
            priority: value.priority.name().to_string(),
            rationale: value.rationale,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    pub user_id: Uuid,
    pub exercise_id: String,
    pub best_weight_kg: f64,
    pub best_reps: u32,
    pub estimated_one_rep_max: f64,
    pub achieved_at: DateTime<Utc>,
}

impl From<domain::PersonalRecord> for PersonalRecord {
    fn from(value: domain::PersonalRecord) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::PersonalRecord> for PersonalRecord {
    fn from(value: &domain::PersonalRecord) -> Self {
        Self {
            user_id: *value.user_id,
            exercise_id: value.exercise_id.to_string(),
            best_weight_kg: value.best_weight_kg,
            best_reps: value.best_reps,
            estimated_one_rep_max: value.estimated_one_rep_max,
            achieved_at: value.achieved_at,
        }
    }
}

impl From<PersonalRecord> for domain::PersonalRecord {
    fn from(value: PersonalRecord) -> Self {
        Self {
            user_id: value.user_id.into(),
            exercise_id: value.exercise_id.into(),
            best_weight_kg: value.best_weight_kg,
            best_reps: value.best_reps,
            estimated_one_rep_max: value.estimated_one_rep_max,
            achieved_at: value.achieved_at,
        }
    }
}

/// Result of submitting a set, `updated` is null if no record was improved.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PersonalRecordUpdate {
    pub updated: Option<PersonalRecord>,
}

impl From<Option<domain::PersonalRecord>> for PersonalRecordUpdate {
    fn from(value: Option<domain::PersonalRecord>) -> Self {
        Self {
            updated: value.map(PersonalRecord::from),
        }
    }
}
