use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    slice::Iter,
};

use derive_more::{Deref, Display, Into};
use log::warn;
use thiserror::Error;

use crate::{ExerciseCatalog, ExerciseID, MuscleGroup, Property, templates};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Goal {
    Bodybuilding,
    Calisthenics,
    Climbing,
    Powerlifting,
    General,
    WeightLoss,
}

impl Goal {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Goal::Bodybuilding => "bodybuilding",
            Goal::Calisthenics => "calisthenics",
            Goal::Climbing => "climbing",
            Goal::Powerlifting => "powerlifting",
            Goal::General => "general",
            Goal::WeightLoss => "weight_loss",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Goal::Bodybuilding => "Build muscle mass with hypertrophy-focused training",
            Goal::Calisthenics => "Master bodyweight movements and skills",
            Goal::Climbing => "Build grip strength, endurance, and pulling power",
            Goal::Powerlifting => "Maximize strength on squat, bench, and deadlift",
            Goal::General => "Balanced strength, endurance, and flexibility",
            Goal::WeightLoss => "Burn fat with high-intensity circuits and compound lifts",
        }
    }
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 6] = [
            Goal::Bodybuilding,
            Goal::Calisthenics,
            Goal::Climbing,
            Goal::Powerlifting,
            Goal::General,
            Goal::WeightLoss,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Bodybuilding => "Bodybuilding",
            Goal::Calisthenics => "Calisthenics",
            Goal::Climbing => "Rock Climbing",
            Goal::Powerlifting => "Powerlifting",
            Goal::General => "General Fitness",
            Goal::WeightLoss => "Weight Loss",
        }
    }
}

impl TryFrom<&str> for Goal {
    type Error = GoalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Goal::iter()
            .find(|g| g.key() == value)
            .copied()
            .ok_or_else(|| GoalError::Invalid(value.to_string()))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GoalError {
    #[error("Invalid goal: {0}")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    /// Number of sets for a template prescribing `base` sets at intermediate level.
    #[must_use]
    pub fn scale_sets(self, base: u32) -> u32 {
        match self {
            Level::Beginner => base.saturating_sub(1).max(2),
            Level::Intermediate => base,
            Level::Advanced => base + 1,
        }
    }
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVELS: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = LevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Level::iter()
            .find(|l| l.key() == value)
            .copied()
            .ok_or_else(|| LevelError::Invalid(value.to_string()))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum LevelError {
    #[error("Invalid level: {0}")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EquipmentProfile {
    FullGym,
    HomeGym,
    Bodyweight,
}

impl EquipmentProfile {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            EquipmentProfile::FullGym => "full_gym",
            EquipmentProfile::HomeGym => "home_gym",
            EquipmentProfile::Bodyweight => "bodyweight",
        }
    }
}

impl Property for EquipmentProfile {
    fn iter() -> Iter<'static, EquipmentProfile> {
        static PROFILES: [EquipmentProfile; 3] = [
            EquipmentProfile::FullGym,
            EquipmentProfile::HomeGym,
            EquipmentProfile::Bodyweight,
        ];
        PROFILES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            EquipmentProfile::FullGym => "Full Gym",
            EquipmentProfile::HomeGym => "Home Gym",
            EquipmentProfile::Bodyweight => "Bodyweight Only",
        }
    }
}

impl TryFrom<&str> for EquipmentProfile {
    type Error = EquipmentProfileError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        EquipmentProfile::iter()
            .find(|e| e.key() == value)
            .copied()
            .ok_or_else(|| EquipmentProfileError::Invalid(value.to_string()))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EquipmentProfileError {
    #[error("Invalid equipment profile: {0}")]
    Invalid(String),
}

#[derive(Deref, Display, Into, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DaysPerWeek(u8);

impl DaysPerWeek {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Result<Self, DaysPerWeekError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DaysPerWeekError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Nearest supported day count.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(u8::try_from(clamped).unwrap_or(Self::MIN))
    }
}

impl Default for DaysPerWeek {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum DaysPerWeekError {
    #[error("Days per week must be in the range 3 to 6")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub goal: Goal,
    pub level: Level,
    pub equipment: EquipmentProfile,
    pub days_per_week: DaysPerWeek,
}

impl SynthesisRequest {
    #[must_use]
    pub fn new(
        goal: Goal,
        level: Level,
        equipment: EquipmentProfile,
        days_per_week: DaysPerWeek,
    ) -> Self {
        Self {
            goal,
            level,
            equipment,
            days_per_week,
        }
    }

    /// Builds a request from untrusted input, replacing anything unrecognized
    /// by the nearest safe default.
    #[must_use]
    pub fn lenient(goal: &str, level: &str, equipment: &str, days_per_week: i64) -> Self {
        let goal = Goal::try_from(goal).unwrap_or_else(|err| {
            warn!("{err}, falling back to {}", Goal::General.key());
            Goal::General
        });
        let level = Level::try_from(level).unwrap_or_else(|err| {
            warn!("{err}, falling back to {}", Level::Beginner.key());
            Level::Beginner
        });
        let equipment = EquipmentProfile::try_from(equipment).unwrap_or_else(|err| {
            warn!("{err}, falling back to {}", EquipmentProfile::Bodyweight.key());
            EquipmentProfile::Bodyweight
        });
        let days = DaysPerWeek::clamped(days_per_week);
        if i64::from(*days) != days_per_week {
            warn!("unsupported number of days per week {days_per_week}, using {days}");
        }
        Self::new(goal, level, equipment, days)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepRange {
    min: u32,
    max: u32,
}

impl RepRange {
    pub const fn new(min: u32, max: u32) -> Result<Self, RepRangeError> {
        if min > max {
            return Err(RepRangeError::MinGreaterThanMax);
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RepRangeError {
    #[error("Minimum reps must not exceed maximum reps")]
    MinGreaterThanMax,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPrescription {
    pub exercise_id: ExerciseID,
    pub sets: u32,
    pub reps: RepRange,
    pub rest_seconds: u32,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingDay {
    pub name: String,
    pub focus: String,
    pub prescriptions: Vec<TrainingPrescription>,
}

impl TrainingDay {
    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.prescriptions.iter().map(|p| p.sets).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutinePlan {
    pub name: String,
    pub description: String,
    pub goal: Goal,
    pub level: Level,
    pub days_per_week: DaysPerWeek,
    pub days: Vec<TrainingDay>,
}

impl RoutinePlan {
    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.days.iter().map(TrainingDay::num_sets).sum()
    }

    #[must_use]
    pub fn exercises(&self) -> BTreeSet<&ExerciseID> {
        self.days
            .iter()
            .flat_map(|d| d.prescriptions.iter().map(|p| &p.exercise_id))
            .collect()
    }

    /// Planned weekly sets per muscle, counting primary and secondary muscles alike.
    #[must_use]
    pub fn sets_per_muscle(&self, catalog: &ExerciseCatalog) -> BTreeMap<MuscleGroup, u32> {
        let mut result = BTreeMap::new();
        for prescription in self.days.iter().flat_map(|d| &d.prescriptions) {
            let exercise = catalog.exercise_or_placeholder(&prescription.exercise_id);
            for (muscle, _) in exercise.muscle_stimulus() {
                *result.entry(muscle).or_insert(0) += prescription.sets;
            }
        }
        result
    }
}

/// Generates the weekly plan for a request.
///
/// The result always has exactly as many days as requested. Template pools
/// shorter than the requested day count are repeated with a numeric suffix
/// ("Push Day 2").
#[must_use]
pub fn synthesize(request: &SynthesisRequest) -> RoutinePlan {
    let SynthesisRequest {
        goal,
        level,
        equipment,
        days_per_week,
    } = *request;
    let pool = templates::pool(goal, days_per_week);

    let days = templates::cycle_days(pool, usize::from(*days_per_week))
        .map(|(name, template)| TrainingDay {
            name,
            focus: template.focus.to_string(),
            prescriptions: template
                .exercises
                .iter()
                .map(|slot| TrainingPrescription {
                    exercise_id: ExerciseID::new(slot.resolve(level, equipment)),
                    sets: level.scale_sets(slot.sets),
                    reps: slot.reps,
                    rest_seconds: slot.rest_seconds,
                    note: slot.note.map(str::to_string),
                })
                .collect(),
        })
        .collect();

    RoutinePlan {
        name: templates::plan_name(goal, level).to_string(),
        description: templates::plan_description(goal, level, days_per_week),
        goal,
        level,
        days_per_week,
        days,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn all_requests() -> impl Iterator<Item = SynthesisRequest> {
        Goal::iter().flat_map(|goal| {
            Level::iter().flat_map(move |level| {
                EquipmentProfile::iter().flat_map(move |equipment| {
                    (DaysPerWeek::MIN..=DaysPerWeek::MAX).map(move |days| {
                        SynthesisRequest::new(
                            *goal,
                            *level,
                            *equipment,
                            DaysPerWeek::new(days).unwrap(),
                        )
                    })
                })
            })
        })
    }

    #[test]
    fn test_synthesize_day_count() {
        let catalog = ExerciseCatalog::builtin();

        for request in all_requests() {
            let plan = synthesize(&request);

            assert_eq!(plan.days.len(), usize::from(*request.days_per_week));
            assert_eq!(plan.days_per_week, request.days_per_week);
            assert_eq!(plan.goal, request.goal);
            assert_eq!(plan.level, request.level);
            for day in &plan.days {
                assert!(!day.prescriptions.is_empty(), "{}", day.name);
                for prescription in &day.prescriptions {
                    assert!(
                        catalog.contains(&prescription.exercise_id),
                        "{}",
                        prescription.exercise_id
                    );
                    assert!(prescription.sets >= 1);
                    assert!(prescription.reps.min() <= prescription.reps.max());
                }
            }
        }
    }

    #[test]
    fn test_synthesize_unique_day_names() {
        for request in all_requests() {
            let plan = synthesize(&request);
            let names = plan.days.iter().map(|d| &d.name).collect::<BTreeSet<_>>();

            assert_eq!(names.len(), plan.days.len());
        }
    }

    #[test]
    fn test_synthesize_deterministic() {
        for request in all_requests() {
            assert_eq!(synthesize(&request), synthesize(&request));
        }
    }

    #[test]
    fn test_synthesize_set_monotonicity() {
        for request in all_requests().filter(|r| r.level == Level::Intermediate) {
            let plans = Level::iter()
                .map(|level| synthesize(&SynthesisRequest { level: *level, ..request }))
                .collect::<Vec<_>>();

            for pair in plans.windows(2) {
                for (lower, higher) in pair[0].days.iter().zip(&pair[1].days) {
                    assert_eq!(lower.prescriptions.len(), higher.prescriptions.len());
                    for (l, h) in lower.prescriptions.iter().zip(&higher.prescriptions) {
                        assert!(l.sets <= h.sets);
                        assert_eq!(l.reps, h.reps);
                        assert_eq!(l.rest_seconds, h.rest_seconds);
                    }
                }
            }
        }
    }

    #[test]
    fn test_synthesize_powerlifting() {
        let plan = synthesize(&SynthesisRequest::new(
            Goal::Powerlifting,
            Level::Intermediate,
            EquipmentProfile::FullGym,
            DaysPerWeek::new(4).unwrap(),
        ));

        assert_eq!(plan.name, "Intermediate Powerlifting");
        assert_eq!(
            plan.days.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            vec!["Squat Day", "Bench Day", "Deadlift Day", "Accessory Day"]
        );
        for lift in ["squat", "bench-press", "deadlift"] {
            let day = plan
                .days
                .iter()
                .find(|d| d.prescriptions[0].exercise_id.as_str() == lift)
                .unwrap();
            assert_eq!(day.prescriptions[0].sets, 5);
            assert!(day.prescriptions[0].reps.max() <= 5);
        }
    }

    #[rstest]
    #[case(3, &["Push Day", "Pull Day", "Leg Day"])]
    #[case(4, &["Upper Push", "Pull Day", "Leg Day", "Shoulders & Arms"])]
    #[case(5, &["Chest", "Back", "Shoulders", "Leg Day", "Arms"])]
    #[case(6, &["Chest", "Back", "Shoulders", "Leg Day", "Arms", "Core & Conditioning"])]
    fn test_synthesize_bodybuilding_days(#[case] days: u8, #[case] expected: &[&str]) {
        let plan = synthesize(&SynthesisRequest::new(
            Goal::Bodybuilding,
            Level::Intermediate,
            EquipmentProfile::FullGym,
            DaysPerWeek::new(days).unwrap(),
        ));

        assert_eq!(
            plan.days.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            expected
        );
        assert_eq!(
            plan.description,
            format!(
                "A {days}-day intermediate bodybuilding program focused on progressive overload \
                 and muscle hypertrophy."
            )
        );
    }

    #[test]
    fn test_synthesize_bodyweight_substitution() {
        let request = SynthesisRequest::new(
            Goal::Bodybuilding,
            Level::Beginner,
            EquipmentProfile::Bodyweight,
            DaysPerWeek::new(3).unwrap(),
        );
        let plan = synthesize(&request);
        let push_day = &plan.days[0];

        assert_eq!(plan.name, "Foundation Split");
        assert_eq!(push_day.prescriptions[0].exercise_id.as_str(), "push-up");
        assert_eq!(push_day.prescriptions[0].sets, 3);
        assert_eq!(push_day.prescriptions[0].reps, RepRange::new(6, 10).unwrap());
        assert_eq!(push_day.prescriptions[0].rest_seconds, 90);
        assert!(
            plan.exercises()
                .iter()
                .all(|id| ExerciseCatalog::builtin().lookup(id).unwrap().equipment
                    != crate::Equipment::Barbell)
        );
    }

    #[test]
    fn test_synthesize_home_gym_equals_full_gym() {
        for request in all_requests().filter(|r| r.equipment == EquipmentProfile::FullGym) {
            assert_eq!(
                synthesize(&request),
                synthesize(&SynthesisRequest {
                    equipment: EquipmentProfile::HomeGym,
                    ..request
                })
            );
        }
    }

    #[test]
    fn test_synthesize_advanced_calisthenics() {
        let plan = synthesize(&SynthesisRequest::new(
            Goal::Calisthenics,
            Level::Advanced,
            EquipmentProfile::Bodyweight,
            DaysPerWeek::new(6).unwrap(),
        ));

        assert_eq!(plan.name, "Advanced Calisthenics");
        assert!(plan.description.ends_with("with advanced static holds."));
        assert_eq!(plan.days[0].prescriptions[0].exercise_id.as_str(), "muscle-up");
        assert_eq!(plan.days[0].prescriptions[0].sets, 5);
        assert_eq!(plan.days[3].name, "Upper Body 2");
        assert_eq!(plan.days[3].prescriptions, plan.days[0].prescriptions);
        assert_eq!(
            plan.days[2].prescriptions[0].note.as_deref(),
            Some("seconds hold or tuck progressions")
        );
    }

    #[test]
    fn test_synthesize_lenient() {
        let plan = synthesize(&SynthesisRequest::lenient("yoga", "expert", "garage", 9));

        assert_eq!(plan.goal, Goal::General);
        assert_eq!(plan.level, Level::Beginner);
        assert_eq!(plan.days.len(), 6);
        assert_eq!(plan.name, "Starter Fitness");
        assert_eq!(plan.days[0].prescriptions[0].exercise_id.as_str(), "bodyweight-squat");
    }

    #[test]
    fn test_routine_plan_sets() {
        let plan = synthesize(&SynthesisRequest::new(
            Goal::General,
            Level::Intermediate,
            EquipmentProfile::FullGym,
            DaysPerWeek::new(3).unwrap(),
        ));
        let sets_per_muscle = plan.sets_per_muscle(ExerciseCatalog::builtin());

        assert_eq!(plan.num_sets(), 45);
        assert_eq!(plan.days[0].num_sets(), 15);
        assert!(plan.exercises().contains(&ExerciseID::from("squat")));
        assert_eq!(sets_per_muscle.get(&MuscleGroup::Neck), None);
        // squat, deadlift, lunge, goblet squat, romanian deadlift
        assert_eq!(sets_per_muscle[&MuscleGroup::Glutes], 15);
    }

    #[rstest]
    #[case(Level::Beginner, 4, 3)]
    #[case(Level::Beginner, 3, 2)]
    #[case(Level::Beginner, 2, 2)]
    #[case(Level::Intermediate, 4, 4)]
    #[case(Level::Advanced, 4, 5)]
    fn test_level_scale_sets(#[case] level: Level, #[case] base: u32, #[case] expected: u32) {
        assert_eq!(level.scale_sets(base), expected);
    }

    #[rstest]
    #[case(0, 3)]
    #[case(3, 3)]
    #[case(5, 5)]
    #[case(7, 6)]
    #[case(-4, 3)]
    fn test_days_per_week_clamped(#[case] value: i64, #[case] expected: u8) {
        assert_eq!(DaysPerWeek::clamped(value), DaysPerWeek::new(expected).unwrap());
    }

    #[rstest]
    #[case(2, Err(DaysPerWeekError::OutOfRange))]
    #[case(3, Ok(DaysPerWeek(3)))]
    #[case(6, Ok(DaysPerWeek(6)))]
    #[case(7, Err(DaysPerWeekError::OutOfRange))]
    fn test_days_per_week_new(
        #[case] value: u8,
        #[case] expected: Result<DaysPerWeek, DaysPerWeekError>,
    ) {
        assert_eq!(DaysPerWeek::new(value), expected);
    }

    #[test]
    fn test_property_keys() {
        for goal in Goal::iter() {
            assert_eq!(Goal::try_from(goal.key()), Ok(*goal));
            assert!(!goal.description().is_empty());
        }
        for level in Level::iter() {
            assert_eq!(Level::try_from(level.key()), Ok(*level));
        }
        for equipment in EquipmentProfile::iter() {
            assert_eq!(EquipmentProfile::try_from(equipment.key()), Ok(*equipment));
        }
        assert_eq!(
            Goal::try_from("Bodybuilding"),
            Err(GoalError::Invalid("Bodybuilding".to_string()))
        );
    }

    #[rstest]
    #[case(6, 10, Ok("6-10"))]
    #[case(5, 5, Ok("5"))]
    #[case(10, 6, Err(RepRangeError::MinGreaterThanMax))]
    fn test_rep_range(
        #[case] min: u32,
        #[case] max: u32,
        #[case] expected: Result<&str, RepRangeError>,
    ) {
        assert_eq!(RepRange::new(min, max).map(|r| r.to_string()), expected.map(str::to_string));
    }
}
