use std::{cmp::Ordering, slice::Iter};

use crate::{MuscleGroup, MuscleLoad, Property, Settings};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SuggestionCategory {
    Exercise,
    Routine,
    Recovery,
    Nutrition,
}

impl Property for SuggestionCategory {
    fn iter() -> Iter<'static, SuggestionCategory> {
        static CATEGORIES: [SuggestionCategory; 4] = [
            SuggestionCategory::Exercise,
            SuggestionCategory::Routine,
            SuggestionCategory::Recovery,
            SuggestionCategory::Nutrition,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SuggestionCategory::Exercise => "exercise",
            SuggestionCategory::Routine => "routine",
            SuggestionCategory::Recovery => "recovery",
            SuggestionCategory::Nutrition => "nutrition",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Property for Priority {
    fn iter() -> Iter<'static, Priority> {
        static PRIORITIES: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];
        PRIORITIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub category: SuggestionCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub rationale: String,
}

/// Muscles every balanced program is expected to train.
pub const MAJOR_MUSCLES: [MuscleGroup; 13] = [
    MuscleGroup::Chest,
    MuscleGroup::UpperBack,
    MuscleGroup::Lats,
    MuscleGroup::Quads,
    MuscleGroup::Hamstrings,
    MuscleGroup::Glutes,
    MuscleGroup::FrontDelts,
    MuscleGroup::SideDelts,
    MuscleGroup::RearDelts,
    MuscleGroup::Biceps,
    MuscleGroup::Triceps,
    MuscleGroup::Abs,
    MuscleGroup::Calves,
];

const PUSH_MUSCLES: [MuscleGroup; 3] = [
    MuscleGroup::Chest,
    MuscleGroup::FrontDelts,
    MuscleGroup::Triceps,
];

const PULL_MUSCLES: [MuscleGroup; 4] = [
    MuscleGroup::UpperBack,
    MuscleGroup::Lats,
    MuscleGroup::Biceps,
    MuscleGroup::RearDelts,
];

#[must_use]
pub fn recommend(loads: &[MuscleLoad]) -> Vec<Suggestion> {
    recommend_with(loads, &Settings::default())
}

/// Coaching suggestions derived from per-muscle training load.
///
/// Each rule contributes at most one suggestion. The order of the result is
/// the order in which the rules are evaluated.
#[must_use]
pub fn recommend_with(loads: &[MuscleLoad], settings: &Settings) -> Vec<Suggestion> {
    if loads.is_empty() {
        return vec![Suggestion {
            id: "start-logging".to_string(),
            category: SuggestionCategory::Routine,
            title: "Start Logging Workouts".to_string(),
            description: "Begin tracking your workouts to receive personalized suggestions \
                          based on your training patterns."
                .to_string(),
            priority: Priority::High,
            rationale: "No workout data available yet for analysis.".to_string(),
        }];
    }

    [
        neglected_muscles(loads),
        push_pull_imbalance(loads, settings),
        upper_lower_imbalance(loads, settings),
        overtraining(loads, settings),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn neglected_muscles(loads: &[MuscleLoad]) -> Option<Suggestion> {
    let neglected = MAJOR_MUSCLES
        .iter()
        .filter(|m| !loads.iter().any(|l| l.muscle == **m))
        .map(|m| m.name())
        .collect::<Vec<_>>();

    if neglected.is_empty() {
        return None;
    }

    Some(Suggestion {
        id: "neglected".to_string(),
        category: SuggestionCategory::Exercise,
        title: "Neglected Muscle Groups Detected".to_string(),
        description: format!(
            "You haven't trained: {}. Consider adding exercises for these groups to maintain \
             balanced development.",
            neglected.join(", ")
        ),
        priority: Priority::High,
        rationale: "Muscle imbalances can lead to injuries and plateaus in progress.".to_string(),
    })
}

fn push_pull_imbalance(loads: &[MuscleLoad], settings: &Settings) -> Option<Suggestion> {
    let push = volume_of(loads, |m| PUSH_MUSCLES.contains(&m));
    let pull = volume_of(loads, |m| PULL_MUSCLES.contains(&m));

    if push <= pull * settings.push_pull_ratio {
        return None;
    }

    Some(Suggestion {
        id: "push-pull".to_string(),
        category: SuggestionCategory::Routine,
        title: "Push/Pull Imbalance".to_string(),
        description: format!(
            "Your push volume ({push:.0} kg) significantly exceeds pull volume ({pull:.0} kg). \
             Add more rows, pull-ups, and rear delt work."
        ),
        priority: Priority::Medium,
        rationale: "A balanced push-to-pull ratio helps prevent shoulder injuries.".to_string(),
    })
}

fn upper_lower_imbalance(loads: &[MuscleLoad], settings: &Settings) -> Option<Suggestion> {
    let lower = volume_of(loads, MuscleGroup::is_lower_body);
    let upper = volume_of(loads, |m| !m.is_lower_body());

    if upper <= lower * settings.upper_lower_ratio {
        return None;
    }

    Some(Suggestion {
        id: "upper-lower".to_string(),
        category: SuggestionCategory::Exercise,
        title: "Don't Skip Leg Day!".to_string(),
        description: format!(
            "Your upper body volume ({upper:.0} kg) is significantly higher than your lower body \
             volume ({lower:.0} kg). Add squats, deadlifts, and leg presses to your routine."
        ),
        priority: Priority::Medium,
        rationale: "Balanced upper/lower development supports overall strength and athleticism."
            .to_string(),
    })
}

fn overtraining(loads: &[MuscleLoad], settings: &Settings) -> Option<Suggestion> {
    let top = loads.iter().reduce(|top, load| {
        match load.total_volume.total_cmp(&top.total_volume) {
            Ordering::Greater => load,
            Ordering::Equal if load.muscle < top.muscle => load,
            _ => top,
        }
    })?;

    if top.percentage <= settings.dominant_muscle_percentage {
        return None;
    }

    Some(Suggestion {
        id: "overtraining".to_string(),
        category: SuggestionCategory::Recovery,
        title: format!("{} May Be Overtrained", top.muscle),
        description: format!(
            "{} accounts for {}% of your total volume. Consider redistributing volume to other \
             muscle groups.",
            top.muscle, top.percentage
        ),
        priority: Priority::Low,
        rationale: "Excessive volume on one muscle can lead to overtraining and diminishing \
                    returns."
            .to_string(),
    })
}

fn volume_of(loads: &[MuscleLoad], predicate: impl Fn(MuscleGroup) -> bool) -> f64 {
    loads
        .iter()
        .filter(|l| predicate(l.muscle))
        .map(|l| l.total_volume)
        .sum()
}
