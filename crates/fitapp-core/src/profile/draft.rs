//! The in-progress onboarding profile and the frozen profile it becomes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use super::field::{AnswerValue, ProfileField};
use super::coerce::capitalize_first;

/// Self-reported training experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Display label, e.g. "Beginner".
    pub fn label(&self) -> String {
        capitalize_first(self.as_str())
    }
}

impl FromStr for FitnessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!("unknown fitness level: {other}")),
        }
    }
}

impl std::fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partially filled profile owned by the questionnaire engine.
///
/// Every field starts at its zero value (empty text, 0, empty set) and is
/// only written through [`ProfileDraft::set`] or [`ProfileDraft::toggle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    id: String,
    name: String,
    age: i64,
    gender: String,
    height: i64,
    weight: i64,
    goal_weight: i64,
    fitness_level: String,
    fitness_goals: BTreeSet<String>,
    preferred_workout_days: BTreeSet<String>,
    workout_duration: i64,
}

impl ProfileDraft {
    /// Start an empty draft with a freshly generated id.
    pub fn new() -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            age: 0,
            gender: String::new(),
            height: 0,
            weight: 0,
            goal_weight: 0,
            fitness_level: String::new(),
            fitness_goals: BTreeSet::new(),
            preferred_workout_days: BTreeSet::new(),
            workout_duration: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current value of `field`.
    pub fn get(&self, field: ProfileField) -> AnswerValue {
        match field {
            ProfileField::Name => AnswerValue::Text(self.name.clone()),
            ProfileField::Gender => AnswerValue::Text(self.gender.clone()),
            ProfileField::FitnessLevel => AnswerValue::Text(self.fitness_level.clone()),
            ProfileField::Age => AnswerValue::Number(self.age),
            ProfileField::Height => AnswerValue::Number(self.height),
            ProfileField::Weight => AnswerValue::Number(self.weight),
            ProfileField::GoalWeight => AnswerValue::Number(self.goal_weight),
            ProfileField::WorkoutDuration => AnswerValue::Number(self.workout_duration),
            ProfileField::FitnessGoals => AnswerValue::Set(self.fitness_goals.clone()),
            ProfileField::PreferredWorkoutDays => {
                AnswerValue::Set(self.preferred_workout_days.clone())
            }
        }
    }

    /// Overwrite `field` with `value`.
    ///
    /// Returns `false` and leaves the draft untouched when the value's kind
    /// does not match the field's kind.
    pub fn set(&mut self, field: ProfileField, value: AnswerValue) -> bool {
        match (field, value) {
            (ProfileField::Name, AnswerValue::Text(v)) => self.name = v,
            (ProfileField::Gender, AnswerValue::Text(v)) => self.gender = v,
            (ProfileField::FitnessLevel, AnswerValue::Text(v)) => self.fitness_level = v,
            (ProfileField::Age, AnswerValue::Number(v)) => self.age = v,
            (ProfileField::Height, AnswerValue::Number(v)) => self.height = v,
            (ProfileField::Weight, AnswerValue::Number(v)) => self.weight = v,
            (ProfileField::GoalWeight, AnswerValue::Number(v)) => self.goal_weight = v,
            (ProfileField::WorkoutDuration, AnswerValue::Number(v)) => self.workout_duration = v,
            (ProfileField::FitnessGoals, AnswerValue::Set(v)) => self.fitness_goals = v,
            (ProfileField::PreferredWorkoutDays, AnswerValue::Set(v)) => {
                self.preferred_workout_days = v
            }
            (field, value) => {
                tracing::warn!(%field, kind = ?value.kind(), "ignoring value of the wrong kind");
                return false;
            }
        }
        true
    }

    /// Flip membership of `option` in a set field.
    ///
    /// Returns whether the option is selected afterwards, or `None` when
    /// `field` is not a set field.
    pub fn toggle(&mut self, field: ProfileField, option: &str) -> Option<bool> {
        let set = match field {
            ProfileField::FitnessGoals => &mut self.fitness_goals,
            ProfileField::PreferredWorkoutDays => &mut self.preferred_workout_days,
            _ => return None,
        };
        if set.remove(option) {
            Some(false)
        } else {
            set.insert(option.to_string());
            Some(true)
        }
    }

    /// Freeze into an immutable [`UserProfile`].
    pub fn freeze(self) -> UserProfile {
        let fitness_level = self.fitness_level.parse().ok();
        UserProfile {
            id: self.id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            height: self.height,
            weight: self.weight as f64,
            goal_weight: self.goal_weight as f64,
            fitness_level,
            fitness_goals: self.fitness_goals,
            preferred_workout_days: self.preferred_workout_days,
            workout_duration: self.workout_duration,
        }
    }
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// A completed user profile.
///
/// Weights are fractional because later weight entries and profile edits
/// accept decimals, even though onboarding collects whole kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub gender: String,
    /// Height in cm.
    pub height: i64,
    /// Current weight in kg.
    pub weight: f64,
    /// Goal weight in kg.
    pub goal_weight: f64,
    pub fitness_level: Option<FitnessLevel>,
    pub fitness_goals: BTreeSet<String>,
    pub preferred_workout_days: BTreeSet<String>,
    /// Minutes per session.
    pub workout_duration: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_has_zero_values_and_an_id() {
        let draft = ProfileDraft::new();
        assert!(!draft.id().is_empty());
        assert_eq!(draft.get(ProfileField::Age), AnswerValue::Number(0));
        assert_eq!(draft.get(ProfileField::Name), AnswerValue::Text(String::new()));
        assert_eq!(
            draft.get(ProfileField::FitnessGoals),
            AnswerValue::Set(BTreeSet::new())
        );
    }

    #[test]
    fn drafts_get_distinct_ids() {
        assert_ne!(ProfileDraft::new().id(), ProfileDraft::new().id());
    }

    #[test]
    fn set_rejects_mismatched_kind() {
        let mut draft = ProfileDraft::with_id("d1");
        assert!(!draft.set(ProfileField::Age, AnswerValue::Text("thirty".into())));
        assert_eq!(draft.get(ProfileField::Age), AnswerValue::Number(0));
        assert!(draft.set(ProfileField::Age, AnswerValue::Number(30)));
        assert_eq!(draft.get(ProfileField::Age), AnswerValue::Number(30));
    }

    #[test]
    fn toggle_only_applies_to_set_fields() {
        let mut draft = ProfileDraft::with_id("d1");
        assert_eq!(draft.toggle(ProfileField::Name, "x"), None);
        assert_eq!(draft.toggle(ProfileField::FitnessGoals, "Muscle gain"), Some(true));
        assert_eq!(draft.toggle(ProfileField::FitnessGoals, "Muscle gain"), Some(false));
        assert_eq!(
            draft.get(ProfileField::FitnessGoals),
            AnswerValue::Set(BTreeSet::new())
        );
    }

    #[test]
    fn freeze_converts_weights_and_level() {
        let mut draft = ProfileDraft::with_id("d1");
        draft.set(ProfileField::Weight, AnswerValue::Number(80));
        draft.set(ProfileField::GoalWeight, AnswerValue::Number(70));
        draft.set(ProfileField::FitnessLevel, AnswerValue::Text("Intermediate".into()));
        let profile = draft.freeze();
        assert_eq!(profile.id, "d1");
        assert_eq!(profile.weight, 80.0);
        assert_eq!(profile.goal_weight, 70.0);
        assert_eq!(profile.fitness_level, Some(FitnessLevel::Intermediate));
    }

    #[test]
    fn freeze_leaves_unknown_level_unset() {
        let profile = ProfileDraft::with_id("d1").freeze();
        assert_eq!(profile.fitness_level, None);
    }

    #[test]
    fn fitness_level_label_is_capitalized() {
        assert_eq!(FitnessLevel::Beginner.label(), "Beginner");
        assert_eq!("ADVANCED".parse::<FitnessLevel>(), Ok(FitnessLevel::Advanced));
    }
}
