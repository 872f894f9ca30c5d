//! Partial profile updates and the edit form that produces them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::coerce::{parse_float_or_zero, parse_int_or_zero};
use super::draft::{FitnessLevel, UserProfile};

/// Shallow patch applied to a stored [`UserProfile`].
///
/// `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_level: Option<FitnessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_goals: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_workout_days: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_duration: Option<i64>,
}

impl ProfileUpdate {
    pub fn weight(weight: f64) -> Self {
        Self {
            weight: Some(weight),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `profile`, overwriting only the fields that are set.
    pub fn apply_to(self, profile: &mut UserProfile) {
        if let Some(v) = self.name {
            profile.name = v;
        }
        if let Some(v) = self.age {
            profile.age = v;
        }
        if let Some(v) = self.gender {
            profile.gender = v;
        }
        if let Some(v) = self.height {
            profile.height = v;
        }
        if let Some(v) = self.weight {
            profile.weight = v;
        }
        if let Some(v) = self.goal_weight {
            profile.goal_weight = v;
        }
        if let Some(v) = self.fitness_level {
            profile.fitness_level = Some(v);
        }
        if let Some(v) = self.fitness_goals {
            profile.fitness_goals = v;
        }
        if let Some(v) = self.preferred_workout_days {
            profile.preferred_workout_days = v;
        }
        if let Some(v) = self.workout_duration {
            profile.workout_duration = v;
        }
    }
}

/// Text buffers behind the profile screen's edit mode.
///
/// Buffers start from the stored profile (or empty when there is none) and
/// are coerced only on save: age and height as integers, weights as
/// decimals, anything unparsable as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEditForm {
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub goal_weight: String,
}

impl ProfileEditForm {
    pub fn from_profile(profile: Option<&UserProfile>) -> Self {
        match profile {
            Some(p) => Self {
                name: p.name.clone(),
                age: p.age.to_string(),
                height: p.height.to_string(),
                weight: p.weight.to_string(),
                goal_weight: p.goal_weight.to_string(),
            },
            None => Self::default(),
        }
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: Some(self.name.clone()),
            age: Some(parse_int_or_zero(&self.age)),
            height: Some(parse_int_or_zero(&self.height)),
            weight: Some(parse_float_or_zero(&self.weight)),
            goal_weight: Some(parse_float_or_zero(&self.goal_weight)),
            ..Default::default()
        }
    }
}
