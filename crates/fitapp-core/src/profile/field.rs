use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Profile fields a question may populate.
///
/// The draft id is generated, never answered, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Age,
    Gender,
    Height,
    Weight,
    GoalWeight,
    FitnessLevel,
    FitnessGoals,
    PreferredWorkoutDays,
    WorkoutDuration,
}

/// Shape of the value a field stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Set,
}

impl ProfileField {
    pub const ALL: [ProfileField; 10] = [
        ProfileField::Name,
        ProfileField::Age,
        ProfileField::Gender,
        ProfileField::Height,
        ProfileField::Weight,
        ProfileField::GoalWeight,
        ProfileField::FitnessLevel,
        ProfileField::FitnessGoals,
        ProfileField::PreferredWorkoutDays,
        ProfileField::WorkoutDuration,
    ];

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name | Self::Gender | Self::FitnessLevel => FieldKind::Text,
            Self::Age | Self::Height | Self::Weight | Self::GoalWeight | Self::WorkoutDuration => {
                FieldKind::Number
            }
            Self::FitnessGoals | Self::PreferredWorkoutDays => FieldKind::Set,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::GoalWeight => "goal_weight",
            Self::FitnessLevel => "fitness_level",
            Self::FitnessGoals => "fitness_goals",
            Self::PreferredWorkoutDays => "preferred_workout_days",
            Self::WorkoutDuration => "workout_duration",
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value held by one draft field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum AnswerValue {
    Text(String),
    Number(i64),
    Set(BTreeSet<String>),
}

impl AnswerValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Set(_) => FieldKind::Set,
        }
    }

    /// The zero value for a field kind: empty text, 0, or the empty set.
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text(String::new()),
            FieldKind::Number => Self::Number(0),
            FieldKind::Set => Self::Set(BTreeSet::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_a_kind() {
        let numbers = ProfileField::ALL
            .iter()
            .filter(|f| f.kind() == FieldKind::Number)
            .count();
        let sets = ProfileField::ALL
            .iter()
            .filter(|f| f.kind() == FieldKind::Set)
            .count();
        assert_eq!(numbers, 5);
        assert_eq!(sets, 2);
    }

    #[test]
    fn display_matches_serde() {
        for field in ProfileField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{field}\""));
        }
    }

    #[test]
    fn empty_value_matches_kind() {
        for kind in [FieldKind::Text, FieldKind::Number, FieldKind::Set] {
            assert_eq!(AnswerValue::empty(kind).kind(), kind);
        }
    }
}
