//! The ordered, immutable list of onboarding questions.
//!
//! A catalog is validated once when it is built: every choice question has
//! options, free-form questions have none, ids are unique, and each question
//! only targets a profile field that can hold its answer. After that the
//! engine never re-checks bindings.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{CatalogError, CoreError};
use crate::profile::{FieldKind, ProfileField};

/// How a question's raw input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Text,
    Number,
    SingleChoice,
    MultiChoice,
}

impl AnswerKind {
    /// The field kind this answer kind writes into.
    pub fn field_kind(&self) -> FieldKind {
        match self {
            Self::Text | Self::SingleChoice => FieldKind::Text,
            Self::Number => FieldKind::Number,
            Self::MultiChoice => FieldKind::Set,
        }
    }

    pub fn has_choices(&self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultiChoice)
    }
}

/// A single question in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDescriptor {
    /// Stable identifier.
    pub id: String,
    /// Display text, opaque to the engine.
    pub prompt: String,
    pub answer_kind: AnswerKind,
    /// Options, in display order. Empty for text and number questions.
    #[serde(default)]
    pub choices: Vec<String>,
    pub target_field: ProfileField,
}

impl QuestionDescriptor {
    pub fn text(id: &str, prompt: &str, field: ProfileField) -> Self {
        Self::build(id, prompt, AnswerKind::Text, &[], field)
    }

    pub fn number(id: &str, prompt: &str, field: ProfileField) -> Self {
        Self::build(id, prompt, AnswerKind::Number, &[], field)
    }

    pub fn single_choice(id: &str, prompt: &str, choices: &[&str], field: ProfileField) -> Self {
        Self::build(id, prompt, AnswerKind::SingleChoice, choices, field)
    }

    pub fn multi_choice(id: &str, prompt: &str, choices: &[&str], field: ProfileField) -> Self {
        Self::build(id, prompt, AnswerKind::MultiChoice, choices, field)
    }

    fn build(
        id: &str,
        prompt: &str,
        answer_kind: AnswerKind,
        choices: &[&str],
        target_field: ProfileField,
    ) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            answer_kind,
            choices: choices.iter().map(|c| c.to_string()).collect(),
            target_field,
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.answer_kind.has_choices() && self.choices.is_empty() {
            return Err(CatalogError::MissingChoices {
                id: self.id.clone(),
                kind: self.answer_kind,
            });
        }
        if !self.answer_kind.has_choices() && !self.choices.is_empty() {
            return Err(CatalogError::UnexpectedChoices {
                id: self.id.clone(),
                kind: self.answer_kind,
            });
        }
        let field_kind = self.target_field.kind();
        if self.answer_kind.field_kind() != field_kind {
            return Err(CatalogError::IncompatibleField {
                id: self.id.clone(),
                kind: self.answer_kind,
                field: self.target_field,
                field_kind,
            });
        }
        Ok(())
    }
}

/// Validated, ordered question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<QuestionDescriptor>", into = "Vec<QuestionDescriptor>")]
pub struct QuestionCatalog {
    questions: Vec<QuestionDescriptor>,
}

impl QuestionCatalog {
    /// Build a catalog, rejecting empty lists, duplicate ids and ill-typed
    /// bindings.
    pub fn new(questions: Vec<QuestionDescriptor>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id.as_str()) {
                return Err(CatalogError::DuplicateId(q.id.clone()));
            }
            q.validate()?;
        }
        Ok(Self { questions })
    }

    /// Parse and validate a JSON array of question descriptors.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let questions: Vec<QuestionDescriptor> = serde_json::from_str(json)?;
        Ok(Self::new(questions)?)
    }

    /// Read a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// The ten onboarding questions of the mobile app.
    pub fn builtin() -> Self {
        Self {
            questions: vec![
                QuestionDescriptor::text("1", "What is your name?", ProfileField::Name),
                QuestionDescriptor::number("2", "How old are you?", ProfileField::Age),
                QuestionDescriptor::single_choice(
                    "3",
                    "What is your gender?",
                    &["Male", "Female", "Non-binary", "Prefer not to say"],
                    ProfileField::Gender,
                ),
                QuestionDescriptor::number("4", "What is your height (in cm)?", ProfileField::Height),
                QuestionDescriptor::number(
                    "5",
                    "What is your current weight (in kg)?",
                    ProfileField::Weight,
                ),
                QuestionDescriptor::number(
                    "6",
                    "What is your goal weight (in kg)?",
                    ProfileField::GoalWeight,
                ),
                QuestionDescriptor::single_choice(
                    "7",
                    "What is your fitness level?",
                    &["beginner", "intermediate", "advanced"],
                    ProfileField::FitnessLevel,
                ),
                QuestionDescriptor::multi_choice(
                    "8",
                    "What are your fitness goals?",
                    &[
                        "Weight loss",
                        "Muscle gain",
                        "Improve endurance",
                        "Increase strength",
                        "Better flexibility",
                        "Overall health",
                    ],
                    ProfileField::FitnessGoals,
                ),
                QuestionDescriptor::multi_choice(
                    "9",
                    "Which days do you prefer to workout?",
                    &[
                        "Monday",
                        "Tuesday",
                        "Wednesday",
                        "Thursday",
                        "Friday",
                        "Saturday",
                        "Sunday",
                    ],
                    ProfileField::PreferredWorkoutDays,
                ),
                QuestionDescriptor::number(
                    "10",
                    "How long can you workout per session (in minutes)?",
                    ProfileField::WorkoutDuration,
                ),
            ],
        }
    }

    pub fn get(&self, index: usize) -> Option<&QuestionDescriptor> {
        self.questions.get(index)
    }

    /// Callers keep `index` below `len()`.
    pub(crate) fn at(&self, index: usize) -> &QuestionDescriptor {
        &self.questions[index]
    }

    /// Step count. Never zero.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionDescriptor> {
        self.questions.iter()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<QuestionDescriptor>> for QuestionCatalog {
    type Error = CatalogError;

    fn try_from(questions: Vec<QuestionDescriptor>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl From<QuestionCatalog> for Vec<QuestionDescriptor> {
    fn from(catalog: QuestionCatalog) -> Self {
        catalog.questions
    }
}
