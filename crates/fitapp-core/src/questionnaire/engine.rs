//! Questionnaire engine implementation.
//!
//! The engine walks a [`QuestionCatalog`] one step at a time, writing each
//! answer into the [`ProfileDraft`] it owns. Accepting the last step freezes
//! the draft and hands it to a [`UserStore`].
//!
//! ## State Transitions
//!
//! ```text
//! 0 <-> 1 <-> ... <-> len-1 -> Completed
//! ```
//!
//! `back` is floored at step 0 and `Completed` is terminal. Navigation never
//! clears answers. To onboard again, build a new engine.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = QuestionnaireEngine::new(QuestionCatalog::builtin());
//! engine.answer("Alice");
//! engine.next(&mut users);
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::catalog::{AnswerKind, QuestionCatalog, QuestionDescriptor};
use crate::events::Event;
use crate::profile::{parse_int_or_zero, AnswerValue, ProfileDraft};
use crate::store::UserStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EngineState {
    InProgress { step_index: usize },
    Completed,
}

/// Step-driven onboarding form.
#[derive(Debug, Clone)]
pub struct QuestionnaireEngine {
    catalog: QuestionCatalog,
    /// Always within `0..catalog.len()`, also after completion.
    step_index: usize,
    /// Taken when the profile is handed off.
    draft: Option<ProfileDraft>,
}

impl QuestionnaireEngine {
    /// Start at step 0 with an empty draft.
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self::with_draft(catalog, ProfileDraft::new())
    }

    pub fn with_draft(catalog: QuestionCatalog, draft: ProfileDraft) -> Self {
        Self {
            catalog,
            step_index: 0,
            draft: Some(draft),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> EngineState {
        if self.draft.is_some() {
            EngineState::InProgress {
                step_index: self.step_index,
            }
        } else {
            EngineState::Completed
        }
    }

    pub fn is_completed(&self) -> bool {
        self.draft.is_none()
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// The draft, until it has been handed to the user store.
    pub fn draft(&self) -> Option<&ProfileDraft> {
        self.draft.as_ref()
    }

    pub fn current_question(&self) -> &QuestionDescriptor {
        self.catalog.at(self.step_index)
    }

    /// Value already stored for the current question's field, so a revisited
    /// step can show the earlier answer.
    pub fn current_answer(&self) -> Option<AnswerValue> {
        let field = self.current_question().target_field;
        self.draft.as_ref().map(|d| d.get(field))
    }

    /// Whether `option` is currently chosen for the current question.
    ///
    /// Equality for single choice, membership for multi choice, `false` for
    /// free-form questions and after completion.
    pub fn is_option_selected(&self, option: &str) -> bool {
        let question = self.current_question();
        match (question.answer_kind, self.current_answer()) {
            (AnswerKind::SingleChoice, Some(AnswerValue::Text(v))) => v == option,
            (AnswerKind::MultiChoice, Some(AnswerValue::Set(set))) => set.contains(option),
            _ => false,
        }
    }

    /// `(step_index + 1) / len`, in `(0.0, 1.0]`.
    pub fn progress_fraction(&self) -> f64 {
        (self.step_index + 1) as f64 / self.catalog.len() as f64
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Apply raw input to the current question's field.
    ///
    /// Never fails: numbers that do not parse are stored as 0, choice input
    /// is stored as given. Ignored once the engine has completed.
    pub fn answer(&mut self, raw: &str) -> Option<Event> {
        let draft = self.draft.as_mut()?;
        let question = self.catalog.at(self.step_index);
        let field = question.target_field;

        match question.answer_kind {
            AnswerKind::Text | AnswerKind::SingleChoice => {
                draft.set(field, AnswerValue::Text(raw.to_string()));
            }
            AnswerKind::Number => {
                draft.set(field, AnswerValue::Number(parse_int_or_zero(raw)));
            }
            AnswerKind::MultiChoice => {
                draft.toggle(field, raw);
            }
        }

        let value = draft.get(field);
        tracing::debug!(step = self.step_index, %field, ?value, "answer recorded");
        Some(Event::AnswerRecorded {
            step_index: self.step_index,
            question_id: question.id.clone(),
            field,
            value,
            at: Utc::now(),
        })
    }

    /// Move to the next step, or complete onboarding from the last step.
    ///
    /// Completion freezes the draft, calls `set_user` and
    /// `set_onboarded(true)` on `store` exactly once, and makes the engine
    /// terminal. Further calls return `None` without touching `store`.
    pub fn next<S: UserStore + ?Sized>(&mut self, store: &mut S) -> Option<Event> {
        if self.draft.is_none() {
            return None;
        }

        if self.step_index + 1 < self.catalog.len() {
            let from = self.step_index;
            self.step_index += 1;
            tracing::debug!(from, to = self.step_index, "step advanced");
            return Some(Event::StepAdvanced {
                from_step: from,
                to_step: self.step_index,
                at: Utc::now(),
            });
        }

        let profile = self.draft.take()?.freeze();
        let profile_id = profile.id.clone();
        store.set_user(profile);
        store.set_onboarded(true);
        tracing::info!(%profile_id, "onboarding completed");
        Some(Event::OnboardingCompleted {
            profile_id,
            at: Utc::now(),
        })
    }

    /// Move to the previous step. No-op at step 0 and after completion.
    pub fn back(&mut self) -> Option<Event> {
        if self.draft.is_none() || self.step_index == 0 {
            return None;
        }
        let from = self.step_index;
        self.step_index -= 1;
        tracing::debug!(from, to = self.step_index, "step retreated");
        Some(Event::StepRetreated {
            from_step: from,
            to_step: self.step_index,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ProfileField, ProfileUpdate, UserProfile};
    use crate::store::InMemoryUserStore;
    use std::collections::BTreeSet;

    /// Store that records how often each hand-off method is called.
    #[derive(Default)]
    struct RecordingStore {
        inner: InMemoryUserStore,
        set_user_calls: usize,
        onboarded_calls: Vec<bool>,
    }

    impl UserStore for RecordingStore {
        fn set_user(&mut self, profile: UserProfile) {
            self.set_user_calls += 1;
            self.inner.set_user(profile);
        }
        fn set_onboarded(&mut self, onboarded: bool) {
            self.onboarded_calls.push(onboarded);
            self.inner.set_onboarded(onboarded);
        }
        fn user(&self) -> Option<&UserProfile> {
            self.inner.user()
        }
        fn is_onboarded(&self) -> bool {
            self.inner.is_onboarded()
        }
        fn update_profile(&mut self, update: ProfileUpdate) -> bool {
            self.inner.update_profile(update)
        }
    }

    fn three_step_catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            QuestionDescriptor::text("name", "Name?", ProfileField::Name),
            QuestionDescriptor::number("age", "Age?", ProfileField::Age),
            QuestionDescriptor::single_choice("gender", "Gender?", &["A", "B"], ProfileField::Gender),
        ])
        .unwrap()
    }

    #[test]
    fn three_question_scenario_completes_once() {
        let mut engine = QuestionnaireEngine::new(three_step_catalog());
        let mut store = RecordingStore::default();

        engine.answer("Alice");
        engine.next(&mut store);
        engine.answer("30");
        engine.next(&mut store);
        engine.answer("B");
        let event = engine.next(&mut store);

        assert!(matches!(event, Some(Event::OnboardingCompleted { .. })));
        assert_eq!(engine.state(), EngineState::Completed);
        assert_eq!(store.set_user_calls, 1);
        assert_eq!(store.onboarded_calls, vec![true]);

        let user = store.user().unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.age, 30);
        assert_eq!(user.gender, "B");
    }

    #[test]
    fn next_after_completion_has_no_effect() {
        let mut engine = QuestionnaireEngine::new(three_step_catalog());
        let mut store = RecordingStore::default();
        for _ in 0..2 {
            assert!(engine.next(&mut store).is_some());
        }
        engine.answer("A");
        assert!(engine.is_option_selected("A"));
        assert!(engine.next(&mut store).is_some());
        for _ in 0..3 {
            assert!(engine.next(&mut store).is_none());
        }
        assert_eq!(engine.step_index(), 2);
        assert_eq!(store.set_user_calls, 1);
        assert!(!engine.is_option_selected("A"));
        assert!(engine.answer("late").is_none());
        assert!(engine.back().is_none());
    }

    #[test]
    fn back_at_first_step_is_noop() {
        let mut engine = QuestionnaireEngine::new(three_step_catalog());
        assert!(engine.back().is_none());
        assert_eq!(engine.state(), EngineState::InProgress { step_index: 0 });
    }

    #[test]
    fn back_then_next_keeps_answers() {
        let mut engine = QuestionnaireEngine::new(three_step_catalog());
        let mut store = InMemoryUserStore::new();
        engine.answer("Alice");
        engine.next(&mut store);
        engine.answer("30");

        engine.back();
        assert_eq!(engine.step_index(), 0);
        assert_eq!(engine.current_answer(), Some(AnswerValue::Text("Alice".into())));

        engine.next(&mut store);
        assert_eq!(engine.step_index(), 1);
        assert_eq!(engine.current_answer(), Some(AnswerValue::Number(30)));
    }

    #[test]
    fn unparsable_number_is_stored_as_zero() {
        let mut engine = QuestionnaireEngine::new(three_step_catalog());
        let mut store = InMemoryUserStore::new();
        engine.next(&mut store);
        engine.answer("30");
        let event = engine.answer("thirty").unwrap();
        match event {
            Event::AnswerRecorded { value, field, .. } => {
                assert_eq!(field, ProfileField::Age);
                assert_eq!(value, AnswerValue::Number(0));
            }
            other => panic!("Expected AnswerRecorded, got {other:?}"),
        }
    }

    #[test]
    fn single_choice_replaces_previous_selection() {
        let mut engine = QuestionnaireEngine::new(three_step_catalog());
        let mut store = InMemoryUserStore::new();
        engine.next(&mut store);
        engine.next(&mut store);
        engine.answer("A");
        engine.answer("B");
        assert!(engine.is_option_selected("B"));
        assert!(!engine.is_option_selected("A"));
    }

    #[test]
    fn multi_choice_toggles_membership() {
        let mut engine = QuestionnaireEngine::new(QuestionCatalog::builtin());
        let mut store = InMemoryUserStore::new();
        for _ in 0..7 {
            engine.next(&mut store);
        }
        assert_eq!(engine.current_question().answer_kind, AnswerKind::MultiChoice);

        engine.answer("Muscle gain");
        engine.answer("Weight loss");
        assert!(engine.is_option_selected("Muscle gain"));
        assert!(engine.is_option_selected("Weight loss"));

        engine.answer("Muscle gain");
        assert!(!engine.is_option_selected("Muscle gain"));
        let expected: BTreeSet<String> = ["Weight loss".to_string()].into();
        assert_eq!(engine.current_answer(), Some(AnswerValue::Set(expected)));
    }

    #[test]
    fn free_form_questions_never_report_selection() {
        let mut engine = QuestionnaireEngine::new(three_step_catalog());
        engine.answer("A");
        assert!(!engine.is_option_selected("A"));
    }

    #[test]
    fn progress_fraction_tracks_step() {
        let mut engine = QuestionnaireEngine::new(QuestionCatalog::builtin());
        let mut store = InMemoryUserStore::new();
        assert!((engine.progress_fraction() - 0.1).abs() < 1e-9);
        for _ in 0..9 {
            engine.next(&mut store);
        }
        assert!((engine.progress_fraction() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unanswered_questions_complete_with_defaults() {
        let mut engine = QuestionnaireEngine::new(QuestionCatalog::builtin());
        let mut store = InMemoryUserStore::new();
        while engine.next(&mut store).is_some() {}

        let user = store.user().unwrap();
        assert_eq!(user.age, 0);
        assert_eq!(user.weight, 0.0);
        assert!(user.fitness_goals.is_empty());
        assert_eq!(user.fitness_level, None);
        assert!(store.is_onboarded());
    }
}
