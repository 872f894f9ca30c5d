use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::{AnswerValue, ProfileField};

/// Every state change in the core produces an Event.
/// Front ends render them; nothing in the core consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    AnswerRecorded {
        step_index: usize,
        question_id: String,
        field: ProfileField,
        /// Field value after coercion.
        value: AnswerValue,
        at: DateTime<Utc>,
    },
    StepAdvanced {
        from_step: usize,
        to_step: usize,
        at: DateTime<Utc>,
    },
    StepRetreated {
        from_step: usize,
        to_step: usize,
        at: DateTime<Utc>,
    },
    /// Final question accepted; the profile now lives in the user store.
    OnboardingCompleted {
        profile_id: String,
        at: DateTime<Utc>,
    },
    WeightLogged {
        weight: f64,
        at: DateTime<Utc>,
    },
    PlanSelected {
        plan_id: String,
        at: DateTime<Utc>,
    },
    WorkoutLogged {
        log_id: String,
        workout_id: String,
        completed: bool,
        at: DateTime<Utc>,
    },
}
