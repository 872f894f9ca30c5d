//! # FitApp Core Library
//!
//! This library provides the non-visual logic of the FitApp fitness tracker.
//! Front ends (the `fitapp-cli` binary, or any GUI) are thin layers that feed
//! user input into these types and render the [`Event`]s they return.
//!
//! ## Architecture
//!
//! - **Questionnaire**: a step state machine over a validated question
//!   catalog that fills a typed profile draft and hands the finished profile
//!   to a [`UserStore`]
//! - **Profile**: draft, frozen profile, partial updates and lenient numeric
//!   coercion
//! - **Progress**: goal-completion percent, chart series, weight logging
//! - **Stores**: explicit in-memory user and workout state, passed by
//!   reference rather than looked up globally
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`QuestionnaireEngine`]: Onboarding state machine
//! - [`QuestionCatalog`]: Validated question list
//! - [`goal_percent`]: Progress evaluator
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod profile;
pub mod progress;
pub mod questionnaire;
pub mod storage;
pub mod store;
pub mod tips;
pub mod workout;

pub use error::{CatalogError, ConfigError, CoreError};
pub use events::Event;
pub use profile::{
    AnswerValue, FieldKind, FitnessLevel, ProfileDraft, ProfileEditForm, ProfileField,
    ProfileUpdate, UserProfile,
};
pub use progress::{goal_percent, log_weight, profile_goal_percent, weight_series, ChartPoint};
pub use questionnaire::{AnswerKind, EngineState, QuestionCatalog, QuestionDescriptor, QuestionnaireEngine};
pub use storage::Config;
pub use store::{InMemoryUserStore, UserStore, WorkoutStore};
pub use tips::pick_tip;
pub use workout::{ProgressEntry, WorkoutLog, WorkoutPlan, WorkoutStats};
