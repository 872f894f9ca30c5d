mod catalog;
mod engine;

pub use catalog::{AnswerKind, QuestionCatalog, QuestionDescriptor};
pub use engine::{EngineState, QuestionnaireEngine};
