//! User profile data: the onboarding draft, the frozen profile, partial
//! updates, and the lenient coercion rules used when text becomes numbers.

pub mod coerce;
mod draft;
mod edit;
mod field;

pub use coerce::{capitalize_first, parse_float, parse_float_or_zero, parse_int, parse_int_or_zero};
pub use draft::{FitnessLevel, ProfileDraft, UserProfile};
pub use edit::{ProfileEditForm, ProfileUpdate};
pub use field::{AnswerValue, FieldKind, ProfileField};
