//! Explicit in-memory stores, built once by the caller and passed by
//! reference to the code that reads or mutates them.

mod user;
mod workout;

pub use user::{InMemoryUserStore, UserStore};
pub use workout::WorkoutStore;
