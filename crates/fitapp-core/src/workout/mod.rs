//! Workout plans, logs and weight history records.

mod filter;
mod model;
mod stats;

pub use filter::filter_plans;
pub use model::{
    Exercise, ExerciseRecord, Measurements, ProgressEntry, SetRecord, Workout, WorkoutLog,
    WorkoutPlan,
};
pub use stats::{week_start, workout_stats, WorkoutStats};
