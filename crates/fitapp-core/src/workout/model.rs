use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::FitnessLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sets: u32,
    pub reps: u32,
    /// Seconds, for timed exercises.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_min: u32,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    pub day: u32,
    pub week: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: FitnessLevel,
    pub duration_weeks: u32,
    pub days_per_week: u32,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub workouts: Vec<Workout>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub weight: f64,
    pub reps: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub exercise_id: String,
    pub sets: Vec<SetRecord>,
}

/// One performed (or abandoned) workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub id: String,
    pub date: DateTime<Utc>,
    pub workout_id: String,
    pub completed: bool,
    /// Actual duration in minutes.
    pub duration_min: u32,
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
    #[serde(default)]
    pub notes: String,
}

/// Body measurements in cm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub arms: Option<f64>,
    pub thighs: Option<f64>,
}

/// A dated weight sample, optionally with measurements and photo references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub date: DateTime<Utc>,
    /// kg
    pub weight: f64,
    #[serde(default)]
    pub measurements: Option<Measurements>,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl ProgressEntry {
    pub fn weight(date: DateTime<Utc>, weight: f64) -> Self {
        Self {
            date,
            weight,
            measurements: None,
            photos: Vec::new(),
        }
    }
}
