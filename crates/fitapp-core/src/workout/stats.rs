//! Home-screen workout counters.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::WorkoutLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutStats {
    pub total_workouts: usize,
    /// Completed logs dated on or after the start of the current week.
    pub completed_this_week: usize,
}

/// Midnight UTC of the Sunday that starts the week containing `now`.
pub fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let days_since_sunday = i64::from(now.weekday().num_days_from_sunday());
    (now.date_naive() - Duration::days(days_since_sunday))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

pub fn workout_stats(logs: &[WorkoutLog], now: DateTime<Utc>) -> WorkoutStats {
    let start = week_start(now);
    WorkoutStats {
        total_workouts: logs.len(),
        completed_this_week: logs
            .iter()
            .filter(|log| log.completed && log.date >= start)
            .count(),
    }
}
