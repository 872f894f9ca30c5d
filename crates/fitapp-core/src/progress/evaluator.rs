//! Goal-completion percentage.
//!
//! Progress is the share of the distance from the starting weight to the goal
//! weight that has been covered, clamped to `0..=100`. The starting weight is
//! the first recorded sample; with no history the current weight stands in,
//! so the result is either 0 or (when already at goal) 100.

use crate::profile::UserProfile;
use crate::workout::ProgressEntry;

/// Percent of the way from the first sample in `history` to `goal_weight`.
///
/// A weight of 0 (or NaN) means "unknown" and yields 0. Works for both
/// losing and gaining goals, and returns 100 when start and goal coincide.
/// Total: every input maps to a value in `0.0..=100.0`.
pub fn goal_percent(history: &[ProgressEntry], current_weight: f64, goal_weight: f64) -> f64 {
    if is_unknown(current_weight) || is_unknown(goal_weight) {
        return 0.0;
    }

    let start = history.first().map(|e| e.weight).unwrap_or(current_weight);

    let raw = if start > goal_weight {
        (start - current_weight) / (start - goal_weight) * 100.0
    } else if start < goal_weight {
        (current_weight - start) / (goal_weight - start) * 100.0
    } else {
        return 100.0;
    };

    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

/// [`goal_percent`] for the stored user; 0 when nobody is onboarded.
pub fn profile_goal_percent(user: Option<&UserProfile>, history: &[ProgressEntry]) -> f64 {
    user.map(|u| goal_percent(history, u.weight, u.goal_weight))
        .unwrap_or(0.0)
}

/// Whole-number percent for display, rounding halves up.
pub fn display_percent(percent: f64) -> u8 {
    (percent.clamp(0.0, 100.0) + 0.5).floor() as u8
}

fn is_unknown(weight: f64) -> bool {
    weight == 0.0 || weight.is_nan()
}
