//! Plan browsing filter.

use super::model::WorkoutPlan;

/// Select plans matching `filter`.
///
/// `None` and `"all"` keep everything. Otherwise a plan matches when its
/// level equals the filter or one of its goals contains it, ignoring case.
/// Hyphens in the filter stand for spaces, so `"weight-loss"` finds the
/// goal "weight loss".
pub fn filter_plans<'a>(plans: &'a [WorkoutPlan], filter: Option<&str>) -> Vec<&'a WorkoutPlan> {
    let needle = match filter.map(|f| f.trim().to_lowercase().replace('-', " ")) {
        None => return plans.iter().collect(),
        Some(f) if f.is_empty() || f == "all" => return plans.iter().collect(),
        Some(f) => f,
    };

    plans
        .iter()
        .filter(|plan| {
            plan.level.as_str() == needle
                || plan
                    .goals
                    .iter()
                    .any(|goal| goal.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::FitnessLevel;

    fn plan(id: &str, level: FitnessLevel, goals: &[&str]) -> WorkoutPlan {
        WorkoutPlan {
            id: id.into(),
            name: format!("Plan {id}"),
            description: String::new(),
            level,
            duration_weeks: 8,
            days_per_week: 3,
            goals: goals.iter().map(|g| g.to_string()).collect(),
            workouts: Vec::new(),
        }
    }

    fn plans() -> Vec<WorkoutPlan> {
        vec![
            plan("1", FitnessLevel::Beginner, &["strength", "muscle"]),
            plan("2", FitnessLevel::Intermediate, &["weight loss", "endurance"]),
            plan("3", FitnessLevel::Advanced, &["muscle", "strength"]),
        ]
    }

    fn ids(found: Vec<&WorkoutPlan>) -> Vec<&str> {
        found.into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn no_filter_or_all_keeps_everything() {
        let plans = plans();
        assert_eq!(filter_plans(&plans, None).len(), 3);
        assert_eq!(filter_plans(&plans, Some("all")).len(), 3);
    }

    #[test]
    fn filters_by_level() {
        let plans = plans();
        assert_eq!(ids(filter_plans(&plans, Some("beginner"))), vec!["1"]);
        assert_eq!(ids(filter_plans(&plans, Some("Advanced"))), vec!["3"]);
    }

    #[test]
    fn filters_by_goal_substring() {
        let plans = plans();
        assert_eq!(ids(filter_plans(&plans, Some("strength"))), vec!["1", "3"]);
        assert_eq!(ids(filter_plans(&plans, Some("weight-loss"))), vec!["2"]);
    }

    #[test]
    fn unknown_filter_matches_nothing() {
        let plans = plans();
        assert!(filter_plans(&plans, Some("yoga")).is_empty());
    }
}
