use chrono::{DateTime, Utc};

use crate::events::Event;
use crate::profile::{parse_float, ProfileUpdate};
use crate::store::{UserStore, WorkoutStore};
use crate::workout::ProgressEntry;

/// Record a weight typed by the user.
///
/// Unlike onboarding numbers, input that does not parse is rejected: nothing
/// is recorded and `None` is returned. A parsed weight is appended to the
/// history and, when a user is stored, becomes their current weight.
pub fn log_weight<S: UserStore + ?Sized>(
    input: &str,
    at: DateTime<Utc>,
    workouts: &mut WorkoutStore,
    users: &mut S,
) -> Option<Event> {
    let weight = match parse_float(input) {
        Some(w) if w.is_finite() => w,
        _ => {
            tracing::debug!(input, "rejected weight entry");
            return None;
        }
    };

    workouts.add_progress_entry(ProgressEntry::weight(at, weight));
    users.update_profile(ProfileUpdate::weight(weight));
    tracing::info!(weight, "weight logged");
    Some(Event::WeightLogged { weight, at })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileDraft;
    use crate::store::InMemoryUserStore;

    #[test]
    fn rejects_non_numeric_input() {
        let mut workouts = WorkoutStore::default();
        let mut users = InMemoryUserStore::new();
        assert!(log_weight("heavy", Utc::now(), &mut workouts, &mut users).is_none());
        assert!(log_weight("", Utc::now(), &mut workouts, &mut users).is_none());
        assert!(workouts.progress_entries().is_empty());
    }

    #[test]
    fn records_entry_without_user() {
        let mut workouts = WorkoutStore::default();
        let mut users = InMemoryUserStore::new();
        let event = log_weight("78.4", Utc::now(), &mut workouts, &mut users);
        assert!(matches!(event, Some(Event::WeightLogged { weight, .. }) if weight == 78.4));
        assert_eq!(workouts.progress_entries().len(), 1);
        assert!(users.user().is_none());
    }

    #[test]
    fn updates_current_weight_of_stored_user() {
        let mut workouts = WorkoutStore::default();
        let mut users = InMemoryUserStore::new();
        users.set_user(ProfileDraft::with_id("u1").freeze());

        log_weight("77kg", Utc::now(), &mut workouts, &mut users);
        assert_eq!(users.user().unwrap().weight, 77.0);
        assert_eq!(workouts.progress_entries()[0].weight, 77.0);
    }
}
