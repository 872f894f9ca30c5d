//! In-memory workout state: available plans, the selected plan, logs and
//! weight history.

use chrono::{DateTime, Utc};

use crate::events::Event;
use crate::workout::{
    filter_plans, workout_stats, ProgressEntry, WorkoutLog, WorkoutPlan, WorkoutStats,
};

/// Holds everything the workout and progress screens read.
///
/// Plans are supplied by the caller; the store has no built-in catalog.
#[derive(Debug, Clone, Default)]
pub struct WorkoutStore {
    plans: Vec<WorkoutPlan>,
    selected_plan_id: Option<String>,
    logs: Vec<WorkoutLog>,
    progress: Vec<ProgressEntry>,
}

impl WorkoutStore {
    pub fn new(plans: Vec<WorkoutPlan>) -> Self {
        Self {
            plans,
            ..Default::default()
        }
    }

    pub fn available_plans(&self) -> &[WorkoutPlan] {
        &self.plans
    }

    pub fn selected_plan(&self) -> Option<&WorkoutPlan> {
        let id = self.selected_plan_id.as_deref()?;
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn workout_logs(&self) -> &[WorkoutLog] {
        &self.logs
    }

    /// Weight history in insertion order.
    pub fn progress_entries(&self) -> &[ProgressEntry] {
        &self.progress
    }

    pub fn filter_plans(&self, filter: Option<&str>) -> Vec<&WorkoutPlan> {
        filter_plans(&self.plans, filter)
    }

    pub fn stats(&self, now: DateTime<Utc>) -> WorkoutStats {
        workout_stats(&self.logs, now)
    }

    /// Select a plan by id. Unknown ids leave the selection unchanged.
    pub fn select_plan(&mut self, plan_id: &str) -> Option<Event> {
        if !self.plans.iter().any(|p| p.id == plan_id) {
            tracing::debug!(plan_id, "ignoring selection of unknown plan");
            return None;
        }
        self.selected_plan_id = Some(plan_id.to_string());
        Some(Event::PlanSelected {
            plan_id: plan_id.to_string(),
            at: Utc::now(),
        })
    }

    pub fn log_workout(&mut self, log: WorkoutLog) -> Event {
        let event = Event::WorkoutLogged {
            log_id: log.id.clone(),
            workout_id: log.workout_id.clone(),
            completed: log.completed,
            at: Utc::now(),
        };
        self.logs.push(log);
        event
    }

    pub fn add_progress_entry(&mut self, entry: ProgressEntry) {
        self.progress.push(entry);
    }
}
