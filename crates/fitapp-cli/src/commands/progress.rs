//! Goal progress from a starting profile and a series of weigh-ins.

use chrono::{Duration, Utc};
use clap::Args;

use fitapp_core::progress::display_percent;
use fitapp_core::{
    log_weight, profile_goal_percent, weight_series, Config, InMemoryUserStore, ProfileDraft,
    ProfileUpdate, UserStore, WorkoutStore,
};

#[derive(Args)]
pub struct ProgressArgs {
    /// Goal weight in kg
    #[arg(long)]
    goal: f64,
    /// Weight at the time of onboarding, in kg
    #[arg(long)]
    current: f64,
    /// Comma-separated weigh-ins, oldest first, one per day ending today
    #[arg(long, value_delimiter = ',')]
    history: Vec<String>,
    /// Also print the weight chart series
    #[arg(long)]
    chart: bool,
}

pub fn run(args: ProgressArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut users = InMemoryUserStore::new();
    let mut profile = ProfileDraft::new().freeze();
    ProfileUpdate {
        weight: Some(args.current),
        goal_weight: Some(args.goal),
        ..Default::default()
    }
    .apply_to(&mut profile);
    users.set_user(profile);
    users.set_onboarded(true);

    let mut workouts = WorkoutStore::default();
    let today = Utc::now();
    let days = args.history.len() as i64;
    for (i, raw) in args.history.iter().enumerate() {
        let at = today - Duration::days(days - 1 - i as i64);
        if log_weight(raw, at, &mut workouts, &mut users).is_none() {
            tracing::warn!(input = %raw, "weight not recorded");
            eprintln!("skipping invalid weight: {raw:?}");
        }
    }

    let percent = profile_goal_percent(users.user(), workouts.progress_entries());
    println!("Goal progress: {}%", display_percent(percent));

    if args.chart {
        for point in weight_series(workouts.progress_entries(), config.progress.chart_window) {
            println!("  {:>5}  {:.1} kg", point.label, point.weight);
        }
    }
    Ok(())
}
