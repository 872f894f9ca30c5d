//! Weight progress: goal percentage, chart series and weight logging.

mod chart;
mod evaluator;
mod tracker;

pub use chart::{weight_series, ChartPoint, DEFAULT_CHART_WINDOW};
pub use evaluator::{display_percent, goal_percent, profile_goal_percent};
pub use tracker::log_weight;
