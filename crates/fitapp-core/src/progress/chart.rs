use serde::{Deserialize, Serialize};

use crate::workout::ProgressEntry;

/// Default number of most recent samples the weight chart shows.
pub const DEFAULT_CHART_WINDOW: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// "M/D" without leading zeros.
    pub label: String,
    pub weight: f64,
}

/// The last `window` entries as labelled chart points, oldest first.
pub fn weight_series(entries: &[ProgressEntry], window: usize) -> Vec<ChartPoint> {
    let skip = entries.len().saturating_sub(window);
    entries[skip..]
        .iter()
        .map(|e| ChartPoint {
            label: e.date.format("%-m/%-d").to_string(),
            weight: e.weight,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn keeps_only_last_window_entries() {
        let base = Utc.with_ymd_and_hms(2024, 1, 28, 8, 0, 0).unwrap();
        let entries: Vec<ProgressEntry> = (0..10)
            .map(|i| ProgressEntry::weight(base + Duration::days(i), 80.0 - i as f64))
            .collect();

        let series = weight_series(&entries, DEFAULT_CHART_WINDOW);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].label, "1/31");
        assert_eq!(series[0].weight, 77.0);
        assert_eq!(series[6].label, "2/6");
    }

    #[test]
    fn short_history_is_returned_whole() {
        let date = Utc.with_ymd_and_hms(2024, 12, 5, 8, 0, 0).unwrap();
        let series = weight_series(&[ProgressEntry::weight(date, 72.5)], 7);
        assert_eq!(
            series,
            vec![ChartPoint {
                label: "12/5".into(),
                weight: 72.5
            }]
        );
        assert!(weight_series(&[], 7).is_empty());
    }
}
