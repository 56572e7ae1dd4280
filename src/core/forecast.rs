use std::collections::HashMap;

use tracing::debug;

use crate::models::{BloodType, DailyDemand, ForecastResult, RiskLevel, Trend};

/// Trailing window, in observations, used when the caller does not pick one
pub const DEFAULT_FORECAST_WINDOW: usize = 7;

/// Recent average must exceed the previous one by this factor to trend up
const UP_FACTOR: f64 = 1.1;
/// Recent average must fall below the previous one by this factor to trend down
const DOWN_FACTOR: f64 = 0.9;
/// Average daily units at which a rising trend becomes high risk
const HIGH_RISK_UNITS: f64 = 10.0;

/// Forecast short-term demand per blood type from daily usage history
///
/// Returns exactly one result per blood type, in [`BloodType::ALL`] order.
/// Each type's history is sorted by date; the trailing `window` observations
/// are compared against the `window` observations right before them.
pub fn forecast_demand(history: &[DailyDemand], window: usize) -> Vec<ForecastResult> {
    let mut by_type: HashMap<BloodType, Vec<&DailyDemand>> = HashMap::new();
    for entry in history {
        by_type.entry(entry.blood_type).or_default().push(entry);
    }

    let results: Vec<ForecastResult> = BloodType::ALL
        .into_iter()
        .map(|blood_type| {
            let mut series = by_type.remove(&blood_type).unwrap_or_default();
            series.sort_by_key(|entry| entry.date);

            let (recent, previous) = split_windows(&series, window);
            let recent_avg = mean_units(recent);
            let previous_avg = mean_units(previous);

            let trend = classify_trend(recent_avg, previous_avg);
            let risk_level = classify_risk(trend, recent_avg);

            debug!(
                %blood_type,
                observations = series.len(),
                recent_avg,
                previous_avg,
                ?trend,
                ?risk_level,
                "Forecast blood type demand"
            );

            ForecastResult {
                blood_type,
                next_7_day_avg: round_2dp(recent_avg),
                trend,
                risk_level,
            }
        })
        .collect();

    results
}

/// Split a date-sorted series into (recent, previous) non-overlapping windows
fn split_windows<'a, T>(series: &'a [T], window: usize) -> (&'a [T], &'a [T]) {
    let recent_start = series.len().saturating_sub(window);
    let previous_start = recent_start.saturating_sub(window);
    (&series[recent_start..], &series[previous_start..recent_start])
}

/// Mean units of a slice, 0 for an empty slice
fn mean_units(entries: &[&DailyDemand]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let total: u64 = entries.iter().map(|e| u64::from(e.units)).sum();
    total as f64 / entries.len() as f64
}

#[inline]
pub fn classify_trend(recent_avg: f64, previous_avg: f64) -> Trend {
    if recent_avg > previous_avg * UP_FACTOR {
        Trend::Up
    } else if recent_avg < previous_avg * DOWN_FACTOR {
        Trend::Down
    } else {
        Trend::Flat
    }
}

#[inline]
pub fn classify_risk(trend: Trend, recent_avg: f64) -> RiskLevel {
    match trend {
        Trend::Up if recent_avg >= HIGH_RISK_UNITS => RiskLevel::High,
        Trend::Up => RiskLevel::Medium,
        Trend::Down | Trend::Flat => RiskLevel::Low,
    }
}

#[inline]
fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
