//! Headline figures (today's dominant pollen, peak day) for a normalized forecast.

use crate::forecast::{NormalizedPollenForecastDay, PollenSummary};

/// Peak index for a day: the larger of the provider's overall index and the
/// highest per-type index.
#[must_use]
pub fn day_index(day: &NormalizedPollenForecastDay) -> u32 {
    day.pollen_types
        .iter()
        .map(|p| p.index_value)
        .fold(day.overall_index, u32::max)
}

/// Builds headline numbers for a forecast. Returns `None` when there are no
/// days. The first day is treated as today; the earliest day with the highest
/// index is the peak.
#[must_use]
pub fn summarize(days: &[NormalizedPollenForecastDay]) -> Option<PollenSummary> {
    let today = days.first()?;

    let mut peak = today;
    for day in &days[1..] {
        if day_index(day) > day_index(peak) {
            peak = day;
        }
    }

    Some(PollenSummary {
        today_dominant: today.dominant_pollen.clone(),
        today_index: day_index(today),
        forecast_days: days.len(),
        peak_day: peak.day_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::NormalizedPollenType;

    fn day(name: &str, overall: u32, indexes: &[u32]) -> NormalizedPollenForecastDay {
        NormalizedPollenForecastDay {
            date: String::new(),
            day_name: name.to_string(),
            overall_index: overall,
            dominant_pollen: format!("{name}-dominant"),
            pollen_types: indexes
                .iter()
                .map(|&index_value| NormalizedPollenType {
                    index_value,
                    ..NormalizedPollenType::default()
                })
                .collect(),
        }
    }

    #[test]
    fn no_days_no_summary() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn day_index_takes_max_of_overall_and_types() {
        assert_eq!(day_index(&day("Today", 1, &[3, 2])), 3);
        assert_eq!(day_index(&day("Today", 4, &[3, 2])), 4);
        assert_eq!(day_index(&day("Today", 0, &[])), 0);
    }

    #[test]
    fn summary_reports_today_and_peak() {
        let days = vec![
            day("Today", 0, &[2, 1]),
            day("Tomorrow", 0, &[4]),
            day("Friday", 4, &[]),
        ];
        let summary = summarize(&days).unwrap();
        assert_eq!(summary.today_dominant, "Today-dominant");
        assert_eq!(summary.today_index, 2);
        assert_eq!(summary.forecast_days, 3);
        assert_eq!(summary.peak_day, "Tomorrow");
    }

    #[test]
    fn single_day_is_its_own_peak() {
        let summary = summarize(&[day("Today", 0, &[])]).unwrap();
        assert_eq!(summary.peak_day, "Today");
        assert_eq!(summary.today_index, 0);
    }
}
