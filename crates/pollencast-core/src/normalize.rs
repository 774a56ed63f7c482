//! Normalization of raw Environment API payloads into the client view model.
//!
//! Normalization never fails: missing collections become empty, missing
//! scalars take their defaults and unknown categories fall back to generic
//! advisories. Day labels are relative to a reference date, so a normalized
//! value goes stale once the local calendar day rolls over and must be
//! recomputed from the raw payload.

use chrono::{Local, NaiveDate};

use crate::advisory::{health_impact, health_recommendations, severity_level};
use crate::forecast::{NormalizedEnvironmentData, NormalizedPollenForecastDay, NormalizedPollenType};
use crate::summary::summarize;
use crate::types::{RawEnvironmentResponse, RawPollenForecastDay, RawPollenType};

/// Label used when a day has no pollen types.
pub const NO_DOMINANT_POLLEN: &str = "None";

/// Normalizes `raw` relative to the local calendar date of this process.
#[must_use]
pub fn normalize_environment(raw: RawEnvironmentResponse) -> NormalizedEnvironmentData {
    normalize_environment_on(raw, Local::now().date_naive())
}

/// Normalizes `raw` with `today` as the reference date for day labels.
#[must_use]
pub fn normalize_environment_on(
    raw: RawEnvironmentResponse,
    today: NaiveDate,
) -> NormalizedEnvironmentData {
    let daily_pollen_info: Vec<NormalizedPollenForecastDay> = raw
        .daily_pollen_info
        .into_iter()
        .map(|day| normalize_forecast_day(day, today))
        .collect();
    let pollen_summary = summarize(&daily_pollen_info);

    NormalizedEnvironmentData {
        location: raw.location,
        latitude: raw.latitude,
        longitude: raw.longitude,
        temperature: raw.temperature,
        humidity: raw.humidity,
        air_quality: raw.air_quality_index,
        uv_index: raw.uv_index,
        description: raw.weather_conditions,
        pollen_count: raw.pollen_count,
        pollen_data: raw.pollen_data,
        daily_pollen_info,
        plant_descriptions: raw.plant_description,
        pollen_summary,
    }
}

/// Normalizes a single forecast day.
#[must_use]
pub fn normalize_forecast_day(
    day: RawPollenForecastDay,
    today: NaiveDate,
) -> NormalizedPollenForecastDay {
    let day_name = day_name(&day.date, today);
    let dominant_pollen = dominant_pollen(&day.pollen_types);

    NormalizedPollenForecastDay {
        date: day.date,
        day_name,
        overall_index: day.overall_index.unwrap_or(0),
        dominant_pollen,
        pollen_types: day.pollen_types.into_iter().map(normalize_pollen_type).collect(),
    }
}

/// Attaches severity, health impact and recommendations to a pollen type.
#[must_use]
pub fn normalize_pollen_type(pollen: RawPollenType) -> NormalizedPollenType {
    NormalizedPollenType {
        severity_level: severity_level(pollen.index_value),
        health_impact: health_impact(&pollen.category),
        health_recommendations: health_recommendations(&pollen.category),
        code: pollen.code,
        display_name: pollen.display_name,
        index_value: pollen.index_value,
        category: pollen.category,
        color: pollen.color,
        in_season: pollen.in_season,
    }
}

/// Returns `"Today"`, `"Tomorrow"` or the full English weekday for `date`.
///
/// Time-of-day is ignored. A date that cannot be parsed is returned as-is.
#[must_use]
pub fn day_name(date: &str, today: NaiveDate) -> String {
    let Some(parsed) = parse_date(date) else {
        return date.to_string();
    };

    if parsed == today {
        "Today".to_string()
    } else if Some(parsed) == today.succ_opt() {
        "Tomorrow".to_string()
    } else {
        parsed.format("%A").to_string()
    }
}

/// Display name of the pollen type with the highest index.
///
/// Ties go to the earliest entry. An empty slice yields `"None"`.
#[must_use]
pub fn dominant_pollen(pollen_types: &[RawPollenType]) -> String {
    pollen_types
        .iter()
        .fold(None::<&RawPollenType>, |best, candidate| match best {
            Some(current) if candidate.index_value <= current.index_value => Some(current),
            _ => Some(candidate),
        })
        .map_or_else(
            || NO_DOMINANT_POLLEN.to_string(),
            |winner| winner.display_name.clone(),
        )
}

/// Parses `"YYYY-MM-DD"`, also accepting a longer ISO-8601 timestamp by
/// reading only its date part.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| s.get(..10).and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::SeverityLevel;
    use crate::types::PollenColor;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pollen(code: &str, name: &str, index_value: u32, category: &str) -> RawPollenType {
        RawPollenType {
            code: code.to_string(),
            display_name: name.to_string(),
            index_value,
            category: category.to_string(),
            color: PollenColor::default(),
            in_season: true,
        }
    }

    fn nyc_payload() -> RawEnvironmentResponse {
        serde_json::from_value(serde_json::json!({
            "location": "NYC",
            "pollen_count": "high",
            "daily_pollen_info": [{
                "date": "2024-03-10",
                "pollen_types": [{
                    "code": "TREE",
                    "display_name": "Tree",
                    "index_value": 4,
                    "category": "HIGH",
                    "in_season": true
                }]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn day_name_today_and_tomorrow() {
        let today = date(2024, 3, 10);
        assert_eq!(day_name("2024-03-10", today), "Today");
        assert_eq!(day_name("2024-03-11", today), "Tomorrow");
    }

    #[test]
    fn day_name_weekday_for_later_days() {
        // 2024-03-13 is a Wednesday.
        assert_eq!(day_name("2024-03-13", date(2024, 3, 10)), "Wednesday");
        assert_eq!(day_name("2024-03-09", date(2024, 3, 10)), "Saturday");
    }

    #[test]
    fn day_name_crosses_month_and_year() {
        assert_eq!(day_name("2025-01-01", date(2024, 12, 31)), "Tomorrow");
        assert_eq!(day_name("2024-03-01", date(2024, 2, 29)), "Tomorrow");
    }

    #[test]
    fn day_name_ignores_time_of_day() {
        assert_eq!(day_name("2024-03-10T23:59:00Z", date(2024, 3, 10)), "Today");
    }

    #[test]
    fn day_name_unparseable_is_passed_through() {
        assert_eq!(day_name("soon", date(2024, 3, 10)), "soon");
        assert_eq!(day_name("", date(2024, 3, 10)), "");
    }

    #[test]
    fn day_name_against_local_clock() {
        let today = Local::now().date_naive();
        let in_three = today + chrono::Days::new(3);
        assert_eq!(day_name(&today.format("%Y-%m-%d").to_string(), today), "Today");
        assert_eq!(
            day_name(&in_three.format("%Y-%m-%d").to_string(), today),
            in_three.format("%A").to_string()
        );
    }

    #[test]
    fn dominant_pollen_first_maximum_wins() {
        let types = vec![
            pollen("A", "Alder", 2, "LOW"),
            pollen("B", "Birch", 5, "VERY_HIGH"),
            pollen("C", "Cedar", 5, "VERY_HIGH"),
        ];
        assert_eq!(dominant_pollen(&types), "Birch");
    }

    #[test]
    fn dominant_pollen_all_zero_picks_first() {
        let types = vec![pollen("A", "Alder", 0, "NONE"), pollen("B", "Birch", 0, "NONE")];
        assert_eq!(dominant_pollen(&types), "Alder");
    }

    #[test]
    fn dominant_pollen_empty_is_none_label() {
        assert_eq!(dominant_pollen(&[]), "None");
    }

    #[test]
    fn empty_forecast_normalizes_to_empty_list() {
        let out = normalize_environment_on(RawEnvironmentResponse::default(), date(2024, 3, 10));
        assert!(out.daily_pollen_info.is_empty());
        assert!(out.plant_descriptions.is_empty());
        assert!(out.pollen_summary.is_none());
    }

    #[test]
    fn flat_fields_are_renamed() {
        let raw: RawEnvironmentResponse = serde_json::from_value(serde_json::json!({
            "location": "Boston, MA",
            "latitude": 42.36,
            "longitude": -71.06,
            "temperature": 12.5,
            "humidity": 60,
            "air_quality_index": 41,
            "uv_index": 3,
            "weather_conditions": "Partly cloudy",
            "plant_description": [{ "type": "TREE" }]
        }))
        .unwrap();
        let out = normalize_environment_on(raw, date(2024, 3, 10));
        assert_eq!(out.location, "Boston, MA");
        assert!((out.air_quality - 41.0).abs() < f64::EPSILON);
        assert!((out.uv_index - 3.0).abs() < f64::EPSILON);
        assert_eq!(out.description, "Partly cloudy");
        assert_eq!(out.plant_descriptions.len(), 1);
        assert!(out.pollen_count.is_none());
    }

    #[test]
    fn nyc_example_scenario() {
        let out = normalize_environment_on(nyc_payload(), date(2024, 3, 10));
        let day = &out.daily_pollen_info[0];
        assert_eq!(day.day_name, "Today");
        assert_eq!(day.dominant_pollen, "Tree");
        assert_eq!(day.overall_index, 0);
        let tree = &day.pollen_types[0];
        assert_eq!(tree.severity_level, SeverityLevel::High);
        assert_eq!(
            tree.health_impact,
            vec![
                "Significant symptoms likely".to_string(),
                "Avoid prolonged outdoor exposure".to_string(),
            ]
        );
        assert_eq!(out.pollen_count.as_deref(), Some("high"));
    }

    #[test]
    fn day_order_is_preserved() {
        let raw = RawEnvironmentResponse {
            daily_pollen_info: vec![
                RawPollenForecastDay {
                    date: "2024-03-12".to_string(),
                    overall_index: Some(2),
                    pollen_types: Vec::new(),
                },
                RawPollenForecastDay {
                    date: "2024-03-10".to_string(),
                    overall_index: None,
                    pollen_types: Vec::new(),
                },
            ],
            ..RawEnvironmentResponse::default()
        };
        let out = normalize_environment_on(raw, date(2024, 3, 10));
        let names: Vec<&str> = out
            .daily_pollen_info
            .iter()
            .map(|d| d.day_name.as_str())
            .collect();
        assert_eq!(names, vec!["Tuesday", "Today"]);
        assert_eq!(out.daily_pollen_info[0].overall_index, 2);
        assert_eq!(out.daily_pollen_info[1].dominant_pollen, "None");
    }

    #[test]
    fn normalizing_twice_on_same_day_is_identical() {
        let raw = nyc_payload();
        let today = date(2024, 3, 10);
        let first = normalize_environment_on(raw.clone(), today);
        let second = normalize_environment_on(raw, today);
        assert_eq!(first, second);
    }

    #[test]
    fn day_labels_shift_when_reference_date_moves() {
        let raw = nyc_payload();
        let first = normalize_environment_on(raw.clone(), date(2024, 3, 9));
        let second = normalize_environment_on(raw, date(2024, 3, 10));
        assert_eq!(first.daily_pollen_info[0].day_name, "Tomorrow");
        assert_eq!(second.daily_pollen_info[0].day_name, "Today");
    }

    #[test]
    fn output_json_is_camel_case_and_fully_present() {
        let out = normalize_environment_on(RawEnvironmentResponse::default(), date(2024, 3, 10));
        let json = serde_json::to_value(&out).unwrap();
        assert!(json["dailyPollenInfo"].as_array().unwrap().is_empty());
        assert!(json["plantDescriptions"].as_array().unwrap().is_empty());
        assert!(json.get("airQuality").is_some());
        assert!(json.get("uvIndex").is_some());
    }
}
