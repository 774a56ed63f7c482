//! Severity and advisory lookup tables.
//!
//! The advisory strings are stable copy: consumers and golden tests compare
//! them verbatim.

use crate::forecast::{PollenCategory, SeverityLevel};

/// Maps a pollen index value onto the five-step severity scale.
///
/// Thresholds are inclusive upper bounds: `0` is `None`, `1` is `Very Low`,
/// `2` is `Low`, `3` is `Moderate`, `4` is `High` and anything above is
/// `Very High`.
#[must_use]
pub fn severity_level(index_value: u32) -> SeverityLevel {
    match index_value {
        0 => SeverityLevel::None,
        1 => SeverityLevel::VeryLow,
        2 => SeverityLevel::Low,
        3 => SeverityLevel::Moderate,
        4 => SeverityLevel::High,
        _ => SeverityLevel::VeryHigh,
    }
}

/// Advisory sentences describing the expected health impact of a provider
/// category. Unrecognized categories get a generic two-line advisory.
#[must_use]
pub fn health_impact(category: &str) -> Vec<String> {
    let lines: &[&str] = match PollenCategory::parse(category) {
        Some(PollenCategory::None) => &["No pollen-related symptoms expected"],
        Some(PollenCategory::VeryLow) => &["Symptoms unlikely for most people"],
        Some(PollenCategory::Low) => &["Mild symptoms possible for highly sensitive people"],
        Some(PollenCategory::Moderate) => &[
            "Symptoms likely for sensitive individuals",
            "Consider limiting time outdoors",
        ],
        Some(PollenCategory::High) => &[
            "Significant symptoms likely",
            "Avoid prolonged outdoor exposure",
        ],
        Some(PollenCategory::VeryHigh) => &[
            "Severe symptoms likely for allergy sufferers",
            "Stay indoors when possible",
        ],
        None => &[
            "Pollen impact unknown",
            "Monitor symptoms and follow local advice",
        ],
    };
    to_owned_lines(lines)
}

/// Suggested actions for a provider category.
#[must_use]
pub fn health_recommendations(category: &str) -> Vec<String> {
    let lines: &[&str] = match PollenCategory::parse(category) {
        Some(PollenCategory::None | PollenCategory::VeryLow) => &[
            "Perfect day for outdoor activities!",
            "Enjoy time outside",
        ],
        Some(PollenCategory::Low) => &[
            "Generally safe for outdoor activities",
            "Check forecast if sensitive",
        ],
        Some(PollenCategory::Moderate) => &[
            "Limit outdoor activities if sensitive",
            "Keep windows closed",
            "Take allergy medication as prescribed",
        ],
        Some(PollenCategory::High) => &[
            "Limit outdoor activities",
            "Keep windows closed",
            "Use air conditioning",
            "Take allergy medication preventively",
        ],
        Some(PollenCategory::VeryHigh) => &[
            "Avoid outdoor activities",
            "Stay indoors with windows closed",
            "Use air purifiers",
            "Consult healthcare provider",
        ],
        None => &["Check local weather for pollen updates"],
    };
    to_owned_lines(lines)
}

fn to_owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| (*s).to_string()).collect()
}
