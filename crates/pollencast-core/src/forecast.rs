//! Client-side view model produced by [`crate::normalize`].
//!
//! Serializes as camelCase JSON. Collections are always present (possibly
//! empty) so consumers can iterate without null checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::PollenColor;

/// Normalized weather, air quality and pollen data for one location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEnvironmentData {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub air_quality: f64,
    pub uv_index: f64,
    pub description: String,
    /// Legacy single-string pollen level, kept for older consumers.
    pub pollen_count: Option<String>,
    pub pollen_data: Option<serde_json::Value>,
    pub daily_pollen_info: Vec<NormalizedPollenForecastDay>,
    pub plant_descriptions: Vec<serde_json::Value>,
    pub pollen_summary: Option<PollenSummary>,
}

/// One forecast day with derived labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPollenForecastDay {
    pub date: String,
    /// `"Today"`, `"Tomorrow"` or an English weekday name. Relative to the
    /// date the payload was normalized on.
    pub day_name: String,
    pub overall_index: u32,
    /// Display name of the highest-index pollen type, or `"None"`.
    pub dominant_pollen: String,
    pub pollen_types: Vec<NormalizedPollenType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPollenType {
    pub code: String,
    pub display_name: String,
    pub index_value: u32,
    pub category: String,
    pub color: PollenColor,
    pub in_season: bool,
    pub severity_level: SeverityLevel,
    pub health_impact: Vec<String>,
    pub health_recommendations: Vec<String>,
}

/// Headline numbers for a multi-day forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollenSummary {
    pub today_dominant: String,
    pub today_index: u32,
    pub forecast_days: usize,
    pub peak_day: String,
}

/// Five-step severity derived from a pollen index value.
///
/// Variants are declared in ascending order so `Ord` matches severity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SeverityLevel {
    #[default]
    None,
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl SeverityLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::None => "None",
            SeverityLevel::VeryLow => "Very Low",
            SeverityLevel::Low => "Low",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::High => "High",
            SeverityLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Qualitative bucket assigned upstream by the pollen provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PollenCategory {
    None,
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl PollenCategory {
    /// Case-insensitive parse of the provider's category string.
    ///
    /// Returns `None` for anything outside the six known buckets.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Some(PollenCategory::None),
            "VERY_LOW" => Some(PollenCategory::VeryLow),
            "LOW" => Some(PollenCategory::Low),
            "MODERATE" => Some(PollenCategory::Moderate),
            "HIGH" => Some(PollenCategory::High),
            "VERY_HIGH" => Some(PollenCategory::VeryHigh),
            _ => None,
        }
    }
}

/// Coarse three-bucket risk used by the overall-risk query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Buckets a pollen index: `<=1` low, `<=3` moderate, otherwise high.
    #[must_use]
    pub fn from_index(index_value: u32) -> Self {
        match index_value {
            0..=1 => RiskLevel::Low,
            2..=3 => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
