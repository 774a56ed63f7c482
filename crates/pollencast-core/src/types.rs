//! Environment API response types.
//!
//! These model the snake_case JSON returned by the `/environment` endpoints.
//! Every field is optional on the wire: a missing key or an explicit `null`
//! falls back to the type's default so that a minimal payload (for example
//! when the upstream pollen provider is disabled) still deserializes.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a pollen index from any JSON number, rounding to the nearest
/// integer and clamping into `u32`. Non-numeric values yield `None`.
fn index_from_value(value: &serde_json::Value) -> Option<u32> {
    let number = value.as_f64().filter(|n| n.is_finite())?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = number.round().clamp(0.0, f64::from(u32::MAX)) as u32;
    Some(index)
}

/// Index field that accepts `4`, `4.0` or `null`; anything unusable is `0`.
fn lenient_index<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(index_from_value(&value).unwrap_or(0))
}

fn lenient_optional_index<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(index_from_value(&value))
}

/// Weather, air quality and pollen payload for one location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawEnvironmentResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub humidity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub air_quality_index: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uv_index: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weather_conditions: String,
    /// Legacy single-string pollen level (`"low"`, `"high"`, ...).
    #[serde(default)]
    pub pollen_count: Option<String>,
    /// Provider payload passed through untouched.
    #[serde(default)]
    pub pollen_data: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily_pollen_info: Vec<RawPollenForecastDay>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plant_description: Vec<serde_json::Value>,
}

/// One forecast day.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawPollenForecastDay {
    /// Date in `"YYYY-MM-DD"` format.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_optional_index")]
    pub overall_index: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pollen_types: Vec<RawPollenType>,
}

/// Forecast for a single plant category (tree, grass, weed) on one day.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawPollenType {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "lenient_index")]
    pub index_value: u32,
    /// Provider category: `NONE`, `VERY_LOW`, `LOW`, `MODERATE`, `HIGH` or
    /// `VERY_HIGH`. Kept as a string; unknown values must survive.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: PollenColor,
    #[serde(default, deserialize_with = "null_as_default")]
    pub in_season: bool,
}

/// Display color suggested by the provider. Components are in `0.0..=1.0`
/// and any of them may be omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct PollenColor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub red: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub green: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blue: f64,
}
