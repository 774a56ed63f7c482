//! Risk queries over normalized environment data.
//!
//! The overall-risk query uses the coarse three-bucket [`RiskLevel`] table,
//! not the five-step [`crate::SeverityLevel`] attached to each pollen type.

use crate::forecast::{NormalizedEnvironmentData, RiskLevel};

/// Returned when no legacy pollen count is available.
pub const DEFAULT_POLLEN_RISK: &str = "moderate";

/// Returned when no pollen type matches an allergen.
pub const UNKNOWN_POLLEN_RISK: &str = "unknown";

/// Overall pollen risk for today as `"low"`, `"moderate"` or `"high"`.
///
/// Without a daily forecast this falls back to the legacy `pollen_count`
/// string, or `"moderate"` when that is also missing. A forecast day without
/// any pollen types is `"low"`.
#[must_use]
pub fn overall_pollen_risk(data: &NormalizedEnvironmentData) -> String {
    let Some(today) = data.daily_pollen_info.first() else {
        return data
            .pollen_count
            .clone()
            .unwrap_or_else(|| DEFAULT_POLLEN_RISK.to_string());
    };

    let max_index = today.pollen_types.iter().map(|p| p.index_value).max();
    match max_index {
        Some(index) => RiskLevel::from_index(index).to_string(),
        None => RiskLevel::Low.to_string(),
    }
}

/// Lowercased category of the first pollen type for today whose code or
/// display name contains `allergen` (case-insensitive), or `"unknown"`.
#[must_use]
pub fn pollen_risk_for_allergen(data: &NormalizedEnvironmentData, allergen: &str) -> String {
    let needle = allergen.to_lowercase();

    data.daily_pollen_info
        .first()
        .and_then(|today| {
            today.pollen_types.iter().find(|p| {
                p.code.to_lowercase().contains(&needle)
                    || p.display_name.to_lowercase().contains(&needle)
            })
        })
        .map_or_else(
            || UNKNOWN_POLLEN_RISK.to_string(),
            |p| p.category.to_lowercase(),
        )
}
