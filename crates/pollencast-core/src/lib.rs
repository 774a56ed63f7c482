//! Pollen and weather data model for the pollencast client.
//!
//! Raw Environment API payloads ([`RawEnvironmentResponse`]) are turned into
//! the display model ([`NormalizedEnvironmentData`]) by
//! [`normalize_environment`]. Normalization and the risk queries never fail;
//! they degrade to documented defaults when upstream data is missing.

pub mod advisory;
pub mod app_config;
pub mod config;
pub mod error;
pub mod forecast;
pub mod normalize;
pub mod risk;
pub mod summary;
pub mod types;

pub use advisory::{health_impact, health_recommendations, severity_level};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use forecast::{
    NormalizedEnvironmentData, NormalizedPollenForecastDay, NormalizedPollenType,
    PollenCategory, PollenSummary, RiskLevel, SeverityLevel,
};
pub use normalize::{day_name, dominant_pollen, normalize_environment, normalize_environment_on};
pub use risk::{overall_pollen_risk, pollen_risk_for_allergen};
pub use summary::summarize;
pub use types::{PollenColor, RawEnvironmentResponse, RawPollenForecastDay, RawPollenType};
