use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("POLLENCAST_ENV", "development"))?;

    let api_base_url = or_default("POLLENCAST_API_URL", "http://127.0.0.1:8090/api/v1");
    if api_base_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "POLLENCAST_API_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let api_token = lookup("POLLENCAST_API_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty());
    if env == Environment::Production && api_token.is_none() {
        return Err(ConfigError::MissingEnvVar("POLLENCAST_API_TOKEN".to_string()));
    }

    let log_level = or_default("POLLENCAST_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("POLLENCAST_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "POLLENCAST_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let max_retries = parse_u32("POLLENCAST_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("POLLENCAST_RETRY_BACKOFF_BASE_MS", "500")?;
    let default_location = or_default("POLLENCAST_DEFAULT_LOCATION", "New York, NY");

    Ok(AppConfig {
        env,
        api_base_url,
        api_token,
        log_level,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        default_location,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "POLLENCAST_ENV".to_string(),
            reason: format!("expected development, test or production, got '{other}'"),
        }),
    }
}
