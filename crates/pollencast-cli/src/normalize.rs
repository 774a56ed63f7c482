use std::path::Path;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use pollencast_client::ApiResponse;
use pollencast_core::{normalize_environment_on, NormalizedEnvironmentData, RawEnvironmentResponse};

/// Normalize a payload file and print the result as pretty JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a payload.
pub(crate) fn run_normalize(file: &Path, today: Option<NaiveDate>) -> anyhow::Result<()> {
    let body = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let data = normalize_payload(&body, today)
        .with_context(|| format!("failed to normalize {}", file.display()))?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

/// Parses either a bare raw payload or a `{success, data}` envelope.
pub(crate) fn normalize_payload(
    body: &str,
    today: NaiveDate,
) -> anyhow::Result<NormalizedEnvironmentData> {
    let value: serde_json::Value = serde_json::from_str(body).context("body is not valid JSON")?;

    let raw: RawEnvironmentResponse = if value.get("success").is_some() {
        let envelope: ApiResponse<RawEnvironmentResponse> =
            serde_json::from_value(value).context("envelope does not match the API shape")?;
        envelope.into_data()?
    } else {
        serde_json::from_value(value).context("payload does not match the API shape")?
    };

    Ok(normalize_environment_on(raw, today))
}
