use anyhow::Context;
use pollencast_client::EnvironmentClient;
use pollencast_core::{
    overall_pollen_risk, pollen_risk_for_allergen, AppConfig, NormalizedEnvironmentData,
};

use crate::Target;

async fn fetch(config: &AppConfig, target: &Target) -> anyhow::Result<NormalizedEnvironmentData> {
    let client = EnvironmentClient::new(config)?;
    let data = match target {
        Target::Named(location) => client
            .get_environment_data(location)
            .await
            .with_context(|| format!("failed to fetch environment data for '{location}'"))?,
        Target::Coordinates { lat, lon } => client
            .get_current_environment_data(*lat, *lon)
            .await
            .with_context(|| format!("failed to fetch environment data for {lat},{lon}"))?,
    };
    tracing::info!(
        location = %data.location,
        days = data.daily_pollen_info.len(),
        "environment data fetched"
    );
    Ok(data)
}

/// Fetch and print the forecast for `target`.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the request fails.
pub(crate) async fn run_forecast(
    config: &AppConfig,
    target: &Target,
    json: bool,
) -> anyhow::Result<()> {
    let data = fetch(config, target).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        for line in render_forecast(&data) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Fetch data for `target` and print today's risk levels.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the request fails.
pub(crate) async fn run_risk(
    config: &AppConfig,
    target: &Target,
    allergen: Option<&str>,
) -> anyhow::Result<()> {
    let data = fetch(config, target).await?;
    println!("{}: overall pollen risk {}", data.location, overall_pollen_risk(&data));
    if let Some(allergen) = allergen {
        println!("{allergen}: {}", pollen_risk_for_allergen(&data, allergen));
    }
    Ok(())
}

/// Table rendering of a normalized forecast, one string per output line.
pub(crate) fn render_forecast(data: &NormalizedEnvironmentData) -> Vec<String> {
    let mut lines = vec![format!(
        "{} \u{2014} {}, {:.1}\u{b0}, humidity {:.0}%, AQI {:.0}, UV {:.0}",
        data.location,
        if data.description.is_empty() {
            "no conditions reported"
        } else {
            data.description.as_str()
        },
        data.temperature,
        data.humidity,
        data.air_quality,
        data.uv_index
    )];

    if data.daily_pollen_info.is_empty() {
        lines.push(format!(
            "no pollen forecast available; reported level: {}",
            overall_pollen_risk(data)
        ));
        return lines;
    }

    lines.push(format!(
        "{:<11}{:<12}{:<7}DOMINANT",
        "DAY", "DATE", "INDEX"
    ));
    for day in &data.daily_pollen_info {
        lines.push(format!(
            "{:<11}{:<12}{:<7}{}",
            day.day_name, day.date, day.overall_index, day.dominant_pollen
        ));
        for pollen in &day.pollen_types {
            lines.push(format!(
                "  {:<20}{:<4}{:<11}{}",
                pollen.display_name,
                pollen.index_value,
                pollen.severity_level,
                pollen.health_impact.join("; ")
            ));
        }
    }

    if let Some(summary) = &data.pollen_summary {
        lines.push(format!(
            "today: {} (index {}), peak: {} over {} day(s)",
            summary.today_dominant, summary.today_index, summary.peak_day, summary.forecast_days
        ));
    }
    lines
}
