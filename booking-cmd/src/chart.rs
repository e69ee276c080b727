//! Print dashboard chart configurations.

use booking_core::charts;

/// Render the named chart's config as JSON.
pub fn chart_config_json(id: &str, pretty: bool) -> anyhow::Result<String> {
    let config = charts::chart_by_id(id)?;
    let json = if pretty {
        serde_json::to_string_pretty(&config)?
    } else {
        config.to_json()?
    };
    Ok(json)
}

pub fn print_chart_config(id: &str, pretty: bool) -> anyhow::Result<()> {
    println!("{}", chart_config_json(id, pretty)?);
    Ok(())
}
