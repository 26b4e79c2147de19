//! Prints the baseline lakehouse dashboard snapshot as JSON.

use lakehouse_advisor::application::DashboardSession;
use lakehouse_advisor::config::AppConfig;
use lakehouse_advisor::telemetry;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init_tracing(&config.logging)?;

    let session = DashboardSession::with_static_matrix()?;
    let view = session.snapshot();

    tracing::info!(
        total_price = view.totals.price,
        time_to_market_days = view.totals.time_to_market_days,
        scaling_factor = %view.scaling_factor,
        "Baseline snapshot computed"
    );

    let json = if config.output.pretty {
        serde_json::to_string_pretty(view)?
    } else {
        serde_json::to_string(view)?
    };
    println!("{}", json);

    Ok(())
}
