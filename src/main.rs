use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use attendance::config::AppConfig;
use attendance::modules::attendance::adapters::outbound::records_in_memory::InMemoryRecords;
use attendance::shell::http::router;
use attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let policy = config.geofence_policy();
    tracing::info!(
        office_latitude = policy.office().latitude,
        office_longitude = policy.office().longitude,
        max_distance_meters = policy.max_distance_meters(),
        "geofence configured"
    );

    // In-memory deps for now
    let records = Arc::new(InMemoryRecords::new());
    let state = AppState::in_memory(&config, records);

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    tracing::info!("HTTP endpoint: http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
