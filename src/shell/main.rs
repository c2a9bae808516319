use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use hotel_bookings::shell::catalog::load_hotel;
use hotel_bookings::shell::config::Config;
use hotel_bookings::shell::http::app;
use hotel_bookings::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let hotel = Arc::new(load_hotel(&config.catalog_path)?);
    let state = AppState::new(hotel, config.commit_attempts);

    let addr = config.bind_addr()?;
    tracing::info!("REST API: http://{addr}/  GraphQL endpoint: http://{addr}/gql");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
