use std::net::SocketAddr;
use seatwise_api::{app, app_config::Config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "seatwise_api=debug,seatwise_allocator=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        "Starting Seatwise API on port {} ({}x{} cabin)",
        config.server.port,
        config.seat_map.rows,
        config.seat_map.seats_per_row
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let app = app(AppState::new(config));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
