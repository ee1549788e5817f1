use tracing_subscriber::{EnvFilter, fmt};

use club_schedule::shared::infrastructure::config::AppConfig;
use club_schedule::shell::http::router;
use club_schedule::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    // In-memory deps for now
    let app = router(AppState::in_memory());

    let addr = config.socket_addr()?;
    tracing::info!("REST API: http://{}/api, GraphQL: http://{}/gql", addr, addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
