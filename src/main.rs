use std::sync::Arc;

mod config;
mod database;
mod dtos;
mod errors;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod views;

#[cfg(test)]
mod test_support;

use config::AppConfig;
use database::connection::get_db_client;
use database::store::{MongoStore, RecordStoreClient};
use middleware::session::SessionKeys;
use services::identity::RestIdentityProvider;
use state::AppState;
use views::templates::Templates;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let db = get_db_client(&config).await?;
    let app_state = initialize_app_state(&config, db)?;

    let app = routes::build_router(app_state);
    start_server(&config, app).await
}

fn initialize_app_state(config: &AppConfig, db: mongodb::Database) -> anyhow::Result<AppState> {
    let records = RecordStoreClient::new(Arc::new(MongoStore::new(db)));

    let identity = Arc::new(RestIdentityProvider::new(
        config.identity_api_key.clone(),
        config.identity_base_url.clone(),
    ));
    tracing::info!("✅ Identity provider configured at {}", config.identity_base_url);

    let sessions = SessionKeys::new(
        config.session_secret.clone(),
        config.session_ttl_secs,
        config.cookie_secure,
    );

    let templates = Templates::new()?;
    tracing::info!("✅ Page templates registered");

    Ok(AppState::new(records, identity, sessions, templates))
}

async fn start_server(config: &AppConfig, app: axum::Router) -> anyhow::Result<()> {
    let addr = config.bind_addr()?;

    tracing::info!("🚀 Server starting on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;
    Ok(())
}
