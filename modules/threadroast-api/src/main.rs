use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gemini_client::GeminiClient;
use threadroast_common::Config;
use threadroast_core::{ChromiumFetcher, PgRoastStore, Roaster};

mod rest;

pub struct AppState {
    pub roaster: Roaster,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("threadroast_api=info".parse()?)
                .add_directive("threadroast_core=info".parse()?),
        )
        .init();

    let config = Config::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    let store = PgRoastStore::new(pool);
    store.migrate().await?;

    let fetcher = ChromiumFetcher::new(config.chromium_executable());
    let gemini = GeminiClient::new(&config.gemini_api_key, &config.gemini_model);

    let roaster = Roaster::new(Arc::new(fetcher), Arc::new(gemini), Arc::new(store));
    let state = Arc::new(AppState { roaster });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // REST API
        .route("/api/roast/{username}", get(rest::api_roast))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Threadroast API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
