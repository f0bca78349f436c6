use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod dto;
mod error;
mod handlers;
mod models;
mod services;

use config::Config;
use db::EntryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: EntryStore,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodlog_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env());

    // Storage
    let pool = db::create_pool(&config.database_url, config.db_max_connections).await?;
    let store = EntryStore::new(pool, config.storage_key.as_str());
    tracing::info!(key = %store.key(), "Mood history store ready");

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = build_router(state).layer(cors_layer(&config)?);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Rating input
        .route("/api/mood/preview", get(handlers::mood::preview))
        .route("/api/symptoms", get(handlers::mood::list_symptoms))
        .route("/api/strategies", get(handlers::mood::get_strategies))
        // History
        .route(
            "/api/entries",
            post(handlers::entries::create_entry)
                .get(handlers::entries::get_history)
                .delete(handlers::entries::clear_history),
        );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = vec![config.frontend_url.parse::<axum::http::HeaderValue>()?];
    for o in &config.cors_extra_origins {
        match o.parse::<axum::http::HeaderValue>() {
            Ok(hv) => origins.push(hv),
            Err(_) => tracing::warn!(origin = %o, "Ignoring invalid CORS origin"),
        }
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]))
}
