pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::SqliteRepository;
use crate::error::ApiError;
use crate::services::dictionary::Dictionary;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    dictionary: Arc<Mutex<Dictionary>>,
}

impl AppState {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Arc::new(Mutex::new(dictionary)),
        }
    }

    /// Exclusive access to the collection. Every read and write goes through
    /// this lock.
    pub fn dictionary(&self) -> Result<MutexGuard<'_, Dictionary>, ApiError> {
        self.dictionary
            .lock()
            .map_err(|_| ApiError::Internal("dictionary lock poisoned".to_string()))
    }
}

/// All API routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Word routes
        .route("/api/words", get(routes::words::list).post(routes::words::create))
        .route("/api/words/import", post(routes::words::import))
        .route(
            "/api/words/:id",
            put(routes::words::update).delete(routes::words::remove),
        )
        // Study routes
        .route("/api/study/question", post(routes::study::question))
        .route("/api/study/answer", post(routes::study::answer))
        // Stats routes
        .route("/api/stats", get(routes::stats::summary))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::info!("Opening word store at {}", config.database_path.display());
    let repository = SqliteRepository::open(&config.database_path)?;

    let dictionary = Dictionary::load(Box::new(repository), config.rng())?;
    if dictionary.is_empty() {
        tracing::info!("Word collection is empty; add words to start drilling");
    }

    let app = build_router(AppState::new(dictionary))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
