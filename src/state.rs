use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::auth::sessions::SessionStore;
use crate::config::AppConfig;
use crate::recognition::{ClarifaiClient, Recognizer};

/// Shared dependencies, built once at startup and handed to every handler
/// through axum state.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub sessions: SessionStore,
    pub recognizer: Arc<dyn Recognizer>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let sessions = SessionStore::connect(&config.redis_url, config.session_ttl_secs)
            .await
            .context("connect to session cache")?;

        let recognizer = Arc::new(ClarifaiClient::new(
            &config.recognition.endpoint,
            &config.recognition.api_key,
        )) as Arc<dyn Recognizer>;

        Ok(Self {
            db,
            sessions,
            recognizer,
        })
    }
}
