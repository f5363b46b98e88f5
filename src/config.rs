use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionConfig {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub redis_url: String,
    /// When set, session keys expire after this many seconds. Absent by
    /// default: a token stays valid until sign-out deletes it.
    pub session_ttl_secs: Option<u64>,
    pub recognition: RecognitionConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let redis_url = std::env::var("REDIS_URL")?;
        let recognition = RecognitionConfig {
            endpoint: std::env::var("RECOGNITION_API_URL").unwrap_or_else(|_| {
                "https://api.clarifai.com/v2/models/face-detection/outputs".into()
            }),
            api_key: std::env::var("RECOGNITION_API_KEY")?,
        };
        let session_ttl_secs = std::env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok());
        Ok(Self {
            database_url,
            redis_url,
            session_ttl_secs,
            recognition,
        })
    }
}
