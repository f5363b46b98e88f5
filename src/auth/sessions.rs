use rand::{distributions::Alphanumeric, Rng};
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;

const TOKEN_LEN: usize = 48;

fn session_key(token: &str) -> String {
    format!("session:{token}")
}

/// Opaque random identifier, no embedded claims.
fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Token -> user id lookup table in Redis. This is the only thing the cache
/// is used for.
#[derive(Clone)]
pub struct SessionStore {
    conn: ConnectionManager,
    ttl_secs: Option<u64>,
}

impl SessionStore {
    pub async fn connect(redis_url: &str, ttl_secs: Option<u64>) -> anyhow::Result<Self> {
        let client = Client::open(redis_url)?;
        let conn = client.get_connection_manager().await?;
        Ok(Self { conn, ttl_secs })
    }

    /// Mints a fresh token for the user. Previously issued tokens stay valid.
    pub async fn create(&self, user_id: Uuid) -> Result<String, ApiError> {
        let token = generate_token();
        let mut conn = self.conn.clone();
        match self.ttl_secs {
            Some(ttl) => {
                conn.set_ex::<_, _, ()>(session_key(&token), user_id.to_string(), ttl)
                    .await?
            }
            None => {
                conn.set::<_, _, ()>(session_key(&token), user_id.to_string())
                    .await?
            }
        }
        debug!(%user_id, "session created");
        Ok(token)
    }

    pub async fn resolve(&self, token: &str) -> Result<Option<Uuid>, ApiError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(session_key(token)).await?;
        Ok(raw.and_then(|v| Uuid::parse_str(&v).ok()))
    }

    /// Deleting an absent token is not an error.
    pub async fn revoke(&self, token: &str) -> Result<(), ApiError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(session_key(token)).await?;
        debug!("session revoked");
        Ok(())
    }
}
