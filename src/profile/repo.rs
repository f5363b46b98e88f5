use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Joined user + login metadata view, the record every profile-facing route
/// works with.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub entries: i64,
    pub joined_at: OffsetDateTime,
    pub image_url: String,
}

impl Profile {
    pub async fn find(db: &PgPool, id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
        sqlx::query_as::<_, Profile>(
            r#"
            SELECT u.id, u.email, u.name, m.entries, m.joined_at, m.image_url
            FROM users u
            JOIN login_meta m ON m.user_id = u.id
            WHERE u.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Adds one to the entries counter and records the submitted image, if
    /// any, in a single statement. Returns the updated count, or `None` for
    /// an unknown user id.
    pub async fn bump_entries(
        db: &PgPool,
        id: Uuid,
        image_url: Option<&str>,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE login_meta
            SET entries = entries + 1,
                image_url = COALESCE($2, image_url)
            WHERE user_id = $1
            RETURNING entries
            "#,
        )
        .bind(id)
        .bind(image_url)
        .fetch_optional(db)
        .await
    }
}
