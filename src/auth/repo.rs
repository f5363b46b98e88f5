use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::ApiError;
use crate::profile::repo::Profile;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }
}

/// Inserts the user row and its login metadata as one atomic pair; a failure
/// on either side rolls back both.
pub async fn create_user(
    db: &PgPool,
    email: &str,
    name: &str,
    password_hash: &str,
) -> Result<Profile, ApiError> {
    let mut tx = db.begin().await?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id, email, name, password_hash, created_at
        "#,
    )
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ApiError::Conflict("email already registered")
        }
        _ => ApiError::from(e),
    })?;

    let (entries, joined_at, image_url): (i64, OffsetDateTime, String) = sqlx::query_as(
        r#"
        INSERT INTO login_meta (user_id)
        VALUES ($1)
        RETURNING entries, joined_at, image_url
        "#,
    )
    .bind(user.id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Profile {
        id: user.id,
        email: user.email,
        name: user.name,
        entries,
        joined_at,
        image_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_never_serializes() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@x.com".into(),
            name: "A".into(),
            password_hash: "argon2-secret".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("a@x.com"));
        assert!(!json.contains("argon2-secret"));
        assert!(!json.contains("password_hash"));
    }
}
