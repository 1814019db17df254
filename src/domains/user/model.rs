use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct User {
  pub id: i32,
  pub email: String,
  pub display_name: String,
  pub verification_token: Option<String>,
  pub created_at: Option<DateTime<Utc>>,
}

impl User {
  pub async fn create<'e, E>(executor: E, email: &str, display_name: &str) -> Result<User, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, User>(
      r#"
        INSERT INTO users (email, display_name)
        VALUES ($1, $2)
        RETURNING id, email, display_name, verification_token, created_at
      "#,
    )
    .bind(email)
    .bind(display_name)
    .fetch_one(executor)
    .await
  }

  pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, User>(
      r#"SELECT id, email, display_name, verification_token, created_at FROM users WHERE email = $1"#,
    )
    .bind(email)
    .fetch_optional(executor)
    .await
  }

  /// Overwrites the token in a single statement and returns the updated row, if any.
  pub async fn update_verification_token<'e, E>(
    executor: E,
    email: &str,
    token: &str,
  ) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, User>(
      r#"
        UPDATE users
        SET verification_token = $2
        WHERE email = $1
        RETURNING id, email, display_name, verification_token, created_at
      "#,
    )
    .bind(email)
    .bind(token)
    .fetch_optional(executor)
    .await
  }
}
