use async_trait::async_trait;
use sqlx::PgPool;

use super::model::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;
  async fn update_verification_token(&self, email: &str, token: &str) -> Result<Option<User>, sqlx::Error>;
}

pub struct SqlxUserRepository {
  pub pool: PgPool,
}

impl SqlxUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
    User::find_by_email(&self.pool, email).await
  }

  async fn update_verification_token(&self, email: &str, token: &str) -> Result<Option<User>, sqlx::Error> {
    User::update_verification_token(&self.pool, email, token).await
  }
}
