use std::env;

use anyhow::{Context, Result};

use crate::email::EmailerConfig;

/// Process configuration, read once at startup and handed to whatever needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub database_url: String,
  pub bind_addr: String,
  pub jwt_secret: String,
  pub emailer: EmailerConfig,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL environment variable must be set.")?;
    let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET environment variable must be set.")?;
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    Ok(Self {
      database_url,
      bind_addr,
      jwt_secret,
      emailer: EmailerConfig::from_env()?,
    })
  }
}
