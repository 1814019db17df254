use std::env;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

pub const EMAIL_SERVICE_DISABLED: &str = "Email 服務未啟用";

#[derive(Debug, Clone, Deserialize)]
pub struct EmailerConfig {
  pub host: String,
  pub port: u16,
  pub user: Option<String>,
  pub password: Option<String>,
}

impl Default for EmailerConfig {
  fn default() -> Self {
    EmailerConfig {
      host: "smtp.gmail.com".to_string(),
      port: 465,
      user: None,
      password: None,
    }
  }
}

impl EmailerConfig {
  pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
    EmailerConfig {
      user: Some(user.into()),
      password: Some(password.into()),
      ..Default::default()
    }
  }

  pub fn from_env() -> Result<Self> {
    let defaults = EmailerConfig::default();
    let port = match env::var("EMAILER_PORT") {
      Ok(port) => port.parse().context("EMAILER_PORT must be a valid port number")?,
      Err(_) => defaults.port,
    };

    Ok(EmailerConfig {
      host: env::var("EMAILER_HOST").unwrap_or(defaults.host),
      port,
      user: env::var("EMAILER_USER").ok(),
      password: env::var("EMAILER_PASSWORD").ok(),
    })
  }

  /// Returns `(user, password)`; empty values count as missing.
  pub fn credentials(&self) -> Result<(&str, &str)> {
    let user = self.user.as_deref().filter(|u| !u.is_empty());
    let password = self.password.as_deref().filter(|p| !p.is_empty());

    match (user, password) {
      (Some(user), Some(password)) => Ok((user, password)),
      _ => Err(anyhow!(EMAIL_SERVICE_DISABLED)),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
  pub to: String,
  pub subject: String,
  pub html: String,
}

impl EmailMessage {
  pub fn new(to: String, subject: String, html: String) -> Self {
    EmailMessage { to, subject, html }
  }
}
