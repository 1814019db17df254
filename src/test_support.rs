use std::{
  collections::HashMap,
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
  },
};

use anyhow::{bail, Result};
use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  domains::{
    user::{model::User, repository::UserRepository},
    verify::service::VerifyServiceImpl,
  },
  email::{EmailMessage, MailTransport, MailTransportFactory},
  state::SharedAppState,
  utils::token::EmailTokenIssuer,
};

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

#[derive(Default)]
struct UserTable {
  users: HashMap<String, User>,
  applied: HashMap<String, Vec<String>>,
  next_id: i32,
}

/// Keeps users in memory and records every token write in the order it was applied.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
  table: Arc<Mutex<UserTable>>,
}

impl InMemoryUserRepository {
  pub fn with_users(emails: &[&str]) -> Self {
    let repo = Self::default();
    {
      let mut table = repo.table.lock().unwrap();
      for email in emails {
        table.next_id += 1;
        let user = User {
          id: table.next_id,
          email: email.to_string(),
          display_name: email.split('@').next().unwrap_or_default().to_string(),
          verification_token: None,
          created_at: None,
        };
        table.users.insert(email.to_string(), user);
      }
    }
    repo
  }

  pub fn token_of(&self, email: &str) -> Option<String> {
    let table = self.table.lock().unwrap();
    table.users.get(email).and_then(|u| u.verification_token.clone())
  }

  pub fn applied_tokens(&self, email: &str) -> Vec<String> {
    let table = self.table.lock().unwrap();
    table.applied.get(email).cloned().unwrap_or_default()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
    Ok(self.table.lock().unwrap().users.get(email).cloned())
  }

  async fn update_verification_token(&self, email: &str, token: &str) -> Result<Option<User>, sqlx::Error> {
    let mut table = self.table.lock().unwrap();
    let Some(user) = table.users.get_mut(email) else {
      return Ok(None);
    };
    user.verification_token = Some(token.to_string());
    let updated = user.clone();
    table
      .applied
      .entry(email.to_string())
      .or_default()
      .push(token.to_string());
    Ok(Some(updated))
  }
}

/// Hands out transports that store messages instead of sending them.
#[derive(Clone, Default)]
pub struct RecordingTransportFactory {
  sent: Arc<Mutex<Vec<EmailMessage>>>,
  built: Arc<AtomicUsize>,
  fail: bool,
}

impl RecordingTransportFactory {
  pub fn new() -> Self {
    Self::default()
  }

  /// A factory whose provider check always fails.
  pub fn failing() -> Self {
    Self {
      fail: true,
      ..Self::default()
    }
  }

  pub fn sent(&self) -> Vec<EmailMessage> {
    self.sent.lock().unwrap().clone()
  }

  pub fn transports_built(&self) -> usize {
    self.built.load(Ordering::SeqCst)
  }
}

struct RecordingTransport {
  sent: Arc<Mutex<Vec<EmailMessage>>>,
}

#[async_trait]
impl MailTransport for RecordingTransport {
  async fn send_mail(&self, message: &EmailMessage) -> Result<()> {
    self.sent.lock().unwrap().push(message.clone());
    Ok(())
  }
}

#[async_trait]
impl MailTransportFactory for RecordingTransportFactory {
  async fn transport(&self) -> Result<Box<dyn MailTransport>> {
    self.built.fetch_add(1, Ordering::SeqCst);
    if self.fail {
      bail!("connection refused");
    }
    Ok(Box::new(RecordingTransport {
      sent: Arc::clone(&self.sent),
    }))
  }
}

pub fn app_with(repo: InMemoryUserRepository, factory: RecordingTransportFactory) -> Router {
  let service = VerifyServiceImpl::new(repo, factory, EmailTokenIssuer::new(TEST_JWT_SECRET));
  create_app(SharedAppState::from_service(Arc::new(service)))
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

/// POST with no body and no content-type.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
