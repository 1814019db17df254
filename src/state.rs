use std::sync::Arc;

use sqlx::PgPool;

use crate::{
  config::AppConfig,
  domains::{
    user::repository::SqlxUserRepository,
    verify::{
      model::{CheckEmailRequest, SendVerificationRequest},
      service::{VerifyService, VerifyServiceError, VerifyServiceImpl},
    },
  },
  email::SmtpTransportFactory,
  utils::token::EmailTokenIssuer,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn check_email_exists(
    &self,
    req: CheckEmailRequest,
  ) -> impl std::future::Future<Output = Result<bool, VerifyServiceError>> + Send;
  fn send_verification_code(
    &self,
    req: SendVerificationRequest,
  ) -> impl std::future::Future<Output = Result<(), VerifyServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub verify_service: Arc<dyn VerifyService>,
}

impl SharedAppState {
  pub fn new(pool: PgPool, config: &AppConfig) -> Self {
    let user_repository = SqlxUserRepository::new(pool);
    let transport_factory = SmtpTransportFactory::new(config.emailer.clone());
    let token_issuer = EmailTokenIssuer::new(config.jwt_secret.clone());
    let verify_service = VerifyServiceImpl::new(user_repository, transport_factory, token_issuer);

    Self::from_service(Arc::new(verify_service))
  }

  pub fn from_service(verify_service: Arc<dyn VerifyService>) -> Self {
    Self { verify_service }
  }
}

impl AppState for SharedAppState {
  async fn check_email_exists(&self, req: CheckEmailRequest) -> Result<bool, VerifyServiceError> {
    self.verify_service.check_email_exists(req).await
  }

  async fn send_verification_code(&self, req: SendVerificationRequest) -> Result<(), VerifyServiceError> {
    self.verify_service.send_verification_code(req).await
  }
}
