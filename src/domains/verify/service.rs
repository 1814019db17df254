use async_trait::async_trait;
use std::error::Error;
use validator::Validate;

use super::model::{CheckEmailRequest, SendVerificationRequest};
use crate::{
  domains::user::repository::UserRepository,
  email::{build_verification_email, MailTransportFactory},
  impl_service_error_conversions,
  utils::token::EmailTokenIssuer,
};

pub const SEND_FAILED_MESSAGE: &str = "發送失敗，請確認電子信箱";

#[derive(Debug)]
pub enum VerifyServiceError {
  BadRequest(String),
  InternalServerError(String),
}

impl Error for VerifyServiceError {}

impl std::fmt::Display for VerifyServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      VerifyServiceError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
      VerifyServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

impl_service_error_conversions!(VerifyServiceError, InternalServerError);

#[async_trait]
pub trait VerifyService: Send + Sync {
  async fn check_email_exists(&self, req: CheckEmailRequest) -> Result<bool, VerifyServiceError>;
  async fn send_verification_code(&self, req: SendVerificationRequest) -> Result<(), VerifyServiceError>;
}

pub struct VerifyServiceImpl<U, F> {
  user_repository: U,
  transport_factory: F,
  token_issuer: EmailTokenIssuer,
}

impl<U, F> VerifyServiceImpl<U, F>
where
  U: UserRepository,
  F: MailTransportFactory,
{
  pub fn new(user_repository: U, transport_factory: F, token_issuer: EmailTokenIssuer) -> Self {
    Self {
      user_repository,
      transport_factory,
      token_issuer,
    }
  }
}

#[async_trait]
impl<U, F> VerifyService for VerifyServiceImpl<U, F>
where
  U: UserRepository,
  F: MailTransportFactory,
{
  async fn check_email_exists(&self, req: CheckEmailRequest) -> Result<bool, VerifyServiceError> {
    req
      .validate()
      .map_err(|e| VerifyServiceError::BadRequest(e.to_string()))?;

    let user = self.user_repository.find_by_email(&req.email).await?;
    Ok(user.is_some())
  }

  async fn send_verification_code(&self, req: SendVerificationRequest) -> Result<(), VerifyServiceError> {
    let issued = self.token_issuer.generate()?;

    // The token is written before the transport exists, so a mail failure leaves it in place.
    let user = self
      .user_repository
      .update_verification_token(&req.email, &issued.token)
      .await?
      .ok_or_else(|| VerifyServiceError::BadRequest(SEND_FAILED_MESSAGE.to_string()))?;

    let transport = self.transport_factory.transport().await?;
    transport
      .send_mail(&build_verification_email(&req.email, &issued.code))
      .await?;

    tracing::info!("Verification code sent to user {}", user.id);
    Ok(())
  }
}
