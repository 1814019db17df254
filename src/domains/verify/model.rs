use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CheckEmailRequest {
  #[serde(default)]
  #[validate(email(message = "Email 格式不正確"))]
  pub email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendVerificationRequest {
  #[serde(default)]
  pub email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckEmailResult {
  #[serde(rename = "isEmailExists")]
  pub is_email_exists: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckEmailResponse {
  pub status: bool,
  pub result: CheckEmailResult,
}

impl CheckEmailResponse {
  pub fn new(is_email_exists: bool) -> Self {
    Self {
      status: true,
      result: CheckEmailResult { is_email_exists },
    }
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusResponse {
  pub status: bool,
}

impl StatusResponse {
  pub fn ok() -> Self {
    Self { status: true }
  }
}
