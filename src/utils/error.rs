use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "status": false,
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<crate::domains::verify::service::VerifyServiceError> for AppError {
  fn from(error: crate::domains::verify::service::VerifyServiceError) -> Self {
    use crate::domains::verify::service::VerifyServiceError;
    match error {
      VerifyServiceError::BadRequest(msg) => AppError::bad_request(msg),
      VerifyServiceError::InternalServerError(msg) => {
        tracing::error!("Internal error: {}", msg);
        AppError::internal_server_error("Internal server error occurred")
      }
    }
  }
}
