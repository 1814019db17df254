use axum::{
  extract::{rejection::JsonRejection, Json, State},
  response::{IntoResponse, Json as JsonResponse, Response},
  routing::{post, Router},
};

use super::model::{CheckEmailRequest, CheckEmailResponse, SendVerificationRequest, StatusResponse};
use crate::{
  app::not_found_response,
  state::{AppState, SharedAppState},
  AppError,
};

pub fn verify_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/verify/check-email", post(check_email_handler))
    .route("/verify/send-verification", post(send_verification_handler))
}

/// Any failure here, including an unreadable body or a malformed address, is handed
/// to the fallback response without an error body, the same as if no route had matched.
pub async fn check_email_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<CheckEmailRequest>, JsonRejection>,
) -> Response {
  let Json(payload) = match payload {
    Ok(payload) => payload,
    Err(rejection) => {
      tracing::warn!("check-email passed through: {}", rejection.body_text());
      return not_found_response();
    }
  };

  match state.check_email_exists(payload).await {
    Ok(is_email_exists) => JsonResponse(CheckEmailResponse::new(is_email_exists)).into_response(),
    Err(e) => {
      tracing::warn!("check-email passed through: {}", e);
      not_found_response()
    }
  }
}

pub async fn send_verification_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<SendVerificationRequest>,
) -> Result<JsonResponse<StatusResponse>, AppError> {
  state.send_verification_code(payload).await?;
  Ok(JsonResponse(StatusResponse::ok()))
}
