use axum::{
  http::StatusCode,
  response::{Html, IntoResponse, Response},
  routing::get,
  Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{domains::verify::rest::verify_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(hello_world_handler))
    .nest("/api/v1", verify_routes())
    .fallback(not_found_handler)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

pub async fn hello_world_handler() -> Html<String> {
  Html("<h1>Hello, World!</h1>".to_string())
}

/// What a request gets when no handler answers it.
pub fn not_found_response() -> Response {
  (
    StatusCode::NOT_FOUND,
    Json(json!({ "status": false, "message": "Not Found" })),
  )
    .into_response()
}

async fn not_found_handler() -> Response {
  not_found_response()
}
