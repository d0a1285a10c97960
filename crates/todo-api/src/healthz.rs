//! Handler for `GET /healthz`.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthzResponse {
  pub message: &'static str,
}

/// Liveness only; the store is not consulted.
pub async fn handler() -> Json<HealthzResponse> {
  Json(HealthzResponse { message: "OK" })
}
