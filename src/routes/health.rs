use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    response::MessageResponse,
    services::diagnostics_service::{self, DiagnosticsReport},
    state::AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthData> {
    Json(HealthData {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Backend is running", body = MessageResponse),
    ),
    tag = "Health"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Electronics Store Backend is running"))
}

#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse),
    ),
    tag = "Health"
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the backend API!"))
}

#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Database diagnostics", body = DiagnosticsReport),
    ),
    tag = "Health"
)]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(diagnostics_service::diagnose(&state).await)
}
