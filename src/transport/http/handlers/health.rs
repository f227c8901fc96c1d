use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = &state.service;
    let messages = service.message_count().await;

    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(serde_json::json!({
                "status": "ok",
                "messages": messages,
                "pending_jobs": service.pending_jobs(),
                "classification_delay_ms": service.classification_delay().as_millis() as u64,
                "started_at": state.started_at.to_rfc3339(),
            })),
            error: None,
        }),
    )
}
