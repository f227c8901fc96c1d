use crate::domain::MessageError;
use crate::transport::http::types::ApiResponse;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::Json;

pub type ErrorResponse = (StatusCode, Json<ApiResponse>);

pub fn error_response(status: StatusCode, message: String) -> ErrorResponse {
    (
        status,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }),
    )
}

pub fn message_error(err: MessageError) -> ErrorResponse {
    match err {
        MessageError::NotFound(_) => error_response(StatusCode::NOT_FOUND, err.to_string()),
    }
}

pub fn invalid_body(err: JsonRejection, expected: &str) -> ErrorResponse {
    error_response(
        StatusCode::BAD_REQUEST,
        format!("Invalid JSON body: {} (expected: {})", err.body_text(), expected),
    )
}

pub fn invalid_id(err: PathRejection) -> ErrorResponse {
    error_response(
        StatusCode::BAD_REQUEST,
        format!("Invalid message id: {}", err.body_text()),
    )
}
