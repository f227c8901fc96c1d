use crate::domain::MessageId;
use crate::transport::http::handlers::common::{invalid_body, invalid_id, message_error};
use crate::transport::http::types::{
    AppState, CreateMessageRequest, CreateMessageResponse, MessageListResponse,
    MessageView, UpdateMessageRequest,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[utoipa::path(
    post,
    path = "/messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message stored, classification pending", body = CreateMessageResponse),
        (status = 400, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn create_message_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return invalid_body(e, r#"{"text": "..."}"#).into_response(),
    };

    let id = state.service.create(request.text).await;
    (StatusCode::CREATED, Json(CreateMessageResponse { id })).into_response()
}

#[utoipa::path(
    get,
    path = "/messages/{id}",
    params(
        ("id" = u64, Path, description = "Message id")
    ),
    responses(
        (status = 200, description = "Current snapshot of the message", body = MessageView),
        (status = 400, description = "Invalid message id", body = ApiResponse),
        (status = 404, description = "Message not found", body = ApiResponse)
    )
)]
pub async fn get_message_handler(
    State(state): State<AppState>,
    id: Result<Path<MessageId>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return invalid_id(e).into_response(),
    };

    match state.service.get(id).await {
        Ok(message) => (StatusCode::OK, Json(MessageView::from(message))).into_response(),
        Err(e) => message_error(e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/messages/{id}",
    params(
        ("id" = u64, Path, description = "Message id")
    ),
    request_body = UpdateMessageRequest,
    responses(
        (status = 200, description = "Text replaced, classification pending again"),
        (status = 400, description = "Invalid message id or JSON body", body = ApiResponse),
        (status = 404, description = "Message not found", body = ApiResponse)
    )
)]
pub async fn update_message_handler(
    State(state): State<AppState>,
    id: Result<Path<MessageId>, PathRejection>,
    request: Result<Json<UpdateMessageRequest>, JsonRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return invalid_id(e).into_response(),
    };
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return invalid_body(e, r#"{"text": "..."}"#).into_response(),
    };

    match state.service.update(id, request.text).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => message_error(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/messages/{id}",
    params(
        ("id" = u64, Path, description = "Message id")
    ),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 400, description = "Invalid message id", body = ApiResponse),
        (status = 404, description = "Message not found", body = ApiResponse)
    )
)]
pub async fn delete_message_handler(
    State(state): State<AppState>,
    id: Result<Path<MessageId>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return invalid_id(e).into_response(),
    };

    match state.service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => message_error(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/messages",
    responses(
        (status = 200, description = "All messages, ascending by id", body = MessageListResponse)
    )
)]
pub async fn list_messages_handler(State(state): State<AppState>) -> Response {
    let messages = state
        .service
        .list()
        .await
        .into_iter()
        .map(MessageView::from)
        .collect();

    (StatusCode::OK, Json(MessageListResponse { messages })).into_response()
}

#[utoipa::path(
    delete,
    path = "/messages",
    responses(
        (status = 204, description = "All messages deleted (also when there were none)")
    )
)]
pub async fn delete_all_messages_handler(State(state): State<AppState>) -> Response {
    state.service.delete_all().await;
    StatusCode::NO_CONTENT.into_response()
}
