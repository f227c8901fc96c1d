use crate::transport::http::handlers::{health, messages};
use crate::transport::http::types::{
    ApiResponse, AppState, CreateMessageRequest, CreateMessageResponse, MessageListResponse,
    MessageView, UpdateMessageRequest,
};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        messages::create_message_handler,
        messages::list_messages_handler,
        messages::delete_all_messages_handler,
        messages::get_message_handler,
        messages::update_message_handler,
        messages::delete_message_handler
    ),
    components(schemas(
        ApiResponse,
        CreateMessageRequest,
        UpdateMessageRequest,
        CreateMessageResponse,
        MessageView,
        MessageListResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/messages",
            get(messages::list_messages_handler)
                .post(messages::create_message_handler)
                .delete(messages::delete_all_messages_handler),
        )
        .route(
            "/messages/:id",
            get(messages::get_message_handler)
                .put(messages::update_message_handler)
                .delete(messages::delete_message_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
