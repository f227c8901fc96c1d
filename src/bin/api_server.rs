// src/bin/api_server.rs

use palindrome_messages::infra::config::ServerConfig;
use palindrome_messages::infra::logging;
use palindrome_messages::transport;
use palindrome_messages::MessageService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let config = ServerConfig::from_env()?;

    // --- Service Initialization ---
    info!(
        delay_ms = config.classification_delay.as_millis() as u64,
        "initializing message service"
    );
    let service = Arc::new(MessageService::new(config.classification_delay));
    let app_state = transport::http::AppState::new(service.clone());

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{}", listener.local_addr()?);
    info!("swagger UI available at /swagger-ui");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("failed to listen for Ctrl+C: {}", e);
            }
            info!("shutdown signal received");
        })
        .await;

    service.shutdown();
    info!(pending_jobs = service.pending_jobs(), "graceful shutdown complete");

    served?;
    Ok(())
}
