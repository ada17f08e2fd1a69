pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::backend::BackendClient;
use crate::config::AppConfig;
use state::AppState;

/// Build the gateway router. Kept separate from [`run_server`] so tests can
/// drive the full routing stack on an ephemeral port.
pub fn build_router(state: Arc<AppState>) -> Router {
    let app = Router::new()
        .route("/api/syncData", post(handlers::sync_data))
        .route("/api/health", get(handlers::health_check));

    // [SECURITY] Mock API routes - only compiled when 'mock-api' feature is enabled.
    // Production builds MUST be compiled with `--no-default-features` to exclude this.
    #[cfg(feature = "mock-api")]
    let app = app.nest(
        "/internal/mock",
        Router::new().route("/{office}/{metric}", post(handlers::mock_sheet_rows)),
    );

    app.with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP Gateway server
pub async fn run_server(config: &AppConfig, port: u16) {
    let backend = match BackendClient::new(&config.backend) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ FATAL: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(backend));
    let app = build_router(state);

    // Bind address
    let addr = format!("{}:{}", config.gateway.host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Syncgate listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    println!("🔄 Sync endpoint: POST http://{}/api/syncData", addr);
    #[cfg(feature = "mock-api")]
    println!(
        "🧪 Mock sheet API: POST http://{}/internal/mock/{{office}}/{{metric}}",
        addr
    );

    tracing::info!(%addr, backend = %config.backend.base_url, "gateway started");

    // Start server
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}

/// Resolve when SIGINT or SIGTERM arrives so in-flight syncs can finish.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}
