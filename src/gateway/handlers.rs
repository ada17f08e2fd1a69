use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::backend::SyncOutcome;
use crate::logging::SYNC_TRACE_TARGET;

use super::state::AppState;
use super::types::{HealthResponse, SyncDataRequest, SyncEnvelope};

/// POST /api/syncData
///
/// Proxies one sheet sync to the private API. The outer status is 200 for
/// every answered sync, including downstream failures; 500 is reserved for
/// internal errors (bad request body, transport failure, non-JSON body).
#[utoipa::path(
    post,
    path = "/api/syncData",
    tag = "Sync",
    request_body = SyncDataRequest,
    responses(
        (status = 200, description = "Sync answered; success flag reflects the downstream result", body = SyncEnvelope),
        (status = 500, description = "Internal error while syncing", body = SyncEnvelope)
    )
)]
pub async fn sync_data(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SyncDataRequest>, JsonRejection>,
) -> (StatusCode, Json<SyncEnvelope>) {
    // 1. Reject unreadable bodies through the same error envelope
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::error!(target: SYNC_TRACE_TARGET, error = %rejection, "proxy error");
            return server_error();
        }
    };

    tracing::info!(
        target: SYNC_TRACE_TARGET,
        office = %req.office,
        metric = %req.metric,
        "sync requested"
    );

    // 2. Forward to the private API and map the outcome
    match state.backend.sync(&req.office, &req.metric).await {
        Ok(SyncOutcome::Data(data)) => (StatusCode::OK, Json(SyncEnvelope::data(data))),
        Ok(SyncOutcome::UpstreamStatus(status)) => {
            tracing::warn!(target: SYNC_TRACE_TARGET, status, "backend rejected sync");
            (StatusCode::OK, Json(SyncEnvelope::upstream_status(status)))
        }
        Err(e) => {
            tracing::error!(target: SYNC_TRACE_TARGET, error = %e, "proxy error");
            server_error()
        }
    }
}

/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp_ms: now_ms(),
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

fn server_error() -> (StatusCode, Json<SyncEnvelope>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SyncEnvelope::server_error()),
    )
}

/// Get current time in milliseconds
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// ============================================================================
// Mock Sheet Backend (mock-api feature)
// ============================================================================

/// Body the mock endpoint expects, mirroring the real sheet-data API.
#[cfg(feature = "mock-api")]
#[derive(serde::Deserialize)]
pub struct MockSheetQuery {
    pub name: String,
}

/// POST /internal/mock/{office}/{metric}
///
/// Stand-in for the private sheet-data API so the gateway can be exercised
/// without network access. Point `backend.base_url` at
/// `http://<host>:<port>/internal/mock` to use it.
#[cfg(feature = "mock-api")]
pub async fn mock_sheet_rows(
    axum::extract::Path((office, metric)): axum::extract::Path<(String, String)>,
    Json(query): Json<MockSheetQuery>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "sheet": query.name,
        "office": office,
        "metric": metric,
        "rows": [
            {"month": "Jan", "value": 1250},
            {"month": "Feb", "value": 1410},
            {"month": "Mar", "value": 1330}
        ]
    }))
}
