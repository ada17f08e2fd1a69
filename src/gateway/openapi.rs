//! OpenAPI / Swagger UI Documentation
//!
//! This module provides auto-generated OpenAPI 3.0 documentation for the syncgate API.
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

// Import handler types for schema registration
use crate::gateway::types::{HealthResponse, SyncDataRequest, SyncEnvelope};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Syncgate API",
        version = "1.0.0",
        description = "JSON sync gateway between the dashboard frontend and the private sheet-data API.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::sync_data,
        crate::gateway::handlers::health_check,
    ),
    components(
        schemas(
            SyncDataRequest,
            SyncEnvelope,
            HealthResponse,
        )
    ),
    tags(
        (name = "Sync", description = "Sheet sync proxy endpoints"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
