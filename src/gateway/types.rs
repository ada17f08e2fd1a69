use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Request Types
// ============================================================================

/// Body of `POST /api/syncData`.
///
/// Field values are case-insensitive: both are lowercased before the
/// downstream URL is built.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SyncDataRequest {
    /// Office whose sheet should be synced
    #[schema(example = "Sales")]
    pub office: String,
    /// Metric tab to pull
    #[schema(example = "Revenue")]
    pub metric: String,
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Error message returned for every internal failure. The detail stays in
/// the server log; clients only see this string.
pub const SERVER_ERROR_MSG: &str = "Server error";

/// Envelope returned by `POST /api/syncData`.
///
/// Exactly one shape per outcome:
/// - downstream 2xx: `{ "success": true, "data": ... }`
/// - downstream non-2xx: `{ "success": false, "status": <code> }`
/// - internal failure: `{ "success": false, "error": "Server error" }`
///
/// Absent fields are omitted from the JSON, not serialized as null.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SyncEnvelope {
    pub success: bool,
    /// Downstream JSON body, passed through unmodified
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<serde_json::Value>,
    /// Downstream HTTP status when the backend answered outside 2xx
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 502)]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Server error")]
    pub error: Option<String>,
}

impl SyncEnvelope {
    /// Successful sync carrying the downstream body.
    pub fn data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            status: None,
            error: None,
        }
    }

    /// Downstream answered outside the success range.
    pub fn upstream_status(status: u16) -> Self {
        Self {
            success: false,
            data: None,
            status: Some(status),
            error: None,
        }
    }

    /// Internal failure; detail goes to the log, not the client.
    pub fn server_error() -> Self {
        Self {
            success: false,
            data: None,
            status: None,
            error: Some(SERVER_ERROR_MSG.to_string()),
        }
    }
}

// ============================================================================
// Health Check
// ============================================================================

/// Response for `GET /api/health`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    pub timestamp_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_envelope_omits_status_and_error() {
        let envelope = SyncEnvelope::data(json!({"rows": [1, 2, 3]}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "data": {"rows": [1, 2, 3]}})
        );
    }

    #[test]
    fn test_upstream_status_envelope_shape() {
        let envelope = SyncEnvelope::upstream_status(404);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"success": false, "status": 404}));
    }

    #[test]
    fn test_server_error_envelope_shape() {
        let envelope = SyncEnvelope::server_error();
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"success": false, "error": "Server error"}));
    }

    #[test]
    fn test_request_ignores_unknown_fields() {
        let request: SyncDataRequest =
            serde_json::from_str(r#"{"office": "Sales", "metric": "Revenue", "extra": 1}"#)
                .unwrap();
        assert_eq!(request.office, "Sales");
        assert_eq!(request.metric, "Revenue");
    }

    #[test]
    fn test_request_requires_both_fields() {
        let result = serde_json::from_str::<SyncDataRequest>(r#"{"office": "Sales"}"#);
        assert!(result.is_err());
    }
}
