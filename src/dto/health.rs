use serde::Serialize;
use utoipa::ToSchema;

/// Whether the match document can currently be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Store reachable and document decodable.
    Ok,
    /// Store failing; mutations will return 500.
    Degraded,
}

/// Response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: HealthStatus,
    /// Timestamp of the last successful write, when the document could be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl HealthResponse {
    /// The store answered; report when the document was last written.
    pub fn ok(updated_at: String) -> Self {
        Self {
            status: HealthStatus::Ok,
            updated_at: Some(updated_at),
        }
    }

    /// The store could not be read.
    pub fn degraded() -> Self {
        Self {
            status: HealthStatus::Degraded,
            updated_at: None,
        }
    }
}
