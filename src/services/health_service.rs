use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report whether the match document can be read, logging failures.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.read_match().await {
        Ok(current) => HealthResponse::ok(current.updated_at),
        Err(err) => {
            warn!(error = %err, "match document unreadable");
            HealthResponse::degraded()
        }
    }
}
