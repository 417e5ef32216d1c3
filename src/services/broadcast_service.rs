//! Read-only projection polled by broadcast overlays. Never writes.

use crate::{dto::broadcast::BroadcastRow, error::ServiceError, state::SharedState};

/// Current match flattened into a single overlay row, wrapped in a one-element table.
pub async fn broadcast_view(state: &SharedState) -> Result<Vec<BroadcastRow>, ServiceError> {
    let current = state.read_match().await?;
    Ok(vec![BroadcastRow::from(&current)])
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::{services::score_service, test_support::test_state};

    #[tokio::test]
    async fn projection_reflects_latest_write_without_mutating() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        let written = score_service::update_match(
            &state,
            serde_json::from_value(json!({ "teamAName": "Lions", "scoreA": 9 })).unwrap(),
        )
        .await
        .unwrap();

        let rows = broadcast_view(&state).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("teamAName"), Some(&json!("Lions")));
        assert_eq!(rows[0].get("scoreA"), Some(&json!(9)));
        assert_eq!(rows[0].get("updatedAt"), Some(&json!(written.updated_at)));
        assert_eq!(state.read_match().await.unwrap(), written);
    }
}
