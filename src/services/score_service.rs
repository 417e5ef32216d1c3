//! Business logic behind the score control routes. Every mutation is a full
//! read-modify-write of the match document through [`AppState::mutate_match`].
//!
//! [`AppState::mutate_match`]: crate::state::AppState::mutate_match

use tracing::{debug, info};
use validator::Validate;

use crate::{
    dto::score::{MatchUpdate, TeamRequest},
    error::ServiceError,
    state::{
        SharedState,
        mutations::{
            apply_update, check_penalty_slots, decrement_score, fresh_match, increment_score,
        },
        scoreboard::MatchState,
    },
};

/// Return the current match document.
pub async fn get_match(state: &SharedState) -> Result<MatchState, ServiceError> {
    state.read_match().await
}

/// Merge the fields present in `update` over the stored document.
pub async fn update_match(
    state: &SharedState,
    update: MatchUpdate,
) -> Result<MatchState, ServiceError> {
    update.validate()?;
    state
        .mutate_match(move |current| {
            check_penalty_slots(&current, &update)
                .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;
            Ok(apply_update(current, update))
        })
        .await
}

/// Add a point to the requested team.
pub async fn increment(
    state: &SharedState,
    request: TeamRequest,
) -> Result<MatchState, ServiceError> {
    let team = request.side();
    if team.is_none() {
        debug!(team = ?request.team, "increment ignored: unknown team");
    }
    state
        .mutate_match(move |current| Ok(increment_score(current, team)))
        .await
}

/// Remove a point from the requested team, stopping at zero.
pub async fn decrement(
    state: &SharedState,
    request: TeamRequest,
) -> Result<MatchState, ServiceError> {
    let team = request.side();
    if team.is_none() {
        debug!(team = ?request.team, "decrement ignored: unknown team");
    }
    state
        .mutate_match(move |current| Ok(decrement_score(current, team)))
        .await
}

/// Delete every uploaded logo and replace the document with a fresh default one, as
/// a single step under the write gate.
pub async fn reset_all(state: &SharedState) -> Result<MatchState, ServiceError> {
    let (removed, fresh) = state
        .reset_match(fresh_match(state.config().penalty_slots))
        .await?;
    info!(removed_logos = removed, "match reset");
    Ok(fresh)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::state::scoreboard::Side;
    use crate::test_support::test_state;

    fn team(value: serde_json::Value) -> TeamRequest {
        TeamRequest { team: Some(value) }
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        update_match(&state, serde_json::from_value(json!({ "scoreB": 3 })).unwrap())
            .await
            .unwrap();

        let first = get_match(&state).await.unwrap();
        let second = get_match(&state).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn increments_and_decrements_persist() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        for _ in 0..3 {
            increment(&state, team(json!("A"))).await.unwrap();
        }
        let after = decrement(&state, team(json!("A"))).await.unwrap();

        assert_eq!(after.score_a, 2);
        assert_eq!(get_match(&state).await.unwrap().score_a, 2);
    }

    #[tokio::test]
    async fn unknown_team_returns_unchanged_scores() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        increment(&state, team(json!("B"))).await.unwrap();

        let after = increment(&state, team(json!("C"))).await.unwrap();

        assert_eq!(after.score_a, 0);
        assert_eq!(after.score_b, 1);
    }

    #[tokio::test]
    async fn concurrent_increments_are_not_lost() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let tasks: Vec<_> = (0..20)
            .map(|_| {
                let state = state.clone();
                tokio::spawn(async move { increment(&state, team(json!("B"))).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(get_match(&state).await.unwrap().score_b, 20);
    }

    #[tokio::test]
    async fn penalty_grid_in_merge_is_bounded_and_fixed() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        let before = get_match(&state).await.unwrap();

        let huge = serde_json::from_value(json!({ "penalty": { "slots": 100_000_000u64 } })).unwrap();
        let err = update_match(&state, huge).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        let resized = serde_json::from_value(json!({ "penalty": { "slots": 7 } })).unwrap();
        let err = update_match(&state, resized).await.unwrap_err();
        assert_eq!(err.to_string(), "Penalty slots are fixed until reset (5 per team)");

        assert_eq!(get_match(&state).await.unwrap(), before);

        let same = serde_json::from_value(json!({ "penalty": { "slots": 5, "A": ["red"] } })).unwrap();
        let after = update_match(&state, same).await.unwrap();
        assert_eq!(after.penalty.a.len(), 5);
    }

    #[tokio::test]
    async fn reset_never_leaves_a_dangling_logo() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        for _ in 0..10 {
            let upload = {
                let state = state.clone();
                tokio::spawn(async move {
                    state
                        .store_logo("png".into(), vec![7; 16], Some(Side::A))
                        .await
                })
            };
            let reset = {
                let state = state.clone();
                tokio::spawn(async move { reset_all(&state).await })
            };
            upload.await.unwrap().unwrap();
            reset.await.unwrap().unwrap();

            let logo = get_match(&state).await.unwrap().team_a_logo;
            if let Some(name) = logo.strip_prefix("/logos/") {
                assert!(state.config().logo_dir.join(name).exists());
            }
        }
    }

    #[tokio::test]
    async fn reset_restores_defaults_and_clears_logos() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        let url = state
            .logo_store()
            .save("png".into(), vec![1, 2, 3])
            .await
            .unwrap();
        update_match(
            &state,
            serde_json::from_value(json!({
                "teamAName": "Lions",
                "teamALogo": url,
                "scoreA": 21,
                "serve": "A",
                "setScores": ["25-19"]
            }))
            .unwrap(),
        )
        .await
        .unwrap();

        let fresh = reset_all(&state).await.unwrap();

        let expected = MatchState {
            updated_at: fresh.updated_at.clone(),
            ..MatchState::default()
        };
        assert_eq!(fresh, expected);
        assert_eq!(fresh.serve, None::<Side>);
        assert!(!fresh.updated_at.is_empty());
        assert_eq!(std::fs::read_dir(&state.config().logo_dir).unwrap().count(), 0);
    }
}
