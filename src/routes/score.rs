use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::score::{MatchUpdate, ResetResponse, TeamRequest},
    error::AppError,
    routes::extract::ApiJson,
    services::score_service,
    state::{SharedState, scoreboard::MatchState},
};

/// Routes reading and mutating the match document.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/score", get(get_score).post(update_score))
        .route("/api/score/increment", post(increment_score))
        .route("/api/score/decrement", post(decrement_score))
        .route("/api/reset-all", post(reset_all))
}

/// Return the full match document.
#[utoipa::path(
    get,
    path = "/api/score",
    tag = "score",
    responses(
        (status = 200, description = "Current match", body = MatchState),
        (status = 500, description = "Match document unreadable")
    )
)]
pub async fn get_score(State(state): State<SharedState>) -> Result<Json<MatchState>, AppError> {
    Ok(Json(score_service::get_match(&state).await?))
}

/// Merge the supplied fields over the stored match document.
#[utoipa::path(
    post,
    path = "/api/score",
    tag = "score",
    request_body = MatchUpdate,
    responses(
        (status = 200, description = "Merged match", body = MatchState),
        (status = 400, description = "Malformed body or unknown field")
    )
)]
pub async fn update_score(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<MatchUpdate>,
) -> Result<Json<MatchState>, AppError> {
    Ok(Json(score_service::update_match(&state, payload).await?))
}

/// Add one point to a team.
#[utoipa::path(
    post,
    path = "/api/score/increment",
    tag = "score",
    request_body = TeamRequest,
    responses((status = 200, description = "Updated match", body = MatchState))
)]
pub async fn increment_score(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<TeamRequest>,
) -> Result<Json<MatchState>, AppError> {
    Ok(Json(score_service::increment(&state, payload).await?))
}

/// Remove one point from a team, never below zero.
#[utoipa::path(
    post,
    path = "/api/score/decrement",
    tag = "score",
    request_body = TeamRequest,
    responses((status = 200, description = "Updated match", body = MatchState))
)]
pub async fn decrement_score(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<TeamRequest>,
) -> Result<Json<MatchState>, AppError> {
    Ok(Json(score_service::decrement(&state, payload).await?))
}

/// Delete uploaded logos and restore the default match document.
///
/// Failures are reported inside the `{ok, error}` envelope rather than the usual
/// `{error}` body.
#[utoipa::path(
    post,
    path = "/api/reset-all",
    tag = "score",
    responses(
        (status = 200, description = "Match reset", body = ResetResponse),
        (status = 500, description = "Reset failed", body = ResetResponse)
    )
)]
pub async fn reset_all(State(state): State<SharedState>) -> (StatusCode, Json<ResetResponse>) {
    match score_service::reset_all(&state).await {
        Ok(fresh) => (StatusCode::OK, Json(ResetResponse::success(fresh))),
        Err(err) => {
            tracing::error!(error = %err, "reset failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ResetResponse::failure(err.to_string())),
            )
        }
    }
}
