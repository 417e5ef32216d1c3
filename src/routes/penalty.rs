use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::penalty::PenaltyRequest,
    error::AppError,
    routes::extract::ApiJson,
    services::penalty_service,
    state::{SharedState, scoreboard::MatchState},
};

/// Penalty indicator routes.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/penalty", post(set_penalty))
}

/// Set one penalty slot of one team to a color.
#[utoipa::path(
    post,
    path = "/api/penalty",
    tag = "penalty",
    request_body = PenaltyRequest,
    responses(
        (status = 200, description = "Updated match", body = MatchState),
        (status = 400, description = "Invalid side, index or color")
    )
)]
pub async fn set_penalty(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<PenaltyRequest>,
) -> Result<Json<MatchState>, AppError> {
    Ok(Json(penalty_service::set_penalty(&state, payload).await?))
}
