use axum::{
    Json, Router,
    extract::State,
    http::{
        StatusCode,
        header::{CACHE_CONTROL, EXPIRES, PRAGMA},
    },
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::{services::broadcast_service, state::SharedState};

const NO_STORE: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

/// Overlay projection route, polled by broadcast tools.
pub fn router() -> Router<SharedState> {
    Router::new().route("/data/score.json", get(broadcast_view))
}

/// Return the match as a one-row table with flattened penalty columns (`pA1`, `pB1`, ...).
/// Always served with caching disabled.
#[utoipa::path(
    get,
    path = "/data/score.json",
    tag = "broadcast",
    responses(
        (status = 200, description = "Single-row overlay table"),
        (status = 500, description = "Match document unreadable")
    )
)]
pub async fn broadcast_view(State(state): State<SharedState>) -> Response {
    let headers = [
        (CACHE_CONTROL, NO_STORE),
        (PRAGMA, "no-cache"),
        (EXPIRES, "0"),
    ];

    match broadcast_service::broadcast_view(&state).await {
        Ok(rows) => (headers, Json(rows)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "broadcast view unavailable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                headers,
                Json(json!([{ "error": err.to_string() }])),
            )
                .into_response()
        }
    }
}
