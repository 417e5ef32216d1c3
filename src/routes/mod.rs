use axum::Router;
use tower_http::services::ServeDir;

use crate::state::SharedState;

/// Overlay projection route.
pub mod broadcast;
/// Swagger UI and OpenAPI document.
pub mod docs;
mod extract;
/// Health check route.
pub mod health;
/// Logo upload route.
pub mod logo;
/// Penalty route.
pub mod penalty;
/// Score and reset routes.
pub mod score;

/// Compose all route trees, wiring in shared state, documentation and static files.
///
/// Uploaded logos are served under the configured URL prefix; anything unmatched falls
/// back to the control UI in the public directory.
pub fn router(state: SharedState) -> Router<()> {
    let config = state.config().clone();

    let api_router = health::router()
        .merge(score::router())
        .merge(penalty::router())
        .merge(logo::router(config.max_logo_bytes))
        .merge(broadcast::router())
        .merge(docs::router());

    api_router
        .with_state(state)
        .nest_service(&config.logo_url_prefix, ServeDir::new(&config.logo_dir))
        .fallback_service(ServeDir::new(&config.public_dir))
}
