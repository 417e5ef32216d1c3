use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI document for the scoreboard backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::score::get_score,
        crate::routes::score::update_score,
        crate::routes::score::increment_score,
        crate::routes::score::decrement_score,
        crate::routes::score::reset_all,
        crate::routes::penalty::set_penalty,
        crate::routes::logo::upload_logo,
        crate::routes::broadcast::broadcast_view,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::score::TeamRequest,
            crate::dto::score::MatchUpdate,
            crate::dto::score::ResetResponse,
            crate::dto::penalty::PenaltyRequest,
            crate::dto::logo::LogoUploadResponse,
            crate::dto::logo::LogoUploadForm,
            crate::state::scoreboard::MatchState,
            crate::state::scoreboard::PenaltyGrid,
            crate::state::scoreboard::Side,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "score", description = "Match document and score control"),
        (name = "penalty", description = "Penalty indicators"),
        (name = "logo", description = "Team logo uploads"),
        (name = "broadcast", description = "Overlay projection"),
    )
)]
pub struct ApiDoc;
