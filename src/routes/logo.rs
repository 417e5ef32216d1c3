use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    routing::post,
};

use crate::{
    dto::logo::{LogoUploadForm, LogoUploadResponse},
    error::AppError,
    services::logo_service::{self, LogoUpload},
    state::{SharedState, scoreboard::Side},
};

/// Room left for multipart boundaries and the `team` field on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Logo upload route; the body limit is sized from the configured maximum logo size.
pub fn router(max_logo_bytes: usize) -> Router<SharedState> {
    Router::new().route(
        "/api/upload-logo",
        post(upload_logo).layer(DefaultBodyLimit::max(max_logo_bytes + MULTIPART_OVERHEAD)),
    )
}

/// Upload a team logo (`logo` field) and return the URL it is served from.
#[utoipa::path(
    post,
    path = "/api/upload-logo",
    tag = "logo",
    request_body(content = LogoUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Logo stored", body = LogoUploadResponse),
        (status = 400, description = "Missing file, wrong type or too large")
    )
)]
pub async fn upload_logo(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<LogoUploadResponse>, AppError> {
    // Non-multipart requests carry no file at all.
    let Ok(mut multipart) = multipart else {
        return Err(logo_service::missing_upload().into());
    };
    let max_bytes = state.config().max_logo_bytes;
    let read_error = |err: MultipartError| -> AppError {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            logo_service::too_large(max_bytes).into()
        } else {
            err.into()
        }
    };

    let mut upload = None;
    let mut team = None;

    while let Some(mut field) = multipart.next_field().await.map_err(read_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("logo") => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                logo_service::check_file_name(&file_name)?;

                let mut bytes = Vec::new();
                while let Some(chunk) = field.chunk().await.map_err(read_error)? {
                    if bytes.len() + chunk.len() > max_bytes {
                        return Err(logo_service::too_large(max_bytes).into());
                    }
                    bytes.extend_from_slice(&chunk);
                }
                upload = Some(LogoUpload { file_name, bytes });
            }
            Some("team") => {
                let value = field.text().await.map_err(read_error)?;
                team = Side::parse(value.trim());
            }
            _ => {}
        }
    }

    Ok(Json(logo_service::upload_logo(&state, upload, team).await?))
}
