use serde::Serialize;
use utoipa::ToSchema;

/// Response of a successful logo upload.
#[derive(Debug, Serialize, ToSchema)]
pub struct LogoUploadResponse {
    /// Stable URL the logo is served from.
    pub url: String,
}

/// Multipart form accepted by the upload endpoint (documentation only).
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct LogoUploadForm {
    /// PNG, JPG or WEBP image, at most the configured size.
    #[schema(value_type = String, format = Binary)]
    pub logo: Vec<u8>,
    /// Optional `A` or `B`: also store the URL as that team's logo.
    pub team: Option<String>,
}
