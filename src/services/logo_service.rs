//! Logo uploads: validate the file, hand it to the logo store and optionally point a
//! team at the resulting URL through the regular merge-update transform.

use tracing::debug;

use crate::{
    dto::{logo::LogoUploadResponse, validation::validate_logo_file_name},
    error::ServiceError,
    state::{SharedState, scoreboard::Side},
};

/// A logo received from the client, already read into memory.
#[derive(Debug)]
pub struct LogoUpload {
    /// Client-side file name; only its extension is used.
    pub file_name: String,
    /// File content.
    pub bytes: Vec<u8>,
}

/// Validate the extension of an upload before its body is read; returns it lowercased.
pub fn check_file_name(file_name: &str) -> Result<String, ServiceError> {
    Ok(validate_logo_file_name(file_name)?)
}

/// Error reported when the request carries no `logo` file.
pub fn missing_upload() -> ServiceError {
    ServiceError::MissingUpload("No file uploaded".into())
}

/// Error reported when an upload exceeds `max_bytes`.
pub fn too_large(max_bytes: usize) -> ServiceError {
    ServiceError::PayloadTooLarge(format!(
        "File too large (max {} KiB)",
        max_bytes / 1024
    ))
}

/// Store the uploaded logo and return its URL. When `team` is given the URL is also
/// written into that team's logo field.
pub async fn upload_logo(
    state: &SharedState,
    upload: Option<LogoUpload>,
    team: Option<Side>,
) -> Result<LogoUploadResponse, ServiceError> {
    let Some(upload) = upload else {
        return Err(missing_upload());
    };

    let extension = check_file_name(&upload.file_name)?;
    let max_bytes = state.config().max_logo_bytes;
    if upload.bytes.len() > max_bytes {
        return Err(too_large(max_bytes));
    }

    let url = state.store_logo(extension, upload.bytes, team).await?;
    if let Some(side) = team {
        debug!(?side, %url, "logo associated with team");
    }

    Ok(LogoUploadResponse { url })
}
