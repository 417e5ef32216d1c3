//! Validation helpers for uploaded logos and penalty colors.

use validator::ValidationError;

use crate::state::scoreboard::MAX_PENALTY_SLOTS;

/// Logo file extensions accepted by the upload endpoint.
pub const LOGO_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Validates that a color is written as `#RRGGBB` (hex digits, any case).
///
/// # Examples
///
/// ```ignore
/// validate_hex_color("#00ff00") // Ok
/// validate_hex_color("00FF00")  // Err - missing hash
/// validate_hex_color("#0F0")    // Err - short form
/// ```
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let Some(digits) = value.strip_prefix('#') else {
        let mut err = ValidationError::new("color_format");
        err.message = Some("Invalid color. Use #RRGGBB or gray/green/red.".into());
        return Err(err);
    };

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        let mut err = ValidationError::new("color_format");
        err.message = Some("Invalid color. Use #RRGGBB or gray/green/red.".into());
        return Err(err);
    }

    Ok(())
}

/// Validates a client-supplied penalty slot count (`1..=MAX_PENALTY_SLOTS`).
pub fn validate_penalty_slots(slots: usize) -> Result<(), ValidationError> {
    if (1..=MAX_PENALTY_SLOTS).contains(&slots) {
        return Ok(());
    }

    let mut err = ValidationError::new("penalty_slots");
    err.message = Some(format!("Penalty slots must be between 1 and {MAX_PENALTY_SLOTS}").into());
    err.add_param("slots".into(), &slots);
    Err(err)
}

/// Validates an uploaded logo file name and returns its lowercase extension.
pub fn validate_logo_file_name(name: &str) -> Result<String, ValidationError> {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| LOGO_EXTENSIONS.contains(&ext.as_str()));

    extension.ok_or_else(|| {
        let mut err = ValidationError::new("logo_extension");
        err.message = Some("Only PNG/JPG/WEBP allowed".into());
        err
    })
}
