//! Penalty indicator updates. The server is a plain setter: any color may follow any
//! other, the gray → green → red cycle lives in the control UI.

use serde_json::Value;
use tracing::debug;

use crate::{
    dto::{penalty::PenaltyRequest, validation::validate_hex_color},
    error::ServiceError,
    state::{
        SharedState,
        mutations::set_penalty_slot,
        scoreboard::{MatchState, PenaltyColor, Side},
    },
};

const INVALID_SIDE_OR_INDEX: &str = "Invalid side/index";

/// Turn the requested color into a canonical one: a name alias, or a `#RRGGBB`
/// value matching one of the three canonical colors.
pub fn resolve_color(input: Option<&Value>) -> Result<PenaltyColor, ServiceError> {
    let raw = input.and_then(Value::as_str).unwrap_or_default();

    if let Some(color) = PenaltyColor::from_name(raw) {
        return Ok(color);
    }

    validate_hex_color(raw)?;
    PenaltyColor::from_hex(raw).ok_or_else(|| {
        ServiceError::InvalidInput(format!(
            "Unsupported color {}. Use {}, {} or {}.",
            raw.to_ascii_uppercase(),
            PenaltyColor::Neutral.hex(),
            PenaltyColor::Warning.hex(),
            PenaltyColor::Penalty.hex(),
        ))
    })
}

/// Validate a penalty request and write the slot.
///
/// Checks run in order and stop at the first failure: side and index presence, color,
/// then index bounds against the (repaired) stored grid.
pub async fn set_penalty(
    state: &SharedState,
    request: PenaltyRequest,
) -> Result<MatchState, ServiceError> {
    let side = request
        .side
        .as_ref()
        .and_then(Value::as_str)
        .and_then(Side::parse);
    let index = request.index.as_ref().and_then(Value::as_i64);
    let (Some(side), Some(index)) = (side, index) else {
        return Err(ServiceError::InvalidInput(INVALID_SIDE_OR_INDEX.into()));
    };

    let color = resolve_color(request.state.as_ref())?;

    let updated = state
        .mutate_match(move |current| {
            set_penalty_slot(current, side, index, color)
                .map_err(|err| ServiceError::InvalidInput(err.to_string()))
        })
        .await?;

    debug!(?side, index, color = color.hex(), "penalty slot updated");
    Ok(updated)
}
