//! DTO definitions used by the score control endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{
    dto::validation::validate_penalty_slots,
    state::scoreboard::{MatchState, PenaltyGrid, Side},
};

/// Body of the increment/decrement endpoints.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TeamRequest {
    /// `"A"` or `"B"`; any other value leaves the scores untouched.
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "A")]
    pub team: Option<Value>,
}

impl TeamRequest {
    /// Team targeted by the request, if it names one exactly.
    pub fn side(&self) -> Option<Side> {
        self.team.as_ref().and_then(Value::as_str).and_then(Side::parse)
    }
}

/// Partial update of the match document. Only the listed fields may be changed;
/// absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MatchUpdate {
    /// Display name of team A; blank falls back to the default.
    pub team_a_name: Option<String>,
    /// Logo URL of team A.
    pub team_a_logo: Option<String>,
    /// Display name of team B; blank falls back to the default.
    pub team_b_name: Option<String>,
    /// Logo URL of team B.
    pub team_b_logo: Option<String>,
    /// Points of team A.
    pub score_a: Option<u32>,
    /// Points of team B.
    pub score_b: Option<u32>,
    /// Sets won by team A.
    pub sets_won_a: Option<u32>,
    /// Sets won by team B.
    pub sets_won_b: Option<u32>,
    /// Finished set results; blank entries are dropped.
    pub set_scores: Option<Vec<String>>,
    /// Absent keeps the current server, `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<Side>)]
    pub serve: Option<Option<Side>>,
    /// Team A timeout flag.
    pub timeout_a: Option<bool>,
    /// Team B timeout flag.
    pub timeout_b: Option<bool>,
    /// Free-form lifecycle label.
    pub match_status: Option<String>,
    /// Whole penalty grid; its slot count must match the stored match.
    pub penalty: Option<PenaltyGrid>,
    /// Echoed back by some clients; the server always sets its own timestamp.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub updated_at: Option<Value>,
}

impl Validate for MatchUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(ref penalty) = self.penalty {
            if let Err(e) = validate_penalty_slots(penalty.slots) {
                errors.add("penalty", e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl MatchUpdate {
    /// Update that only points one team at a new logo URL.
    pub fn logo(side: Side, url: impl Into<String>) -> Self {
        let url = Some(url.into());
        match side {
            Side::A => Self {
                team_a_logo: url,
                ..Self::default()
            },
            Side::B => Self {
                team_b_logo: url,
                ..Self::default()
            },
        }
    }
}

/// Envelope returned by the reset endpoint, kept separate from the `{error}` body
/// used elsewhere.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResetResponse {
    /// Whether the reset went through.
    pub ok: bool,
    /// The fresh document on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MatchState>,
    /// Failure message otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResetResponse {
    /// Successful reset carrying the new document.
    pub fn success(data: MatchState) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed reset carrying the error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serve_distinguishes_absent_and_null() {
        let absent: MatchUpdate = serde_json::from_value(json!({ "scoreA": 7 })).unwrap();
        assert_eq!(absent.serve, None);
        assert_eq!(absent.score_a, Some(7));

        let cleared: MatchUpdate = serde_json::from_value(json!({ "serve": null })).unwrap();
        assert_eq!(cleared.serve, Some(None));

        let set: MatchUpdate = serde_json::from_value(json!({ "serve": "B" })).unwrap();
        assert_eq!(set.serve, Some(Some(Side::B)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_value::<MatchUpdate>(json!({ "scoreA": 1, "color": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn negative_scores_are_rejected() {
        assert!(serde_json::from_value::<MatchUpdate>(json!({ "scoreB": -1 })).is_err());
    }

    #[test]
    fn echoed_timestamp_is_tolerated() {
        let update: MatchUpdate =
            serde_json::from_value(json!({ "updatedAt": "2024-01-01T00:00:00Z" })).unwrap();
        assert!(update.updated_at.is_some());
    }

    #[test]
    fn penalty_slot_count_is_bounded() {
        let huge: MatchUpdate =
            serde_json::from_value(json!({ "penalty": { "slots": 100_000_000u64 } })).unwrap();
        let err = huge.validate().unwrap_err();
        assert!(err.to_string().contains("Penalty slots must be between 1 and 20"));

        let zero: MatchUpdate =
            serde_json::from_value(json!({ "penalty": { "slots": 0 } })).unwrap();
        assert!(zero.validate().is_err());

        let fine: MatchUpdate =
            serde_json::from_value(json!({ "penalty": { "slots": 5 }, "scoreA": 3 })).unwrap();
        assert!(fine.validate().is_ok());
        assert!(MatchUpdate::default().validate().is_ok());
    }

    #[test]
    fn team_request_only_accepts_exact_labels() {
        let side = |value| TeamRequest { team: Some(value) }.side();
        assert_eq!(side(json!("A")), Some(Side::A));
        assert_eq!(side(json!("b")), None);
        assert_eq!(side(json!(1)), None);
        assert_eq!(TeamRequest::default().side(), None);
    }
}
