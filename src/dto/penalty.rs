use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Request to set a single penalty indicator.
///
/// Fields are kept loosely typed so each validation failure can be reported with its
/// own message instead of a generic decoding error.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PenaltyRequest {
    /// `"A"` or `"B"`.
    #[serde(default)]
    #[schema(value_type = String, example = "A")]
    pub side: Option<Value>,
    /// Zero-based slot index.
    #[serde(default)]
    #[schema(value_type = i64, example = 0)]
    pub index: Option<Value>,
    /// `gray`/`green`/`red` or the matching `#RRGGBB` value.
    #[serde(default)]
    #[schema(value_type = String, example = "green")]
    pub state: Option<Value>,
}
