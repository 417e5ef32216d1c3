//! Flat projection consumed by broadcast overlays.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};

use crate::state::scoreboard::{MatchState, PenaltyColor};

/// One row of the overlay table: match fields plus `pA1..pAn` / `pB1..pBn`.
///
/// Keys keep insertion order so overlay tools that map columns by position see a
/// stable layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BroadcastRow(IndexMap<String, Value>);

impl BroadcastRow {
    /// Value of a single column.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Column names in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<&MatchState> for BroadcastRow {
    fn from(state: &MatchState) -> Self {
        let mut row = IndexMap::new();
        row.insert("teamAName".into(), json!(state.team_a_name));
        row.insert("teamALogo".into(), json!(state.team_a_logo));
        row.insert("teamBName".into(), json!(state.team_b_name));
        row.insert("teamBLogo".into(), json!(state.team_b_logo));
        row.insert("scoreA".into(), json!(state.score_a));
        row.insert("scoreB".into(), json!(state.score_b));
        row.insert("setsWonA".into(), json!(state.sets_won_a));
        row.insert("setsWonB".into(), json!(state.sets_won_b));
        row.insert("serve".into(), json!(state.serve));
        row.insert("timeoutA".into(), json!(state.timeout_a));
        row.insert("timeoutB".into(), json!(state.timeout_b));
        row.insert("matchStatus".into(), json!(state.match_status));
        row.insert("updatedAt".into(), json!(state.updated_at));

        // Stored slots keep their hex value; a missing slot reads as the neutral name.
        let slot_value = |colors: &[PenaltyColor], index: usize| {
            colors
                .get(index)
                .map_or(PenaltyColor::Neutral.name(), |color| color.hex())
        };
        for index in 0..state.penalty.slots {
            row.insert(
                format!("pA{}", index + 1),
                json!(slot_value(&state.penalty.a, index)),
            );
            row.insert(
                format!("pB{}", index + 1),
                json!(slot_value(&state.penalty.b, index)),
            );
        }

        Self(row)
    }
}
