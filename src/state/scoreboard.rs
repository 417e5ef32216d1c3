//! The persisted match document and its penalty grid.
//!
//! Every document coming out of storage goes through [`MatchState::repaired`], so the
//! rest of the application can rely on the grid shape and canonical colors.

use std::time::SystemTime;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use utoipa::ToSchema;

/// Display name used for team A when none (or a blank one) is stored.
pub const DEFAULT_TEAM_A_NAME: &str = "TEAM A";
/// Display name used for team B when none (or a blank one) is stored.
pub const DEFAULT_TEAM_B_NAME: &str = "TEAM B";
/// Lifecycle label of a freshly reset match.
pub const DEFAULT_MATCH_STATUS: &str = "WARMUP";
/// Number of penalty indicators per team when nothing else is configured.
pub const DEFAULT_PENALTY_SLOTS: usize = 5;
/// Upper bound on penalty indicators per team.
pub const MAX_PENALTY_SLOTS: usize = 20;

/// One of the two teams on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Side {
    /// Left/home team.
    A,
    /// Right/away team.
    B,
}

impl Side {
    /// Parse the exact wire label (`"A"` or `"B"`); anything else is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "A" => Some(Side::A),
            "B" => Some(Side::B),
            _ => None,
        }
    }
}

/// Disciplinary indicator state of a single penalty slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PenaltyColor {
    /// Nothing recorded (`#808080`, "gray").
    #[default]
    Neutral,
    /// Warning issued (`#00FF00`, "green").
    Warning,
    /// Penalty issued (`#FF0000`, "red").
    Penalty,
}

impl PenaltyColor {
    const ALL: [PenaltyColor; 3] = [
        PenaltyColor::Neutral,
        PenaltyColor::Warning,
        PenaltyColor::Penalty,
    ];

    /// Canonical uppercase hex representation.
    pub fn hex(self) -> &'static str {
        match self {
            PenaltyColor::Neutral => "#808080",
            PenaltyColor::Warning => "#00FF00",
            PenaltyColor::Penalty => "#FF0000",
        }
    }

    /// Color name alias accepted on input and exposed to overlays.
    pub fn name(self) -> &'static str {
        match self {
            PenaltyColor::Neutral => "gray",
            PenaltyColor::Warning => "green",
            PenaltyColor::Penalty => "red",
        }
    }

    /// Resolve a case-insensitive name alias (`gray`, `green`, `red`).
    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(value))
    }

    /// Resolve a case-insensitive canonical hex value.
    pub fn from_hex(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.hex().eq_ignore_ascii_case(value))
    }

    /// Resolve either a name alias or a canonical hex value, exactly as written.
    pub fn parse(value: &str) -> Option<Self> {
        Self::from_name(value).or_else(|| Self::from_hex(value))
    }
}

impl Serialize for PenaltyColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

impl<'de> Deserialize<'de> for PenaltyColor {
    /// Stored slots may hold legacy names, lowercase hex or garbage; anything
    /// unrecognised reads back as [`PenaltyColor::Neutral`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .map(str::trim)
            .and_then(PenaltyColor::parse)
            .unwrap_or_default())
    }
}

/// Per-team, per-slot disciplinary indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PenaltyGrid {
    /// Number of indicators per team.
    #[serde(default = "default_slots")]
    pub slots: usize,
    /// Indicators of team A, one per slot.
    #[serde(rename = "A", default)]
    #[schema(value_type = Vec<String>)]
    pub a: Vec<PenaltyColor>,
    /// Indicators of team B, one per slot.
    #[serde(rename = "B", default)]
    #[schema(value_type = Vec<String>)]
    pub b: Vec<PenaltyColor>,
}

fn default_slots() -> usize {
    DEFAULT_PENALTY_SLOTS
}

fn bounded_slots(slots: usize) -> usize {
    match slots {
        0 => DEFAULT_PENALTY_SLOTS,
        slots => slots.min(MAX_PENALTY_SLOTS),
    }
}

impl PenaltyGrid {
    /// Build an all-neutral grid with the given number of slots (zero falls back to the
    /// default, anything above [`MAX_PENALTY_SLOTS`] is capped).
    pub fn new(slots: usize) -> Self {
        let slots = bounded_slots(slots);
        Self {
            slots,
            a: vec![PenaltyColor::Neutral; slots],
            b: vec![PenaltyColor::Neutral; slots],
        }
    }

    /// Restore the `A.len() == B.len() == slots` invariant, padding with neutral slots.
    pub fn repaired(mut self) -> Self {
        self.slots = bounded_slots(self.slots);
        self.a.resize(self.slots, PenaltyColor::Neutral);
        self.b.resize(self.slots, PenaltyColor::Neutral);
        self
    }

    /// Indicators of one team.
    pub fn row(&self, side: Side) -> &[PenaltyColor] {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Mutable indicators of one team.
    pub fn row_mut(&mut self, side: Side) -> &mut Vec<PenaltyColor> {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }
}

impl Default for PenaltyGrid {
    fn default() -> Self {
        Self::new(DEFAULT_PENALTY_SLOTS)
    }
}

/// The single persisted document describing the current match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchState {
    /// Display name of team A.
    pub team_a_name: String,
    /// Logo URL of team A, empty when none.
    pub team_a_logo: String,
    /// Display name of team B.
    pub team_b_name: String,
    /// Logo URL of team B, empty when none.
    pub team_b_logo: String,
    /// Points of team A in the current set.
    pub score_a: u32,
    /// Points of team B in the current set.
    pub score_b: u32,
    /// Sets won by team A.
    pub sets_won_a: u32,
    /// Sets won by team B.
    pub sets_won_b: u32,
    /// Results of the finished sets, in play order (e.g. `"25-23"`).
    pub set_scores: Vec<String>,
    /// Team currently serving.
    pub serve: Option<Side>,
    /// Team A is in a timeout.
    pub timeout_a: bool,
    /// Team B is in a timeout.
    pub timeout_b: bool,
    /// Free-form lifecycle label (`WARMUP`, ...).
    pub match_status: String,
    /// Disciplinary indicators.
    pub penalty: PenaltyGrid,
    /// RFC 3339 timestamp of the last successful write.
    pub updated_at: String,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            team_a_name: DEFAULT_TEAM_A_NAME.into(),
            team_a_logo: String::new(),
            team_b_name: DEFAULT_TEAM_B_NAME.into(),
            team_b_logo: String::new(),
            score_a: 0,
            score_b: 0,
            sets_won_a: 0,
            sets_won_b: 0,
            set_scores: Vec::new(),
            serve: None,
            timeout_a: false,
            timeout_b: false,
            match_status: DEFAULT_MATCH_STATUS.into(),
            penalty: PenaltyGrid::default(),
            updated_at: String::new(),
        }
    }
}

impl MatchState {
    /// Normalise a document that may come from an older or hand-edited file.
    pub fn repaired(mut self) -> Self {
        if self.team_a_name.trim().is_empty() {
            self.team_a_name = DEFAULT_TEAM_A_NAME.into();
        }
        if self.team_b_name.trim().is_empty() {
            self.team_b_name = DEFAULT_TEAM_B_NAME.into();
        }
        self.set_scores = self
            .set_scores
            .into_iter()
            .map(|entry| entry.trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();
        self.penalty = self.penalty.repaired();
        self
    }

    /// Points of one team.
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::A => self.score_a,
            Side::B => self.score_b,
        }
    }

    /// Mutable points of one team.
    pub fn score_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::A => &mut self.score_a,
            Side::B => &mut self.score_b,
        }
    }

    /// Mutable logo reference of one team.
    pub fn logo_mut(&mut self, side: Side) -> &mut String {
        match side {
            Side::A => &mut self.team_a_logo,
            Side::B => &mut self.team_b_logo,
        }
    }

    /// Record `at` as the last write time.
    pub fn stamp(&mut self, at: SystemTime) {
        self.updated_at = OffsetDateTime::from(at)
            .format(&Rfc3339)
            .unwrap_or_else(|_| "invalid-timestamp".into());
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use serde_json::json;

    use super::*;

    #[test]
    fn default_document_matches_wire_shape() {
        let value = serde_json::to_value(MatchState::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "teamAName": "TEAM A",
                "teamALogo": "",
                "teamBName": "TEAM B",
                "teamBLogo": "",
                "scoreA": 0,
                "scoreB": 0,
                "setsWonA": 0,
                "setsWonB": 0,
                "setScores": [],
                "serve": null,
                "timeoutA": false,
                "timeoutB": false,
                "matchStatus": "WARMUP",
                "penalty": {
                    "slots": 5,
                    "A": ["#808080", "#808080", "#808080", "#808080", "#808080"],
                    "B": ["#808080", "#808080", "#808080", "#808080", "#808080"]
                },
                "updatedAt": ""
            })
        );
    }

    #[test]
    fn color_aliases_are_case_insensitive() {
        assert_eq!(PenaltyColor::parse("GREEN"), Some(PenaltyColor::Warning));
        assert_eq!(PenaltyColor::parse("Red"), Some(PenaltyColor::Penalty));
        assert_eq!(PenaltyColor::parse("#ff0000"), Some(PenaltyColor::Penalty));
        assert_eq!(PenaltyColor::parse("#808080"), Some(PenaltyColor::Neutral));
        assert_eq!(PenaltyColor::parse("#123456"), None);
        assert_eq!(PenaltyColor::parse("blue"), None);
        assert_eq!(PenaltyColor::parse(" green "), None);
    }

    #[test]
    fn legacy_document_is_repaired_on_decode() {
        let legacy = json!({
            "teamAName": "  ",
            "scoreA": 4,
            "setScores": ["25-20", " ", "18-25 "],
            "penalty": { "slots": 3, "A": [" green ", "bogus", 7, "#ff0000"], "B": ["red"] }
        });

        let state: MatchState = serde_json::from_value::<MatchState>(legacy)
            .unwrap()
            .repaired();

        assert_eq!(state.team_a_name, DEFAULT_TEAM_A_NAME);
        assert_eq!(state.team_b_name, DEFAULT_TEAM_B_NAME);
        assert_eq!(state.score_a, 4);
        assert_eq!(state.set_scores, vec!["25-20", "18-25"]);
        assert_eq!(
            state.penalty.a,
            vec![
                PenaltyColor::Warning,
                PenaltyColor::Neutral,
                PenaltyColor::Neutral
            ]
        );
        assert_eq!(
            state.penalty.b,
            vec![
                PenaltyColor::Penalty,
                PenaltyColor::Neutral,
                PenaltyColor::Neutral
            ]
        );
    }

    #[test]
    fn missing_penalty_gets_default_grid() {
        let state: MatchState = serde_json::from_value(json!({ "scoreB": 2 })).unwrap();
        assert_eq!(state.penalty, PenaltyGrid::default());
    }

    #[test]
    fn zero_slots_fall_back_to_default() {
        let grid = PenaltyGrid {
            slots: 0,
            a: Vec::new(),
            b: Vec::new(),
        }
        .repaired();
        assert_eq!(grid.slots, DEFAULT_PENALTY_SLOTS);
        assert_eq!(grid.a.len(), DEFAULT_PENALTY_SLOTS);
    }

    #[test]
    fn oversized_slot_count_is_capped() {
        let state: MatchState = serde_json::from_value::<MatchState>(json!({
            "penalty": { "slots": u64::MAX, "A": ["red"], "B": [] }
        }))
        .unwrap()
        .repaired();

        assert_eq!(state.penalty.slots, MAX_PENALTY_SLOTS);
        assert_eq!(state.penalty.a.len(), MAX_PENALTY_SLOTS);
        assert_eq!(state.penalty.b.len(), MAX_PENALTY_SLOTS);
        assert_eq!(state.penalty.a[0], PenaltyColor::Penalty);
        assert_eq!(PenaltyGrid::new(1_000_000).slots, MAX_PENALTY_SLOTS);
    }

    #[test]
    fn stamp_formats_rfc3339() {
        let mut state = MatchState::default();
        state.stamp(UNIX_EPOCH + Duration::from_secs(86_400));
        assert_eq!(state.updated_at, "1970-01-02T00:00:00Z");
    }
}
