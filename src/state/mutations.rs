//! Pure `(current, input) -> next` transforms applied to the match document.
//!
//! None of these touch storage; the services wrap them in a read-modify-write cycle.

use thiserror::Error;

use crate::{
    dto::score::MatchUpdate,
    state::scoreboard::{MatchState, PenaltyColor, PenaltyGrid, Side},
};

/// Reasons a penalty slot cannot be written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PenaltyError {
    /// Slot index outside `0..slots`.
    #[error("Index out of range")]
    IndexOutOfRange {
        /// Requested index.
        index: i64,
        /// Slots per team in the current grid.
        slots: usize,
    },
    /// A merge tried to resize the grid of a running match.
    #[error("Penalty slots are fixed until reset ({slots} per team)")]
    SlotsFixed {
        /// Slot count carried by the update.
        requested: usize,
        /// Slots per team in the stored grid.
        slots: usize,
    },
}

/// A fresh document with default names, zero scores and an all-neutral grid.
pub fn fresh_match(penalty_slots: usize) -> MatchState {
    MatchState {
        penalty: PenaltyGrid::new(penalty_slots),
        ..MatchState::default()
    }
}

/// Overwrite every field present in `update`; everything else is kept.
pub fn apply_update(mut state: MatchState, update: MatchUpdate) -> MatchState {
    let MatchUpdate {
        team_a_name,
        team_a_logo,
        team_b_name,
        team_b_logo,
        score_a,
        score_b,
        sets_won_a,
        sets_won_b,
        set_scores,
        serve,
        timeout_a,
        timeout_b,
        match_status,
        penalty,
        updated_at: _,
    } = update;

    if let Some(value) = team_a_name {
        state.team_a_name = value;
    }
    if let Some(value) = team_a_logo {
        state.team_a_logo = value;
    }
    if let Some(value) = team_b_name {
        state.team_b_name = value;
    }
    if let Some(value) = team_b_logo {
        state.team_b_logo = value;
    }
    if let Some(value) = score_a {
        state.score_a = value;
    }
    if let Some(value) = score_b {
        state.score_b = value;
    }
    if let Some(value) = sets_won_a {
        state.sets_won_a = value;
    }
    if let Some(value) = sets_won_b {
        state.sets_won_b = value;
    }
    if let Some(value) = set_scores {
        state.set_scores = value;
    }
    if let Some(value) = serve {
        state.serve = value;
    }
    if let Some(value) = timeout_a {
        state.timeout_a = value;
    }
    if let Some(value) = timeout_b {
        state.timeout_b = value;
    }
    if let Some(value) = match_status {
        state.match_status = value;
    }
    if let Some(value) = penalty {
        state.penalty = value;
    }

    state.repaired()
}

/// Reject an update whose penalty grid does not keep the stored slot count.
pub fn check_penalty_slots(state: &MatchState, update: &MatchUpdate) -> Result<(), PenaltyError> {
    match &update.penalty {
        Some(grid) if grid.slots != state.penalty.slots => Err(PenaltyError::SlotsFixed {
            requested: grid.slots,
            slots: state.penalty.slots,
        }),
        _ => Ok(()),
    }
}

/// Add one point to `team`; `None` leaves the document unchanged.
pub fn increment_score(mut state: MatchState, team: Option<Side>) -> MatchState {
    if let Some(side) = team {
        let score = state.score_mut(side);
        *score = score.saturating_add(1);
    }
    state
}

/// Remove one point from `team`, never going below zero.
pub fn decrement_score(mut state: MatchState, team: Option<Side>) -> MatchState {
    if let Some(side) = team {
        let score = state.score_mut(side);
        *score = score.saturating_sub(1);
    }
    state
}

/// Set one penalty slot. The grid is repaired first so every slot holds a canonical
/// color; no transition order between colors is enforced.
pub fn set_penalty_slot(
    mut state: MatchState,
    side: Side,
    index: i64,
    color: PenaltyColor,
) -> Result<MatchState, PenaltyError> {
    let grid = std::mem::take(&mut state.penalty).repaired();
    let slots = grid.slots;
    state.penalty = grid;

    let slot = usize::try_from(index)
        .ok()
        .filter(|slot| *slot < slots)
        .ok_or(PenaltyError::IndexOutOfRange { index, slots })?;

    state.penalty.row_mut(side)[slot] = color;
    Ok(state)
}
