/// Overlay projection row.
pub mod broadcast;
/// Health check response.
pub mod health;
/// Logo upload bodies.
pub mod logo;
/// Penalty request body.
pub mod penalty;
/// Score and merge-update bodies.
pub mod score;
/// Input validation helpers.
pub mod validation;
