/// Read-only overlay projection.
pub mod broadcast_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Logo upload validation and association.
pub mod logo_service;
/// Penalty indicator updates.
pub mod penalty_service;
/// Score, bulk update and reset operations.
pub mod score_service;
