//! Library crate for volley-score-back, exposing modules for binaries and integration tests.

/// Runtime configuration.
pub mod config;
/// Persistence of the match document and logos.
pub mod dao;
/// Wire types of the HTTP API.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// HTTP routes.
pub mod routes;
/// Business logic behind the routes.
pub mod services;
/// Shared application state and match model.
pub mod state;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::{
        config::AppConfig,
        dao::{logo_store::DiskLogoStore, match_store::InMemoryMatchStore},
        state::{AppState, SharedState},
    };

    /// Configuration rooted in a temporary public directory.
    pub fn test_config(dir: &TempDir) -> AppConfig {
        AppConfig::with_public_dir(dir.path())
    }

    /// State backed by a default in-memory match and an empty logo directory.
    pub fn test_state(dir: &TempDir) -> SharedState {
        test_state_with(dir, InMemoryMatchStore::default())
    }

    pub fn test_state_with(dir: &TempDir, store: InMemoryMatchStore) -> SharedState {
        let config = test_config(dir);
        std::fs::create_dir_all(&config.logo_dir).unwrap();
        let logo_store = DiskLogoStore::new(&config.logo_dir, &config.logo_url_prefix);
        AppState::new(config, Arc::new(store), Arc::new(logo_store))
    }
}
