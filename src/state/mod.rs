/// Pure transforms over the match document.
pub mod mutations;
/// Match document model.
pub mod scoreboard;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::AppConfig,
    dao::{logo_store::LogoStore, match_store::MatchStore},
    dto::score::MatchUpdate,
    error::ServiceError,
    state::{
        mutations::apply_update,
        scoreboard::{MatchState, Side},
    },
};

/// Application state shared between handlers.
pub type SharedState = Arc<AppState>;

/// Central application state holding the stores and configuration.
pub struct AppState {
    config: AppConfig,
    match_store: Arc<dyn MatchStore>,
    logo_store: Arc<dyn LogoStore>,
    write_gate: Mutex<()>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(
        config: AppConfig,
        match_store: Arc<dyn MatchStore>,
        logo_store: Arc<dyn LogoStore>,
    ) -> SharedState {
        Arc::new(Self {
            config,
            match_store,
            logo_store,
            write_gate: Mutex::new(()),
        })
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Store holding uploaded logos.
    pub fn logo_store(&self) -> &Arc<dyn LogoStore> {
        &self.logo_store
    }

    /// Read the current match document without taking the write gate.
    pub async fn read_match(&self) -> Result<MatchState, ServiceError> {
        Ok(self.match_store.read().await?)
    }

    /// Read, transform and write back the match document.
    ///
    /// Cycles are serialised through the write gate, so two concurrent mutations both
    /// land instead of the later one overwriting the earlier.
    pub async fn mutate_match<F>(&self, transform: F) -> Result<MatchState, ServiceError>
    where
        F: FnOnce(MatchState) -> Result<MatchState, ServiceError>,
    {
        let _gate = self.write_gate.lock().await;
        self.read_modify_write(transform).await
    }

    /// Save a logo and, when `team` is given, point that team at it.
    ///
    /// Both steps run under the write gate so a concurrent reset cannot delete the file
    /// between the save and the document write.
    pub async fn store_logo(
        &self,
        extension: String,
        bytes: Vec<u8>,
        team: Option<Side>,
    ) -> Result<String, ServiceError> {
        let _gate = self.write_gate.lock().await;
        let url = self.logo_store.save(extension, bytes).await?;
        if let Some(side) = team {
            let update = MatchUpdate::logo(side, url.clone());
            self.read_modify_write(move |current| Ok(apply_update(current, update)))
                .await?;
        }
        Ok(url)
    }

    /// Delete every stored logo and replace the whole match document with `doc`.
    ///
    /// Returns the number of logos removed together with the stored document.
    pub async fn reset_match(&self, doc: MatchState) -> Result<(usize, MatchState), ServiceError> {
        let _gate = self.write_gate.lock().await;
        let removed = self.logo_store.clear().await;
        let stored = self.match_store.write(doc).await?;
        Ok((removed, stored))
    }

    async fn read_modify_write<F>(&self, transform: F) -> Result<MatchState, ServiceError>
    where
        F: FnOnce(MatchState) -> Result<MatchState, ServiceError>,
    {
        let current = self.match_store.read().await?;
        let next = transform(current)?;
        Ok(self.match_store.write(next).await?)
    }
}
