//! Application-level configuration loading: where the match document and logos live,
//! and the limits applied to penalties and uploads.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::state::scoreboard::DEFAULT_PENALTY_SLOTS;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SCOREBOARD_CONFIG_PATH";
/// Directory holding the control UI, the match document and the logos by default.
const DEFAULT_PUBLIC_DIR: &str = "public";
/// URL prefix under which uploaded logos are served.
const DEFAULT_LOGO_URL_PREFIX: &str = "/logos";
/// Largest accepted logo upload.
pub const DEFAULT_MAX_LOGO_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Static files served as the router fallback.
    pub public_dir: PathBuf,
    /// JSON file holding the match document.
    pub state_file: PathBuf,
    /// Directory receiving uploaded logos.
    pub logo_dir: PathBuf,
    /// URL prefix logos are served from (no trailing slash).
    pub logo_url_prefix: String,
    /// Penalty indicators per team for freshly reset matches.
    pub penalty_slots: usize,
    /// Upper bound for a single logo upload, in bytes.
    pub max_logo_bytes: usize,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => match raw.validate() {
                    Ok(()) => {
                        let app_config: Self = raw.into();
                        info!(
                            path = %path.display(),
                            state_file = %app_config.state_file.display(),
                            logo_dir = %app_config.logo_dir.display(),
                            "loaded scoreboard config"
                        );
                        app_config
                    }
                    Err(err) => {
                        warn!(
                            path = %path.display(),
                            error = %err,
                            "invalid config values; falling back to defaults"
                        );
                        Self::default()
                    }
                },
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Defaults rooted at `public_dir`: `<public_dir>/data/score.json` and `<public_dir>/logos`.
    pub fn with_public_dir(public_dir: impl Into<PathBuf>) -> Self {
        let public_dir = public_dir.into();
        Self {
            state_file: public_dir.join("data").join("score.json"),
            logo_dir: public_dir.join("logos"),
            public_dir,
            logo_url_prefix: DEFAULT_LOGO_URL_PREFIX.into(),
            penalty_slots: DEFAULT_PENALTY_SLOTS,
            max_logo_bytes: DEFAULT_MAX_LOGO_BYTES,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_public_dir(DEFAULT_PUBLIC_DIR)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    public_dir: Option<PathBuf>,
    state_file: Option<PathBuf>,
    logo_dir: Option<PathBuf>,
    #[validate(length(min = 2))]
    logo_url_prefix: Option<String>,
    #[validate(range(min = 1, max = 20))]
    penalty_slots: Option<usize>,
    #[validate(range(min = 1, max = 16_777_216))]
    max_logo_bytes: Option<usize>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let base = value
            .public_dir
            .map(AppConfig::with_public_dir)
            .unwrap_or_default();

        Self {
            state_file: value.state_file.unwrap_or(base.state_file),
            logo_dir: value.logo_dir.unwrap_or(base.logo_dir),
            logo_url_prefix: value
                .logo_url_prefix
                .map(|prefix| normalize_url_prefix(&prefix))
                .unwrap_or(base.logo_url_prefix),
            penalty_slots: value.penalty_slots.unwrap_or(base.penalty_slots),
            max_logo_bytes: value.max_logo_bytes.unwrap_or(base.max_logo_bytes),
            public_dir: base.public_dir,
        }
    }
}

/// Leading slash, no trailing slash: `logos/` becomes `/logos`.
fn normalize_url_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        DEFAULT_LOGO_URL_PREFIX.into()
    } else {
        format!("/{trimmed}")
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn parse(json: &str) -> RawConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn defaults_live_under_public_dir() {
        let config = AppConfig::default();
        assert_eq!(config.state_file, Path::new("public/data/score.json"));
        assert_eq!(config.logo_dir, Path::new("public/logos"));
        assert_eq!(config.logo_url_prefix, "/logos");
        assert_eq!(config.penalty_slots, 5);
        assert_eq!(config.max_logo_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn public_dir_moves_derived_paths() {
        let config: AppConfig = parse(r#"{ "publicDir": "/srv/board" }"#).into();
        assert_eq!(config.state_file, Path::new("/srv/board/data/score.json"));
        assert_eq!(config.logo_dir, Path::new("/srv/board/logos"));
    }

    #[test]
    fn explicit_paths_win_over_public_dir() {
        let config: AppConfig = parse(
            r#"{ "publicDir": "web", "stateFile": "/var/lib/score.json", "logoUrlPrefix": "media/logos/", "penaltySlots": 3 }"#,
        )
        .into();
        assert_eq!(config.state_file, Path::new("/var/lib/score.json"));
        assert_eq!(config.logo_dir, Path::new("web/logos"));
        assert_eq!(config.logo_url_prefix, "/media/logos");
        assert_eq!(config.penalty_slots, 3);
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        assert!(parse(r#"{ "penaltySlots": 0 }"#).validate().is_err());
        assert!(parse(r#"{ "penaltySlots": 21 }"#).validate().is_err());
        assert!(parse(r#"{ "maxLogoBytes": 0 }"#).validate().is_err());
        assert!(parse(r#"{ "penaltySlots": 7 }"#).validate().is_ok());
        assert!(RawConfig::default().validate().is_ok());
    }
}
