//! Configuration file loading with precedence handling.

use crate::email::EmailJsConfig;
use crate::state::{EngineSettings, Section};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A key parsed but its value is out of range or unknown.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Config key or environment variable.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// SQLite database holding projects and certifications.
    #[serde(default)]
    pub db_path: Option<PathBuf>,

    /// TOML profile with name, roles, about text and experience.
    #[serde(default)]
    pub profile_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Certification autoplay interval; 0 disables autoplay.
    #[serde(default)]
    pub autoplay_interval_ms: Option<u64>,

    /// Duration of each half of the project page slide.
    #[serde(default)]
    pub slide_phase_ms: Option<u64>,

    /// Minimum horizontal drag, in pixels, that counts as a swipe.
    #[serde(default)]
    pub swipe_threshold_px: Option<f32>,

    /// Pixel width assumed for one terminal column.
    #[serde(default)]
    pub cell_width_px: Option<f32>,

    /// Section shown on startup.
    #[serde(default)]
    pub start_section: Option<String>,

    /// EmailJS credentials for the contact form.
    #[serde(default)]
    pub emailjs: Option<EmailJsConfig>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Portfolio database.
    pub db_path: PathBuf,
    /// Profile TOML file; missing means built-in content.
    pub profile_path: PathBuf,
    /// Tracing output file.
    pub log_file_path: PathBuf,
    /// `None` when autoplay is disabled.
    pub autoplay_interval: Option<Duration>,
    /// Length of each project slide phase.
    pub slide_phase: Duration,
    /// Drag distance needed for a swipe.
    pub swipe_threshold_px: f32,
    /// Pixel width of one terminal column.
    pub cell_width_px: f32,
    /// Section shown first.
    pub start_section: Section,
    /// Contact form delivery settings.
    pub emailjs: EmailJsConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let engine = EngineSettings::default();
        Self {
            db_path: default_db_path(),
            profile_path: default_profile_path(),
            log_file_path: default_log_path(),
            autoplay_interval: engine.autoplay_interval,
            slide_phase: engine.slide_phase,
            swipe_threshold_px: engine.swipe_threshold_px,
            cell_width_px: engine.cell_width_px,
            start_section: Section::Home,
            emailjs: EmailJsConfig::default(),
        }
    }
}

impl ResolvedConfig {
    /// Carousel and layout tunables for the state layer.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            autoplay_interval: self.autoplay_interval,
            slide_phase: self.slide_phase,
            swipe_threshold_px: self.swipe_threshold_px,
            cell_width_px: self.cell_width_px,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/folio/folio.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("folio").join("folio.log")
    } else {
        PathBuf::from("folio.log")
    }
}

/// Resolve default database path (`~/.local/share/folio/portfolio.db` on Linux).
pub fn default_db_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("folio").join("portfolio.db"),
        None => PathBuf::from("portfolio.db"),
    }
}

/// Resolve default profile path, next to the config file.
pub fn default_profile_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("folio").join("profile.toml"),
        None => PathBuf::from("profile.toml"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/folio/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `FOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/folio/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("FOLIO_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FOLIO_DB`: database path
/// - `FOLIO_EMAILJS_SERVICE_ID`, `FOLIO_EMAILJS_TEMPLATE_ID`,
///   `FOLIO_EMAILJS_PUBLIC_KEY`: EmailJS credentials
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(db) = std::env::var("FOLIO_DB") {
        config.db_path = PathBuf::from(db);
    }

    let from_env = EmailJsConfig {
        service_id: std::env::var("FOLIO_EMAILJS_SERVICE_ID").ok(),
        template_id: std::env::var("FOLIO_EMAILJS_TEMPLATE_ID").ok(),
        public_key: std::env::var("FOLIO_EMAILJS_PUBLIC_KEY").ok(),
    };
    config.emailjs = from_env.or(config.emailjs);

    config
}

fn positive(key: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            key,
            reason: format!("expected a positive number, got {value}"),
        })
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `InvalidValue` for an unknown start section or a non-positive
/// pixel measure.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let start_section = match config.start_section {
        Some(name) => name
            .parse::<Section>()
            .map_err(|reason| ConfigError::InvalidValue {
                key: "start_section",
                reason,
            })?,
        None => defaults.start_section,
    };

    Ok(ResolvedConfig {
        db_path: config.db_path.unwrap_or(defaults.db_path),
        profile_path: config.profile_path.unwrap_or(defaults.profile_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        autoplay_interval: match config.autoplay_interval_ms {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => defaults.autoplay_interval,
        },
        slide_phase: config
            .slide_phase_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.slide_phase),
        swipe_threshold_px: match config.swipe_threshold_px {
            Some(px) => positive("swipe_threshold_px", px)?,
            None => defaults.swipe_threshold_px,
        },
        cell_width_px: match config.cell_width_px {
            Some(px) => positive("cell_width_px", px)?,
            None => defaults.cell_width_px,
        },
        start_section,
        emailjs: config.emailjs.unwrap_or(defaults.emailjs),
    })
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    db_override: Option<PathBuf>,
    profile_override: Option<PathBuf>,
    section_override: Option<Section>,
) -> ResolvedConfig {
    if let Some(db) = db_override {
        config.db_path = db;
    }

    if let Some(profile) = profile_override {
        config.profile_path = profile;
    }

    if let Some(section) = section_override {
        config.start_section = section;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
