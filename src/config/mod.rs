//! Configuration module.
//!
//! Defaults are overridden by the config file, then environment variables,
//! then command-line flags.

/// Key event to [`crate::model::KeyAction`] mapping.
pub mod keybindings;
/// Config file parsing and precedence merging.
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ConfigError, ConfigFile, ResolvedConfig,
};
