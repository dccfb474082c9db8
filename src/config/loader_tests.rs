//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_folio_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("folio") && path_str.ends_with("config.toml"),
        "Path should contain 'folio' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_paths_are_namespaced() {
    assert!(default_log_path().to_string_lossy().ends_with("folio.log"));
    assert!(default_db_path().to_string_lossy().ends_with("portfolio.db"));
    assert!(default_profile_path()
        .to_string_lossy()
        .ends_with("profile.toml"));
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("folio_test_config.toml");

    let toml_content = r#"
db_path = "/srv/folio/portfolio.db"
autoplay_interval_ms = 6000
slide_phase_ms = 300
swipe_threshold_px = 40.0
cell_width_px = 9.5
start_section = "projects"

[emailjs]
service_id = "service_abc"
template_id = "template_xyz"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.db_path, Some(PathBuf::from("/srv/folio/portfolio.db")));
    assert_eq!(config.autoplay_interval_ms, Some(6000));
    assert_eq!(config.slide_phase_ms, Some(300));
    assert_eq!(config.swipe_threshold_px, Some(40.0));
    assert_eq!(config.cell_width_px, Some(9.5));
    assert_eq!(config.start_section.as_deref(), Some("projects"));
    let emailjs = config.emailjs.expect("emailjs section");
    assert_eq!(emailjs.service_id.as_deref(), Some("service_abc"));
    assert_eq!(emailjs.public_key, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("folio_test_invalid.toml");
    fs::write(&config_path, "autoplay_interval_ms = [not toml").expect("write");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a parse error, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown keys should be rejected");

    let result: Result<ConfigFile, _> = toml::from_str("[emailjs]\nsecret = \"x\"");
    assert!(result.is_err(), "Unknown emailjs keys should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None).unwrap();
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.autoplay_interval, Some(Duration::from_millis(4000)));
    assert_eq!(config.slide_phase, Duration::from_millis(500));
    assert_eq!(config.swipe_threshold_px, 50.0);
    assert_eq!(config.cell_width_px, 8.0);
    assert_eq!(config.start_section, Section::Home);
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let file = ConfigFile {
        log_file_path: Some(PathBuf::from("/custom/path/to/app.log")),
        slide_phase_ms: Some(250),
        start_section: Some("Certifications".to_string()),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file)).unwrap();
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.log_file_path, PathBuf::from("/custom/path/to/app.log"));
    assert_eq!(resolved.slide_phase, Duration::from_millis(250));
    assert_eq!(resolved.start_section, Section::Certifications);
    assert_eq!(resolved.db_path, defaults.db_path);
    assert_eq!(resolved.autoplay_interval, defaults.autoplay_interval);
}

#[test]
fn zero_autoplay_interval_disables_autoplay() {
    let file = ConfigFile {
        autoplay_interval_ms: Some(0),
        ..ConfigFile::default()
    };
    assert_eq!(merge_config(Some(file)).unwrap().autoplay_interval, None);
}

#[test]
fn merge_config_rejects_unknown_section() {
    let file = ConfigFile {
        start_section: Some("blog".to_string()),
        ..ConfigFile::default()
    };
    let err = merge_config(Some(file)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            key: "start_section",
            ..
        }
    ));
}

#[test]
fn merge_config_rejects_non_positive_pixels() {
    let file = ConfigFile {
        cell_width_px: Some(0.0),
        ..ConfigFile::default()
    };
    assert!(merge_config(Some(file)).is_err());

    let file = ConfigFile {
        swipe_threshold_px: Some(-5.0),
        ..ConfigFile::default()
    };
    assert!(merge_config(Some(file)).is_err());
}

#[test]
fn engine_settings_follow_resolved_values() {
    let config = ResolvedConfig {
        autoplay_interval: None,
        cell_width_px: 10.0,
        ..ResolvedConfig::default()
    };
    let engine = config.engine_settings();
    assert_eq!(engine.autoplay_interval, None);
    assert_eq!(engine.cell_width_px, 10.0);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the vars on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static [&'static str]);

impl EnvGuard {
    fn new(names: &'static [&'static str]) -> Self {
        for name in names {
            env::remove_var(name);
        }
        EnvGuard(names)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for name in self.0 {
            env::remove_var(name);
        }
    }
}

const ENV_VARS: &[&str] = &[
    "FOLIO_DB",
    "FOLIO_EMAILJS_SERVICE_ID",
    "FOLIO_EMAILJS_TEMPLATE_ID",
    "FOLIO_EMAILJS_PUBLIC_KEY",
];

#[test]
#[serial(folio_env)]
fn apply_env_overrides_respects_folio_db() {
    let _guard = EnvGuard::new(ENV_VARS);
    env::set_var("FOLIO_DB", "/tmp/env.db");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.db_path, PathBuf::from("/tmp/env.db"));
}

#[test]
#[serial(folio_env)]
fn apply_env_overrides_prefers_env_emailjs_over_file() {
    let _guard = EnvGuard::new(ENV_VARS);
    env::set_var("FOLIO_EMAILJS_PUBLIC_KEY", "env_key");

    let base = ResolvedConfig {
        emailjs: EmailJsConfig {
            service_id: Some("file_service".into()),
            template_id: None,
            public_key: Some("file_key".into()),
        },
        ..ResolvedConfig::default()
    };
    let result = apply_env_overrides(base);

    assert_eq!(result.emailjs.public_key.as_deref(), Some("env_key"));
    assert_eq!(result.emailjs.service_id.as_deref(), Some("file_service"));
    assert_eq!(result.emailjs.template_id, None);
}

#[test]
#[serial(folio_env)]
fn apply_env_overrides_no_change_when_env_vars_not_set() {
    let _guard = EnvGuard::new(ENV_VARS);

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base, "Config should be unchanged when no env var is set");
}

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    env::remove_var("FOLIO_CONFIG");

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("folio_explicit.toml");
    fs::write(&explicit_path, "slide_phase_ms = 100").expect("Failed to write explicit config");

    let env_path = temp_dir.join("folio_env.toml");
    fs::write(&env_path, "slide_phase_ms = 200").expect("Failed to write env config");
    env::set_var("FOLIO_CONFIG", env_path.to_str().unwrap());

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(
        config.slide_phase_ms,
        Some(100),
        "Should use explicit path, not FOLIO_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
    env::remove_var("FOLIO_CONFIG");
}

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    env::remove_var("FOLIO_CONFIG");

    let env_path = env::temp_dir().join("folio_env_only.toml");
    fs::write(&env_path, "start_section = \"contact\"").expect("Failed to write env config");
    env::set_var("FOLIO_CONFIG", env_path.to_str().unwrap());

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.start_section.as_deref(), Some("contact"));

    fs::remove_file(env_path).ok();
    env::remove_var("FOLIO_CONFIG");
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    let result = apply_cli_overrides(base.clone(), None, None, None);
    assert_eq!(result, base);
}

#[test]
fn apply_cli_overrides_replace_each_field() {
    let result = apply_cli_overrides(
        ResolvedConfig::default(),
        Some(PathBuf::from("/cli.db")),
        Some(PathBuf::from("/cli-profile.toml")),
        Some(Section::About),
    );
    assert_eq!(result.db_path, PathBuf::from("/cli.db"));
    assert_eq!(result.profile_path, PathBuf::from("/cli-profile.toml"));
    assert_eq!(result.start_section, Section::About);
}

#[test]
#[serial(folio_env)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(ENV_VARS);

    // file sets db and section
    let file = ConfigFile {
        db_path: Some(PathBuf::from("/file.db")),
        start_section: Some("about".to_string()),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(file)).unwrap();
    assert_eq!(merged.db_path, PathBuf::from("/file.db"));

    // env overrides db
    env::set_var("FOLIO_DB", "/env.db");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.db_path, PathBuf::from("/env.db"));
    assert_eq!(with_env.start_section, Section::About);

    // cli overrides section and db
    let final_config = apply_cli_overrides(
        with_env,
        Some(PathBuf::from("/cli.db")),
        None,
        Some(Section::Projects),
    );
    assert_eq!(final_config.db_path, PathBuf::from("/cli.db"));
    assert_eq!(final_config.start_section, Section::Projects);
}
