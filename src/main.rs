//! folio - Entry Point

use clap::{Parser, Subcommand};
use folio::adapter::{adapt_certifications, adapt_projects};
use folio::config::ResolvedConfig;
use folio::email::dispatcher_from_config;
use folio::model::{AppError, Profile};
use folio::state::{AppState, Section};
use folio::store::{import_json, PortfolioStore, SqliteStore};
use folio::view::{ColorConfig, TuiError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// folio - a terminal portfolio with project and certification carousels
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Terminal portfolio viewer with project and certification carousels")]
pub struct Args {
    /// SQLite database with projects and certifications
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// TOML profile (name, roles, about, experience)
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Section to open on startup
    #[arg(short, long, value_parser = clap::value_parser!(Section))]
    pub section: Option<Section>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand; the viewer runs when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Maintenance subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Load projects and certifications from a JSON seed file into the database
    Import {
        /// Seed document with `projects` and `certifications` arrays
        json: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = folio::config::load_config_with_precedence(args.config.clone())?;
        let merged = folio::config::merge_config(config_file)?;
        let with_env = folio::config::apply_env_overrides(merged);
        folio::config::apply_cli_overrides(
            with_env,
            args.db.clone(),
            args.profile.clone(),
            args.section,
        )
    };

    folio::logging::init(&config.log_file_path)?;

    info!(
        db = %config.db_path.display(),
        profile = %config.profile_path.display(),
        start_section = %config.start_section,
        "Configuration loaded and resolved"
    );

    match args.command {
        Some(Command::Import { json }) => run_import(&config, &json)?,
        None => run_viewer(config, args.no_color)?,
    }

    Ok(())
}

fn open_store(path: &Path) -> Result<SqliteStore, AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(SqliteStore::open(path)?)
}

fn run_import(config: &ResolvedConfig, json: &Path) -> Result<(), AppError> {
    let mut store = open_store(&config.db_path)?;
    let summary = import_json(&mut store, json)?;
    println!(
        "Imported {} projects and {} certifications into {}",
        summary.projects,
        summary.certifications,
        config.db_path.display()
    );
    Ok(())
}

fn run_viewer(config: ResolvedConfig, no_color: bool) -> Result<(), AppError> {
    let profile = Profile::load(&config.profile_path)?;
    let store = open_store(&config.db_path)?;
    let projects = adapt_projects(&store.list_projects()?);
    let certifications = adapt_certifications(&store.list_certifications()?);
    info!(
        projects = projects.len(),
        certifications = certifications.len(),
        "portfolio loaded"
    );

    let mut app_state = AppState::new(
        profile,
        projects,
        certifications,
        config.engine_settings(),
        Instant::now(),
    );
    app_state.select_section(config.start_section);
    app_state.color_enabled = ColorConfig::from_env_and_args(no_color).colors_enabled();

    let dispatcher = Arc::from(dispatcher_from_config(&config.emailjs));
    folio::view::run(app_state, dispatcher).map_err(|TuiError::Io(e)| AppError::Terminal(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["folio", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["folio", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["folio"]);
        assert_eq!(args.db, None);
        assert_eq!(args.profile, None);
        assert_eq!(args.section, None);
        assert!(!args.no_color);
        assert_eq!(args.command, None);
    }

    #[test]
    fn test_flags_parse() {
        let args = Args::parse_from([
            "folio",
            "--db",
            "/tmp/p.db",
            "--profile",
            "me.toml",
            "--section",
            "certifications",
            "--no-color",
        ]);
        assert_eq!(args.db, Some(PathBuf::from("/tmp/p.db")));
        assert_eq!(args.profile, Some(PathBuf::from("me.toml")));
        assert_eq!(args.section, Some(Section::Certifications));
        assert!(args.no_color);
    }

    #[test]
    fn test_import_subcommand() {
        let args = Args::parse_from(["folio", "import", "seed.json", "--db", "x.db"]);
        assert_eq!(
            args.command,
            Some(Command::Import {
                json: PathBuf::from("seed.json")
            })
        );
        assert_eq!(args.db, Some(PathBuf::from("x.db")));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = Args::try_parse_from(["folio", "--section", "blog"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }
}
