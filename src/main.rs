//! pagesift - Entry Point

use clap::Parser;
use pagesift::model::{AppError, ContentTable};
use pagesift::state::AppState;
use pagesift::view::{ColorConfig, Palette};
use std::path::PathBuf;
use tracing::info;

/// Browse five image pages and search their entries
#[derive(Parser, Debug)]
#[command(name = "pagesift")]
#[command(version)]
#[command(about = "Image carousel with a search-filtered entry list")]
pub struct Args {
    /// Start with this text in the search field
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start on this page (0-based)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = pagesift::config::load_config_with_precedence(args.config.clone())?;
        let merged = pagesift::config::merge_config(config_file);
        let with_env = pagesift::config::apply_env_overrides(merged);
        pagesift::config::apply_cli_overrides(with_env, args.no_color, args.page)
    };

    pagesift::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let table = ContentTable::builtin();
    let start = table.page_id(config.initial_page)?;
    let query = args.search.as_deref().unwrap_or("");
    let state = AppState::with_start(table, start, query);

    let palette = Palette::new(ColorConfig::new(config.color));
    pagesift::view::run(state, palette)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["pagesift", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["pagesift", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["pagesift"]);
        assert_eq!(args.search, None);
        assert_eq!(args.page, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_search_flag_short() {
        let args = Args::parse_from(["pagesift", "-s", "item 3"]);
        assert_eq!(args.search, Some("item 3".to_string()));
    }

    #[test]
    fn test_search_flag_long() {
        let args = Args::parse_from(["pagesift", "--search", "fifth"]);
        assert_eq!(args.search, Some("fifth".to_string()));
    }

    #[test]
    fn test_page_flag() {
        let args = Args::parse_from(["pagesift", "-p", "3"]);
        assert_eq!(args.page, Some(3));
    }

    #[test]
    fn test_page_flag_rejects_negative() {
        let result = Args::try_parse_from(["pagesift", "--page", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["pagesift", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_config_flag() {
        let args = Args::parse_from(["pagesift", "--config", "/tmp/pagesift.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/pagesift.toml")));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = Args::try_parse_from(["pagesift", "--follow"]);
        assert!(result.is_err());
    }
}
