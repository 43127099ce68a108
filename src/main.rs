//! lokiq - Entry Point

use clap::Parser;
use lokiq::model::{AppError, ExploreMode, LokiDatasource, LokiQuery};
use std::path::PathBuf;
use tracing::info;

/// lokiq - terminal query editor for Loki log queries
#[derive(Parser, Debug)]
#[command(name = "lokiq")]
#[command(version)]
#[command(about = "Terminal query editor for Loki log queries with line-limit control")]
pub struct Args {
    /// Initial LogQL expression
    #[arg(short, long, default_value = "")]
    pub expr: String,

    /// Query row identifier
    #[arg(long, default_value = "A")]
    pub ref_id: String,

    /// Datasource default line limit (must be positive)
    #[arg(short = 'm', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_lines: Option<u64>,

    /// Explore mode on startup (logs or metrics)
    #[arg(long)]
    pub mode: Option<ExploreMode>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = {
        // Defaults → Config File → Env Vars → CLI Args
        let config_file =
            lokiq::config::load_config_with_precedence(args.config.clone()).map_err(AppError::from)?;
        let merged = lokiq::config::merge_config(config_file);
        let with_env = lokiq::config::apply_env_overrides(merged);
        lokiq::config::apply_cli_overrides(with_env, args.max_lines, args.mode)
    };

    lokiq::logging::init(&config.log_file_path).map_err(AppError::from)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let host = lokiq::host::ExploreHost::new(LokiQuery::new(args.ref_id.clone(), args.expr.clone()));
    let provider = lokiq::source::StaticLanguageProvider::new(config.labels.clone());
    let datasource = LokiDatasource::new(Some(config.max_lines), provider);
    let styles = lokiq::view::FieldStyles::new(lokiq::view::ColorConfig::from_env_and_args(
        args.no_color,
    ));

    let host = lokiq::view::run(host, datasource, config.explore_mode, styles)?;

    info!(runs = host.history().len(), "Editor closed");

    let query = host.into_query();
    println!("{}", serde_json::to_string(&query).map_err(AppError::from)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["lokiq", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["lokiq", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["lokiq"]);
        assert_eq!(args.expr, "");
        assert_eq!(args.ref_id, "A");
        assert_eq!(args.max_lines, None);
        assert_eq!(args.mode, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_expr_short_and_long() {
        let args = Args::parse_from(["lokiq", "-e", "{job=\"api\"}"]);
        assert_eq!(args.expr, "{job=\"api\"}");

        let args = Args::parse_from(["lokiq", "--expr", "{app=\"loki\"}"]);
        assert_eq!(args.expr, "{app=\"loki\"}");
    }

    #[test]
    fn test_max_lines_flag() {
        let args = Args::parse_from(["lokiq", "-m", "250"]);
        assert_eq!(args.max_lines, Some(250));
    }

    #[test]
    fn test_max_lines_rejects_zero() {
        let err = Args::try_parse_from(["lokiq", "--max-lines", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_max_lines_rejects_negative() {
        assert!(Args::try_parse_from(["lokiq", "--max-lines", "-1"]).is_err());
    }

    #[test]
    fn test_mode_parses() {
        let args = Args::parse_from(["lokiq", "--mode", "metrics"]);
        assert_eq!(args.mode, Some(ExploreMode::Metrics));
    }

    #[test]
    fn test_mode_invalid_rejects() {
        assert!(Args::try_parse_from(["lokiq", "--mode", "traces"]).is_err());
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["lokiq", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_cli_flags_flow_through_precedence_chain() {
        use lokiq::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            max_lines: Some(500),
            explore_mode: Some(ExploreMode::Logs),
            ..ConfigFile::default()
        };
        let merged = merge_config(Some(config_file));
        assert_eq!(merged.max_lines, 500);

        let args = Args::parse_from(["lokiq", "-m", "20", "--mode", "metrics"]);
        let resolved = apply_cli_overrides(merged, args.max_lines, args.mode);

        assert_eq!(resolved.max_lines, 20);
        assert_eq!(resolved.explore_mode, ExploreMode::Metrics);
    }
}
