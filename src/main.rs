//! Record View - Entry Point

use clap::Parser;
use recview::actions::{default_actions, ActionOutbox};
use recview::model::{AppError, LayoutId};
use recview::state::{DataView, DataViewConfig};
use recview::store::FileStore;
use recview::view::{ColorConfig, Palette, StatusCallbacks, StatusLine, TuiError};
use std::path::PathBuf;
use tracing::info;

/// Record View - browse a record file in switchable layouts
#[derive(Parser, Debug)]
#[command(name = "recview")]
#[command(version)]
#[command(about = "Browse JSON records as a table, cards, list or grid with persisted column choices")]
pub struct Args {
    /// Records file: a JSON array of objects with an `id`, or JSON Lines
    pub records: PathBuf,

    /// Column schema file (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Layout to start in when no preference is saved
    #[arg(short, long, value_parser = clap::value_parser!(LayoutId))]
    pub layout: Option<LayoutId>,

    /// Preference namespace, so several views keep separate settings
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = recview::config::load_config_with_precedence(args.config.clone())?;
        let merged = recview::config::merge_config(config_file);
        let with_env = recview::config::apply_env_overrides(merged)?;
        recview::config::apply_cli_overrides(with_env, args.namespace.clone(), args.layout)
    };

    recview::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let records = recview::source::load_records(&args.records)?;
    let columns = match &args.schema {
        Some(path) => recview::source::load_schema(path)?,
        None => Vec::new(),
    };
    info!(
        records = records.len(),
        columns = columns.len(),
        "Input loaded"
    );

    let store = FileStore::open(&config.preferences_path)?;
    let outbox = ActionOutbox::new();
    let status = StatusLine::new();

    let view_config = DataViewConfig::new(config.namespace)
        .with_records(records)
        .with_columns(columns)
        .with_layouts(config.layouts, config.default_layout)
        .with_bulk_actions(default_actions(&outbox))
        .with_bulk_actions_enabled(config.enable_bulk_actions)
        .with_column_toggle_enabled(config.enable_column_toggle);
    let view = DataView::initialize(view_config, store)
        .with_callbacks(StatusCallbacks::new(status.clone()));

    let palette = Palette::new(ColorConfig::from_env_and_args(args.no_color));
    recview::view::run(view, outbox, status, palette).map_err(|err| match err {
        TuiError::Io(io) => AppError::Terminal(io),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["recview", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let err = Args::try_parse_from(["recview", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_records_file_is_required() {
        let err = Args::try_parse_from(["recview"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["recview", "parts.json"]);
        assert_eq!(args.records, PathBuf::from("parts.json"));
        assert_eq!(args.schema, None);
        assert_eq!(args.layout, None);
        assert_eq!(args.namespace, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_layout_flag_parses_name() {
        let args = Args::parse_from(["recview", "parts.json", "--layout", "Grid"]);
        assert_eq!(args.layout, Some(LayoutId::Grid));
    }

    #[test]
    fn test_layout_flag_rejects_unknown() {
        let result = Args::try_parse_from(["recview", "parts.json", "-l", "kanban"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_and_namespace() {
        let args = Args::parse_from([
            "recview",
            "parts.json",
            "--schema",
            "columns.toml",
            "-n",
            "warehouse",
        ]);
        assert_eq!(args.schema, Some(PathBuf::from("columns.toml")));
        assert_eq!(args.namespace.as_deref(), Some("warehouse"));
    }
}
