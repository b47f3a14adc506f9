//! areatree CLI - replay area selections outside the access form
//!
//! Usage: areatree <COMMAND>
//!
//! Commands:
//!   select   Build the tree, apply clicks, print the selected area ids
//!   summary  Print per-country selection counts

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use areatree::config::{Config, OutputFormat, Verbosity};
use areatree::{build_forest, load_areas, load_selected_ids, report, SelectionForest};

/// areatree - tri-state administrative area selection
#[derive(Parser, Debug)]
#[command(name = "areatree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print one id per line instead of a JSON array
    #[arg(long, global = true)]
    lines: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the tree, apply clicks in order, print the selected area ids
    Select {
        /// JSON file with the nested area hierarchy
        areas: PathBuf,

        /// JSON file with previously selected ids
        #[arg(short, long)]
        selected: Option<PathBuf>,

        /// Click the checkbox of this area (repeatable, applied in order)
        #[arg(short, long = "toggle", value_name = "AREA_ID")]
        toggles: Vec<String>,

        /// Uncheck everything before applying clicks
        #[arg(long, conflicts_with = "all")]
        clear: bool,

        /// Check everything before applying clicks
        #[arg(long)]
        all: bool,

        /// Print only the topmost checked areas
        #[arg(long)]
        covering: bool,
    },

    /// Print per-country selection counts
    Summary {
        /// JSON file with the nested area hierarchy
        areas: PathBuf,

        /// JSON file with previously selected ids
        #[arg(short, long)]
        selected: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().ok();
    let (mut config, warnings) = Config::load_or_default(cwd.as_deref());
    config.output.verbosity = config.output.verbosity.raised_by(cli.verbose);
    if cli.lines {
        config.output.format = OutputFormat::Lines;
    }

    init_tracing(config.output.verbosity, cli.verbose > 0);
    for warning in &warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => tracing::warn!(
                "unknown config key '{}' at {} (did you mean '{}'?)",
                warning.key,
                location,
                suggestion
            ),
            None => tracing::warn!("unknown config key '{}' at {}", warning.key, location),
        }
    }

    match cli.command {
        Commands::Select {
            areas,
            selected,
            toggles,
            clear,
            all,
            covering,
        } => {
            let mut forest = load_forest(&areas, selected.as_deref())?;
            if clear {
                forest.clear_forest();
            }
            if all {
                forest.select_forest();
            }
            for area_id in &toggles {
                forest
                    .toggle_by_id(area_id)
                    .with_context(|| format!("cannot toggle '{area_id}'"))?;
            }

            let ids = if covering || config.selection.covering {
                forest.minimal_covering_ids()
            } else {
                forest.all_selected_ids()
            };
            print!("{}", report::format_ids(&ids, config.output.format));
        }
        Commands::Summary { areas, selected } => {
            let forest = load_forest(&areas, selected.as_deref())?;
            print!("{}", report::summary(&forest));
        }
    }

    Ok(())
}

fn load_forest(areas: &Path, selected: Option<&Path>) -> Result<SelectionForest> {
    let raw = load_areas(areas)
        .with_context(|| format!("failed to read areas from {}", areas.display()))?;
    let selected_ids = match selected {
        Some(path) => load_selected_ids(path)
            .with_context(|| format!("failed to read selection from {}", path.display()))?,
        None => Vec::new(),
    };
    Ok(build_forest(raw, selected_ids))
}

fn init_tracing(verbosity: Verbosity, from_flag: bool) {
    let directive = log_directive(verbosity, from_flag, |key| std::env::var(key).ok());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// `-v` wins, then `AREATREE_LOG`, then `RUST_LOG`, then the configured level.
/// Env filters that do not parse are skipped.
fn log_directive(
    verbosity: Verbosity,
    from_flag: bool,
    env: impl Fn(&str) -> Option<String>,
) -> String {
    if !from_flag {
        for key in ["AREATREE_LOG", "RUST_LOG"] {
            if let Some(directive) = env(key).filter(|d| EnvFilter::try_new(d).is_ok()) {
                return directive;
            }
        }
    }
    verbosity.filter_directive().to_string()
}
