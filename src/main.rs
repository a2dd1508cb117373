//! Hua Lexicon - Main entrypoint.
//!
//! Loads configuration, initializes logging, reads the word list into a trie
//! and runs the requested queries, writing reports to standard output.

use std::io::{self, StdoutLock};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hua_lexicon_lib::config::{self, ConfigLoader, HuaConfig, LogConfig, OutputFormat};
use hua_lexicon_lib::data_structures::HuaTrie;
use hua_lexicon_lib::demo::{self, DemoScript, Query};
use hua_lexicon_lib::error::dataset::DatasetError;
use hua_lexicon_lib::error::{
    report_error, set_error_reporter, ErrorContext, HuaError, HuaResult, TracingErrorReporter,
};
use hua_lexicon_lib::report::Reporter;

/// Command line arguments for Hua Lexicon.
#[derive(Parser, Debug)]
#[clap(name = "hua", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, overriding the configured dataset path
    #[clap(short, long, value_parser)]
    dataset: Option<PathBuf>,

    /// Report format (text or json), overriding the configured format
    #[clap(short, long)]
    format: Option<OutputFormat>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load the dataset and run the standard demonstration
    Demo,

    /// Look up exact words
    Search {
        /// Words to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Check whether any word starts with each prefix
    StartsWith {
        /// Prefixes to check
        #[clap(required = true)]
        prefixes: Vec<String>,
    },

    /// List every word starting with each prefix
    Complete {
        /// Prefixes to enumerate
        #[clap(required = true)]
        prefixes: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr so stdout only carries reports.
fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level: {}", config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow!("Failed to set global tracing subscriber: {e}"))
}

/// Loads the word list named by the configuration into a new trie.
fn load_trie(
    config: &HuaConfig,
    reporter: &mut Reporter<StdoutLock<'static>>,
    show_insertions: bool,
) -> HuaResult<HuaTrie> {
    let words = hua_lexicon_lib::load_dataset(&config.dataset, &mut *reporter)?;

    if show_insertions {
        reporter.heading("Inserting words into the Trie:")?;
        let (trie, _) = hua_lexicon_lib::build_trie(&words, Some(&mut *reporter))?;
        Ok(trie)
    } else {
        let (trie, _) = hua_lexicon_lib::build_trie(&words, None::<&mut Reporter<StdoutLock<'_>>>)?;
        Ok(trie)
    }
}

/// Runs one batch of queries against the dataset.
fn run_queries(
    config: &HuaConfig,
    reporter: &mut Reporter<StdoutLock<'static>>,
    query: Query,
) -> HuaResult<()> {
    let trie = load_trie(config, reporter, false)?;
    for outcome in demo::run_query(&trie, &query, config.report.sort_matches) {
        reporter.outcome(&outcome)?;
    }
    Ok(())
}

/// Executes a dataset-backed command.
fn run(command: Command, config: &HuaConfig) -> HuaResult<()> {
    let mut reporter = Reporter::from_config(io::stdout().lock(), &config.report);

    match command {
        Command::Demo => {
            info!(dataset = %config.dataset.path.display(), "Running demonstration");
            let trie = load_trie(config, &mut reporter, config.report.show_insertions)?;
            let reports = demo::run_script(&trie, &DemoScript::standard(), config.report.sort_matches);
            demo::write_reports(&mut reporter, &reports)?;
        }
        Command::Search { words } => run_queries(config, &mut reporter, Query::Search(words))?,
        Command::StartsWith { prefixes } => {
            run_queries(config, &mut reporter, Query::StartsWith(prefixes))?
        }
        Command::Complete { prefixes } => {
            run_queries(config, &mut reporter, Query::Prefixes(prefixes))?
        }
        other => {
            return Err(HuaError::Custom(format!(
                "{other:?} does not use the dataset"
            )))
        }
    }

    reporter.finish()?;
    Ok(())
}

/// Writes the default configuration as TOML.
fn gen_config(output: &Path) -> HuaResult<()> {
    info!("Generating default configuration");
    let toml = HuaConfig::default().to_toml()?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = loader.load();

    let log_config = loaded
        .as_ref()
        .map(|c| c.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(&ErrorContext::new(e.into(), "config"));
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(dataset) = args.dataset {
        config.dataset.path = dataset;
    }
    if let Some(format) = args.format {
        config.report.format = format;
    }

    let result = match args.command.unwrap_or(Command::Demo) {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => gen_config(&output),
        command => run(command, &config),
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(HuaError::Dataset(DatasetError::Empty(path))) => {
            // The reporter has already told the user
            tracing::warn!(path = %path.display(), "Dataset is empty");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            report_error(
                &ErrorContext::new(e, "cli").with_details(format!(
                    "dataset: {}",
                    config.dataset.path.display()
                )),
            );
            Ok(ExitCode::FAILURE)
        }
    }
}
