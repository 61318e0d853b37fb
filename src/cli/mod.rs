//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod files;
mod show;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{self, ConfigError, ConfigLoader, Configuration, SourceFormat};

pub use show::Section;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// windcfg - Check and inspect utility-first CSS framework configuration
#[derive(Parser)]
#[command(name = "windcfg")]
#[command(about = "windcfg - Load, validate and merge tailwind.config files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate a config file, reporting the first failure
    Check {
        /// Config file (default: nearest tailwind.config.* above the current directory)
        path: Option<PathBuf>,

        /// Parse as this format instead of detecting it from the extension
        #[arg(long, value_enum)]
        format: Option<SourceFormat>,
    },

    /// Print the merged configuration as JSON
    Show {
        /// Config file (default: nearest tailwind.config.* above the current directory)
        path: Option<PathBuf>,

        /// Parse as this format instead of detecting it from the extension
        #[arg(long, value_enum)]
        format: Option<SourceFormat>,

        /// Only print one part of the configuration
        #[arg(long, value_enum, default_value = "all")]
        section: Section,
    },

    /// List the files selected by the content patterns
    Files {
        /// Config file (default: nearest tailwind.config.* above the current directory)
        path: Option<PathBuf>,

        /// Parse as this format instead of detecting it from the extension
        #[arg(long, value_enum)]
        format: Option<SourceFormat>,

        /// Directory patterns are resolved against (default: the current
        /// directory, or the config file's directory for relative content)
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Print the built-in base theme as JSON
    Defaults,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check { path, format } => check::run_check(path.as_deref(), format),
        Commands::Show { path, format, section } => show::run_show(path.as_deref(), format, section),
        Commands::Files { path, format, root } => {
            files::run_files(path.as_deref(), format, root.as_deref())
        }
        Commands::Defaults => show::run_defaults(),
    }
}

/// Log to stderr. RUST_LOG, when set, replaces the level chosen by --verbose.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Print a load failure the way every subcommand reports it.
pub(crate) fn report_error(path: &Path, err: &ConfigError) {
    eprintln!("error[{}]: {}: {}", err.kind(), path.display(), err);
}

/// Locate and load the configuration for a subcommand.
///
/// On failure the error has already been printed and the exit code is returned.
pub(crate) fn load_for_command(
    path: Option<&Path>,
    format: Option<SourceFormat>,
) -> Result<(PathBuf, Arc<Configuration>), ExitCode> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config::find_config() {
            Some(p) => p,
            None => {
                eprintln!(
                    "Error: no config file found (looked for {})",
                    config::CONFIG_FILE_NAMES.join(", ")
                );
                return Err(ExitCode::from(EXIT_INVALID_ARGS));
            }
        },
    };

    let mut loader = ConfigLoader::with_defaults();
    let outcome = match format {
        Some(format) => std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::io(&path, e))
            .and_then(|raw| loader.load(&raw, format)),
        None => loader.load_file(&path),
    };

    match outcome {
        Ok(config) => Ok((path, config)),
        Err(e) => {
            report_error(&path, &e);
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}
