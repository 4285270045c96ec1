//! gocheckstyle CLI tool.
//!
//! Usage:
//! ```bash
//! gocheckstyle check [OPTIONS] [PATH]...
//! gocheckstyle list-rules
//! gocheckstyle init
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;
mod report;
mod walker;

use commands::check::CheckOptions;
use report::ReporterKind;

/// Style checker for Go source files
#[derive(Parser)]
#[command(name = "gocheckstyle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GOCHECKSTYLE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check Go files and directories
    Check {
        /// Files or directories to check (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "plain")]
        reporter: ReporterKind,

        /// Formatter executable used by the `formated` rule
        #[arg(long, env = "GOCHECKSTYLE_GOFMT")]
        gofmt: Option<String>,

        /// Also skip files matched by .gitignore
        #[arg(long)]
        git_ignore: bool,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,

        /// Write gocheckstyle.toml instead of gocheckstyle.json
        #[arg(long)]
        toml: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check {
            paths,
            reporter,
            gofmt,
            git_ignore,
        } => commands::check::run(
            CheckOptions {
                paths,
                reporter,
                gofmt,
                git_ignore,
            },
            cli.config.as_deref(),
        ),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force, toml } => {
            commands::init::run(force, toml).map(|()| ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(2)
        }
    }
}
