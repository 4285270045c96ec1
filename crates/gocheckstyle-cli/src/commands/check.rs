//! Check command implementation.

use anyhow::{Context, Result};
use gocheckstyle::{CheckError, Checker, ParseError, Problem};
use miette::{Diagnostic, NamedSource, SourceSpan};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config_resolver;
use crate::report::{Classified, ExitIntent, ReporterKind};
use crate::walker::{IgnoreSet, Walker};

/// Exit status when a fatal problem was reported.
const EXIT_FATAL: u8 = 1;

/// Exit status when a file could not be read, parsed or formatted.
const EXIT_FAILURE: u8 = 2;

/// Options of the check command.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Files and directories to check.
    pub paths: Vec<PathBuf>,
    /// Report format.
    pub reporter: ReporterKind,
    /// `gofmt` executable override.
    pub gofmt: Option<String>,
    /// Honour `.gitignore` files while walking.
    pub git_ignore: bool,
}

/// Why a file produced no problem list.
enum Failure {
    Read(std::io::Error),
    Parse { error: ParseError, src: Vec<u8> },
    Format(CheckError),
}

/// A parse error rendered against the offending source.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("Failed to parse {}", path.display())]
#[diagnostic(code(gocheckstyle::parse), help("the file was skipped"))]
struct ParseDiagnostic {
    path: PathBuf,
    #[source_code]
    src: NamedSource<String>,
    #[label("{message}")]
    span: SourceSpan,
    message: String,
}

impl ParseDiagnostic {
    fn new(error: ParseError, src: &[u8]) -> Self {
        let text = String::from_utf8_lossy(src).into_owned();
        let len = usize::from(error.offset < text.len());
        Self {
            src: NamedSource::new(error.path.display().to_string(), text),
            span: SourceSpan::from((error.offset, len)),
            path: error.path,
            message: error.message,
        }
    }
}

/// Runs the check command.
pub fn run(options: CheckOptions, config_path: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = config_resolver::resolve(&cwd, config_path).load()?;

    let ignore = IgnoreSet::new(&config.ignore)?;
    if !config.has_enabled_rules() {
        tracing::warn!("No rules are enabled; every file will pass");
    }

    let mut builder = gocheckstyle::builder(config);
    if let Some(program) = options.gofmt {
        builder = builder.gofmt(program);
    }
    let checker = builder.build().context("Failed to build checker")?;
    let parser = checker.parser();

    let walker = Walker::new(ignore, parser.extensions()).git_ignore(options.git_ignore);
    let paths = if options.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        options.paths
    };
    let files = walker.discover(&paths)?;

    tracing::info!(
        "Checking {} {} file(s) with {} rule(s)",
        files.len(),
        parser.language_id(),
        checker.rule_count()
    );
    tracing::debug!("Enabled rules: {:?}", checker.enabled_rules());

    let mut outcomes: Vec<(PathBuf, Result<Vec<Problem>, Failure>)> = files
        .par_iter()
        .map(|path| (path.clone(), check_file(&checker, path)))
        .collect();
    outcomes.sort_by(|a, b| a.0.cmp(&b.0));

    let mut reporter = options.reporter.build();
    let mut failed = 0usize;
    let mut total = 0usize;

    for (path, outcome) in outcomes {
        match outcome {
            Ok(problems) => {
                total += problems.len();
                let classified = problems
                    .into_iter()
                    .map(|problem| Classified {
                        severity: checker.severity(&problem),
                        problem,
                    })
                    .collect();
                reporter.receive_problems(&path, classified);
            }
            Err(failure) => {
                failed += 1;
                report_failure(&path, failure);
            }
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let intent = reporter
        .finish(&mut out)
        .context("Failed to write report")?;

    tracing::info!(
        "Found {total} problem(s) in {} file(s), {failed} file(s) skipped",
        files.len()
    );

    if failed > 0 {
        return Ok(ExitCode::from(EXIT_FAILURE));
    }
    Ok(match intent {
        ExitIntent::Clean => ExitCode::SUCCESS,
        ExitIntent::Fatal => ExitCode::from(EXIT_FATAL),
    })
}

fn check_file(checker: &Checker, path: &Path) -> Result<Vec<Problem>, Failure> {
    let src = std::fs::read(path).map_err(Failure::Read)?;
    match checker.check(path, &src) {
        Ok(problems) => Ok(problems),
        Err(CheckError::Parse(error)) => Err(Failure::Parse { error, src }),
        Err(other) => Err(Failure::Format(other)),
    }
}

fn report_failure(path: &Path, failure: Failure) {
    match failure {
        Failure::Read(e) => {
            tracing::error!("Failed to read {}: {e}", path.display());
        }
        Failure::Parse { error, src } => {
            tracing::warn!("Skipping {}: {error}", path.display());
            eprintln!("{:?}", miette::Report::new(ParseDiagnostic::new(error, &src)));
        }
        Failure::Format(e) => {
            tracing::error!("{e}");
            eprintln!("{:?}", miette::Report::new(e));
        }
    }
}
