//! Rendering of classified problems.
//!
//! A reporter receives the problems of one file at a time, already
//! classified by severity, and renders everything in [`Reporter::finish`].
//! Each reporter owns its tallies; one is built per run.

use gocheckstyle::{Problem, Severity};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A problem together with its severity.
#[derive(Debug, Clone)]
pub struct Classified {
    /// Warning (normal) or error (fatal).
    pub severity: Severity,
    /// The problem itself.
    pub problem: Problem,
}

/// What the run should report through its exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitIntent {
    /// No fatal problems.
    Clean,
    /// At least one fatal problem.
    Fatal,
}

impl ExitIntent {
    fn from_fatal(has_fatal: bool) -> Self {
        if has_fatal {
            Self::Fatal
        } else {
            Self::Clean
        }
    }
}

/// Receives problems per file and renders a report.
pub trait Reporter {
    /// Records the problems of one file.
    fn receive_problems(&mut self, file: &Path, problems: Vec<Classified>);

    /// Writes the report and returns the exit intent.
    fn finish(self: Box<Self>, out: &mut dyn Write) -> io::Result<ExitIntent>;
}

/// Report formats selectable on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReporterKind {
    /// Human-readable lines grouped by severity.
    #[default]
    Plain,
    /// Checkstyle XML.
    Xml,
    /// JSON array of files.
    Json,
}

impl ReporterKind {
    /// Creates a fresh reporter of this kind.
    #[must_use]
    pub fn build(self) -> Box<dyn Reporter> {
        match self {
            Self::Plain => Box::new(PlainReporter::default()),
            Self::Xml => Box::new(XmlReporter::default()),
            Self::Json => Box::new(JsonReporter::default()),
        }
    }
}

/// Normal problems first, then fatal ones, each under a counting header.
#[derive(Debug, Default)]
pub struct PlainReporter {
    normal: Vec<Problem>,
    fatal: Vec<Problem>,
}

impl PlainReporter {
    fn write_group(out: &mut dyn Write, kind: &str, problems: &[Problem]) -> io::Result<()> {
        writeln!(
            out,
            "========= There are {} {kind} problems =========",
            problems.len()
        )?;
        for problem in problems {
            writeln!(out, "{problem}")?;
        }
        Ok(())
    }
}

impl Reporter for PlainReporter {
    fn receive_problems(&mut self, _file: &Path, problems: Vec<Classified>) {
        for c in problems {
            match c.severity {
                Severity::Error => self.fatal.push(c.problem),
                Severity::Warning => self.normal.push(c.problem),
            }
        }
    }

    fn finish(self: Box<Self>, out: &mut dyn Write) -> io::Result<ExitIntent> {
        if !self.normal.is_empty() {
            Self::write_group(out, "normal", &self.normal)?;
        }
        if !self.fatal.is_empty() {
            Self::write_group(out, "fatal", &self.fatal)?;
        }
        if self.normal.is_empty() && self.fatal.is_empty() {
            writeln!(out, "========= There are no problems =========")?;
        }
        Ok(ExitIntent::from_fatal(!self.fatal.is_empty()))
    }
}

/// Checkstyle 4.3 XML, one `<file>` per file with problems.
#[derive(Debug, Default)]
pub struct XmlReporter {
    files: Vec<(PathBuf, Vec<Classified>)>,
}

impl Reporter for XmlReporter {
    fn receive_problems(&mut self, file: &Path, problems: Vec<Classified>) {
        if !problems.is_empty() {
            self.files.push((file.to_path_buf(), problems));
        }
    }

    fn finish(self: Box<Self>, out: &mut dyn Write) -> io::Result<ExitIntent> {
        let mut has_fatal = false;

        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(out, r#"<checkstyle version="4.3">"#)?;
        for (file, problems) in &self.files {
            writeln!(
                out,
                "\t<file name=\"{}\">",
                escape_xml(&file.display().to_string())
            )?;
            for c in problems {
                has_fatal |= c.severity == Severity::Error;
                writeln!(
                    out,
                    "\t\t<error line=\"{}\" column=\"{}\" severity=\"{}\" message=\"{}\" source=\"checkstyle.{}\" />",
                    c.problem.position.line,
                    c.problem.position.column,
                    c.severity,
                    escape_xml(&c.problem.description),
                    c.problem.rule
                )?;
            }
            writeln!(out, "\t</file>")?;
        }
        writeln!(out, "</checkstyle>")?;

        Ok(ExitIntent::from_fatal(has_fatal))
    }
}

/// Escapes a string for use in an XML attribute value.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[derive(Debug, Serialize)]
struct JsonFile {
    file: PathBuf,
    problems: Vec<JsonProblem>,
}

#[derive(Debug, Serialize)]
struct JsonProblem {
    line: usize,
    column: usize,
    severity: Severity,
    rule: gocheckstyle::RuleType,
    message: String,
}

/// Pretty-printed JSON array of files with problems.
#[derive(Debug, Default)]
pub struct JsonReporter {
    files: Vec<JsonFile>,
    has_fatal: bool,
}

impl Reporter for JsonReporter {
    fn receive_problems(&mut self, file: &Path, problems: Vec<Classified>) {
        if problems.is_empty() {
            return;
        }

        let problems = problems
            .into_iter()
            .map(|c| {
                self.has_fatal |= c.severity == Severity::Error;
                JsonProblem {
                    line: c.problem.position.line,
                    column: c.problem.position.column,
                    severity: c.severity,
                    rule: c.problem.rule,
                    message: c.problem.description,
                }
            })
            .collect();

        self.files.push(JsonFile {
            file: file.to_path_buf(),
            problems,
        });
    }

    fn finish(self: Box<Self>, out: &mut dyn Write) -> io::Result<ExitIntent> {
        serde_json::to_writer_pretty(&mut *out, &self.files)?;
        writeln!(out)?;
        Ok(ExitIntent::from_fatal(self.has_fatal))
    }
}
