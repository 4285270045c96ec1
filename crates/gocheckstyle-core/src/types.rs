//! Core types for style problems.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Severity of a problem, decided by the configured fatal tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Normal problem, reported but does not fail the run.
    Warning,
    /// Fatal problem, fails the run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Tag identifying the rule that produced a problem.
///
/// The tags are stable: they appear in reports and in the `fatal` list of
/// the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleType {
    /// Physical line count of a file.
    #[serde(rename = "file_line")]
    FileLine,
    /// Line span of a function.
    #[serde(rename = "func_line")]
    FuncLine,
    /// Number of parameter fields.
    #[serde(rename = "params_num")]
    ParamsNum,
    /// Number of result fields.
    #[serde(rename = "results_num")]
    ResultsNum,
    /// Canonical formatting compliance.
    #[serde(rename = "formated")]
    Formated,
    /// Package name convention.
    #[serde(rename = "pkg_name")]
    PkgName,
    /// Identifier naming convention.
    #[serde(rename = "camel_name")]
    CamelName,
}

impl RuleType {
    /// Every tag, in the order the checker runs the rules.
    pub const ALL: [Self; 7] = [
        Self::Formated,
        Self::FileLine,
        Self::PkgName,
        Self::FuncLine,
        Self::ParamsNum,
        Self::ResultsNum,
        Self::CamelName,
    ];

    /// Returns the stable tag string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FileLine => "file_line",
            Self::FuncLine => "func_line",
            Self::ParamsNum => "params_num",
            Self::ResultsNum => "results_num",
            Self::Formated => "formated",
            Self::PkgName => "pkg_name",
            Self::CamelName => "camel_name",
        }
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known rule tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule type: {0}")]
pub struct UnknownRuleType(pub String);

impl FromStr for RuleType {
    type Err = UnknownRuleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRuleType(s.to_string()))
    }
}

/// Source code position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// File path as given to the checker.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in bytes).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    #[serde(skip)]
    pub offset: usize,
}

impl Position {
    /// Creates a new position with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
        }
    }

    /// Sets the byte offset for this position.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A style problem found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Where the problem was found.
    pub position: Position,
    /// Human-readable message.
    pub description: String,
    /// Rule that produced this problem.
    pub rule: RuleType,
}

impl Problem {
    /// Creates a new problem.
    #[must_use]
    pub fn new(rule: RuleType, position: Position, description: impl Into<String>) -> Self {
        Self {
            position,
            description: description.into(),
            rule,
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [{}] {}", self.position, self.rule, self.description)
    }
}
