//! Interfaces to the language front end.
//!
//! The rule engine never parses or formats source itself. A
//! [`SourceParser`] turns bytes into a [`SourceFile`] and a
//! [`SourceFormatter`] produces the canonical rendering that the formatting
//! rule compares against.

use std::path::{Path, PathBuf};

use crate::syntax::SourceFile;

/// Parses source bytes into a declaration tree.
pub trait SourceParser: Send + Sync {
    /// Language identifier (e.g., `"go"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this parser handles (e.g., `&[".go"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Parses one file.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the source is not syntactically valid.
    fn parse(&self, path: &Path, src: &[u8]) -> Result<SourceFile, ParseError>;
}

/// Produces the canonical formatting of source bytes.
pub trait SourceFormatter: Send + Sync {
    /// Returns the canonically formatted source.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if the formatter cannot run or rejects the
    /// input.
    fn format(&self, src: &[u8]) -> Result<Vec<u8>, FormatError>;
}

/// Syntactically invalid source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}:{}:{}: {message}", path.display(), line, column)]
pub struct ParseError {
    /// File that failed to parse.
    pub path: PathBuf,
    /// Line of the first error (1-indexed).
    pub line: usize,
    /// Column of the first error (1-indexed).
    pub column: usize,
    /// Byte offset of the first error.
    pub offset: usize,
    /// Parser message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(path: &Path, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            line,
            column,
            offset: 0,
            message: message.into(),
        }
    }

    /// Sets the byte offset of the error.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// Failure of the canonical formatter.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The formatter process could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was executed.
        program: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// IO error while talking to the formatter.
    #[error("formatter IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The formatter rejected the input.
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        /// Program that was executed.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured standard error.
        stderr: String,
    },
}
