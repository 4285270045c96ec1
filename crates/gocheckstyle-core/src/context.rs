//! Context types for rule execution.

use std::path::Path;

use crate::types::Position;

/// File name suffix that marks a test file.
pub const TEST_FILE_SUFFIX: &str = "_test.go";

/// Context provided to rules for one check call.
///
/// Contains the raw bytes and metadata about the file being checked so that
/// rules can make context-aware decisions.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path as given to the checker.
    pub path: &'a Path,
    /// Raw file contents.
    pub content: &'a [u8],
    /// Whether this file is detected as a test file.
    pub is_test: bool,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a [u8]) -> Self {
        Self {
            path,
            content,
            is_test: Self::detect_test_file(path),
        }
    }

    /// Detects test files by their name suffix.
    fn detect_test_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(TEST_FILE_SUFFIX))
    }

    /// Counts physical lines. A trailing newline does not open a new line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        let newlines = self.content.iter().filter(|&&b| b == b'\n').count();
        match self.content.last() {
            None | Some(b'\n') => newlines,
            Some(_) => newlines + 1,
        }
    }

    /// Position of the first byte of the file.
    #[must_use]
    pub fn start_position(&self) -> Position {
        Position::new(self.path.to_path_buf(), 1, 1)
    }

    /// Position just past the last byte of the last physical line.
    #[must_use]
    pub fn end_position(&self) -> Position {
        let line = self.line_count().max(1);
        let body = self.content.strip_suffix(b"\n").unwrap_or(self.content);
        let line_start = body
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        Position::new(self.path.to_path_buf(), line, body.len() - line_start + 1)
            .with_offset(body.len())
    }
}
