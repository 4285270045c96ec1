//! Discovery of Go files to check.
//!
//! Directories are walked recursively for files with one of the parser's
//! extensions. Paths matching one of
//! the configured `ignore` globs are skipped and matching directories are not
//! descended into. Files named explicitly on the command line are always
//! checked.

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// `*` stops at `/`; `**` crosses directories.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Compiled `ignore` globs.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Compiles the patterns.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).with_context(|| format!("Invalid ignore pattern: {p}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Returns true if `path` matches any pattern.
    pub fn is_match(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.patterns
            .iter()
            .any(|p| p.matches_path_with(&path, MATCH_OPTIONS))
    }
}

/// Drops `./` components so `./tmp/a.go` matches `tmp/*`.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Options for file discovery.
#[derive(Debug, Clone)]
pub struct Walker {
    ignore: Arc<IgnoreSet>,
    extensions: Vec<String>,
    git_ignore: bool,
}

impl Walker {
    /// Creates a walker collecting files with the given extensions
    /// (`".go"` or `"go"`) and skipping the given globs.
    #[must_use]
    pub fn new(ignore: IgnoreSet, extensions: &[&str]) -> Self {
        Self {
            ignore: Arc::new(ignore),
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            git_ignore: false,
        }
    }

    /// Also honours `.gitignore` files.
    #[must_use]
    pub fn git_ignore(mut self, yes: bool) -> Self {
        self.git_ignore = yes;
        self
    }

    /// Expands the given paths into the files to check, sorted.
    pub fn discover(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_dir() {
                self.walk_dir(path, &mut files)?;
            } else {
                files.push(normalize(path));
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn wants(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn walk_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        if self.ignore.is_match(dir) {
            debug!("Ignoring directory: {}", dir.display());
            return Ok(());
        }

        let ignore = Arc::clone(&self.ignore);
        let mut builder = ignore::WalkBuilder::new(dir);
        builder
            .standard_filters(false)
            .git_ignore(self.git_ignore)
            .git_exclude(self.git_ignore)
            .require_git(false)
            .filter_entry(move |entry| !ignore.is_match(entry.path()));

        for entry in builder.build() {
            let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
            let path = entry.path();

            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if !is_file || !self.wants(path) {
                continue;
            }

            files.push(normalize(path));
        }

        Ok(())
    }
}
