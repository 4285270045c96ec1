//! # gocheckstyle
//!
//! Configurable style checker for Go sources.
//!
//! This is the facade crate: it wires the Go front end and the built-in
//! rules into a [`Checker`] and re-exports the core types.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let checker = gocheckstyle::from_json(br#"{"func_line": 50, "fatal": ["func_line"]}"#)?;
//!
//! for problem in checker.check("main.go", &std::fs::read("main.go")?)? {
//!     let level = checker.severity(&problem);
//!     println!("{level}: {problem}");
//! }
//! ```
//!
//! ## Custom Formatter
//!
//! ```rust,ignore
//! let checker = gocheckstyle::builder(config)
//!     .gofmt("/usr/local/go/bin/gofmt")
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;

pub use builder::CheckstyleBuilder;

// Re-export core types and traits
pub use gocheckstyle_core::*;

/// Go parser and formatter.
pub mod go {
    pub use gocheckstyle_go::*;
}

/// Built-in rules.
pub mod rules {
    pub use gocheckstyle_rules::*;
}

/// Errors creating a checker.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration document could not be decoded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The checker could not be assembled.
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Returns a builder for a checker with the given configuration.
#[must_use]
pub fn builder(config: Config) -> CheckstyleBuilder {
    CheckstyleBuilder::new(config)
}

/// Creates a checker from a configuration, formatting with `gofmt`.
///
/// # Errors
///
/// Returns an error if the checker cannot be assembled.
pub fn new(config: &Config) -> Result<Checker, Error> {
    Ok(CheckstyleBuilder::new(config.clone()).build()?)
}

/// Creates a checker from a JSON configuration document.
///
/// # Errors
///
/// Returns [`Error::Config`] if the document is not valid configuration.
pub fn from_json(content: &[u8]) -> Result<Checker, Error> {
    let config = Config::from_slice(content)?;
    new(&config)
}
