//! # gocheckstyle-core
//!
//! Core framework for style checking Go sources.
//!
//! This crate provides the foundational types and the rule engine:
//!
//! - [`Problem`] for representing a located style violation
//! - [`Config`] for the flat, opt-in rule configuration
//! - [`SourceFile`] and the [`visit`] module for walking declarations
//! - [`Rule`] and [`SourceRule`] traits for per-file rules
//! - [`SourceParser`] and [`SourceFormatter`] for the language front end
//! - [`Checker`] for running rules over one file at a time
//!
//! ## Example
//!
//! ```ignore
//! use gocheckstyle_core::{Checker, RuleType};
//!
//! let checker = Checker::builder()
//!     .parser(GoParser::new())
//!     .rule(FuncLine::new(50))
//!     .fatal(RuleType::FuncLine)
//!     .build()?;
//!
//! for problem in checker.check("main.go", &src)? {
//!     println!("{problem}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod context;
mod provider;
mod rule;
mod syntax;
mod types;

/// Recursive traversal of the declaration tree.
pub mod visit;

pub use checker::{BuildError, CheckError, Checker, CheckerBuilder};
pub use config::{Config, ConfigError};
pub use context::{FileContext, TEST_FILE_SUFFIX};
pub use provider::{FormatError, ParseError, SourceFormatter, SourceParser};
pub use rule::{Rule, RuleBox, SourceRule, SourceRuleBox};
pub use syntax::{
    Decl, DeclGroup, Field, FieldList, FuncDecl, GroupKind, Ident, InterfaceType, MethodSpec,
    ShortVarDecl, Signature, SourceFile, Span, Spec, StructType,
};
pub use types::{Position, Problem, RuleType, Severity, UnknownRuleType};
