//! # gocheckstyle-go
//!
//! Tree-sitter based Go front end for gocheckstyle.
//!
//! This crate supplies the two language collaborators the rule engine in
//! `gocheckstyle-core` depends on:
//!
//! - [`GoParser`] parses Go source with `tree-sitter-go` and lowers the
//!   syntax tree into a [`SourceFile`](gocheckstyle_core::SourceFile)
//! - [`Gofmt`] produces the canonical formatting by piping source through
//!   the `gofmt` executable

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gofmt;
mod lower;
mod parser;

pub use gofmt::{Gofmt, DEFAULT_GOFMT};
pub use parser::GoParser;
