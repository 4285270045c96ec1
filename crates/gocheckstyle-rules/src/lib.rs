//! # gocheckstyle-rules
//!
//! Built-in style rules for gocheckstyle.
//!
//! ## Available Rules
//!
//! | Tag | Kind | Description |
//! |-----|------|-------------|
//! | `formated` | source | Source must match its `gofmt` output |
//! | `file_line` | source | Limits physical lines per file |
//! | `pkg_name` | tree | Package name is lower case without underscores |
//! | `func_line` | tree | Limits lines spanned by a function |
//! | `params_num` | tree | Limits parameters per signature |
//! | `results_num` | tree | Limits results per signature |
//! | `camel_name` | tree | Identifiers use camel case |
//!
//! Only `formated` runs on `_test.go` files.
//!
//! ## Usage
//!
//! ```ignore
//! use gocheckstyle_core::Checker;
//! use gocheckstyle_go::GoParser;
//! use gocheckstyle_rules::{FuncLine, ParamsNum};
//!
//! let checker = Checker::builder()
//!     .parser(GoParser::new())
//!     .rule(FuncLine::new(50))
//!     .rule(ParamsNum::new(4))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod camel_name;
mod file_line;
mod formatted;
mod func_line;
mod params_num;
mod pkg_name;
mod presets;
mod results_num;

#[cfg(test)]
mod test_util;

pub use camel_name::CamelName;
pub use file_line::FileLine;
pub use formatted::{Formatted, NOT_FORMATTED};
pub use func_line::FuncLine;
pub use params_num::ParamsNum;
pub use pkg_name::PkgName;
pub use presets::{all_rules, default_config, rules_from_config, RuleSet};
pub use results_num::ResultsNum;

/// Re-export core types for convenience.
pub use gocheckstyle_core::{Problem, Rule, RuleType, SourceRule};
