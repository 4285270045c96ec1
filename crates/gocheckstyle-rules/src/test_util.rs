//! Shared helpers for rule tests.

use gocheckstyle_core::{FileContext, Problem, Rule, SourceParser};
use gocheckstyle_go::GoParser;
use std::path::Path;

/// Parses `src` as `a.go` and runs one tree rule over it.
pub(crate) fn check_go(rule: &dyn Rule, src: &str) -> Vec<Problem> {
    let path = Path::new("a.go");
    let file = GoParser::new()
        .parse(path, src.as_bytes())
        .expect("Failed to parse");
    let ctx = FileContext::new(path, src.as_bytes());
    rule.check(&ctx, &file)
}

/// Descriptions of the problems, in report order.
pub(crate) fn descriptions(problems: &[Problem]) -> Vec<&str> {
    problems.iter().map(|p| p.description.as_str()).collect()
}
