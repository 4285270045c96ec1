//! Rule to limit the line span of functions.
//!
//! Applies to function and method declarations and to function literals at
//! any depth. The span is the end line minus the start line of the whole
//! declaration.
//!
//! # Configuration
//!
//! - `func_line`: maximum span (0 disables the rule)

use gocheckstyle_core::visit::{self, Visit};
use gocheckstyle_core::{FileContext, FuncDecl, Problem, Rule, RuleType, SourceFile};

/// Reports functions spanning more lines than a limit.
#[derive(Debug, Clone)]
pub struct FuncLine {
    limit: usize,
}

impl FuncLine {
    /// Creates the rule with the given line limit.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Rule for FuncLine {
    fn rule_type(&self) -> RuleType {
        RuleType::FuncLine
    }

    fn description(&self) -> &'static str {
        "Limits the number of lines spanned by a function"
    }

    fn check(&self, _ctx: &FileContext, file: &SourceFile) -> Vec<Problem> {
        if self.limit == 0 {
            return Vec::new();
        }

        let mut visitor = FuncLineVisitor {
            limit: self.limit,
            problems: Vec::new(),
        };
        visitor.visit_file(file);
        visitor.problems
    }
}

struct FuncLineVisitor {
    limit: usize,
    problems: Vec<Problem>,
}

impl<'ast> Visit<'ast> for FuncLineVisitor {
    fn visit_func(&mut self, node: &'ast FuncDecl) {
        let lines = node.span.line_span();
        if lines > self.limit {
            self.problems.push(Problem::new(
                RuleType::FuncLine,
                node.span.start.clone(),
                format!(
                    "func {}() {lines} lines more than {}",
                    node.display_name(),
                    self.limit
                ),
            ));
        }

        visit::visit_func(self, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{check_go, descriptions};

    // `hello` starts on line 7 and ends on line 16.
    const SRC: &str = "package testdata

import (
\t\"fmt\"
)

func hello() {
\tfmt.Println(1)
\tfmt.Println(2)
\tfmt.Println(3)
\tfmt.Println(4)
\tfmt.Println(5)
\tfmt.Println(6)
\tfmt.Println(7)
\tfmt.Println(8)
}
";

    #[test]
    fn at_limit_is_fine() {
        assert!(check_go(&FuncLine::new(9), SRC).is_empty());
    }

    #[test]
    fn over_limit_reports_at_function_start() {
        let problems = check_go(&FuncLine::new(8), SRC);
        assert_eq!(
            descriptions(&problems),
            vec!["func hello() 9 lines more than 8"]
        );
        assert_eq!(problems[0].position.line, 7);
        assert_eq!(problems[0].position.column, 1);
    }

    #[test]
    fn zero_disables() {
        assert!(check_go(&FuncLine::new(0), SRC).is_empty());
    }

    #[test]
    fn function_literals_are_checked() {
        let src = "package a

var handler = func() {
\tprintln(1)
\tprintln(2)
\tprintln(3)
}

func outer() {
\tgo func() {
\t\tprintln(1)
\t\tprintln(2)
\t}()
}
";
        let problems = check_go(&FuncLine::new(3), src);
        assert_eq!(
            descriptions(&problems),
            vec![
                "func func literal() 4 lines more than 3",
                "func outer() 5 lines more than 3",
            ]
        );
        assert_eq!(problems[0].position.line, 3);
        assert_eq!(problems[0].position.column, 15);
    }
}
