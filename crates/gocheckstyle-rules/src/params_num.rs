//! Rule to limit the number of parameters of a signature.
//!
//! Counts fields the way `go/ast` does: each name counts once, an unnamed
//! parameter counts once and a variadic parameter counts once. Applies to
//! functions, methods, function literals and interface methods.
//!
//! # Configuration
//!
//! - `params_num`: maximum parameters (0 disables the rule)

use gocheckstyle_core::visit::{self, Visit};
use gocheckstyle_core::{FileContext, Problem, Rule, RuleType, Signature, SourceFile};

/// Reports signatures with too many parameters.
#[derive(Debug, Clone)]
pub struct ParamsNum {
    limit: usize,
}

impl ParamsNum {
    /// Creates the rule with the given parameter limit.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Rule for ParamsNum {
    fn rule_type(&self) -> RuleType {
        RuleType::ParamsNum
    }

    fn description(&self) -> &'static str {
        "Limits the number of parameters of a function"
    }

    fn check(&self, _ctx: &FileContext, file: &SourceFile) -> Vec<Problem> {
        if self.limit == 0 {
            return Vec::new();
        }

        let mut visitor = ParamsVisitor {
            limit: self.limit,
            problems: Vec::new(),
        };
        visitor.visit_file(file);
        visitor.problems
    }
}

struct ParamsVisitor {
    limit: usize,
    problems: Vec<Problem>,
}

impl<'ast> Visit<'ast> for ParamsVisitor {
    fn visit_signature(&mut self, owner: &'ast str, node: &'ast Signature) {
        let count = node.params.num_fields();
        if count > self.limit {
            self.problems.push(Problem::new(
                RuleType::ParamsNum,
                node.params.pos.clone(),
                format!("func {owner}() has {count} params, more than {}", self.limit),
            ));
        }

        visit::visit_signature(self, owner, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{check_go, descriptions};

    const SRC: &str = "package testdata

import (
\t\"fmt\"
)

func hello(a, b, c, _ int) {
\tfmt.Println(\"hello\")
}

func hello2(a, b int, c ...int) {
\tfmt.Println(\"... args\")
}

type z int

func (_ *z) hello(a, b int) {
\tfmt.Println(\"one receiver\")
}
";

    #[test]
    fn at_limit_is_fine() {
        assert!(check_go(&ParamsNum::new(4), SRC).is_empty());
    }

    #[test]
    fn one_over() {
        let problems = check_go(&ParamsNum::new(3), SRC);
        assert_eq!(
            descriptions(&problems),
            vec!["func hello() has 4 params, more than 3"]
        );
        assert_eq!(problems[0].position.to_string(), "a.go:7:11");
    }

    #[test]
    fn variadic_counts_once() {
        let problems = check_go(&ParamsNum::new(2), SRC);
        assert_eq!(
            descriptions(&problems),
            vec![
                "func hello() has 4 params, more than 2",
                "func hello2() has 3 params, more than 2",
            ]
        );
    }

    #[test]
    fn interface_methods_and_literals_are_checked() {
        let src = "package a

type Store interface {
\tPut(key, value string, ttl int) error
}

func run() {
\tf := func(a, b, c int) {}
\tf(1, 2, 3)
}
";
        let problems = check_go(&ParamsNum::new(2), src);
        assert_eq!(
            descriptions(&problems),
            vec![
                "func Put() has 3 params, more than 2",
                "func func literal() has 3 params, more than 2",
            ]
        );
    }

    #[test]
    fn zero_disables() {
        assert!(check_go(&ParamsNum::new(0), SRC).is_empty());
    }
}
