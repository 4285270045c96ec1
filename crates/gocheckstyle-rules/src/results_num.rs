//! Rule to limit the number of results of a signature.
//!
//! A bare result type counts as one. Counting and scope match
//! [`ParamsNum`](crate::ParamsNum).
//!
//! # Configuration
//!
//! - `results_num`: maximum results (0 disables the rule)

use gocheckstyle_core::visit::{self, Visit};
use gocheckstyle_core::{FileContext, Problem, Rule, RuleType, Signature, SourceFile};

/// Reports signatures with too many results.
#[derive(Debug, Clone)]
pub struct ResultsNum {
    limit: usize,
}

impl ResultsNum {
    /// Creates the rule with the given result limit.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Rule for ResultsNum {
    fn rule_type(&self) -> RuleType {
        RuleType::ResultsNum
    }

    fn description(&self) -> &'static str {
        "Limits the number of results of a function"
    }

    fn check(&self, _ctx: &FileContext, file: &SourceFile) -> Vec<Problem> {
        if self.limit == 0 {
            return Vec::new();
        }

        let mut visitor = ResultsVisitor {
            limit: self.limit,
            problems: Vec::new(),
        };
        visitor.visit_file(file);
        visitor.problems
    }
}

struct ResultsVisitor {
    limit: usize,
    problems: Vec<Problem>,
}

impl<'ast> Visit<'ast> for ResultsVisitor {
    fn visit_signature(&mut self, owner: &'ast str, node: &'ast Signature) {
        if let Some(results) = &node.results {
            let count = results.num_fields();
            if count > self.limit {
                self.problems.push(Problem::new(
                    RuleType::ResultsNum,
                    results.pos.clone(),
                    format!(
                        "func {owner}() has {count} results, more than {}",
                        self.limit
                    ),
                ));
            }
        }

        visit::visit_signature(self, owner, node);
    }
}
