//! Rule to limit the physical length of a file.
//!
//! # Configuration
//!
//! - `file_line`: maximum physical lines (0 disables the rule)
//!
//! Test files are exempt.

use gocheckstyle_core::{FileContext, FormatError, Problem, RuleType, SourceRule};

/// Reports files longer than a line limit.
#[derive(Debug, Clone)]
pub struct FileLine {
    limit: usize,
}

impl FileLine {
    /// Creates the rule with the given line limit.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Returns the configured limit.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl SourceRule for FileLine {
    fn rule_type(&self) -> RuleType {
        RuleType::FileLine
    }

    fn description(&self) -> &'static str {
        "Limits the number of lines in a file"
    }

    fn applies_to_tests(&self) -> bool {
        false
    }

    fn check_source(&self, ctx: &FileContext) -> Result<Vec<Problem>, FormatError> {
        let lines = ctx.line_count();
        if self.limit == 0 || lines <= self.limit {
            return Ok(Vec::new());
        }

        Ok(vec![Problem::new(
            RuleType::FileLine,
            ctx.end_position(),
            format!("{lines} lines more than {}", self.limit),
        )])
    }
}
