//! Rule requiring sources to match their canonical formatting.
//!
//! The canonical rendering comes from a [`SourceFormatter`]; any byte
//! difference yields one problem at the start of the file. This rule also
//! runs on test files.

use gocheckstyle_core::{FileContext, FormatError, Problem, RuleType, SourceFormatter, SourceRule};
use tracing::debug;

/// Description attached to formatting problems.
pub const NOT_FORMATTED: &str = "source is not formatted";

/// Compares the source with the formatter's output.
pub struct Formatted {
    formatter: Box<dyn SourceFormatter>,
}

impl Formatted {
    /// Creates the rule around a formatter.
    #[must_use]
    pub fn new<F: SourceFormatter + 'static>(formatter: F) -> Self {
        Self {
            formatter: Box::new(formatter),
        }
    }

    /// Creates the rule around an already boxed formatter.
    #[must_use]
    pub fn from_box(formatter: Box<dyn SourceFormatter>) -> Self {
        Self { formatter }
    }
}

impl SourceRule for Formatted {
    fn rule_type(&self) -> RuleType {
        RuleType::Formated
    }

    fn description(&self) -> &'static str {
        "Requires sources to match gofmt output"
    }

    fn check_source(&self, ctx: &FileContext) -> Result<Vec<Problem>, FormatError> {
        let canonical = self.formatter.format(ctx.content)?;
        if canonical == ctx.content {
            return Ok(Vec::new());
        }

        debug!(
            "{}: {} bytes, canonical form has {}",
            ctx.path.display(),
            ctx.content.len(),
            canonical.len()
        );
        Ok(vec![Problem::new(
            RuleType::Formated,
            ctx.start_position(),
            NOT_FORMATTED,
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    /// Replaces leading spaces with tabs, which is all the fixtures need.
    struct TabsFormatter;

    impl SourceFormatter for TabsFormatter {
        fn format(&self, src: &[u8]) -> Result<Vec<u8>, FormatError> {
            let text = String::from_utf8_lossy(src);
            let lines: Vec<String> = text
                .split('\n')
                .map(|line| {
                    let trimmed = line.trim_start_matches(' ');
                    let indent = (line.len() - trimmed.len()) / 4;
                    format!("{}{trimmed}", "\t".repeat(indent))
                })
                .collect();
            Ok(lines.join("\n").into_bytes())
        }
    }

    struct FailingFormatter;

    impl SourceFormatter for FailingFormatter {
        fn format(&self, _src: &[u8]) -> Result<Vec<u8>, FormatError> {
            Err(FormatError::Failed {
                program: "gofmt".into(),
                status: "exit status: 2".into(),
                stderr: "<standard input>:1:1: expected 'package'".into(),
            })
        }
    }

    #[test]
    fn formatted_source_passes() {
        let ctx = FileContext::new(Path::new("a.go"), b"package a\n\nfunc f() {\n\tf()\n}\n");
        let problems = Formatted::new(TabsFormatter).check_source(&ctx).unwrap();
        assert!(problems.is_empty());
    }

    #[test]
    fn badly_indented_source_reports_once_at_start() {
        let ctx = FileContext::new(
            Path::new("a_test.go"),
            b"package a\n\nfunc f() {\n    f()\n    f()\n}\n",
        );
        let rule = Formatted::new(TabsFormatter);
        assert!(rule.applies_to_tests());

        let problems = rule.check_source(&ctx).unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].description, NOT_FORMATTED);
        assert_eq!(problems[0].position.to_string(), "a_test.go:1:1");
    }

    #[test]
    fn formatter_failure_propagates() {
        let ctx = FileContext::new(Path::new("a.go"), b"package a\n");
        let result = Formatted::new(FailingFormatter).check_source(&ctx);
        assert!(matches!(result, Err(FormatError::Failed { .. })));
    }
}
