//! The rule engine: parses one file and runs every rule over it.

use crate::context::FileContext;
use crate::provider::{FormatError, ParseError, SourceParser};
use crate::rule::{Rule, RuleBox, SourceRule, SourceRuleBox};
use crate::types::{Problem, RuleType, Severity};

use miette::Diagnostic;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that stop a file from being checked.
///
/// Style violations are never errors; they are returned as [`Problem`]s.
#[derive(Debug, Error, Diagnostic)]
pub enum CheckError {
    /// The source is not syntactically valid.
    #[error("Parse error: {0}")]
    #[diagnostic(code(gocheckstyle::parse))]
    Parse(#[from] ParseError),

    /// The canonical formatter failed on source that parsed.
    #[error("Canonical formatting failed for {path}: {source}")]
    #[diagnostic(
        code(gocheckstyle::format),
        help("the formatter must accept any source that parses; check its installation")
    )]
    Format {
        /// File being checked.
        path: PathBuf,
        /// Formatter failure.
        source: FormatError,
    },
}

/// Errors building a [`Checker`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// No parser was supplied.
    #[error("A source parser is required")]
    MissingParser,
}

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    parser: Option<Box<dyn SourceParser>>,
    source_rules: Vec<SourceRuleBox>,
    rules: Vec<RuleBox>,
    fatal: HashSet<RuleType>,
}

impl CheckerBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parser producing declaration trees.
    #[must_use]
    pub fn parser<P: SourceParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Adds a source rule. Source rules run first, in insertion order.
    #[must_use]
    pub fn source_rule<R: SourceRule + 'static>(mut self, rule: R) -> Self {
        self.source_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed source rule.
    #[must_use]
    pub fn source_rule_box(mut self, rule: SourceRuleBox) -> Self {
        self.source_rules.push(rule);
        self
    }

    /// Adds a tree rule. Tree rules run after source rules, in insertion
    /// order.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed tree rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Marks problems of this rule type as fatal.
    #[must_use]
    pub fn fatal(mut self, rule: RuleType) -> Self {
        self.fatal.insert(rule);
        self
    }

    /// Marks problems of all these rule types as fatal.
    #[must_use]
    pub fn fatal_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleType>,
    {
        self.fatal.extend(rules);
        self
    }

    /// Builds the checker.
    ///
    /// # Errors
    ///
    /// Returns an error if no parser was set.
    pub fn build(self) -> Result<Checker, BuildError> {
        let parser = self.parser.ok_or(BuildError::MissingParser)?;
        Ok(Checker {
            parser,
            source_rules: self.source_rules,
            rules: self.rules,
            fatal: self.fatal,
        })
    }
}

/// Runs the configured rules over single files.
///
/// A checker holds no per-file state and can be shared between threads; each
/// [`check`](Self::check) call parses its input and returns a fresh list.
pub struct Checker {
    parser: Box<dyn SourceParser>,
    source_rules: Vec<SourceRuleBox>,
    rules: Vec<RuleBox>,
    fatal: HashSet<RuleType>,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the parser in use.
    #[must_use]
    pub fn parser(&self) -> &dyn SourceParser {
        self.parser.as_ref()
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.source_rules.len() + self.rules.len()
    }

    /// Returns the rule types of all enabled rules, in execution order.
    #[must_use]
    pub fn enabled_rules(&self) -> Vec<RuleType> {
        self.source_rules
            .iter()
            .map(|r| r.rule_type())
            .chain(self.rules.iter().map(|r| r.rule_type()))
            .collect()
    }

    /// Checks one file.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Parse`] if the source does not parse (no problems
    /// are returned then) and [`CheckError::Format`] if the canonical
    /// formatter fails.
    pub fn check(&self, path: impl AsRef<Path>, src: &[u8]) -> Result<Vec<Problem>, CheckError> {
        let path = path.as_ref();
        debug!("Checking: {}", path.display());

        let file = self.parser.parse(path, src)?;
        let ctx = FileContext::new(path, src);
        let mut problems = Vec::new();

        for rule in &self.source_rules {
            if ctx.is_test && !rule.applies_to_tests() {
                debug!("Skipping {} for test file", rule.rule_type());
                continue;
            }

            let found = rule
                .check_source(&ctx)
                .map_err(|source| CheckError::Format {
                    path: path.to_path_buf(),
                    source,
                })?;
            problems.extend(found);
        }

        for rule in &self.rules {
            if ctx.is_test && !rule.applies_to_tests() {
                debug!("Skipping {} for test file", rule.rule_type());
                continue;
            }

            problems.extend(rule.check(&ctx, &file));
        }

        debug!("{}: {} problem(s)", path.display(), problems.len());
        Ok(problems)
    }

    /// Returns true if the problem's rule type is configured as fatal.
    #[must_use]
    pub fn is_fatal(&self, problem: &Problem) -> bool {
        self.fatal.contains(&problem.rule)
    }

    /// Classifies a problem as [`Severity::Error`] (fatal) or
    /// [`Severity::Warning`].
    #[must_use]
    pub fn severity(&self, problem: &Problem) -> Severity {
        if self.is_fatal(problem) {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}
