//! Rule traits for defining style rules.

use crate::context::FileContext;
use crate::provider::FormatError;
use crate::syntax::SourceFile;
use crate::types::{Problem, RuleType};

/// A per-file rule over the declaration tree.
///
/// Implement this trait to create rules that inspect declarations. Rules
/// receive the parsed tree and usually walk it with a
/// [`Visit`](crate::visit::Visit) implementation.
///
/// # Example
///
/// ```ignore
/// use gocheckstyle_core::{FileContext, Problem, Rule, RuleType, SourceFile};
/// use gocheckstyle_core::visit::{self, IdentRole, Visit};
///
/// pub struct NoShortNames;
///
/// impl Rule for NoShortNames {
///     fn rule_type(&self) -> RuleType { RuleType::CamelName }
///
///     fn check(&self, ctx: &FileContext, file: &SourceFile) -> Vec<Problem> {
///         let mut visitor = ShortNameVisitor::default();
///         visitor.visit_file(file);
///         visitor.problems
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the tag attached to problems from this rule.
    fn rule_type(&self) -> RuleType;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Whether this rule also runs on test files.
    fn applies_to_tests(&self) -> bool {
        false
    }

    /// Checks a single file and returns any problems found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `file` - The parsed declaration tree of the file
    fn check(&self, ctx: &FileContext, file: &SourceFile) -> Vec<Problem>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// A per-file rule over the raw source bytes.
///
/// Source rules run before tree rules and may fail when a collaborator they
/// depend on (the canonical formatter) breaks.
pub trait SourceRule: Send + Sync {
    /// Returns the tag attached to problems from this rule.
    fn rule_type(&self) -> RuleType;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Whether this rule also runs on test files.
    fn applies_to_tests(&self) -> bool {
        true
    }

    /// Checks the raw contents of a file.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if the canonical formatter fails on source
    /// that already parsed.
    fn check_source(&self, ctx: &FileContext) -> Result<Vec<Problem>, FormatError>;
}

/// Type alias for boxed `SourceRule` trait objects.
pub type SourceRuleBox = Box<dyn SourceRule>;
