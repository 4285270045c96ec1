//! Rule enforcing the Go package name convention.
//!
//! Package names are short, lower case and free of underscores. At most one
//! problem is reported per file, at the package identifier.

use gocheckstyle_core::{FileContext, Problem, Rule, RuleType, SourceFile};

/// Checks the package clause identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct PkgName;

impl PkgName {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PkgName {
    fn rule_type(&self) -> RuleType {
        RuleType::PkgName
    }

    fn description(&self) -> &'static str {
        "Package names are lower case without underscores"
    }

    fn check(&self, _ctx: &FileContext, file: &SourceFile) -> Vec<Problem> {
        let name = &file.package.name;

        let description = if name.contains('_') {
            format!(
                "don't use an underscore in package name, {name} should be {}",
                name.replace('_', "/")
            )
        } else if name.chars().any(char::is_uppercase) {
            format!(
                "don't use MixedCaps in package name, {name} should be {}",
                name.to_lowercase()
            )
        } else {
            return Vec::new();
        };

        vec![Problem::new(
            RuleType::PkgName,
            file.package.pos.clone(),
            description,
        )]
    }
}
