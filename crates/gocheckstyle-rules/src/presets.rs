//! Rule sets built from a configuration.

use crate::{CamelName, FileLine, Formatted, FuncLine, ParamsNum, PkgName, ResultsNum};
use gocheckstyle_core::{Config, RuleBox, RuleType, SourceFormatter, SourceRuleBox};

/// Source and tree rules, each list in execution order.
#[derive(Default)]
pub struct RuleSet {
    /// Rules over raw bytes; they run first.
    pub source_rules: Vec<SourceRuleBox>,
    /// Rules over the declaration tree.
    pub rules: Vec<RuleBox>,
}

impl RuleSet {
    /// Number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.source_rules.len() + self.rules.len()
    }

    /// Returns true when no rule is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tag and description of every rule, in execution order.
    #[must_use]
    pub fn describe(&self) -> Vec<(RuleType, &'static str)> {
        self.source_rules
            .iter()
            .map(|r| (r.rule_type(), r.description()))
            .chain(self.rules.iter().map(|r| (r.rule_type(), r.description())))
            .collect()
    }
}

/// Returns the rules enabled by `config`.
///
/// A zero threshold or a `false` flag leaves the rule out. The formatter is
/// only kept when `formated` is on.
#[must_use]
pub fn rules_from_config(config: &Config, formatter: Box<dyn SourceFormatter>) -> RuleSet {
    let mut set = RuleSet::default();

    if config.formated {
        set.source_rules.push(Box::new(Formatted::from_box(formatter)));
    }
    if config.file_line > 0 {
        set.source_rules.push(Box::new(FileLine::new(config.file_line)));
    }

    if config.pkg_name {
        set.rules.push(Box::new(PkgName::new()));
    }
    if config.func_line > 0 {
        set.rules.push(Box::new(FuncLine::new(config.func_line)));
    }
    if config.params_num > 0 {
        set.rules.push(Box::new(ParamsNum::new(config.params_num)));
    }
    if config.results_num > 0 {
        set.rules.push(Box::new(ResultsNum::new(config.results_num)));
    }
    if config.camel_name {
        set.rules.push(Box::new(CamelName::new()));
    }

    set
}

/// Returns every built-in rule with the default thresholds.
#[must_use]
pub fn all_rules(formatter: Box<dyn SourceFormatter>) -> RuleSet {
    rules_from_config(&default_config(), formatter)
}

/// The configuration used when none is supplied.
///
/// Every rule is on, formatting problems are fatal and the `tmp` scratch
/// directory is ignored.
#[must_use]
pub fn default_config() -> Config {
    Config {
        file_line: 200,
        func_line: 50,
        params_num: 4,
        results_num: 3,
        formated: true,
        pkg_name: true,
        camel_name: true,
        fatal: vec![RuleType::Formated.to_string()],
        ignore: vec!["tmp/*".to_string(), "src/tmp.go".to_string()],
        ..Config::default()
    }
}
