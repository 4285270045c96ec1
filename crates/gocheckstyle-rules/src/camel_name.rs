//! Rule enforcing Go identifier naming conventions.
//!
//! # Detected Patterns
//!
//! - Underscores inside a name (`max_size`)
//! - All-capital names of five or more characters (`MAXSIZE`)
//! - Leading capitals on names that cannot be exported (parameters,
//!   results, receivers, locals)
//!
//! One leading underscore is ignored and the blank identifier is skipped.
//! At most one problem is reported per identifier.

use gocheckstyle_core::visit::{IdentRole, Visit};
use gocheckstyle_core::{FileContext, Ident, Problem, Rule, RuleType, SourceFile};

/// Minimum length for the all-capitals check.
const MIN_ALL_CAPS_LEN: usize = 5;

/// Checks every declared identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelName;

impl CamelName {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CamelName {
    fn rule_type(&self) -> RuleType {
        RuleType::CamelName
    }

    fn description(&self) -> &'static str {
        "Names use camel case without underscores"
    }

    fn check(&self, _ctx: &FileContext, file: &SourceFile) -> Vec<Problem> {
        let mut visitor = NameVisitor::default();
        visitor.visit_file(file);
        visitor.problems
    }
}

#[derive(Default)]
struct NameVisitor {
    problems: Vec<Problem>,
}

impl<'ast> Visit<'ast> for NameVisitor {
    fn visit_ident(&mut self, node: &'ast Ident, role: IdentRole) {
        if let Some(issue) = naming_issue(&node.name, role.not_first_cap()) {
            self.problems.push(Problem::new(
                RuleType::CamelName,
                node.pos.clone(),
                format!("{} name {} should {issue}", role.kind(), node.name),
            ));
        }
    }
}

/// Returns the first convention `name` breaks, if any.
fn naming_issue(name: &str, not_first_cap: bool) -> Option<&'static str> {
    let name = name.strip_prefix('_').unwrap_or(name);
    let first = name.chars().next()?;

    if name.contains('_') {
        Some("use camel case instead of underscores")
    } else if name.len() >= MIN_ALL_CAPS_LEN && is_all_caps(name) {
        Some("not be all capitals")
    } else if not_first_cap && first.is_uppercase() {
        Some("start with a lower case letter")
    } else {
        None
    }
}

fn is_all_caps(name: &str) -> bool {
    name.chars().any(char::is_uppercase) && !name.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{check_go, descriptions};

    #[test]
    fn naming_issue_order() {
        assert_eq!(naming_issue("_", true), None);
        assert_eq!(naming_issue("_foo", true), None);
        assert_eq!(naming_issue("fooBar", true), None);
        assert_eq!(
            naming_issue("MAX_SIZE", false),
            Some("use camel case instead of underscores")
        );
        assert_eq!(naming_issue("HTTPS", false), Some("not be all capitals"));
        assert_eq!(naming_issue("HTTP", false), None);
        assert_eq!(naming_issue("HTTP2", false), Some("not be all capitals"));
        assert_eq!(naming_issue("Foo", false), None);
        assert_eq!(
            naming_issue("Foo", true),
            Some("start with a lower case letter")
        );
        assert_eq!(naming_issue("12345", false), None);
    }

    #[test]
    fn clean_file_has_no_problems() {
        let src = "package a

import (
\tstr \"strings\"
)

const MaxSize = 10

type Server struct {
\tName string
}

func (s *Server) Run(ctx string) (err error) {
\tcount := len(s.Name)
\t_ = str.ToUpper(ctx)
\t_ = count
\treturn nil
}
";
        assert!(check_go(&CamelName, src).is_empty());
    }

    #[test]
    fn underscores_are_reported_everywhere() {
        let src = "package a

const max_size = 1

var (
\tglobal_count int
)

type my_type struct {
\tfield_name int
}

func do_it(arg_one int) (res_one int) {
\tlocal_var := arg_one
\treturn local_var
}
";
        let problems = check_go(&CamelName, src);
        assert_eq!(
            descriptions(&problems),
            vec![
                "const name max_size should use camel case instead of underscores",
                "var name global_count should use camel case instead of underscores",
                "type name my_type should use camel case instead of underscores",
                "field name field_name should use camel case instead of underscores",
                "func name do_it should use camel case instead of underscores",
                "param name arg_one should use camel case instead of underscores",
                "result name res_one should use camel case instead of underscores",
                "var name local_var should use camel case instead of underscores",
            ]
        );
        assert_eq!(problems[0].position.to_string(), "a.go:3:7");
    }

    #[test]
    fn statement_bindings_are_checked() {
        let src = "package a

func f(i interface{}, ch chan int, xs []int, idx int) {
\tswitch type_val := i.(type) {
\tdefault:
\t\t_ = type_val
\t}
\tselect {
\tcase recv_val := <-ch:
\t\t_ = recv_val
\t}
\tfor key_k, val_v := range xs {
\t\t_, _ = key_k, val_v
\t}
\tfor idx = range xs {
\t}
}
";
        let problems = check_go(&CamelName, src);
        assert_eq!(
            descriptions(&problems),
            vec![
                "var name type_val should use camel case instead of underscores",
                "var name recv_val should use camel case instead of underscores",
                "var name key_k should use camel case instead of underscores",
                "var name val_v should use camel case instead of underscores",
            ]
        );
        assert_eq!(problems[0].position.to_string(), "a.go:4:9");
    }

    #[test]
    fn locals_must_start_lower_case() {
        let src = "package a

func (Recv *T) Method(Param int) {
\tconst Local = 1
\tShort := Param
\t_ = Short
}

type T struct{}
";
        let problems = check_go(&CamelName, src);
        assert_eq!(
            descriptions(&problems),
            vec![
                "receiver name Recv should start with a lower case letter",
                "param name Param should start with a lower case letter",
                "const name Local should start with a lower case letter",
                "var name Short should start with a lower case letter",
            ]
        );
    }

    #[test]
    fn all_capitals_are_reported_once() {
        let src = "package a\n\nconst MAXSIZE = 1\n\nfunc f(HELLO int) {}\n";
        let problems = check_go(&CamelName, src);
        assert_eq!(
            descriptions(&problems),
            vec![
                "const name MAXSIZE should not be all capitals",
                "param name HELLO should not be all capitals",
            ]
        );
    }

    #[test]
    fn nested_declarations_are_visited() {
        let src = "package a

type Handler interface {
\tserve_http(w int)
}

func run() {
\tfn := func(in_value int) {}
\tif bad_init := 1; bad_init > 0 {
\t\tfn(bad_init)
\t}
}
";
        let problems = check_go(&CamelName, src);
        assert_eq!(
            descriptions(&problems),
            vec![
                "interface method name serve_http should use camel case instead of underscores",
                "param name in_value should use camel case instead of underscores",
                "var name bad_init should use camel case instead of underscores",
            ]
        );
    }
}
