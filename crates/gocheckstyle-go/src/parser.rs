//! Go source parser using Tree-sitter.

use std::path::Path;
use tree_sitter::{Language, Node, Parser};
use tracing::trace;

use gocheckstyle_core::{ParseError, SourceFile, SourceParser};

use crate::lower::Lowerer;

/// Parses Go source into the declaration tree used by the rules.
pub struct GoParser {
    language: Language,
}

impl GoParser {
    /// Creates a new Go parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    /// Finds the first error or missing node in document order.
    fn first_error(node: Node<'_>) -> Option<Node<'_>> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            return None;
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
        children.into_iter().find_map(Self::first_error)
    }

    fn syntax_error(path: &Path, src: &[u8], node: Node<'_>) -> ParseError {
        let p = node.start_position();
        let message = if node.is_missing() {
            format!("syntax error: missing {}", node.kind())
        } else {
            let text = node
                .utf8_text(src)
                .unwrap_or_default()
                .split_whitespace()
                .next()
                .unwrap_or("EOF");
            format!("syntax error: unexpected {text}")
        };
        ParseError::new(path, p.row + 1, p.column + 1, message).with_offset(node.start_byte())
    }

    fn encoding_error(path: &Path, src: &[u8], offset: usize) -> ParseError {
        let before = &src[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        ParseError::new(path, line, offset - line_start + 1, "illegal UTF-8 encoding")
            .with_offset(offset)
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for GoParser {
    fn language_id(&self) -> &'static str {
        "go"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".go"]
    }

    fn parse(&self, path: &Path, src: &[u8]) -> Result<SourceFile, ParseError> {
        if let Err(e) = std::str::from_utf8(src) {
            return Err(Self::encoding_error(path, src, e.valid_up_to()));
        }

        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::new(path, 1, 1, format!("failed to load Go grammar: {e}")))?;

        let tree = parser
            .parse(src, None)
            .ok_or_else(|| ParseError::new(path, 1, 1, "parser produced no tree"))?;
        let root = tree.root_node();

        if root.has_error() {
            let err = Self::first_error(root)
                .map_or_else(|| ParseError::new(path, 1, 1, "syntax error"), |node| {
                    Self::syntax_error(path, src, node)
                });
            trace!("{err}");
            return Err(err);
        }

        Lowerer::new(path, src).lower_file(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gocheckstyle_core::Decl;

    fn parse(src: &str) -> Result<SourceFile, ParseError> {
        GoParser::new().parse(Path::new("a.go"), src.as_bytes())
    }

    fn funcs(file: &SourceFile) -> Vec<&gocheckstyle_core::FuncDecl> {
        file.decls
            .iter()
            .filter_map(|d| match d {
                Decl::Func(f) => Some(f),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn parses_package_clause() {
        let file = parse("package main\n").unwrap();
        assert_eq!(file.package.name, "main");
        assert_eq!((file.package.pos.line, file.package.pos.column), (1, 9));
        assert!(file.decls.is_empty());
    }

    #[test]
    fn rejects_missing_package() {
        let err = parse("func main() {}\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.message.contains("package"), "{}", err.message);
    }

    #[test]
    fn rejects_syntax_errors() {
        let err = parse("package main\n\nfunc main() {\n").unwrap_err();
        assert!(err.message.starts_with("syntax error"), "{}", err.message);
        assert!(err.line >= 3);
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = GoParser::new()
            .parse(Path::new("a.go"), b"package main\n// \xff\n")
            .unwrap_err();
        assert_eq!(err.message, "illegal UTF-8 encoding");
        assert_eq!((err.line, err.column), (2, 4));
        assert_eq!(err.offset, 16);
    }

    #[test]
    fn counts_parameters_like_go() {
        let file = parse(
            "package main\n\n\
             func hello(a, b, c, _ int) {}\n\n\
             func hello2(a, b int, c ...int) {}\n\n\
             type z struct{}\n\n\
             func (_ *z) hello(a, b int) {}\n",
        )
        .unwrap();
        let counts: Vec<usize> = funcs(&file)
            .iter()
            .map(|f| f.signature.params.num_fields())
            .collect();
        assert_eq!(counts, vec![4, 3, 2]);

        let method = funcs(&file)[2];
        assert!(method.receiver.is_some());
        assert!(method.signature.params.fields[0].names.len() == 2);
    }

    #[test]
    fn counts_results_like_go() {
        let file = parse(
            "package main\n\n\
             func hello(a, b int) (int, int, int, int) { return 1, 2, 3, 4 }\n\n\
             func hello2(a, b int, c ...int) (x, y int, err error) { return }\n\n\
             func hello3() error { return nil }\n\n\
             func hello4() {}\n",
        )
        .unwrap();
        let counts: Vec<usize> = funcs(&file)
            .iter()
            .map(|f| f.signature.results.as_ref().map_or(0, |r| r.num_fields()))
            .collect();
        assert_eq!(counts, vec![4, 3, 1, 0]);
    }

    #[test]
    fn records_function_span() {
        let file = parse("package main\n\nfunc main() {\n\tprintln(1)\n}\n").unwrap();
        let f = funcs(&file)[0];
        assert_eq!(f.display_name(), "main");
        assert_eq!(f.span.start.line, 3);
        assert_eq!(f.span.end.line, 5);
        assert_eq!(f.span.line_span(), 2);
    }

    #[test]
    fn lowers_groups_and_nested_declarations() {
        let file = parse(
            "package main\n\n\
             import (\n\tfoo \"fmt\"\n\t\"os\"\n)\n\n\
             const (\n\tA = 1\n\tB = 2\n)\n\n\
             type T struct {\n\tName_x string\n\tInner struct{ X int }\n}\n\n\
             func main() {\n\tf := func(x int) {}\n\tvar v_w int\n\t_ = v_w\n\tf(1)\n}\n",
        )
        .unwrap();

        let Decl::Group(imports) = &file.decls[0] else {
            panic!("expected import group");
        };
        assert_eq!(imports.specs.len(), 2);
        assert_eq!(imports.specs[0].names[0].name, "foo");
        assert!(imports.specs[1].names.is_empty());

        let Decl::Group(consts) = &file.decls[1] else {
            panic!("expected const group");
        };
        assert!(consts.top_level);
        assert_eq!(consts.specs.len(), 2);

        let Decl::Group(types) = &file.decls[2] else {
            panic!("expected type group");
        };
        assert_eq!(types.specs[0].names[0].name, "T");
        let Some(Decl::Struct(st)) = types.specs[0].nested.first() else {
            panic!("expected struct");
        };
        assert_eq!(st.fields.len(), 2);
        assert_eq!(st.fields[0].names[0].name, "Name_x");
        assert!(matches!(st.fields[1].nested.first(), Some(Decl::Struct(_))));

        let main = funcs(&file)[0];
        let Some(Decl::Assign(assign)) = main.body.first() else {
            panic!("expected short var decl");
        };
        assert_eq!(assign.names[0].name, "f");
        let Some(Decl::Func(literal)) = assign.nested.first() else {
            panic!("expected func literal");
        };
        assert_eq!(literal.display_name(), "func literal");
        assert_eq!(literal.signature.params.num_fields(), 1);

        let Some(Decl::Group(local)) = main.body.get(1) else {
            panic!("expected local var group");
        };
        assert!(!local.top_level);
        assert_eq!(local.specs[0].names[0].name, "v_w");
    }

    #[test]
    fn lowers_interface_methods() {
        let file = parse(
            "package main\n\ntype Closer interface {\n\tClose(a, b int) error\n}\n",
        )
        .unwrap();
        let Decl::Group(types) = &file.decls[0] else {
            panic!("expected type group");
        };
        let Some(Decl::Interface(iface)) = types.specs[0].nested.first() else {
            panic!("expected interface");
        };
        assert_eq!(iface.methods.len(), 1);
        assert_eq!(iface.methods[0].name.name, "Close");
        assert_eq!(iface.methods[0].signature.params.num_fields(), 2);
    }

    #[test]
    fn rejects_imports_after_declarations() {
        let err = parse("package a\n\nfunc f() {}\n\nimport \"fmt\"\n").unwrap_err();
        assert_eq!(
            err.message,
            "syntax error: imports must appear before other declarations"
        );
        assert_eq!((err.line, err.column), (5, 1));

        assert!(parse("package a\n\nimport \"fmt\"\nimport \"os\"\n\nfunc f() {}\n").is_ok());
    }

    #[test]
    fn lowers_statement_bindings() {
        let file = parse(
            "package a\n\n\
             func f(i interface{}, ch chan int, xs []int) {\n\
             \tswitch v := i.(type) {\n\tdefault:\n\t\t_ = v\n\t}\n\
             \tselect {\n\tcase r, ok := <-ch:\n\t\t_, _ = r, ok\n\t}\n\
             \tfor k := range xs {\n\t\t_ = k\n\t}\n\
             \tfor k = range xs {\n\t}\n\
             }\n",
        )
        .unwrap();

        let names: Vec<Vec<&str>> = funcs(&file)[0]
            .body
            .iter()
            .filter_map(|d| match d {
                Decl::Assign(a) => Some(a.names.iter().map(|n| n.name.as_str()).collect()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec![vec!["v"], vec!["r", "ok"], vec!["k"]]);
    }

    #[test]
    fn parser_is_reusable() {
        let parser = GoParser::new();
        assert!(parser.parse(Path::new("a.go"), b"package a\n").is_ok());
        assert!(parser.parse(Path::new("b.go"), b"package b\n").is_ok());
        assert_eq!(parser.language_id(), "go");
        assert_eq!(parser.extensions(), &[".go"]);
    }
}
