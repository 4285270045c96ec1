//! Lowering of the tree-sitter Go syntax tree into the declaration tree.

use std::path::Path;
use tree_sitter::Node;

use gocheckstyle_core::{
    Decl, DeclGroup, Field, FieldList, FuncDecl, GroupKind, Ident, InterfaceType, MethodSpec,
    ParseError, Position, ShortVarDecl, Signature, SourceFile, Span, Spec, StructType,
};

/// Builds a [`SourceFile`] from a parsed, error-free tree.
pub(crate) struct Lowerer<'a> {
    path: &'a Path,
    src: &'a [u8],
}

impl<'a> Lowerer<'a> {
    pub(crate) fn new(path: &'a Path, src: &'a [u8]) -> Self {
        Self { path, src }
    }

    pub(crate) fn lower_file(&self, root: Node<'_>) -> Result<SourceFile, ParseError> {
        let mut package = None;
        let mut decls = Vec::new();
        let mut past_imports = false;

        for node in named_children(root) {
            let kind = node.kind();
            if kind == "comment" {
                continue;
            }

            if package.is_none() {
                if kind != "package_clause" {
                    return Err(self.error(node, format!("expected 'package', found {kind}")));
                }
                package = named_children(node)
                    .into_iter()
                    .find(|n| n.kind() == "package_identifier")
                    .map(|n| self.ident(n));
                continue;
            }

            match kind {
                "import_declaration" if past_imports => {
                    return Err(self.error(
                        node,
                        "syntax error: imports must appear before other declarations".to_string(),
                    ));
                }
                "import_declaration" => decls.push(Decl::Group(self.group(node, true))),
                "const_declaration" | "var_declaration" | "type_declaration" => {
                    past_imports = true;
                    decls.push(Decl::Group(self.group(node, true)));
                }
                "function_declaration" | "method_declaration" => {
                    past_imports = true;
                    decls.push(Decl::Func(self.func(node)));
                }
                _ => {
                    return Err(self.error(node, format!("expected declaration, found {kind}")));
                }
            }
        }

        let package = package.ok_or_else(|| {
            ParseError::new(self.path, 1, 1, "expected 'package', found EOF")
        })?;

        Ok(SourceFile { package, decls })
    }

    fn error(&self, node: Node<'_>, message: String) -> ParseError {
        let p = node.start_position();
        ParseError::new(self.path, p.row + 1, p.column + 1, message).with_offset(node.start_byte())
    }

    fn pos(&self, node: Node<'_>) -> Position {
        let p = node.start_position();
        Position::new(self.path.to_path_buf(), p.row + 1, p.column + 1)
            .with_offset(node.start_byte())
    }

    fn end_pos(&self, node: Node<'_>) -> Position {
        let p = node.end_position();
        Position::new(self.path.to_path_buf(), p.row + 1, p.column + 1)
            .with_offset(node.end_byte())
    }

    fn ident(&self, node: Node<'_>) -> Ident {
        let name = node.utf8_text(self.src).unwrap_or_default();
        Ident::new(name, self.pos(node))
    }

    fn field_idents(&self, node: Node<'_>, field: &str) -> Vec<Ident> {
        let mut cursor = node.walk();
        node.children_by_field_name(field, &mut cursor)
            .map(|n| self.ident(n))
            .collect()
    }

    fn group(&self, node: Node<'_>, top_level: bool) -> DeclGroup {
        let kind = match node.kind() {
            "import_declaration" => GroupKind::Import,
            "const_declaration" => GroupKind::Const,
            "var_declaration" => GroupKind::Var,
            _ => GroupKind::Type,
        };

        let mut specs = Vec::new();
        self.collect_specs(node, &mut specs);

        DeclGroup {
            kind,
            top_level,
            specs,
        }
    }

    fn collect_specs(&self, node: Node<'_>, out: &mut Vec<Spec>) {
        for child in named_children(node) {
            match child.kind() {
                "import_spec" => {
                    let names = child
                        .child_by_field_name("name")
                        .filter(|n| n.kind() == "package_identifier")
                        .map(|n| self.ident(n))
                        .into_iter()
                        .collect();
                    out.push(Spec {
                        names,
                        nested: Vec::new(),
                    });
                }
                "const_spec" | "var_spec" => out.push(Spec {
                    names: self.field_idents(child, "name"),
                    nested: self.nested_in(
                        [
                            child.child_by_field_name("type"),
                            child.child_by_field_name("value"),
                        ]
                        .into_iter()
                        .flatten(),
                    ),
                }),
                "type_spec" | "type_alias" => out.push(Spec {
                    names: self.field_idents(child, "name"),
                    nested: self.nested_in(child.child_by_field_name("type")),
                }),
                "comment" => {}
                // Parenthesized groups wrap their specs in list nodes.
                _ => self.collect_specs(child, out),
            }
        }
    }

    fn func(&self, node: Node<'_>) -> FuncDecl {
        let body = node
            .child_by_field_name("body")
            .map(|b| {
                let mut out = Vec::new();
                self.collect_children(b, &mut out);
                out
            })
            .unwrap_or_default();

        FuncDecl {
            name: node.child_by_field_name("name").map(|n| self.ident(n)),
            receiver: node
                .child_by_field_name("receiver")
                .map(|n| self.field_list(n)),
            signature: self.signature(node),
            span: Span {
                start: self.pos(node),
                end: self.end_pos(node),
            },
            body,
        }
    }

    fn signature(&self, node: Node<'_>) -> Signature {
        let params = node.child_by_field_name("parameters").map_or_else(
            || FieldList {
                pos: self.pos(node),
                fields: Vec::new(),
            },
            |p| self.field_list(p),
        );

        let results = node.child_by_field_name("result").map(|r| {
            if r.kind() == "parameter_list" {
                self.field_list(r)
            } else {
                FieldList {
                    pos: self.pos(r),
                    fields: vec![Field {
                        names: Vec::new(),
                        nested: self.nested_in(Some(r)),
                    }],
                }
            }
        });

        Signature { params, results }
    }

    fn field_list(&self, node: Node<'_>) -> FieldList {
        let fields = named_children(node)
            .into_iter()
            .filter(|child| {
                matches!(
                    child.kind(),
                    "parameter_declaration" | "variadic_parameter_declaration"
                )
            })
            .map(|child| Field {
                names: self.field_idents(child, "name"),
                nested: self.nested_in(child.child_by_field_name("type")),
            })
            .collect();

        FieldList {
            pos: self.pos(node),
            fields,
        }
    }

    fn struct_type(&self, node: Node<'_>) -> StructType {
        let fields = named_children(node)
            .into_iter()
            .filter(|n| n.kind() == "field_declaration_list")
            .flat_map(named_children)
            .filter(|n| n.kind() == "field_declaration")
            .map(|f| Field {
                names: self.field_idents(f, "name"),
                nested: self.nested_in(f.child_by_field_name("type")),
            })
            .collect();

        StructType {
            pos: self.pos(node),
            fields,
        }
    }

    fn interface_type(&self, node: Node<'_>) -> InterfaceType {
        let mut methods = Vec::new();
        let mut nested = Vec::new();

        for child in named_children(node) {
            match child.kind() {
                "method_elem" | "method_spec" => {
                    if let Some(name) = child.child_by_field_name("name") {
                        methods.push(MethodSpec {
                            name: self.ident(name),
                            signature: self.signature(child),
                        });
                    }
                }
                "comment" => {}
                _ => self.collect_node(child, &mut nested),
            }
        }

        InterfaceType {
            pos: self.pos(node),
            methods,
            nested,
        }
    }

    fn short_var(&self, node: Node<'_>) -> ShortVarDecl {
        ShortVarDecl {
            names: node
                .child_by_field_name("left")
                .map(|left| self.assign_targets(left))
                .unwrap_or_default(),
            nested: self.nested_in(node.child_by_field_name("right")),
        }
    }

    /// `:=` bindings that are part of a larger statement: the type switch
    /// alias, a select receive and range keys. The rest of the statement is
    /// collected by the caller.
    fn embedded_define(&self, node: Node<'_>) -> Option<ShortVarDecl> {
        let mut cursor = node.walk();
        let defines = node
            .children(&mut cursor)
            .any(|c| !c.is_named() && c.kind() == ":=");
        if !defines {
            return None;
        }

        let left = node
            .child_by_field_name("alias")
            .or_else(|| node.child_by_field_name("left"))?;
        Some(ShortVarDecl {
            names: self.assign_targets(left),
            nested: Vec::new(),
        })
    }

    fn assign_targets(&self, left: Node<'_>) -> Vec<Ident> {
        if left.kind() == "identifier" {
            return vec![self.ident(left)];
        }
        named_children(left)
            .into_iter()
            .filter(|n| n.kind() == "identifier")
            .map(|n| self.ident(n))
            .collect()
    }

    fn nested_in<'t>(&self, nodes: impl IntoIterator<Item = Node<'t>>) -> Vec<Decl> {
        let mut out = Vec::new();
        for node in nodes {
            self.collect_node(node, &mut out);
        }
        out
    }

    fn collect_children(&self, node: Node<'_>, out: &mut Vec<Decl>) {
        for child in named_children(node) {
            self.collect_node(child, out);
        }
    }

    /// Turns declaration-bearing nodes into [`Decl`]s and descends through
    /// everything else (statements, expressions, types).
    fn collect_node(&self, node: Node<'_>, out: &mut Vec<Decl>) {
        match node.kind() {
            "func_literal" => out.push(Decl::Func(self.func(node))),
            "const_declaration" | "var_declaration" | "type_declaration" => {
                out.push(Decl::Group(self.group(node, false)));
            }
            "short_var_declaration" => out.push(Decl::Assign(self.short_var(node))),
            "type_switch_statement" | "receive_statement" | "range_clause" => {
                if let Some(assign) = self.embedded_define(node) {
                    out.push(Decl::Assign(assign));
                }
                self.collect_children(node, out);
            }
            "struct_type" => out.push(Decl::Struct(self.struct_type(node))),
            "interface_type" => out.push(Decl::Interface(self.interface_type(node))),
            _ => self.collect_children(node, out),
        }
    }
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}
