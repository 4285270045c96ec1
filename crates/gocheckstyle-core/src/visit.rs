//! Recursive traversal of the declaration tree.
//!
//! Works like `syn::visit`: each trait method defaults to the free function of
//! the same name, which walks into the children. Override a method to inspect
//! a node and call the free function to keep descending.
//!
//! [`visit_decl`] is the single dispatch point over node kinds, so every rule
//! sees nested declarations (closures, inline structs, interface methods) the
//! same way it sees top-level ones.

use crate::syntax::{
    Decl, DeclGroup, FuncDecl, GroupKind, Ident, InterfaceType, MethodSpec, ShortVarDecl,
    Signature, SourceFile, Spec, StructType,
};

/// What an identifier declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentRole {
    /// Import alias.
    Import,
    /// Constant name.
    Const {
        /// Declared at file scope.
        top_level: bool,
    },
    /// Variable name.
    Var {
        /// Declared at file scope.
        top_level: bool,
    },
    /// Type name.
    Type,
    /// Function name.
    Func,
    /// Method name.
    Method,
    /// Struct field name.
    Field,
    /// Interface method name.
    InterfaceMethod,
    /// Parameter name.
    Param,
    /// Result name.
    Result,
    /// Method receiver name.
    Receiver,
    /// Target of a short variable declaration.
    ShortVar,
}

impl IdentRole {
    /// Word used for the identifier in problem descriptions.
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Const { .. } => "const",
            Self::Var { .. } | Self::ShortVar => "var",
            Self::Type => "type",
            Self::Func => "func",
            Self::Method => "method",
            Self::Field => "field",
            Self::InterfaceMethod => "interface method",
            Self::Param => "param",
            Self::Result => "result",
            Self::Receiver => "receiver",
        }
    }

    /// Whether the identifier must not start with an upper-case letter.
    ///
    /// Local names never export anything, so a leading capital is wrong.
    #[must_use]
    pub fn not_first_cap(self) -> bool {
        match self {
            Self::Param | Self::Result | Self::Receiver | Self::ShortVar => true,
            Self::Const { top_level } | Self::Var { top_level } => !top_level,
            Self::Import
            | Self::Type
            | Self::Func
            | Self::Method
            | Self::Field
            | Self::InterfaceMethod => false,
        }
    }

    fn for_spec(kind: GroupKind, top_level: bool) -> Self {
        match kind {
            GroupKind::Import => Self::Import,
            GroupKind::Const => Self::Const { top_level },
            GroupKind::Var => Self::Var { top_level },
            GroupKind::Type => Self::Type,
        }
    }
}

/// Visitor over a [`SourceFile`].
pub trait Visit<'ast> {
    /// Visits a whole file.
    fn visit_file(&mut self, node: &'ast SourceFile) {
        visit_file(self, node);
    }

    /// Visits any declaration node.
    fn visit_decl(&mut self, node: &'ast Decl) {
        visit_decl(self, node);
    }

    /// Visits a function, method or function literal.
    fn visit_func(&mut self, node: &'ast FuncDecl) {
        visit_func(self, node);
    }

    /// Visits a signature; `owner` names the function or interface method.
    fn visit_signature(&mut self, owner: &'ast str, node: &'ast Signature) {
        visit_signature(self, owner, node);
    }

    /// Visits an `import`/`const`/`var`/`type` group.
    fn visit_group(&mut self, node: &'ast DeclGroup) {
        visit_group(self, node);
    }

    /// Visits one spec of a group.
    fn visit_spec(&mut self, kind: GroupKind, top_level: bool, node: &'ast Spec) {
        visit_spec(self, kind, top_level, node);
    }

    /// Visits a struct type.
    fn visit_struct(&mut self, node: &'ast StructType) {
        visit_struct(self, node);
    }

    /// Visits an interface type.
    fn visit_interface(&mut self, node: &'ast InterfaceType) {
        visit_interface(self, node);
    }

    /// Visits an interface method.
    fn visit_method_spec(&mut self, node: &'ast MethodSpec) {
        visit_method_spec(self, node);
    }

    /// Visits a short variable declaration.
    fn visit_assign(&mut self, node: &'ast ShortVarDecl) {
        visit_assign(self, node);
    }

    /// Visits a declared identifier.
    fn visit_ident(&mut self, _node: &'ast Ident, _role: IdentRole) {}
}

/// Walks the top-level declarations.
pub fn visit_file<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast SourceFile) {
    for decl in &node.decls {
        v.visit_decl(decl);
    }
}

/// Dispatches on the node kind.
pub fn visit_decl<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Decl) {
    match node {
        Decl::Func(f) => v.visit_func(f),
        Decl::Group(g) => v.visit_group(g),
        Decl::Struct(s) => v.visit_struct(s),
        Decl::Interface(i) => v.visit_interface(i),
        Decl::Assign(a) => v.visit_assign(a),
    }
}

/// Walks name, receiver, signature and body.
pub fn visit_func<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast FuncDecl) {
    if let Some(name) = &node.name {
        let role = if node.receiver.is_some() {
            IdentRole::Method
        } else {
            IdentRole::Func
        };
        v.visit_ident(name, role);
    }
    if let Some(receiver) = &node.receiver {
        for ident in receiver.names().filter(|i| !i.is_blank()) {
            v.visit_ident(ident, IdentRole::Receiver);
        }
    }
    v.visit_signature(node.display_name(), &node.signature);
    for decl in &node.body {
        v.visit_decl(decl);
    }
}

/// Walks parameter and result names and the types they carry.
pub fn visit_signature<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    _owner: &'ast str,
    node: &'ast Signature,
) {
    for field in &node.params.fields {
        for ident in &field.names {
            v.visit_ident(ident, IdentRole::Param);
        }
        for decl in &field.nested {
            v.visit_decl(decl);
        }
    }
    if let Some(results) = &node.results {
        for field in &results.fields {
            for ident in &field.names {
                v.visit_ident(ident, IdentRole::Result);
            }
            for decl in &field.nested {
                v.visit_decl(decl);
            }
        }
    }
}

/// Walks every spec of the group.
pub fn visit_group<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast DeclGroup) {
    for spec in &node.specs {
        v.visit_spec(node.kind, node.top_level, spec);
    }
}

/// Walks spec names, then nested declarations.
pub fn visit_spec<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    kind: GroupKind,
    top_level: bool,
    node: &'ast Spec,
) {
    let role = IdentRole::for_spec(kind, top_level);
    for ident in &node.names {
        v.visit_ident(ident, role);
    }
    for decl in &node.nested {
        v.visit_decl(decl);
    }
}

/// Walks field names and field types.
pub fn visit_struct<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast StructType) {
    for field in &node.fields {
        for ident in &field.names {
            v.visit_ident(ident, IdentRole::Field);
        }
        for decl in &field.nested {
            v.visit_decl(decl);
        }
    }
}

/// Walks methods, then embedded elements.
pub fn visit_interface<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast InterfaceType) {
    for method in &node.methods {
        v.visit_method_spec(method);
    }
    for decl in &node.nested {
        v.visit_decl(decl);
    }
}

/// Walks the method name and signature.
pub fn visit_method_spec<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast MethodSpec) {
    v.visit_ident(&node.name, IdentRole::InterfaceMethod);
    v.visit_signature(&node.name.name, &node.signature);
}

/// Walks targets, then the right-hand side.
pub fn visit_assign<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast ShortVarDecl) {
    for ident in &node.names {
        v.visit_ident(ident, IdentRole::ShortVar);
    }
    for decl in &node.nested {
        v.visit_decl(decl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Field, FieldList, Span};
    use crate::types::Position;
    use std::path::PathBuf;

    fn ident(name: &str, line: usize) -> Ident {
        Ident::new(name, Position::new(PathBuf::from("a.go"), line, 1))
    }

    fn list(names: &[&str]) -> FieldList {
        FieldList {
            pos: Position::new(PathBuf::from("a.go"), 1, 1),
            fields: vec![Field {
                names: names.iter().map(|n| ident(n, 1)).collect(),
                nested: Vec::new(),
            }],
        }
    }

    fn func(name: Option<&str>, receiver: Option<&str>, body: Vec<Decl>) -> FuncDecl {
        FuncDecl {
            name: name.map(|n| ident(n, 1)),
            receiver: receiver.map(|r| list(&[r])),
            signature: Signature {
                params: list(&["a"]),
                results: Some(list(&["err"])),
            },
            span: Span {
                start: Position::new(PathBuf::from("a.go"), 1, 1),
                end: Position::new(PathBuf::from("a.go"), 3, 2),
            },
            body,
        }
    }

    #[derive(Default)]
    struct Collector {
        idents: Vec<(String, IdentRole)>,
        signatures: Vec<String>,
    }

    impl<'ast> Visit<'ast> for Collector {
        fn visit_signature(&mut self, owner: &'ast str, node: &'ast Signature) {
            self.signatures.push(owner.to_string());
            visit_signature(self, owner, node);
        }

        fn visit_ident(&mut self, node: &'ast Ident, role: IdentRole) {
            self.idents.push((node.name.clone(), role));
        }
    }

    #[test]
    fn walks_nested_declarations_in_order() {
        let closure = func(None, None, vec![]);
        let local = Decl::Assign(ShortVarDecl {
            names: vec![ident("x", 2)],
            nested: vec![Decl::Func(closure)],
        });
        let method = func(Some("Run"), Some("s"), vec![local]);
        let iface = Decl::Interface(InterfaceType {
            pos: Position::new(PathBuf::from("a.go"), 5, 1),
            methods: vec![MethodSpec {
                name: ident("Close", 6),
                signature: Signature {
                    params: list(&[]),
                    results: None,
                },
            }],
            nested: Vec::new(),
        });
        let group = Decl::Group(DeclGroup {
            kind: GroupKind::Type,
            top_level: true,
            specs: vec![Spec {
                names: vec![ident("Closer", 5)],
                nested: vec![iface],
            }],
        });
        let file = SourceFile {
            package: ident("main", 1),
            decls: vec![Decl::Func(method), group],
        };

        let mut collector = Collector::default();
        collector.visit_file(&file);

        let names: Vec<&str> = collector.idents.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["Run", "s", "a", "err", "x", "a", "err", "Closer", "Close"]
        );
        assert_eq!(collector.idents[0].1, IdentRole::Method);
        assert_eq!(collector.idents[1].1, IdentRole::Receiver);
        assert_eq!(
            collector.signatures,
            vec!["Run", "func literal", "Close"]
        );
    }

    #[test]
    fn blank_receiver_is_not_visited() {
        let method = func(Some("hello"), Some("_"), vec![]);
        let mut collector = Collector::default();
        collector.visit_func(&method);
        assert!(collector
            .idents
            .iter()
            .all(|(_, role)| *role != IdentRole::Receiver));
    }

    #[test]
    fn local_roles_forbid_leading_capital() {
        assert!(IdentRole::Param.not_first_cap());
        assert!(IdentRole::Var { top_level: false }.not_first_cap());
        assert!(!IdentRole::Var { top_level: true }.not_first_cap());
        assert!(!IdentRole::Field.not_first_cap());
    }
}
