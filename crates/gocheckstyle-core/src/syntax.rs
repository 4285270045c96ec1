//! Declaration tree consumed by the rules.
//!
//! A [`SourceFile`] is produced by a [`SourceParser`](crate::SourceParser).
//! It keeps only what the style rules look at: declared identifiers, function
//! signatures and the constructs that may nest further declarations. Every
//! node carries positions that were resolved when the tree was built.

use crate::types::Position;

/// An identifier introduced by a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    /// Identifier text.
    pub name: String,
    /// Position of the first character.
    pub pos: Position,
}

impl Ident {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }

    /// Returns true for the blank identifier `_`.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name == "_"
    }
}

/// Start and end positions of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Position of the first byte.
    pub start: Position,
    /// Position just past the last byte.
    pub end: Position,
}

impl Span {
    /// Number of lines between start and end.
    #[must_use]
    pub fn line_span(&self) -> usize {
        self.end.line.saturating_sub(self.start.line)
    }
}

/// A parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// The package clause identifier.
    pub package: Ident,
    /// Top-level declarations in source order.
    pub decls: Vec<Decl>,
}

/// A declaration-bearing node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// Function, method or function literal.
    Func(FuncDecl),
    /// `import`, `const`, `var` or `type` declaration, grouped or not.
    Group(DeclGroup),
    /// Struct type, named or inline.
    Struct(StructType),
    /// Interface type, named or inline.
    Interface(InterfaceType),
    /// Short variable declaration (`a, b := ...`).
    Assign(ShortVarDecl),
}

/// A function declaration, method declaration or function literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Function name; `None` for function literals.
    pub name: Option<Ident>,
    /// Method receiver list.
    pub receiver: Option<FieldList>,
    /// Parameters and results.
    pub signature: Signature,
    /// From the `func` keyword to the end of the body.
    pub span: Span,
    /// Declarations found in the body, in source order, at any statement
    /// depth. Function literals appear as nested [`Decl::Func`] nodes.
    pub body: Vec<Decl>,
}

impl FuncDecl {
    /// Name used in problem descriptions.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_ref().map_or("func literal", |n| n.name.as_str())
    }
}

/// Parameter and result lists of a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Parameter list.
    pub params: FieldList,
    /// Result list, absent when the signature returns nothing.
    pub results: Option<FieldList>,
}

/// A parenthesized list of parameters, results or a receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldList {
    /// Position of the list (its opening parenthesis, or the bare result type).
    pub pos: Position,
    /// Fields in source order.
    pub fields: Vec<Field>,
}

impl FieldList {
    /// Number of fields: each name counts once, an unnamed field counts once.
    #[must_use]
    pub fn num_fields(&self) -> usize {
        self.fields.iter().map(|f| f.names.len().max(1)).sum()
    }

    /// All names declared in the list.
    pub fn names(&self) -> impl Iterator<Item = &Ident> {
        self.fields.iter().flat_map(|f| f.names.iter())
    }
}

/// A field of a parameter list or struct: names sharing one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared names; empty for unnamed parameters and embedded fields.
    pub names: Vec<Ident>,
    /// Declaration-bearing constructs inside the field type.
    pub nested: Vec<Decl>,
}

/// Which keyword introduced a declaration group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// `import`
    Import,
    /// `const`
    Const,
    /// `var`
    Var,
    /// `type`
    Type,
}

impl GroupKind {
    /// Keyword text, used in problem descriptions.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Const => "const",
            Self::Var => "var",
            Self::Type => "type",
        }
    }
}

/// An `import`, `const`, `var` or `type` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclGroup {
    /// Introducing keyword.
    pub kind: GroupKind,
    /// Whether the group sits at file scope.
    pub top_level: bool,
    /// Specs in source order.
    pub specs: Vec<Spec>,
}

/// One spec of a declaration group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spec {
    /// Declared names (the alias for imports, empty for plain imports).
    pub names: Vec<Ident>,
    /// Declaration-bearing constructs in the spec's type and values.
    pub nested: Vec<Decl>,
}

/// A struct type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    /// Position of the `struct` keyword.
    pub pos: Position,
    /// Field declarations.
    pub fields: Vec<Field>,
}

/// An interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    /// Position of the `interface` keyword.
    pub pos: Position,
    /// Method elements.
    pub methods: Vec<MethodSpec>,
    /// Declaration-bearing constructs in embedded type elements.
    pub nested: Vec<Decl>,
}

/// A method of an interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// Method name.
    pub name: Ident,
    /// Parameters and results.
    pub signature: Signature,
}

/// A short variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortVarDecl {
    /// Identifiers on the left-hand side.
    pub names: Vec<Ident>,
    /// Declaration-bearing constructs on the right-hand side.
    pub nested: Vec<Decl>,
}
