//! Node kind taxonomy.

use std::fmt;

/// Kind tag of every node the front-end can hand over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    CompilationUnit,
    Namespace,
    Class,
    Constructor,
    Method,
    Field,
    Parameter,
    Block,
    If,
    Else,
    Return,
    LocalDeclaration,
    ExpressionStatement,
    VariableDeclaration,
    VariableDeclarator,
    Assignment,
    CompoundAssignment,
    Cast,
    PredefinedType,
    NamedType,
    /// Any expression outside the rewritten set; emitted as its source text.
    Expression,
    /// A node outside the modeled taxonomy.
    Unsupported,
}

impl SyntaxKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SyntaxKind::CompilationUnit => "CompilationUnit",
            SyntaxKind::Namespace => "Namespace",
            SyntaxKind::Class => "Class",
            SyntaxKind::Constructor => "Constructor",
            SyntaxKind::Method => "Method",
            SyntaxKind::Field => "Field",
            SyntaxKind::Parameter => "Parameter",
            SyntaxKind::Block => "Block",
            SyntaxKind::If => "If",
            SyntaxKind::Else => "Else",
            SyntaxKind::Return => "Return",
            SyntaxKind::LocalDeclaration => "LocalDeclaration",
            SyntaxKind::ExpressionStatement => "ExpressionStatement",
            SyntaxKind::VariableDeclaration => "VariableDeclaration",
            SyntaxKind::VariableDeclarator => "VariableDeclarator",
            SyntaxKind::Assignment => "Assignment",
            SyntaxKind::CompoundAssignment => "CompoundAssignment",
            SyntaxKind::Cast => "Cast",
            SyntaxKind::PredefinedType => "PredefinedType",
            SyntaxKind::NamedType => "NamedType",
            SyntaxKind::Expression => "Expression",
            SyntaxKind::Unsupported => "Unsupported",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
