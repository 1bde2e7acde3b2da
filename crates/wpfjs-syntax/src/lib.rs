//! Syntax tree for code-behind source files.
//!
//! The tree is produced by an external front-end and handed to the emitter
//! read-only. Node kinds form a closed taxonomy (`SyntaxKind`); anything the
//! lowering does not model is carried as an explicit `Unsupported` variant so
//! skipping it is a visible decision, not an accident of dispatch.
//!
//! Every type derives serde so a front-end in another process can supply the
//! tree as JSON:
//!
//! ```json
//! { "kind": "Return", "expression": { "kind": "Verbatim", "text": "x" } }
//! ```

pub mod kind;
pub use kind::SyntaxKind;

pub mod token;
pub use token::Token;

pub mod expressions;
pub use expressions::{AssignmentExpression, CastExpression, Expression, TypeSyntax};

pub mod statements;
pub use statements::{
    Block, ElseClause, ExpressionStatement, IfStatement, LocalDeclarationStatement,
    ReturnStatement, Statement, VariableDeclaration, VariableDeclarator,
};

pub mod declarations;
pub use declarations::{
    ClassDeclaration, CompilationUnit, ConstructorDeclaration, Declaration, FieldDeclaration,
    MethodDeclaration, NamespaceDeclaration, Parameter, UnsupportedNode,
};

pub use wpfjs_common::Trivia;

/// Parse a compilation unit from its JSON form.
pub fn from_json(json: &str) -> Result<CompilationUnit, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
#[path = "tests/json_tests.rs"]
mod json_tests;
#[cfg(test)]
#[path = "tests/source_text_tests.rs"]
mod source_text_tests;
