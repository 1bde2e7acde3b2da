//! Emitter error types.
//!
//! Unsupported constructs are not errors: they degrade to a marker comment or
//! are skipped. Everything here is a violation of the input contract (a tree
//! shape the lowering cannot express) or a failure of the output sink.

use std::fmt;
use wpfjs_syntax::SyntaxKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// A method or constructor without a block body.
    MissingBody { kind: SyntaxKind, name: String },
    /// A declaration whose identifier is empty.
    EmptyIdentifier { kind: SyntaxKind },
    /// A dotted namespace name such as `A.B`.
    QualifiedNamespace { name: String },
    /// A member emitted without its enclosing namespace or class in scope.
    OutsideScope {
        kind: SyntaxKind,
        scope: &'static str,
    },
    /// Scope nesting beyond `limits::MAX_NESTING_DEPTH`.
    NestingTooDeep { limit: u32 },
    /// Expression nesting beyond `limits::MAX_EXPRESSION_DEPTH`.
    ExpressionTooDeep { limit: u32 },
    /// A UI node name that is not a JavaScript identifier.
    InvalidNodeName { name: String },
    /// The same UI node name supplied twice.
    DuplicateNodeName { name: String },
    /// The output sink rejected a write.
    Sink,
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::MissingBody { kind, name } => {
                write!(f, "{kind} '{name}' has no block body")
            }
            EmitError::EmptyIdentifier { kind } => write!(f, "{kind} has an empty identifier"),
            EmitError::QualifiedNamespace { name } => write!(
                f,
                "namespace '{name}' is qualified; only simple namespace names can be lowered"
            ),
            EmitError::OutsideScope { kind, scope } => {
                write!(f, "{kind} emitted outside of an enclosing {scope}")
            }
            EmitError::NestingTooDeep { limit } => {
                write!(f, "declarations nest deeper than {limit} levels")
            }
            EmitError::ExpressionTooDeep { limit } => {
                write!(f, "expression nests deeper than {limit} levels")
            }
            EmitError::InvalidNodeName { name } => {
                write!(f, "UI node name '{name}' is not a valid identifier")
            }
            EmitError::DuplicateNodeName { name } => {
                write!(f, "UI node name '{name}' is listed more than once")
            }
            EmitError::Sink => write!(f, "failed to write to the output sink"),
        }
    }
}

impl std::error::Error for EmitError {}

impl From<fmt::Error> for EmitError {
    fn from(_: fmt::Error) -> Self {
        EmitError::Sink
    }
}
