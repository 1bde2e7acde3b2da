//! Expression nodes.
//!
//! Only the forms the lowering rewrites get their own variant. Everything
//! else (invocations, member access, literals, binary operators...) is a
//! `Verbatim` token holding the expression's source text.

use serde::{Deserialize, Serialize};
use wpfjs_common::Trivia;

use crate::kind::SyntaxKind;
use crate::token::Token;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expression {
    /// `left = right`
    Assignment(AssignmentExpression),
    /// `left += right`, `left -= right`, ...
    CompoundAssignment(AssignmentExpression),
    /// `(T)expression`
    Cast(CastExpression),
    /// Any other expression, kept as literal source text.
    Verbatim(Token),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentExpression {
    pub left: Box<Expression>,
    pub operator: Token,
    pub right: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastExpression {
    #[serde(default = "Token::open_paren")]
    pub open_paren: Token,
    #[serde(rename = "type")]
    pub ty: TypeSyntax,
    #[serde(default = "Token::close_paren")]
    pub close_paren: Token,
    pub expression: Box<Expression>,
}

/// A type reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeSyntax {
    /// A keyword type: `int`, `double`, `string`, `bool`, ...
    #[serde(rename = "PredefinedType")]
    Predefined(Token),
    /// Any named or qualified type: `Timer`, `System.Windows.Point`, `List<int>`.
    #[serde(rename = "NamedType")]
    Named(Token),
}

impl TypeSyntax {
    pub fn predefined(keyword: &str) -> Self {
        TypeSyntax::Predefined(Token::new(keyword))
    }

    pub fn named(name: &str) -> Self {
        TypeSyntax::Named(Token::new(name))
    }

    pub fn kind(&self) -> SyntaxKind {
        match self {
            TypeSyntax::Predefined(_) => SyntaxKind::PredefinedType,
            TypeSyntax::Named(_) => SyntaxKind::NamedType,
        }
    }

    pub fn token(&self) -> &Token {
        match self {
            TypeSyntax::Predefined(token) | TypeSyntax::Named(token) => token,
        }
    }
}

impl Expression {
    /// A pass-through expression with the given source text.
    pub fn verbatim(text: impl Into<String>) -> Self {
        Expression::Verbatim(Token::new(text))
    }

    /// `left = right` with single spaces around the operator.
    pub fn assign(left: Expression, right: Expression) -> Self {
        Expression::Assignment(AssignmentExpression {
            left: Box::new(left),
            operator: Token::new("=").with_leading(" ").with_trailing(" "),
            right: Box::new(right),
        })
    }

    /// `left OP right` for a compound operator such as `+=`.
    pub fn compound(left: Expression, operator: &str, right: Expression) -> Self {
        Expression::CompoundAssignment(AssignmentExpression {
            left: Box::new(left),
            operator: Token::new(operator).with_leading(" ").with_trailing(" "),
            right: Box::new(right),
        })
    }

    /// `(ty)expression`
    pub fn cast(ty: TypeSyntax, expression: Expression) -> Self {
        Expression::Cast(CastExpression {
            open_paren: Token::open_paren(),
            ty,
            close_paren: Token::close_paren(),
            expression: Box::new(expression),
        })
    }

    pub fn kind(&self) -> SyntaxKind {
        match self {
            Expression::Assignment(_) => SyntaxKind::Assignment,
            Expression::CompoundAssignment(_) => SyntaxKind::CompoundAssignment,
            Expression::Cast(_) => SyntaxKind::Cast,
            Expression::Verbatim(_) => SyntaxKind::Expression,
        }
    }

    /// Trivia in front of the first token of the expression.
    pub fn leading_trivia(&self) -> &Trivia {
        match self {
            Expression::Assignment(assign) | Expression::CompoundAssignment(assign) => {
                assign.left.leading_trivia()
            }
            Expression::Cast(cast) => &cast.open_paren.leading,
            Expression::Verbatim(token) => &token.leading,
        }
    }

    /// Trivia after the last token of the expression.
    pub fn trailing_trivia(&self) -> &Trivia {
        match self {
            Expression::Assignment(assign) | Expression::CompoundAssignment(assign) => {
                assign.right.trailing_trivia()
            }
            Expression::Cast(cast) => cast.expression.trailing_trivia(),
            Expression::Verbatim(token) => &token.trailing,
        }
    }

    /// Source text including the outer trivia.
    pub fn full_text(&self) -> String {
        let mut out = String::new();
        self.write_full_text(&mut out);
        out
    }

    /// Source text without the outer leading and trailing trivia.
    pub fn text(&self) -> String {
        let full = self.full_text();
        let start = self.leading_trivia().len();
        let end = full.len() - self.trailing_trivia().len();
        if start <= end {
            full[start..end].to_string()
        } else {
            String::new()
        }
    }

    pub fn write_full_text(&self, out: &mut String) {
        match self {
            Expression::Assignment(assign) | Expression::CompoundAssignment(assign) => {
                assign.left.write_full_text(out);
                assign.operator.write_full_text(out);
                assign.right.write_full_text(out);
            }
            Expression::Cast(cast) => {
                cast.open_paren.write_full_text(out);
                cast.ty.token().write_full_text(out);
                cast.close_paren.write_full_text(out);
                cast.expression.write_full_text(out);
            }
            Expression::Verbatim(token) => token.write_full_text(out),
        }
    }
}
