//! Statement nodes.

use serde::{Deserialize, Serialize};
use wpfjs_common::Trivia;

use crate::declarations::UnsupportedNode;
use crate::expressions::{Expression, TypeSyntax};
use crate::kind::SyntaxKind;
use crate::token::Token;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Statement {
    If(IfStatement),
    Return(ReturnStatement),
    LocalDeclaration(LocalDeclarationStatement),
    #[serde(rename = "ExpressionStatement")]
    Expression(ExpressionStatement),
    Block(Block),
    /// Loops, switch, try, using, lock, ... (not lowered)
    Unsupported(UnsupportedNode),
}

impl Statement {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Statement::If(_) => SyntaxKind::If,
            Statement::Return(_) => SyntaxKind::Return,
            Statement::LocalDeclaration(_) => SyntaxKind::LocalDeclaration,
            Statement::Expression(_) => SyntaxKind::ExpressionStatement,
            Statement::Block(_) => SyntaxKind::Block,
            Statement::Unsupported(_) => SyntaxKind::Unsupported,
        }
    }

    pub fn expression(expression: Expression) -> Self {
        Statement::Expression(ExpressionStatement {
            leading: Trivia::empty(),
            expression,
            trailing: Trivia::empty(),
        })
    }

    pub fn ret(expression: Option<Expression>) -> Self {
        Statement::Return(ReturnStatement {
            leading: Trivia::empty(),
            expression,
            trailing: Trivia::empty(),
        })
    }
}

/// `{ statements }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub leading: Trivia,
    #[serde(default)]
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub trailing: Trivia,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Block {
            leading: Trivia::empty(),
            statements,
            trailing: Trivia::empty(),
        }
    }
}

/// `if (condition) statement [else statement]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfStatement {
    #[serde(default)]
    pub leading: Trivia,
    pub condition: Expression,
    pub statement: Box<Statement>,
    #[serde(default)]
    pub else_clause: Option<ElseClause>,
    #[serde(default)]
    pub trailing: Trivia,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElseClause {
    #[serde(default)]
    pub leading: Trivia,
    pub statement: Box<Statement>,
}

/// `return [expression];`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnStatement {
    #[serde(default)]
    pub leading: Trivia,
    #[serde(default)]
    pub expression: Option<Expression>,
    #[serde(default)]
    pub trailing: Trivia,
}

/// `T a = 1, b;`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDeclarationStatement {
    #[serde(default)]
    pub leading: Trivia,
    pub declaration: VariableDeclaration,
    #[serde(default)]
    pub trailing: Trivia,
}

/// Type plus declarators; shared by locals and fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    #[serde(rename = "type")]
    pub ty: TypeSyntax,
    pub declarators: Vec<VariableDeclarator>,
}

impl VariableDeclaration {
    pub fn new(ty: TypeSyntax, declarators: Vec<VariableDeclarator>) -> Self {
        VariableDeclaration { ty, declarators }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub identifier: Token,
    #[serde(default)]
    pub initializer: Option<Expression>,
}

impl VariableDeclarator {
    pub fn new(name: &str, initializer: Option<Expression>) -> Self {
        VariableDeclarator {
            identifier: Token::new(name),
            initializer,
        }
    }
}

/// `expression;`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    #[serde(default)]
    pub leading: Trivia,
    pub expression: Expression,
    #[serde(default)]
    pub trailing: Trivia,
}
