//! Declaration nodes: the compilation unit down to class members.

use serde::{Deserialize, Serialize};
use wpfjs_common::Trivia;

use crate::expressions::{Expression, TypeSyntax};
use crate::kind::SyntaxKind;
use crate::statements::{Block, VariableDeclaration};
use crate::token::Token;

/// Root of a code-behind file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    #[serde(default)]
    pub members: Vec<Declaration>,
}

impl CompilationUnit {
    pub fn new(members: Vec<Declaration>) -> Self {
        CompilationUnit { members }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Declaration {
    Namespace(NamespaceDeclaration),
    Class(ClassDeclaration),
    Constructor(ConstructorDeclaration),
    Method(MethodDeclaration),
    Field(FieldDeclaration),
    /// Usings, properties, events, delegates, nested types, ...
    Unsupported(UnsupportedNode),
}

impl Declaration {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Declaration::Namespace(_) => SyntaxKind::Namespace,
            Declaration::Class(_) => SyntaxKind::Class,
            Declaration::Constructor(_) => SyntaxKind::Constructor,
            Declaration::Method(_) => SyntaxKind::Method,
            Declaration::Field(_) => SyntaxKind::Field,
            Declaration::Unsupported(_) => SyntaxKind::Unsupported,
        }
    }
}

/// A node the lowering does not model. `node_kind` names what it was in the
/// source language (e.g. `PropertyDeclaration`, `WhileStatement`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsupportedNode {
    pub node_kind: String,
    #[serde(default)]
    pub text: String,
}

impl UnsupportedNode {
    pub fn new(node_kind: &str, text: &str) -> Self {
        UnsupportedNode {
            node_kind: node_kind.to_string(),
            text: text.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDeclaration {
    #[serde(default)]
    pub leading: Trivia,
    pub name: Token,
    #[serde(default)]
    pub members: Vec<Declaration>,
    #[serde(default)]
    pub trailing: Trivia,
}

impl NamespaceDeclaration {
    pub fn new(name: &str, members: Vec<Declaration>) -> Self {
        NamespaceDeclaration {
            leading: Trivia::empty(),
            name: Token::new(name),
            members,
            trailing: Trivia::empty(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    #[serde(default)]
    pub leading: Trivia,
    #[serde(default)]
    pub modifiers: Vec<Token>,
    pub identifier: Token,
    #[serde(default)]
    pub members: Vec<Declaration>,
    #[serde(default)]
    pub trailing: Trivia,
}

impl ClassDeclaration {
    pub fn new(name: &str, members: Vec<Declaration>) -> Self {
        ClassDeclaration {
            leading: Trivia::empty(),
            modifiers: Vec::new(),
            identifier: Token::new(name),
            members,
            trailing: Trivia::empty(),
        }
    }

    /// Whether the class declares at least one constructor.
    pub fn has_constructor(&self) -> bool {
        self.members
            .iter()
            .any(|member| matches!(member, Declaration::Constructor(_)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    #[serde(default)]
    pub leading: Trivia,
    #[serde(default)]
    pub modifiers: Vec<Token>,
    pub identifier: Token,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub body: Option<Block>,
    #[serde(default)]
    pub trailing: Trivia,
}

impl ConstructorDeclaration {
    pub fn new(name: &str, body: Block) -> Self {
        ConstructorDeclaration {
            leading: Trivia::empty(),
            modifiers: Vec::new(),
            identifier: Token::new(name),
            parameters: Vec::new(),
            body: Some(body),
            trailing: Trivia::empty(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDeclaration {
    #[serde(default)]
    pub leading: Trivia,
    #[serde(default)]
    pub modifiers: Vec<Token>,
    #[serde(default)]
    pub return_type: Option<TypeSyntax>,
    pub identifier: Token,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Attribute lists, type parameter constraints and similar children.
    #[serde(default)]
    pub attributes: Vec<UnsupportedNode>,
    #[serde(default)]
    pub body: Option<Block>,
    #[serde(default)]
    pub trailing: Trivia,
}

impl MethodDeclaration {
    pub fn new(name: &str, parameters: Vec<Parameter>, body: Block) -> Self {
        MethodDeclaration {
            leading: Trivia::empty(),
            modifiers: Vec::new(),
            return_type: None,
            identifier: Token::new(name),
            parameters,
            attributes: Vec::new(),
            body: Some(body),
            trailing: Trivia::empty(),
        }
    }
}

/// `[modifiers] [T] name [= default]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub modifiers: Vec<Token>,
    #[serde(default, rename = "type")]
    pub ty: Option<TypeSyntax>,
    pub identifier: Token,
    #[serde(default)]
    pub default: Option<Expression>,
}

impl Parameter {
    pub fn new(name: &str) -> Self {
        Parameter {
            modifiers: Vec::new(),
            ty: None,
            identifier: Token::new(name),
            default: None,
        }
    }

    pub fn typed(ty: TypeSyntax, name: &str) -> Self {
        Parameter {
            ty: Some(ty),
            ..Parameter::new(name)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    #[serde(default)]
    pub leading: Trivia,
    #[serde(default)]
    pub modifiers: Vec<Token>,
    pub declaration: VariableDeclaration,
    #[serde(default)]
    pub trailing: Trivia,
}

impl FieldDeclaration {
    pub fn new(declaration: VariableDeclaration) -> Self {
        FieldDeclaration {
            leading: Trivia::empty(),
            modifiers: Vec::new(),
            declaration,
            trailing: Trivia::empty(),
        }
    }
}
