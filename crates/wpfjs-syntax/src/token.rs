//! Tokens: literal text plus the trivia around it.

use serde::{Deserialize, Serialize};
use wpfjs_common::Trivia;

/// A source token with its attached trivia.
///
/// In JSON a token is either a bare string (no trivia) or an object:
/// `{ "text": "=", "leading": " ", "trailing": " " }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TokenRepr")]
pub struct Token {
    pub text: String,
    pub leading: Trivia,
    pub trailing: Trivia,
}

/// Accepts both the bare-string and the object form of a token.
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenRepr {
    Text(String),
    Full {
        text: String,
        #[serde(default)]
        leading: Trivia,
        #[serde(default)]
        trailing: Trivia,
    },
}

impl From<TokenRepr> for Token {
    fn from(repr: TokenRepr) -> Self {
        match repr {
            TokenRepr::Text(text) => Token::new(text),
            TokenRepr::Full {
                text,
                leading,
                trailing,
            } => Token {
                text,
                leading,
                trailing,
            },
        }
    }
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            leading: Trivia::empty(),
            trailing: Trivia::empty(),
        }
    }

    pub fn with_leading(mut self, trivia: impl Into<Trivia>) -> Self {
        self.leading = trivia.into();
        self
    }

    pub fn with_trailing(mut self, trivia: impl Into<Trivia>) -> Self {
        self.trailing = trivia.into();
        self
    }

    pub fn open_paren() -> Self {
        Token::new("(")
    }

    pub fn close_paren() -> Self {
        Token::new(")")
    }

    /// Token text without trivia, trailing whitespace trimmed.
    pub fn value_text(&self) -> &str {
        self.text.trim()
    }

    /// Leading trivia, text, trailing trivia.
    pub fn write_full_text(&self, out: &mut String) {
        out.push_str(self.leading.as_str());
        out.push_str(&self.text);
        out.push_str(self.trailing.as_str());
    }
}
