//! Trivia Preservation
//!
//! Trivia is the non-semantic text (whitespace, newlines, comments) that the
//! front-end attaches to each syntax node. The emitter never re-derives or
//! reformats it: a `Trivia` is an opaque span that is copied verbatim.
//!
//! The emitter only ever asks a span two questions: does it carry a comment
//! worth keeping, and how many line breaks precede its first content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque trivia text attached before or after a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trivia(String);

impl Trivia {
    /// Empty trivia.
    pub const fn empty() -> Self {
        Trivia(String::new())
    }

    pub fn new(text: impl Into<String>) -> Self {
        Trivia(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the span holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.chars().all(char::is_whitespace)
    }

    /// True when some line of the span starts with a `//` or `/*` comment.
    ///
    /// Preprocessor lines (`#region`, `#if`) and their text are not comments.
    pub fn has_comments(&self) -> bool {
        self.0.lines().any(|line| {
            let line = line.trim_start();
            line.starts_with("//") || line.starts_with("/*")
        })
    }

    /// The span with trailing whitespace removed.
    pub fn trim_end(&self) -> &str {
        self.0.trim_end()
    }

    /// Line breaks before the first non-whitespace character, and the text
    /// from the start of that character's line.
    ///
    /// `"\n\n    // note\n    "` splits into `(2, "    // note\n    ")`; a
    /// blank span into its line break count and `""`.
    pub fn split_leading_breaks(&self) -> (u32, &str) {
        let text = self.0.as_str();
        let mut breaks = 0;
        let mut line_start = 0;
        let mut chars = text.char_indices().peekable();
        while let Some((pos, ch)) = chars.next() {
            match ch {
                '\r' => {
                    if let Some((_, '\n')) = chars.peek() {
                        chars.next();
                        line_start = pos + 2;
                    } else {
                        line_start = pos + 1;
                    }
                    breaks += 1;
                }
                '\n' => {
                    breaks += 1;
                    line_start = pos + 1;
                }
                ch if ch.is_whitespace() => {}
                _ => return (breaks, &text[line_start..]),
            }
        }
        (breaks, "")
    }
}

impl fmt::Display for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Trivia {
    fn from(text: &str) -> Self {
        Trivia(text.to_string())
    }
}

impl From<String> for Trivia {
    fn from(text: String) -> Self {
        Trivia(text)
    }
}
