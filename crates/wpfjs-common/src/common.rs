//! Common formatting types shared by the emitter and the CLI.

use serde::{Deserialize, Serialize};

/// Line terminator used for generated lines.
///
/// Verbatim trivia keeps whatever terminators the source had.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewLineKind {
    #[default]
    #[serde(alias = "LF")]
    Lf,
    #[serde(alias = "CRLF")]
    CrLf,
}

impl NewLineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NewLineKind::Lf => "\n",
            NewLineKind::CrLf => "\r\n",
        }
    }
}

/// Indentation unit for one nesting level of generated code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndentStyle {
    Tab,
    Spaces(u8),
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Tab
    }
}

impl IndentStyle {
    fn push_indent(self, out: &mut String, depth: u32) {
        for _ in 0..depth {
            match self {
                IndentStyle::Tab => out.push('\t'),
                IndentStyle::Spaces(width) => {
                    for _ in 0..width {
                        out.push(' ');
                    }
                }
            }
        }
    }

    /// Indentation text for `depth` levels.
    pub fn indent(self, depth: u32) -> String {
        let mut out = String::new();
        self.push_indent(&mut out, depth);
        out
    }
}
