//! Emission options.

use wpfjs_common::{IndentStyle, NewLineKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// Indentation unit for generated lines.
    pub indent: IndentStyle,
    /// Line terminator for generated lines.
    pub new_line: NewLineKind,
    /// Write the `//Auto Generated Refs to Visual Nodes` and
    /// `//call constructor` annotations.
    pub annotate: bool,
    /// DOM event that triggers UI node binding.
    pub dom_ready_event: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            indent: IndentStyle::Tab,
            new_line: NewLineKind::Lf,
            annotate: true,
            dom_ready_event: "DOMContentLoaded".to_string(),
        }
    }
}
