//! References to the markup's named visual nodes.
//!
//! Code-behind classes can use named markup elements directly. The generated
//! module has to recreate those names by querying the DOM once the document
//! is loaded:
//!
//! ```javascript
//! var slider, label;
//! document.addEventListener('DOMContentLoaded', function(){
//!     slider = document.querySelector("App[name='slider']");
//!     label = document.querySelector("App[name='label']");
//! }, false);
//! ```

use super::Emitter;
use crate::context::EmitContext;
use crate::error::EmitError;

impl<'a> Emitter<'a> {
    /// Declare and bind every UI node name inside the namespace closure.
    ///
    /// Lookups are scoped to elements whose tag is the namespace name. Writes
    /// nothing when there are no names.
    pub(super) fn emit_ui_references(&mut self, ctx: EmitContext<'_>) -> Result<(), EmitError> {
        let Some(namespace) = ctx.namespace() else {
            return Err(EmitError::OutsideScope {
                kind: wpfjs_syntax::SyntaxKind::Namespace,
                scope: "namespace",
            });
        };
        let node_names = self.node_names;
        if node_names.is_empty() {
            tracing::trace!(namespace, "no UI node names to bind");
            return Ok(());
        }

        if self.options.annotate {
            self.writer.blank_line()?;
            self.writer.open_line(ctx.depth())?;
            self.writer.write("//Auto Generated Refs to Visual Nodes")?;
        }

        let declared = node_names.iter().collect::<Vec<_>>().join(", ");
        self.writer.open_line(ctx.depth())?;
        self.writer.write(&format!("var {declared};"))?;

        self.writer.open_line(ctx.depth())?;
        let event = escape_single_quoted(&self.options.dom_ready_event);
        self.writer.write(&format!(
            "document.addEventListener('{event}', function(){{"
        ))?;
        let lookup_ctx = ctx.enter()?;
        for name in node_names.iter() {
            self.writer.open_line(lookup_ctx.depth())?;
            self.writer.write(&format!(
                "{name} = document.querySelector(\"{namespace}[name='{name}']\");"
            ))?;
        }
        self.writer.open_line(ctx.depth())?;
        self.writer.write("}, false);")?;
        self.writer.blank_line()
    }
}

/// Text for a single-quoted JavaScript string literal.
fn escape_single_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}
