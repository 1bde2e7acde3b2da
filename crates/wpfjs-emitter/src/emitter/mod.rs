//! Emitter - lowers a code-behind syntax tree to JavaScript.
//!
//! The implementation is split across submodules, one per component:
//! - `declarations` - namespace, class, constructor, method and field closures
//! - `statements` - if, return, local declarations, expression statements
//! - `expressions` - assignment unwrapping, cast erasure, unsupported markers
//! - `ui_refs` - DOM lookups for the named visual nodes
//!
//! Every component writes straight into the [`SourceWriter`] in pre-order,
//! so output order is source order.

use std::fmt;

use wpfjs_common::Trivia;
use wpfjs_syntax::CompilationUnit;

use crate::context::EmitContext;
use crate::error::EmitError;
use crate::node_names::NodeNameList;
use crate::options::EmitOptions;
use crate::source_writer::SourceWriter;

mod declarations;
mod expressions;
mod statements;
mod ui_refs;

pub use expressions::UNSUPPORTED_MARKER;

pub struct Emitter<'a> {
    writer: SourceWriter<'a>,
    node_names: &'a NodeNameList,
    options: EmitOptions,
}

impl<'a> Emitter<'a> {
    pub fn new(
        out: &'a mut dyn fmt::Write,
        node_names: &'a NodeNameList,
        options: EmitOptions,
    ) -> Self {
        let writer = SourceWriter::new(out, options.indent, options.new_line);
        Emitter {
            writer,
            node_names,
            options,
        }
    }

    /// Emit every top-level namespace of the unit, in order.
    ///
    /// Top-level members other than namespaces (usings, attributes, types
    /// outside any namespace) are skipped.
    pub fn emit_compilation_unit(&mut self, unit: &CompilationUnit) -> Result<(), EmitError> {
        let ctx = EmitContext::root();
        for member in &unit.members {
            match member {
                wpfjs_syntax::Declaration::Namespace(ns) => self.emit_namespace(ns, ctx)?,
                other => {
                    tracing::debug!(kind = %other.kind(), "skipping top-level member");
                }
            }
        }
        self.writer.end_line()
    }

    // =========================================================================
    // Trivia helpers
    // =========================================================================

    /// Trivia in front of a generated declaration header.
    ///
    /// Blank lines and comments are kept. The indentation after the last
    /// line break is dropped since the header brings its own.
    fn write_header_trivia(&mut self, trivia: &Trivia) -> Result<(), EmitError> {
        let (breaks, content) = trivia.split_leading_breaks();
        let content = content.trim_end();
        if breaks == 0 && content.is_empty() {
            return Ok(());
        }
        // The first break ends the previous line.
        self.writer.end_line()?;
        for _ in 1..breaks {
            self.writer.write_line()?;
        }
        self.writer.write_trivia(content)
    }

    /// Trivia in front of a generated line inside a body; only comments
    /// survive, so statement trivia keeps controlling line breaks.
    fn write_inner_trivia(&mut self, trivia: &Trivia) -> Result<(), EmitError> {
        if !trivia.has_comments() {
            return Ok(());
        }
        self.write_header_trivia(trivia)
    }

    /// Trivia after a generated closing line; only comments survive.
    fn write_closing_trivia(&mut self, trivia: &Trivia) -> Result<(), EmitError> {
        if !trivia.has_comments() {
            return Ok(());
        }
        self.writer.write_trivia(trivia.trim_end())?;
        self.writer.end_line()
    }
}

/// Lower `unit` into a fresh string.
pub fn emit_to_string(
    unit: &CompilationUnit,
    node_names: &NodeNameList,
    options: EmitOptions,
) -> Result<String, EmitError> {
    let mut out = String::new();
    let mut emitter = Emitter::new(&mut out, node_names, options);
    emitter.emit_compilation_unit(unit)?;
    Ok(out)
}
