use wpfjs_common::limits::MAX_EXPRESSION_DEPTH;
use wpfjs_syntax::{AssignmentExpression, Expression};

use super::Emitter;
use crate::error::EmitError;

/// Prefix of the comment written in place of an expression that is not lowered.
pub const UNSUPPORTED_MARKER: &str = "//not yet supported: ";

impl<'a> Emitter<'a> {
    // =========================================================================
    // Expressions
    // =========================================================================

    /// Write `expression` as JavaScript, without its outer trivia.
    ///
    /// - Assignments are written child by child with casts unwrapped.
    /// - Casts are erased down to their operand.
    /// - Compound assignments become a marker comment holding the source text.
    /// - Everything else is source text, unchanged.
    pub fn rewrite_expression(&mut self, expression: &Expression) -> Result<(), EmitError> {
        self.rewrite(expression, 0)
    }

    fn rewrite(&mut self, expression: &Expression, level: u32) -> Result<(), EmitError> {
        if level > MAX_EXPRESSION_DEPTH {
            return Err(EmitError::ExpressionTooDeep {
                limit: MAX_EXPRESSION_DEPTH,
            });
        }

        match expression {
            Expression::Assignment(assign) => self.rewrite_assignment(assign, level),
            Expression::CompoundAssignment(_) => {
                // e.g. `timer.Tick += OnTick`; event subscription has no lowering yet.
                let text = single_line(&expression.text());
                tracing::debug!(%text, "compound assignment left as comment");
                self.writer.write(UNSUPPORTED_MARKER)?;
                self.writer.write_trivia(&text)?;
                self.writer.mark_line_comment();
                Ok(())
            }
            Expression::Cast(cast) => {
                // The type slot collapses to at most one separating space.
                if !self.writer.ends_with_separator() {
                    self.writer.write(" ")?;
                }
                self.rewrite(&cast.expression, level + 1)
            }
            Expression::Verbatim(token) => self.writer.write(&token.text),
        }
    }

    fn rewrite_assignment(
        &mut self,
        assign: &AssignmentExpression,
        level: u32,
    ) -> Result<(), EmitError> {
        self.rewrite_operand(&assign.left, level + 1)?;
        self.writer.write_trivia(assign.operator.leading.as_str())?;
        self.writer.write(&assign.operator.text)?;
        self.writer.write_trivia(assign.operator.trailing.as_str())?;
        self.rewrite_operand(&assign.right, level + 1)
    }

    /// An assignment operand: its own leading trivia is dropped so spacing
    /// comes from the operator, its trailing trivia is kept. A cast operand
    /// loses both along with its type.
    fn rewrite_operand(&mut self, operand: &Expression, level: u32) -> Result<(), EmitError> {
        self.rewrite(operand, level)?;
        if !matches!(operand, Expression::Cast(_)) {
            self.writer
                .write_trivia(operand.trailing_trivia().as_str())?;
        }
        Ok(())
    }
}

/// Collapse line breaks so the text fits in a `//` comment.
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
