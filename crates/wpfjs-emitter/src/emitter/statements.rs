use wpfjs_common::Trivia;
use wpfjs_syntax::{
    ExpressionStatement, IfStatement, LocalDeclarationStatement, ReturnStatement, Statement,
    VariableDeclaration,
};

use super::Emitter;
use crate::context::EmitContext;
use crate::error::EmitError;

impl<'a> Emitter<'a> {
    // =========================================================================
    // Statements
    // =========================================================================

    pub fn emit_statement<'t>(
        &mut self,
        statement: &'t Statement,
        ctx: EmitContext<'t>,
    ) -> Result<(), EmitError> {
        match statement {
            Statement::If(if_stmt) => self.emit_if_statement(if_stmt, ctx),
            Statement::Return(ret) => self.emit_return_statement(ret, ctx),
            Statement::LocalDeclaration(local) => self.emit_local_declaration(local, ctx),
            Statement::Expression(expr_stmt) => self.emit_expression_statement(expr_stmt, ctx),
            // Nested blocks are flattened into the enclosing body.
            Statement::Block(block) => {
                let block_ctx = ctx.enter_block()?;
                self.write_inner_trivia(&block.leading)?;
                for inner in &block.statements {
                    self.emit_statement(inner, block_ctx)?;
                }
                Ok(())
            }
            Statement::Unsupported(node) => {
                tracing::debug!(node_kind = %node.node_kind, "skipping unsupported statement");
                Ok(())
            }
        }
    }

    /// Position the writer for a statement with the given leading trivia.
    ///
    /// Source trivia already carries the statement's indentation and is
    /// written verbatim. Without trivia the statement gets a generated line
    /// at the context depth.
    pub(super) fn begin_statement(
        &mut self,
        leading: &Trivia,
        ctx: EmitContext<'_>,
    ) -> Result<(), EmitError> {
        if leading.is_empty() {
            return self.writer.open_line(ctx.depth());
        }
        if !leading.as_str().starts_with(['\n', '\r']) {
            self.writer.end_line()?;
        }
        self.writer.write_trivia(leading.as_str())
    }

    /// `if(CONDITION){ ... }`
    ///
    /// The condition is written as source text, not rewritten.
    fn emit_if_statement<'t>(
        &mut self,
        if_stmt: &'t IfStatement,
        ctx: EmitContext<'t>,
    ) -> Result<(), EmitError> {
        self.begin_statement(&if_stmt.leading, ctx)?;
        self.writer.write("if(")?;
        self.writer.write(&if_stmt.condition.text())?;
        self.writer.write("){")?;

        let body_ctx = ctx.enter()?;
        self.emit_statement(&if_stmt.statement, body_ctx)?;

        if let Some(else_clause) = &if_stmt.else_clause {
            self.write_inner_trivia(&else_clause.leading)?;
            self.writer.open_line(ctx.depth())?;
            self.writer.write("}else{")?;
            self.emit_statement(&else_clause.statement, body_ctx)?;
        }

        self.writer.open_line(ctx.depth())?;
        self.writer.write("}")?;
        self.writer.write_trivia(if_stmt.trailing.as_str())
    }

    /// `return EXPR;`
    fn emit_return_statement<'t>(
        &mut self,
        ret: &'t ReturnStatement,
        ctx: EmitContext<'t>,
    ) -> Result<(), EmitError> {
        self.begin_statement(&ret.leading, ctx)?;
        match &ret.expression {
            Some(expression) => {
                self.writer.write("return ")?;
                self.rewrite_expression(expression)?;
            }
            None => self.writer.write("return")?,
        }
        self.writer.write_terminator()?;
        self.writer.write_trivia(ret.trailing.as_str())
    }

    fn emit_local_declaration<'t>(
        &mut self,
        local: &'t LocalDeclarationStatement,
        ctx: EmitContext<'t>,
    ) -> Result<(), EmitError> {
        self.begin_statement(&local.leading, ctx)?;
        self.emit_variable_declaration(&local.declaration)?;
        self.writer.write_trivia(local.trailing.as_str())
    }

    /// Declarators of a local or field declaration, each terminated.
    ///
    /// The declared type is dropped. With an initializer the declarator
    /// becomes a plain assignment ` x = value`; without one it becomes
    /// `var x`.
    pub(super) fn emit_variable_declaration(
        &mut self,
        declaration: &VariableDeclaration,
    ) -> Result<(), EmitError> {
        tracing::trace!(
            ty = %declaration.ty.kind(),
            declarators = declaration.declarators.len(),
            "lowering variable declaration"
        );
        for declarator in &declaration.declarators {
            let name = declarator.identifier.value_text();
            match &declarator.initializer {
                Some(initializer) => {
                    self.writer.write(&format!(" {name} = "))?;
                    self.rewrite_expression(initializer)?;
                }
                None => self.writer.write(&format!("var {name}"))?,
            }
            self.writer.write_terminator()?;
        }
        Ok(())
    }

    /// `EXPR;`
    fn emit_expression_statement<'t>(
        &mut self,
        expr_stmt: &'t ExpressionStatement,
        ctx: EmitContext<'t>,
    ) -> Result<(), EmitError> {
        self.begin_statement(&expr_stmt.leading, ctx)?;
        self.rewrite_expression(&expr_stmt.expression)?;
        self.writer.write_terminator()?;
        self.writer.write_trivia(expr_stmt.trailing.as_str())
    }
}
