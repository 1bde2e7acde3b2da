use wpfjs_syntax::{
    Block, ClassDeclaration, ConstructorDeclaration, Declaration, FieldDeclaration,
    MethodDeclaration, NamespaceDeclaration, SyntaxKind, Token,
};

use super::Emitter;
use crate::context::EmitContext;
use crate::error::EmitError;

impl<'a> Emitter<'a> {
    // =========================================================================
    // Namespace
    // =========================================================================

    /// `(function(NS){ ... })(window.NS = window.NS || {});`
    ///
    /// UI references are generated once, right after the closure opens. Only
    /// direct child classes are visited.
    #[tracing::instrument(level = "trace", skip_all, fields(namespace = ns.name.value_text()))]
    pub fn emit_namespace<'t>(
        &mut self,
        ns: &'t NamespaceDeclaration,
        ctx: EmitContext<'t>,
    ) -> Result<(), EmitError> {
        let name = declaration_name(&ns.name, SyntaxKind::Namespace)?;
        if name.contains('.') {
            return Err(EmitError::QualifiedNamespace {
                name: name.to_string(),
            });
        }

        self.write_header_trivia(&ns.leading)?;
        self.writer.open_line(ctx.depth())?;
        self.writer.write(&format!("(function({name}){{"))?;

        let inner = ctx.enter()?.with_namespace(name);
        self.emit_ui_references(inner)?;

        for member in &ns.members {
            match member {
                Declaration::Class(class) => self.emit_class(class, inner)?,
                other => {
                    tracing::debug!(kind = %other.kind(), "skipping namespace member");
                }
            }
        }

        self.writer.open_line(ctx.depth())?;
        self.writer
            .write(&format!("}})(window.{name} = window.{name} || {{}});"))?;
        self.writer.end_line()?;
        self.write_closing_trivia(&ns.trailing)
    }

    // =========================================================================
    // Class
    // =========================================================================

    /// `(function(C){ ... })(NS.C = NS.C || {});`
    ///
    /// Followed by `NS.C.C();` when the class declares a constructor, so that
    /// construction-time initialization runs once after the module loads.
    #[tracing::instrument(level = "trace", skip_all, fields(class = class.identifier.value_text()))]
    pub fn emit_class<'t>(
        &mut self,
        class: &'t ClassDeclaration,
        ctx: EmitContext<'t>,
    ) -> Result<(), EmitError> {
        let name = declaration_name(&class.identifier, SyntaxKind::Class)?;
        let Some(namespace) = ctx.namespace() else {
            return Err(EmitError::OutsideScope {
                kind: SyntaxKind::Class,
                scope: "namespace",
            });
        };

        self.write_header_trivia(&class.leading)?;
        self.writer.open_line(ctx.depth())?;
        self.writer.write(&format!("(function({name}){{"))?;

        let class_ctx = ctx.with_class(name);
        for member in &class.members {
            match member {
                Declaration::Method(method) => self.emit_method(method, class_ctx)?,
                Declaration::Constructor(ctor) => self.emit_constructor(ctor, class_ctx)?,
                Declaration::Field(field) => self.emit_field(field, class_ctx)?,
                // Properties, events, nested types and attributes are not lowered.
                other => {
                    tracing::debug!(kind = %other.kind(), "skipping class member");
                }
            }
        }

        self.writer.open_line(ctx.depth())?;
        self.writer
            .write(&format!("}})({namespace}.{name} = {namespace}.{name} || {{}});"))?;
        self.writer.end_line()?;

        if class.has_constructor() {
            if self.options.annotate {
                self.writer.blank_line()?;
                self.writer.open_line(ctx.depth())?;
                self.writer.write("//call constructor")?;
            }
            self.writer.open_line(ctx.depth())?;
            self.writer.write(&format!("{namespace}.{name}.{name}();"))?;
            self.writer.end_line()?;
        }

        self.write_closing_trivia(&class.trailing)
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// `C.C = function() { ... };`
    #[tracing::instrument(level = "trace", skip_all, fields(constructor = ctor.identifier.value_text()))]
    pub fn emit_constructor<'t>(
        &mut self,
        ctor: &'t ConstructorDeclaration,
        ctx: EmitContext<'t>,
    ) -> Result<(), EmitError> {
        let class = enclosing_class(ctx, SyntaxKind::Constructor)?;
        let body = require_body(ctor.body.as_ref(), SyntaxKind::Constructor, class)?;
        let inner = ctx.enter()?;

        self.write_header_trivia(&ctor.leading)?;
        self.writer.open_line(inner.depth())?;
        self.writer.write(&format!("{class}.{class} = function() {{"))?;
        self.emit_body(body, inner)?;
        self.writer.open_line(inner.depth())?;
        self.writer.write("};")?;
        self.writer.end_line()?;
        self.write_closing_trivia(&ctor.trailing)
    }

    /// `C.M = function(a, b) { ... };`
    ///
    /// Parameter types, modifiers and defaults are erased; attribute lists and
    /// constraints are ignored.
    #[tracing::instrument(level = "trace", skip_all, fields(method = method.identifier.value_text()))]
    pub fn emit_method<'t>(
        &mut self,
        method: &'t MethodDeclaration,
        ctx: EmitContext<'t>,
    ) -> Result<(), EmitError> {
        let class = enclosing_class(ctx, SyntaxKind::Method)?;
        let name = declaration_name(&method.identifier, SyntaxKind::Method)?;
        let body = require_body(method.body.as_ref(), SyntaxKind::Method, name)?;
        let inner = ctx.enter()?;

        let parameters = method
            .parameters
            .iter()
            .map(|param| param.identifier.value_text())
            .collect::<Vec<_>>()
            .join(", ");

        self.write_header_trivia(&method.leading)?;
        self.writer.open_line(inner.depth())?;
        self.writer
            .write(&format!("{class}.{name} = function({parameters}) {{"))?;
        self.emit_body(body, inner)?;
        self.writer.open_line(inner.depth())?;
        self.writer.write("};")?;
        self.writer.end_line()?;
        self.write_closing_trivia(&method.trailing)
    }

    /// Field declarations lower like local declarations: modifiers and the
    /// type are dropped, the declarators are written and terminated.
    pub fn emit_field<'t>(
        &mut self,
        field: &'t FieldDeclaration,
        ctx: EmitContext<'t>,
    ) -> Result<(), EmitError> {
        enclosing_class(ctx, SyntaxKind::Field)?;
        let inner = ctx.enter()?;
        self.begin_statement(&field.leading, inner)?;
        self.emit_variable_declaration(&field.declaration)?;
        self.writer.write_trivia(field.trailing.as_str())
    }

    /// Statements of a member body, one level below the member header.
    fn emit_body<'t>(&mut self, body: &'t Block, ctx: EmitContext<'t>) -> Result<(), EmitError> {
        if body.leading.has_comments() {
            self.writer.write_trivia(body.leading.trim_end())?;
        }
        let body_ctx = ctx.enter()?;
        for statement in &body.statements {
            self.emit_statement(statement, body_ctx)?;
        }
        Ok(())
    }
}

fn declaration_name(token: &Token, kind: SyntaxKind) -> Result<&str, EmitError> {
    let name = token.value_text();
    if name.is_empty() {
        return Err(EmitError::EmptyIdentifier { kind });
    }
    Ok(name)
}

fn enclosing_class<'t>(ctx: EmitContext<'t>, kind: SyntaxKind) -> Result<&'t str, EmitError> {
    ctx.class().ok_or(EmitError::OutsideScope {
        kind,
        scope: "class",
    })
}

fn require_body<'t>(
    body: Option<&'t Block>,
    kind: SyntaxKind,
    name: &str,
) -> Result<&'t Block, EmitError> {
    body.ok_or_else(|| EmitError::MissingBody {
        kind,
        name: name.to_string(),
    })
}
