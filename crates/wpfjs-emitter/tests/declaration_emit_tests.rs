//! Namespace, class, constructor, method and field lowering.

use wpfjs_emitter::{EmitContext, EmitError, EmitOptions, Emitter, NodeNameList, emit_to_string};
use wpfjs_syntax::*;

fn emit_class_in_app(class: ClassDeclaration) -> Result<String, EmitError> {
    let unit = CompilationUnit::new(vec![Declaration::Namespace(NamespaceDeclaration::new(
        "App",
        vec![Declaration::Class(class)],
    ))]);
    emit_to_string(&unit, &NodeNameList::empty(), EmitOptions::default())
}

fn method(name: &str, params: &[&str], statements: Vec<Statement>) -> Declaration {
    Declaration::Method(MethodDeclaration::new(
        name,
        params.iter().map(|p| Parameter::new(p)).collect(),
        Block::new(statements),
    ))
}

#[test]
fn test_constructor_invocation_emitted_once() {
    let class = ClassDeclaration::new(
        "Player",
        vec![
            Declaration::Constructor(ConstructorDeclaration::new("Player", Block::default())),
            Declaration::Constructor(ConstructorDeclaration::new("Player", Block::default())),
        ],
    );
    let output = emit_class_in_app(class).unwrap();
    assert_eq!(output.matches("App.Player.Player();").count(), 1, "{output}");

    let close = output.find("})(App.Player = App.Player || {});").unwrap();
    let call = output.find("App.Player.Player();").unwrap();
    let between = &output[close..call];
    assert!(
        between.lines().skip(1).all(|line| line.trim().is_empty() || line.trim() == "//call constructor"),
        "invocation must follow the class closure directly: {between:?}"
    );
}

#[test]
fn test_no_invocation_without_constructor() {
    let class = ClassDeclaration::new("Helper", vec![method("Run", &[], vec![])]);
    let output = emit_class_in_app(class).unwrap();
    assert!(!output.contains("App.Helper.Helper()"), "{output}");
    assert!(!output.contains("//call constructor"), "{output}");
}

#[test]
fn test_method_parameters_are_type_erased() {
    let mut decl = MethodDeclaration::new(
        "Seek",
        vec![
            Parameter::typed(TypeSyntax::predefined("double"), "position"),
            Parameter {
                modifiers: vec![Token::new("ref")],
                ty: Some(TypeSyntax::named("TimeSpan")),
                identifier: Token::new("offset"),
                default: None,
            },
            Parameter {
                default: Some(Expression::verbatim("true")),
                ..Parameter::typed(TypeSyntax::predefined("bool"), "play")
            },
        ],
        Block::default(),
    );
    decl.return_type = Some(TypeSyntax::predefined("void"));
    decl.attributes
        .push(UnsupportedNode::new("AttributeList", "[Obsolete]"));
    let class = ClassDeclaration::new("Main", vec![Declaration::Method(decl)]);

    let output = emit_class_in_app(class).unwrap();
    assert!(
        output.contains("\t\tMain.Seek = function(position, offset, play) {\n\t\t};\n"),
        "{output}"
    );
    for erased in ["double", "TimeSpan", "ref", "true", "void", "Obsolete"] {
        assert!(!output.contains(erased), "{erased} leaked: {output}");
    }
}

#[test]
fn test_class_leading_trivia_preserved() {
    let mut class = ClassDeclaration::new("Main", vec![]);
    class.leading = Trivia::new("\n    /// <summary>Main window</summary>\n    ");
    let output = emit_class_in_app(class).unwrap();
    assert!(
        output.contains("(function(App){\n    /// <summary>Main window</summary>\n\t(function(Main){"),
        "{output}"
    );
}

#[test]
fn test_method_leading_comment_preserved() {
    let mut decl = MethodDeclaration::new("Tick", vec![], Block::default());
    decl.leading = Trivia::new("\n        // Timer callback\n        ");
    let class = ClassDeclaration::new("Main", vec![Declaration::Method(decl)]);
    let output = emit_class_in_app(class).unwrap();
    assert!(
        output.contains("        // Timer callback\n\t\tMain.Tick = function() {"),
        "{output}"
    );
}

#[test]
fn test_fields_lowered_in_place() {
    let mut timer = FieldDeclaration::new(VariableDeclaration::new(
        TypeSyntax::named("DispatcherTimer"),
        vec![VariableDeclarator::new("timer", None)],
    ));
    timer.modifiers.push(Token::new("private"));
    let count = FieldDeclaration::new(VariableDeclaration::new(
        TypeSyntax::predefined("int"),
        vec![VariableDeclarator::new(
            "count",
            Some(Expression::verbatim("0")),
        )],
    ));
    let class = ClassDeclaration::new(
        "Main",
        vec![
            Declaration::Field(timer),
            method("Reset", &[], vec![]),
            Declaration::Field(count),
        ],
    );

    let output = emit_class_in_app(class).unwrap();
    let timer_at = output.find("\t\tvar timer;").expect("timer field");
    let reset_at = output.find("Main.Reset").expect("reset method");
    let count_at = output.find("\t\t count = 0;").expect("count field");
    assert!(timer_at < reset_at && reset_at < count_at, "{output}");
    assert!(!output.contains("private"), "{output}");
    assert!(!output.contains("DispatcherTimer"), "{output}");
}

#[test]
fn test_unsupported_members_skipped() {
    let class = ClassDeclaration::new(
        "Main",
        vec![
            Declaration::Unsupported(UnsupportedNode::new(
                "PropertyDeclaration",
                "public int Value { get; set; }",
            )),
            Declaration::Class(ClassDeclaration::new("Nested", vec![])),
            method("Run", &[], vec![]),
        ],
    );
    let output = emit_class_in_app(class).unwrap();
    assert!(!output.contains("Value"), "{output}");
    assert!(!output.contains("Nested"), "{output}");
    assert!(output.contains("Main.Run = function() {"), "{output}");
}

#[test]
fn test_namespace_visits_only_classes() {
    let ns = NamespaceDeclaration::new(
        "App",
        vec![
            Declaration::Unsupported(UnsupportedNode::new("EnumDeclaration", "enum Mode {}")),
            Declaration::Namespace(NamespaceDeclaration::new("Inner", vec![])),
            Declaration::Class(ClassDeclaration::new("Main", vec![])),
        ],
    );
    let unit = CompilationUnit::new(vec![Declaration::Namespace(ns)]);
    let output = emit_to_string(&unit, &NodeNameList::empty(), EmitOptions::default()).unwrap();
    assert!(!output.contains("Inner"), "{output}");
    assert!(!output.contains("Mode"), "{output}");
    assert!(output.contains("\t(function(Main){\n\t})(App.Main = App.Main || {});\n"));
}

#[test]
fn test_method_without_body_is_fatal() {
    let mut decl = MethodDeclaration::new("Render", vec![], Block::default());
    decl.body = None;
    let class = ClassDeclaration::new("Main", vec![Declaration::Method(decl)]);
    assert_eq!(
        emit_class_in_app(class).unwrap_err(),
        EmitError::MissingBody {
            kind: SyntaxKind::Method,
            name: "Render".to_string()
        }
    );
}

#[test]
fn test_constructor_without_body_is_fatal() {
    let mut ctor = ConstructorDeclaration::new("Main", Block::default());
    ctor.body = None;
    let class = ClassDeclaration::new("Main", vec![Declaration::Constructor(ctor)]);
    let err = emit_class_in_app(class).unwrap_err();
    assert!(matches!(err, EmitError::MissingBody { kind: SyntaxKind::Constructor, .. }));
}

#[test]
fn test_qualified_namespace_rejected() {
    let unit = CompilationUnit::new(vec![Declaration::Namespace(NamespaceDeclaration::new(
        "Company.App",
        vec![],
    ))]);
    let err = emit_to_string(&unit, &NodeNameList::empty(), EmitOptions::default()).unwrap_err();
    assert_eq!(
        err,
        EmitError::QualifiedNamespace {
            name: "Company.App".to_string()
        }
    );
}

#[test]
fn test_empty_class_name_rejected() {
    let err = emit_class_in_app(ClassDeclaration::new("", vec![])).unwrap_err();
    assert_eq!(err, EmitError::EmptyIdentifier { kind: SyntaxKind::Class });
}

#[test]
fn test_member_outside_class_rejected() {
    let names = NodeNameList::empty();
    let mut out = String::new();
    let mut emitter = Emitter::new(&mut out, &names, EmitOptions::default());
    let decl = MethodDeclaration::new("Run", vec![], Block::default());
    let err = emitter
        .emit_method(&decl, EmitContext::root().with_namespace("App"))
        .unwrap_err();
    assert_eq!(
        err,
        EmitError::OutsideScope {
            kind: SyntaxKind::Method,
            scope: "class"
        }
    );
}

#[test]
fn test_emit_class_directly() {
    let names = NodeNameList::empty();
    let mut out = String::new();
    {
        let mut emitter = Emitter::new(&mut out, &names, EmitOptions::default());
        let class = ClassDeclaration::new("Main", vec![method("Run", &["a", "b"], vec![])]);
        let ctx = EmitContext::root().with_namespace("App");
        emitter.emit_class(&class, ctx).unwrap();
        assert_eq!(ctx.depth(), 0);
    }
    assert_eq!(
        out,
        "(function(Main){\n\tMain.Run = function(a, b) {\n\t};\n})(App.Main = App.Main || {});\n"
    );
}

#[test]
fn test_blank_lines_between_declarations_kept() {
    let first = ClassDeclaration::new("A", vec![]);
    let mut second = ClassDeclaration::new("B", vec![]);
    second.leading = Trivia::new("\n\n    ");
    let mut third = ClassDeclaration::new("C", vec![]);
    third.leading = Trivia::new("\n    ");
    let unit = CompilationUnit::new(vec![Declaration::Namespace(NamespaceDeclaration::new(
        "App",
        vec![
            Declaration::Class(first),
            Declaration::Class(second),
            Declaration::Class(third),
        ],
    ))]);
    let output = emit_to_string(&unit, &NodeNameList::empty(), EmitOptions::default()).unwrap();
    assert!(
        output.contains("})(App.A = App.A || {});\n\n\t(function(B){"),
        "{output}"
    );
    assert!(
        output.contains("})(App.B = App.B || {});\n\t(function(C){"),
        "{output}"
    );
}

#[test]
fn test_blank_line_between_methods_kept() {
    let mut stop = MethodDeclaration::new("Stop", vec![], Block::default());
    stop.leading = Trivia::new("\r\n\r\n        ");
    let class = ClassDeclaration::new(
        "Main",
        vec![method("Run", &[], vec![]), Declaration::Method(stop)],
    );
    let output = emit_class_in_app(class).unwrap();
    assert!(
        output.contains("\t\tMain.Run = function() {\n\t\t};\n\n\t\tMain.Stop = function() {"),
        "{output}"
    );
}
