use clap::Parser;

use super::args::CliArgs;
use super::config::{WpfjsConfig, parse_config, resolve_options};
use wpfjs_common::{IndentStyle, NewLineKind};

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["wpfjs", "tree.json"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).expect("test args should parse")
}

#[test]
fn parses_camel_case_keys() {
    let config = parse_config(
        r#"{
            "indent": "spaces",
            "indentWidth": 2,
            "newLine": "crlf",
            "annotate": "false",
            "domReadyEvent": "load",
            "nodeNames": ["slider", "label"]
        }"#,
    )
    .expect("config should parse");

    assert_eq!(config.indent.as_deref(), Some("spaces"));
    assert_eq!(config.indent_width, Some(2));
    assert_eq!(config.new_line.as_deref(), Some("crlf"));
    assert_eq!(config.annotate, Some(false));
    assert_eq!(config.dom_ready_event.as_deref(), Some("load"));
    assert_eq!(
        config.node_names,
        Some(vec!["slider".to_string(), "label".to_string()])
    );
}

#[test]
fn rejects_unknown_keys_and_bad_booleans() {
    assert!(parse_config(r#"{ "indentSize": 2 }"#).is_err());
    assert!(parse_config(r#"{ "annotate": "sometimes" }"#).is_err());
}

#[test]
fn empty_config_resolves_to_defaults() {
    let resolved = resolve_options(&WpfjsConfig::default(), &args(&[]), Vec::new()).unwrap();
    assert_eq!(resolved.emit, wpfjs_emitter::EmitOptions::default());
    assert!(resolved.node_names.is_empty());
}

#[test]
fn config_values_apply() {
    let config = parse_config(
        r#"{ "indent": "spaces", "newLine": "crlf", "annotate": false, "domReadyEvent": "load" }"#,
    )
    .unwrap();
    let resolved = resolve_options(&config, &args(&[]), Vec::new()).unwrap();

    assert_eq!(resolved.emit.indent, IndentStyle::Spaces(4));
    assert_eq!(resolved.emit.new_line, NewLineKind::CrLf);
    assert!(!resolved.emit.annotate);
    assert_eq!(resolved.emit.dom_ready_event, "load");
}

#[test]
fn flags_override_config() {
    let config = parse_config(
        r#"{ "indent": "spaces", "indentWidth": 8, "newLine": "crlf", "domReadyEvent": "load" }"#,
    )
    .unwrap();
    let resolved = resolve_options(
        &config,
        &args(&[
            "--indent-width",
            "2",
            "--new-line",
            "lf",
            "--dom-ready-event",
            "DOMContentLoaded",
            "--no-annotate",
        ]),
        Vec::new(),
    )
    .unwrap();

    assert_eq!(resolved.emit.indent, IndentStyle::Spaces(2));
    assert_eq!(resolved.emit.new_line, NewLineKind::Lf);
    assert_eq!(resolved.emit.dom_ready_event, "DOMContentLoaded");
    assert!(!resolved.emit.annotate);

    let tabs = resolve_options(&config, &args(&["--indent", "tab"]), Vec::new()).unwrap();
    assert_eq!(tabs.emit.indent, IndentStyle::Tab);
}

#[test]
fn node_names_are_concatenated_in_order() {
    let config = parse_config(r#"{ "nodeNames": ["fromConfig"] }"#).unwrap();
    let resolved = resolve_options(
        &config,
        &args(&["--name", "fromFlag"]),
        vec!["fromFile".to_string()],
    )
    .unwrap();
    assert_eq!(resolved.node_names, vec!["fromConfig", "fromFile", "fromFlag"]);
}

#[test]
fn invalid_config_enum_value_is_reported() {
    let config = parse_config(r#"{ "newLine": "cr" }"#).unwrap();
    let err = resolve_options(&config, &args(&[]), Vec::new()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'cr'"), "{message}");
    assert!(message.contains("newLine"), "{message}");
    assert!(message.contains("crlf"), "{message}");
}
