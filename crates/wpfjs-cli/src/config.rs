//! `wpfjs.json` project configuration and option resolution.
//!
//! Command-line flags override the config file; the config file overrides
//! the emitter defaults.

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use wpfjs_common::{IndentStyle, NewLineKind};
use wpfjs_emitter::EmitOptions;

use crate::args::{CliArgs, Indent, NewLine};

pub const CONFIG_FILE_NAME: &str = "wpfjs.json";

/// Indent width used for `spaces` when no width is given.
pub const DEFAULT_INDENT_WIDTH: u8 = 4;

/// Custom deserializer for boolean options that accepts both bool and string values,
/// so `"annotate": "false"` reads the same as `"annotate": false`.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WpfjsConfig {
    #[serde(default)]
    pub indent: Option<String>,
    #[serde(default)]
    pub indent_width: Option<u8>,
    #[serde(default)]
    pub new_line: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub annotate: Option<bool>,
    #[serde(default)]
    pub dom_ready_event: Option<String>,
    #[serde(default)]
    pub node_names: Option<Vec<String>>,
}

/// Everything the driver needs to run the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub emit: EmitOptions,
    /// Names in order: config file, then `--names` file, then `--name` flags.
    pub node_names: Vec<String>,
}

pub fn parse_config(source: &str) -> Result<WpfjsConfig> {
    let config = serde_json::from_str(source).context("failed to parse wpfjs.json")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<WpfjsConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// The config file to use: `--config` if given, else `wpfjs.json` beside the tree.
pub fn find_config(args: &CliArgs) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        return Some(path.clone());
    }
    let dir = args.tree.parent()?;
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Merge config values and flags into emitter options.
///
/// `file_names` are the names read from the `--names` file, if any.
pub fn resolve_options(
    config: &WpfjsConfig,
    args: &CliArgs,
    file_names: Vec<String>,
) -> Result<ResolvedOptions> {
    let mut emit = EmitOptions::default();

    let indent = match args.indent {
        Some(indent) => Some(indent),
        None => config
            .indent
            .as_deref()
            .map(|value| parse_value::<Indent>("indent", value))
            .transpose()?,
    };
    let width = args
        .indent_width
        .or(config.indent_width)
        .unwrap_or(DEFAULT_INDENT_WIDTH);
    emit.indent = match indent {
        Some(Indent::Spaces) => IndentStyle::Spaces(width),
        Some(Indent::Tab) | None => IndentStyle::Tab,
    };

    let new_line = match args.new_line {
        Some(new_line) => Some(new_line),
        None => config
            .new_line
            .as_deref()
            .map(|value| parse_value::<NewLine>("newLine", value))
            .transpose()?,
    };
    if let Some(new_line) = new_line {
        emit.new_line = NewLineKind::from(new_line);
    }

    if let Some(annotate) = config.annotate {
        emit.annotate = annotate;
    }
    if args.no_annotate {
        emit.annotate = false;
    }

    if let Some(event) = args
        .dom_ready_event
        .as_ref()
        .or(config.dom_ready_event.as_ref())
    {
        emit.dom_ready_event = event.clone();
    }

    let mut node_names = config.node_names.clone().unwrap_or_default();
    node_names.extend(file_names);
    node_names.extend(args.name.iter().cloned());

    Ok(ResolvedOptions { emit, node_names })
}

fn parse_value<T: ValueEnum>(key: &str, value: &str) -> Result<T> {
    T::from_str(value, true).map_err(|_| {
        let expected: Vec<String> = T::value_variants()
            .iter()
            .filter_map(|variant| variant.to_possible_value())
            .map(|possible| possible.get_name().to_string())
            .collect();
        anyhow!(
            "invalid value '{value}' for '{key}'. Expected one of: {}",
            expected.join(", ")
        )
    })
}
