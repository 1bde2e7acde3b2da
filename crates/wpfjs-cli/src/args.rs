use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use wpfjs_common::NewLineKind;

/// CLI arguments for the wpfjs binary.
#[derive(Parser, Debug)]
#[command(
    name = "wpfjs",
    version,
    about = "Lower WPF code-behind syntax trees to closure-based JavaScript"
)]
pub struct CliArgs {
    /// Syntax tree of the code-behind file, as JSON.
    #[arg(value_name = "TREE_JSON")]
    pub tree: PathBuf,

    /// Write the JavaScript to this file instead of stdout.
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    // ==================== Visual Nodes ====================
    /// File listing the named visual nodes of the markup, one per line
    /// (or a JSON array when the file ends in `.json`).
    #[arg(long, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// A named visual node; may be repeated.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Vec<String>,

    // ==================== Output Formatting ====================
    /// Path to wpfjs.json. Defaults to a wpfjs.json next to the tree file.
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Indentation unit for generated lines.
    #[arg(long, value_enum, ignore_case = true)]
    pub indent: Option<Indent>,

    /// Width of one indentation level when indenting with spaces.
    #[arg(long = "indent-width", alias = "indentWidth", value_name = "N")]
    pub indent_width: Option<u8>,

    /// Line terminator for generated lines.
    #[arg(long = "new-line", alias = "newLine", value_enum, ignore_case = true)]
    pub new_line: Option<NewLine>,

    /// Omit the generated explanatory comments.
    #[arg(long = "no-annotate", alias = "noAnnotate")]
    pub no_annotate: bool,

    /// DOM event that binds the visual node references.
    #[arg(long = "dom-ready-event", alias = "domReadyEvent", value_name = "EVENT")]
    pub dom_ready_event: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Indent {
    #[value(alias = "tabs")]
    Tab,
    #[value(alias = "space")]
    Spaces,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum NewLine {
    Lf,
    #[value(name = "crlf", alias = "cr-lf")]
    CrLf,
}

impl From<NewLine> for NewLineKind {
    fn from(value: NewLine) -> Self {
        match value {
            NewLine::Lf => NewLineKind::Lf,
            NewLine::CrLf => NewLineKind::CrLf,
        }
    }
}
