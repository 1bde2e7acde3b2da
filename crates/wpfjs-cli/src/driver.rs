//! Read the inputs, run the emitter, write the JavaScript.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use wpfjs_emitter::{NodeNameList, emit_to_string};
use wpfjs_syntax::CompilationUnit;

use crate::args::CliArgs;
use crate::config::{self, ResolvedOptions, WpfjsConfig};

pub fn read_tree(path: &Path) -> Result<CompilationUnit> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read syntax tree: {}", path.display()))?;
    wpfjs_syntax::from_json(&source)
        .with_context(|| format!("failed to parse syntax tree: {}", path.display()))
}

/// Parse a node-name list.
///
/// Plain form: one name per line, blank lines and `#` comments ignored.
/// JSON form: an array of strings.
pub fn parse_names(source: &str, json: bool) -> Result<Vec<String>> {
    if json {
        let names: Vec<String> =
            serde_json::from_str(source).context("node names must be a JSON array of strings")?;
        return Ok(names);
    }

    Ok(source
        .lines()
        .map(|line| match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read node names: {}", path.display()))?;
    let json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    parse_names(&source, json).with_context(|| format!("in {}", path.display()))
}

/// Resolve configuration for `args`, loading whatever files they point at.
pub fn resolve(args: &CliArgs) -> Result<ResolvedOptions> {
    let config = match config::find_config(args) {
        Some(path) => {
            debug!(config = %path.display(), "using config file");
            config::load_config(&path)?
        }
        None => WpfjsConfig::default(),
    };
    let file_names = match &args.names {
        Some(path) => read_names(path)?,
        None => Vec::new(),
    };
    config::resolve_options(&config, args, file_names)
}

/// Lower the tree named by `args` and return the JavaScript.
pub fn compile(args: &CliArgs) -> Result<String> {
    let resolved = resolve(args)?;
    let node_names =
        NodeNameList::new(resolved.node_names).context("invalid visual node name list")?;
    let unit = read_tree(&args.tree)?;
    debug!(
        members = unit.members.len(),
        node_names = node_names.len(),
        "lowering compilation unit"
    );
    emit_to_string(&unit, &node_names, resolved.emit)
        .with_context(|| format!("failed to lower {}", args.tree.display()))
}

/// Compile and write the result to `--out`, or stdout.
pub fn run(args: &CliArgs) -> Result<()> {
    let javascript = compile(args)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, &javascript)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(out = %path.display(), bytes = javascript.len(), "wrote JavaScript");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(javascript.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}
