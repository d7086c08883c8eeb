//! npdoc — render npdoc2json output as a JSON document tree.
//!
//! `npdoc api.json#filters.gaussian --module skimage` prints the
//! `{"type": "root", "children": [...]}` tree a MyST-style host would splice
//! into its document. Prose fields go through the built-in markup parser.

use anyhow::{Context, Result};
use clap::Parser;
use npdoc::{MarkupParser, RenderOptions};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Deepest starting heading level accepted on the command line.
const MAX_DEPTH: u64 = 64;

#[derive(Parser)]
#[command(
    name = "npdoc",
    about = "Render npdoc2json docstring records into a document tree"
)]
struct Cli {
    /// Record file, optionally suffixed with #submodule or #submodule.function
    input: String,

    /// Module name used as the first component of cross-reference labels
    #[arg(short = 'm', long)]
    module: Option<String>,

    /// Starting heading depth
    #[arg(short = 'd', long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=MAX_DEPTH))]
    depth: u64,

    /// Write the tree here instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Log dispatch decisions to stderr (overrides RUST_LOG)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let opts = RenderOptions::new(cli.depth as usize, cli.module.clone());
    let root = npdoc::run(&cli.input, &MarkupParser, &opts)
        .with_context(|| format!("failed to render {}", cli.input))?;

    let mut json = if cli.compact {
        serde_json::to_string(&root)
    } else {
        serde_json::to_string_pretty(&root)
    }
    .context("failed to serialize document tree")?;
    json.push('\n');

    match cli.output {
        Some(ref path) => fs::write(path, &json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", json),
    }

    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
