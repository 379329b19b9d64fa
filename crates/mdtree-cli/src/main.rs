mod report;

use anyhow::Context;
use clap::Parser;
use mdtree_config::Config;
use mdtree_engine::{parse, read_file_limited};
use std::{io::Write, path::PathBuf};

/// Document read when neither the command line nor the config names one.
const DEFAULT_INPUT: &str = "test.md";

/// Parse a Markdown file and print diagnostics about its tree.
#[derive(Parser, Debug)]
#[command(name = "mdtree", version, about)]
struct Cli {
    /// Markdown file to parse [default: config `input`, then test.md]
    path: Option<PathBuf>,

    /// Config file to use instead of ~/.config/mdtree/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also print an outline of the whole tree
    #[arg(long)]
    dump: bool,

    /// Refuse input files larger than this many bytes
    #[arg(long, value_name = "N")]
    max_bytes: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .unwrap_or_default();

    let level = config.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let path = cli
        .path
        .or(config.input)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let limit = cli.max_bytes.or(config.max_input_bytes);
    log::info!("Reading {}", path.display());

    let bytes = read_file_limited(&path, limit)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let doc = parse(&bytes);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::first_node(&doc, &mut out)?;
    report::paragraphs(&doc, &mut out)?;
    if cli.dump || config.dump_tree {
        report::dump(&doc, &mut out)?;
    }
    out.flush()?;

    Ok(())
}
