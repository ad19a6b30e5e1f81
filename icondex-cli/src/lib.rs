//! icondex CLI

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};
use log::info;

use icondex_core::layout::ProjectLayout;
use icondex_core::pipeline::{self, RunSummary};

/// Build the icon search index and publish the icon asset folders.
#[derive(Debug, Parser)]
#[command(name = "icondex", version, about)]
pub struct Cli {
    /// Directory holding one folder per icon. Without it, nothing happens.
    #[arg(value_hint = ValueHint::DirPath)]
    assets_dir: Option<PathBuf>,

    /// Project root for src/data/icons-index.json and public/icons
    /// (defaults to the directory containing this executable)
    #[arg(long = "root", value_hint = ValueHint::DirPath)]
    root: Option<PathBuf>,

    /// Suppress step and progress output
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,
}

/// Parse CLI args and run the pipeline.
pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    execute(&cli)?;
    Ok(())
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn execute(cli: &Cli) -> Result<Option<RunSummary>> {
    let Some(assets_dir) = &cli.assets_dir else {
        return Ok(None);
    };
    let layout = resolve_layout(cli)?;

    let summary = if cli.quiet {
        pipeline::run(assets_dir, &layout, io::sink())?
    } else {
        pipeline::run(assets_dir, &layout, io::stdout().lock())?
    };

    if let Some(s) = &summary {
        info!(
            "indexed {} folders: {} regular, {} filled",
            s.folders, s.regular, s.filled
        );
    }
    Ok(summary)
}

fn resolve_layout(cli: &Cli) -> Result<ProjectLayout> {
    match &cli.root {
        Some(root) => Ok(ProjectLayout::new(root)),
        None => ProjectLayout::beside_executable(),
    }
}
