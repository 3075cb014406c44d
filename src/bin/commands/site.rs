use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use poseview::compose_binding_site;

use crate::commands::{self, DisplayArgs};

/// Arguments for the binding-site scene command.
#[derive(Debug, Args)]
pub struct SiteArgs {
    /// Protein structure file (PDB).
    #[arg(short, long, value_name = "FILE")]
    pub protein: PathBuf,
    /// Multi-record pose file (SDF).
    #[arg(long, value_name = "FILE")]
    pub poses: PathBuf,
    /// Cognate ligand structure file, when available.
    #[arg(long, value_name = "FILE")]
    pub cognate: Option<PathBuf>,
    /// Residue sequence number to highlight; repeatable.
    #[arg(long = "highlight", value_name = "RESI")]
    pub highlight: Vec<i32>,
    /// Output HTML file. When omitted, stdout is used.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub display: DisplayArgs,
}

pub fn run(args: &SiteArgs) -> Result<()> {
    commands::ensure_noninteractive_stdout("site", args.output.as_deref())?;

    let options = args.display.to_options();
    let viewer = compose_binding_site(
        &args.protein,
        &args.poses,
        args.cognate.as_deref(),
        &args.highlight,
        &options,
    )
    .context("Failed to compose binding-site scene")?;

    commands::save_html(&viewer, "Binding site", args.output.as_deref())
}
