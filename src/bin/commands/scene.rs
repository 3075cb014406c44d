use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use poseview::compose_docked_poses;

use crate::commands::{self, DisplayArgs};

/// Arguments for the docked-pose scene command.
#[derive(Debug, Args)]
pub struct SceneArgs {
    /// Protein structure file (PDB).
    #[arg(short, long, value_name = "FILE")]
    pub protein: PathBuf,
    /// Multi-record pose file (SDF).
    #[arg(long, value_name = "FILE")]
    pub poses: PathBuf,
    /// Cognate ligand structure file, when available.
    #[arg(long, value_name = "FILE")]
    pub cognate: Option<PathBuf>,
    /// Output HTML file. When omitted, stdout is used.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub display: DisplayArgs,
}

pub fn run(args: &SceneArgs) -> Result<()> {
    commands::ensure_noninteractive_stdout("scene", args.output.as_deref())?;

    let options = args.display.to_options();
    let viewer = compose_docked_poses(
        &args.protein,
        &args.poses,
        args.cognate.as_deref(),
        &options,
    )
    .context("Failed to compose docked-pose scene")?;

    commands::save_html(&viewer, "Docked poses", args.output.as_deref())
}
