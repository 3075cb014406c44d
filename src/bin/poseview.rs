use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{info, scene, site};

#[derive(Parser, Debug)]
#[command(
    name = "poseview",
    about = "A command-line tool for composing 3Dmol.js visualizations of protein-ligand docking poses.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a docked-pose scene and emit a standalone HTML page.
    Scene(scene::SceneArgs),
    /// Compose a binding-site scene with residue highlights.
    Site(site::SiteArgs),
    /// Summarize the records of a pose SDF file.
    Info(info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scene(args) => scene::run(&args),
        Command::Site(args) => site::run(&args),
        Command::Info(args) => info::run(&args),
    }
}
