use std::fs::File;
use std::io::{self as stdio, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use is_terminal::IsTerminal;

use poseview::render;
use poseview::{Color, SceneOptions, Viewer};

pub mod info;
pub mod scene;
pub mod site;

/// Display options shared by the scene-composing subcommands.
#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Show only the first pose instead of animating through all of them.
    #[arg(long = "no-animate")]
    pub no_animate: bool,
    /// Carbon color for the cognate ligand sticks.
    #[arg(long, value_name = "COLOR", default_value = "yellow")]
    pub cognate_color: String,
    /// Carbon color for the pose sticks.
    #[arg(long, value_name = "COLOR", default_value = "green")]
    pub pose_color: String,
}

impl DisplayArgs {
    pub fn to_options(&self) -> SceneOptions {
        SceneOptions {
            animate: !self.no_animate,
            cognate_color: Color::new(&self.cognate_color),
            pose_color: Color::new(&self.pose_color),
        }
    }
}

/// Renders a composed viewer as HTML to the configured output destination.
pub fn save_html(viewer: &Viewer, title: &str, output: Option<&Path>) -> Result<()> {
    let page = render::to_html(viewer, title).context("Failed to render viewer script")?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(page.as_bytes())
                .with_context(|| format!("Failed to write HTML output to {}", path.display()))?;
            writer.flush().context("Failed to flush output writer")?;
        }
        None => {
            let stdout = stdio::stdout();
            let handle = stdout.lock();
            let mut writer = BufWriter::new(handle);
            writer
                .write_all(page.as_bytes())
                .context("Failed to write HTML output to stdout")?;
            writer.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

/// Ensures commands do not dump HTML directly into an interactive terminal.
pub fn ensure_noninteractive_stdout(command: &str, output: Option<&Path>) -> Result<()> {
    if output.is_none() && stdio::stdout().is_terminal() {
        bail!(
            "Refusing to stream {command} HTML to an interactive terminal. Use -o/--output or pipe the command into a file."
        );
    }
    Ok(())
}
