use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use poseview::io::{self as pv_io, sdf};

/// Report-only command that summarizes the records of a pose SDF file and,
/// when given, a protein structure file.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Multi-record pose file (SDF).
    #[arg(long, value_name = "FILE")]
    pub poses: PathBuf,
    /// Protein structure file (PDB), when available.
    #[arg(short, long, value_name = "FILE")]
    pub protein: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let content = pv_io::read_input(&args.poses)
        .with_context(|| format!("Failed to read pose file {}", args.poses.display()))?;
    let summaries =
        sdf::summarize(&content, Some(&args.poses)).context("Failed to parse pose records")?;

    let protein = match &args.protein {
        Some(path) => {
            let content = pv_io::read_input(path)
                .with_context(|| format!("Failed to read protein file {}", path.display()))?;
            Some(ProteinReport::from_content(&content))
        }
        None => None,
    };

    print_tables(&summaries, protein.as_ref())?;
    Ok(())
}

/// Record counts gathered from a protein PDB file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ProteinReport {
    atom_records: usize,
    hetatm_records: usize,
    lines: usize,
}

impl ProteinReport {
    fn from_content(content: &str) -> Self {
        let mut atom_records = 0;
        let mut hetatm_records = 0;
        let mut lines = 0;
        for line in content.lines() {
            lines += 1;
            if line.starts_with("ATOM  ") {
                atom_records += 1;
            } else if line.starts_with("HETATM") {
                hetatm_records += 1;
            }
        }
        Self {
            atom_records,
            hetatm_records,
            lines,
        }
    }
}

fn print_tables(summaries: &[sdf::RecordSummary], protein: Option<&ProteinReport>) -> Result<()> {
    let mut stderr = io::stderr().lock();

    print_boxed_label(&mut stderr, "PoseView Pose Report")?;
    writeln!(&mut stderr)?;

    let mut pose_table = Table::new();
    pose_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    pose_table.set_titles(row!["Pose", "Title", "Atoms", "Bonds"]);
    for (index, summary) in summaries.iter().enumerate() {
        let title = if summary.title.is_empty() {
            "(untitled)"
        } else {
            summary.title.as_str()
        };
        pose_table.add_row(row![index + 1, title, summary.atoms, summary.bonds]);
    }
    pose_table
        .print(&mut stderr)
        .context("Failed to render pose summary")?;
    writeln!(&mut stderr, "Total poses: {}", summaries.len())?;

    if let Some(report) = protein {
        writeln!(&mut stderr)?;
        print_boxed_label(&mut stderr, "Protein Summary")?;

        let mut protein_table = Table::new();
        protein_table.set_format(*format::consts::FORMAT_BOX_CHARS);
        protein_table.set_titles(row!["Metric", "Value"]);
        protein_table.add_row(row!["ATOM records", report.atom_records]);
        protein_table.add_row(row!["HETATM records", report.hetatm_records]);
        protein_table.add_row(row!["Lines", report.lines]);
        protein_table
            .print(&mut stderr)
            .context("Failed to render protein summary")?;
    }

    Ok(())
}

fn print_boxed_label<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    writeln!(writer, "╭{}╮", "─".repeat(width))?;
    writeln!(writer, "│{}│", inner)?;
    writeln!(writer, "╰{}╯", "─".repeat(width))?;
    Ok(())
}
