//! The operations a viewer replays to reproduce a scene.

use super::selection::Selection;
use super::style::StyleSpec;
use std::fmt;

/// Structure file format tag handed to the viewer alongside model content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFormat {
    /// Legacy PDB format, used for protein and cognate inputs.
    Pdb,
    /// Multi-record SDF format, used for pose collections.
    Sdf,
}

impl ModelFormat {
    /// Returns the lowercase tag the viewer expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFormat::Pdb => "pdb",
            ModelFormat::Sdf => "sdf",
        }
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded viewer operation, stored in issue order.
///
/// The command log is the unit of inspection: scene composition produces it,
/// tests assert on it, and rendering replays it statement by statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Load one model from file content.
    AddModel {
        content: String,
        format: ModelFormat,
    },
    /// Load every record of a multi-record file as frames of one model.
    AddModelsAsFrames {
        content: String,
        format: ModelFormat,
    },
    /// Replace the style of the selected atoms.
    SetStyle {
        selection: Selection,
        style: StyleSpec,
    },
    /// Layer an additional style onto the selected atoms.
    AddStyle {
        selection: Selection,
        style: StyleSpec,
    },
    /// Fit the camera to the selected atoms.
    ZoomTo { selection: Selection },
    /// Rotate the camera about the viewer's default (y) axis.
    Rotate { degrees: f64 },
    /// Start cycling through model frames.
    Animate { interval_ms: u64 },
}
