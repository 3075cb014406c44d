//! Named display colors for style rules.
//!
//! Colors travel to the viewer by name and are resolved against its palette at
//! render time. No validation happens on this side; an unknown name is
//! surfaced (or silently ignored) by the viewer itself, matching how every
//! other content concern is delegated downstream.

use serde::Serialize;
use smol_str::SmolStr;
use std::fmt;

/// Named viewer color such as `yellow` or `green`.
///
/// The wrapped name is immutable. Colors appear inside serialized style
/// objects and inside `<name>Carbon` color-scheme strings, so keeping them as
/// small shared strings avoids copies when the same color styles several
/// models.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(SmolStr);

impl Color {
    /// Creates a color from a palette name.
    ///
    /// # Arguments
    ///
    /// * `name` - Color name as the viewer understands it (e.g., `"yellow"`).
    ///
    /// # Returns
    ///
    /// A `Color` wrapping the given name.
    pub fn new(name: &str) -> Self {
        Self(SmolStr::new(name))
    }

    /// Default color for the cognate ligand.
    pub fn yellow() -> Self {
        Self::new("yellow")
    }

    /// Default color for docking poses.
    pub fn green() -> Self {
        Self::new("green")
    }

    /// Color used for residue highlight overlays.
    pub fn magenta() -> Self {
        Self::new("magenta")
    }

    /// Returns the color name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the `<name>Carbon` color-scheme string.
    ///
    /// Carbon schemes color carbon atoms by this color while leaving
    /// heteroatoms in their conventional element colors, which is how ligands
    /// are told apart without obscuring their chemistry.
    pub fn carbon_scheme(&self) -> String {
        format!("{}Carbon", self.0)
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
