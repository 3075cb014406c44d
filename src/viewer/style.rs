//! Representation styles applied to selections.
//!
//! A [`StyleSpec`] carries up to one spec per representation and serializes to
//! the JSON style object the viewer consumes, e.g.
//! `{"cartoon":{},"stick":{"radius":0.1}}`. Unset representations and unset
//! fields are omitted so the emitted objects stay minimal and deterministic.

use super::color::Color;
use serde::Serialize;

/// Cartoon backbone representation.
///
/// An empty spec renders with viewer defaults; a color overrides the default
/// secondary-structure coloring.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartoonStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Stick representation for bonds and side chains.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StickStyle {
    /// Color scheme such as `yellowCarbon`; colors carbons, keeps heteroatoms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscheme: Option<String>,
    /// Stick radius in ångströms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl StickStyle {
    /// Creates a stick style with viewer defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stick radius in ångströms.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Colors carbons by the given color via its `<name>Carbon` scheme.
    pub fn with_carbon_scheme(mut self, color: &Color) -> Self {
        self.colorscheme = Some(color.carbon_scheme());
        self
    }
}

/// Sphere overlay used for residue highlighting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SphereStyle {
    pub color: Color,
    /// Opacity in `[0, 1]`; partial opacity keeps the underlying sticks visible.
    pub opacity: f64,
    /// Radius scale relative to van der Waals radii.
    pub scale: f64,
}

/// Composite style applied by a single style command.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cartoon: Option<CartoonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stick: Option<StickStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sphere: Option<SphereStyle>,
}

impl StyleSpec {
    /// Creates an empty style spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cartoon representation.
    pub fn with_cartoon(mut self, cartoon: CartoonStyle) -> Self {
        self.cartoon = Some(cartoon);
        self
    }

    /// Adds a stick representation.
    pub fn with_stick(mut self, stick: StickStyle) -> Self {
        self.stick = Some(stick);
        self
    }

    /// Adds a sphere representation.
    pub fn with_sphere(mut self, sphere: SphereStyle) -> Self {
        self.sphere = Some(sphere);
        self
    }
}
