//! Atom addressing for style and camera commands.

use serde::Serialize;

/// Selection restricting a command to part of the loaded scene.
///
/// Serializes to the JSON selection object the viewer consumes; unset fields
/// are omitted so an empty selection becomes `{}` and matches every atom
/// currently loaded. Model indices follow strict load order, so a selection
/// built against one viewer is only meaningful for that viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Index of the targeted model, in load order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<usize>,
    /// Residue sequence number within the targeted model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resi: Option<i32>,
}

impl Selection {
    /// Empty selection matching everything currently loaded.
    pub fn all() -> Self {
        Self::default()
    }

    /// Selection of one whole model by load-order index.
    pub fn model(index: usize) -> Self {
        Self {
            model: Some(index),
            resi: None,
        }
    }

    /// Selection of one residue within a model.
    ///
    /// # Arguments
    ///
    /// * `model` - Load-order index of the model.
    /// * `resi` - Residue sequence number as it appears in the source file.
    pub fn residue(model: usize, resi: i32) -> Self {
        Self {
            model: Some(model),
            resi: Some(resi),
        }
    }

    /// Returns true when the selection matches everything.
    pub fn is_all(&self) -> bool {
        self.model.is_none() && self.resi.is_none()
    }
}
