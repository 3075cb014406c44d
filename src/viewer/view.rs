//! Mutable viewer state accumulating models, style rules, and camera directives.
//!
//! A `Viewer` is exclusively owned: scene composition performs a bounded
//! sequence of mutations and hands it back, and no reference is retained
//! anywhere. Rendering and tests read the command log through [`Viewer::commands`].

use super::command::{Command, ModelFormat};
use super::selection::Selection;
use super::style::StyleSpec;
use std::fmt;

/// Ordered viewer command log with strict load-order model indexing.
///
/// Model indices are assigned by the two load operations and nothing else:
/// the first loaded entity is model 0, the next model 1, and so on. A
/// multi-frame load counts as a single logical model regardless of how many
/// records its content holds. Every styling and camera command targeting a
/// model must use the index consistent with that order.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    commands: Vec<Command>,
    model_count: usize,
}

impl Viewer {
    /// Creates an empty viewer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads one model and returns its load-order index.
    ///
    /// Content is passed to the viewer verbatim; no parsing or validation
    /// happens here.
    ///
    /// # Arguments
    ///
    /// * `content` - Raw structure file content.
    /// * `format` - Format tag the viewer should parse the content as.
    ///
    /// # Returns
    ///
    /// The index assigned to the new model.
    pub fn add_model(&mut self, content: impl Into<String>, format: ModelFormat) -> usize {
        let index = self.model_count;
        self.model_count += 1;
        self.commands.push(Command::AddModel {
            content: content.into(),
            format,
        });
        index
    }

    /// Loads every record of a multi-record file as successive frames of one
    /// animated model and returns that model's load-order index.
    pub fn add_models_as_frames(
        &mut self,
        content: impl Into<String>,
        format: ModelFormat,
    ) -> usize {
        let index = self.model_count;
        self.model_count += 1;
        self.commands.push(Command::AddModelsAsFrames {
            content: content.into(),
            format,
        });
        index
    }

    /// Replaces the style of the selected atoms.
    pub fn set_style(&mut self, selection: Selection, style: StyleSpec) {
        self.commands.push(Command::SetStyle { selection, style });
    }

    /// Layers an additional style onto the selected atoms, keeping whatever
    /// styles they already carry.
    pub fn add_style(&mut self, selection: Selection, style: StyleSpec) {
        self.commands.push(Command::AddStyle { selection, style });
    }

    /// Fits the camera to the selected atoms.
    pub fn zoom_to(&mut self, selection: Selection) {
        self.commands.push(Command::ZoomTo { selection });
    }

    /// Rotates the camera about the viewer's default (y) axis.
    pub fn rotate(&mut self, degrees: f64) {
        self.commands.push(Command::Rotate { degrees });
    }

    /// Starts cycling through the frames of the animated model.
    ///
    /// # Arguments
    ///
    /// * `interval_ms` - Delay between frames in viewer time units.
    pub fn animate(&mut self, interval_ms: u64) {
        self.commands.push(Command::Animate { interval_ms });
    }

    /// Number of models loaded so far.
    pub fn model_count(&self) -> usize {
        self.model_count
    }

    /// The recorded commands, in issue order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns true when no command has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewer {{ models: {}, commands: {} }}",
            self.model_count,
            self.commands.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::color::Color;
    use crate::viewer::style::StickStyle;

    #[test]
    fn viewer_new_is_empty() {
        let viewer = Viewer::new();
        assert!(viewer.is_empty());
        assert_eq!(viewer.model_count(), 0);
    }

    #[test]
    fn add_model_assigns_indices_in_load_order() {
        let mut viewer = Viewer::new();
        assert_eq!(viewer.add_model("a", ModelFormat::Pdb), 0);
        assert_eq!(viewer.add_model("b", ModelFormat::Pdb), 1);
        assert_eq!(viewer.add_model("c", ModelFormat::Sdf), 2);
        assert_eq!(viewer.model_count(), 3);
    }

    #[test]
    fn frames_load_counts_as_one_model() {
        let mut viewer = Viewer::new();
        viewer.add_model("protein", ModelFormat::Pdb);
        let index = viewer.add_models_as_frames("p1\n$$$$\np2\n$$$$\n", ModelFormat::Sdf);
        assert_eq!(index, 1);
        assert_eq!(viewer.model_count(), 2);
    }

    #[test]
    fn commands_preserve_issue_order() {
        let mut viewer = Viewer::new();
        viewer.add_model("protein", ModelFormat::Pdb);
        viewer.set_style(
            Selection::all(),
            StyleSpec::new().with_stick(StickStyle::new()),
        );
        viewer.zoom_to(Selection::model(0));
        viewer.rotate(270.0);

        let kinds: Vec<&str> = viewer
            .commands()
            .iter()
            .map(|c| match c {
                Command::AddModel { .. } => "add_model",
                Command::AddModelsAsFrames { .. } => "frames",
                Command::SetStyle { .. } => "set_style",
                Command::AddStyle { .. } => "add_style",
                Command::ZoomTo { .. } => "zoom_to",
                Command::Rotate { .. } => "rotate",
                Command::Animate { .. } => "animate",
            })
            .collect();
        assert_eq!(kinds, ["add_model", "set_style", "zoom_to", "rotate"]);
    }

    #[test]
    fn rotate_records_degrees() {
        let mut viewer = Viewer::new();
        viewer.rotate(270.0);
        assert_eq!(viewer.commands(), [Command::Rotate { degrees: 270.0 }]);
    }

    #[test]
    fn animate_records_interval() {
        let mut viewer = Viewer::new();
        viewer.animate(1000);
        assert_eq!(viewer.commands(), [Command::Animate { interval_ms: 1000 }]);
    }

    #[test]
    fn style_commands_do_not_affect_model_count() {
        let mut viewer = Viewer::new();
        viewer.add_model("protein", ModelFormat::Pdb);
        viewer.add_style(
            Selection::residue(0, 45),
            StyleSpec::new().with_stick(StickStyle::new().with_carbon_scheme(&Color::green())),
        );
        viewer.zoom_to(Selection::all());
        assert_eq!(viewer.model_count(), 1);
    }

    #[test]
    fn viewer_display_reports_counts() {
        let mut viewer = Viewer::new();
        viewer.add_model("protein", ModelFormat::Pdb);
        viewer.zoom_to(Selection::model(0));
        assert_eq!(format!("{}", viewer), "Viewer { models: 1, commands: 2 }");
    }
}
