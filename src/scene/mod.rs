//! Scene composition for docked-pose visualization.
//!
//! Two compositions share almost everything: load the protein, optionally the
//! cognate ligand, then the poses, style each in turn, and aim the camera.
//! They differ in residue highlighting and in the zoom target chosen when no
//! cognate is supplied. The divergence is intentional and callers pick the
//! behavior by name; see [`compose_docked_poses`] and [`compose_binding_site`].

use crate::io::{self, sdf, Error};
use crate::viewer::color::Color;
use crate::viewer::command::ModelFormat;
use crate::viewer::selection::Selection;
use crate::viewer::style::{CartoonStyle, SphereStyle, StickStyle, StyleSpec};
use crate::viewer::view::Viewer;
use std::path::Path;

/// Delay between pose frames when animating, in viewer time units.
pub const ANIMATION_INTERVAL_MS: u64 = 1000;

/// Camera rotation applied after zooming, in degrees.
pub const CAMERA_ROTATION_DEGREES: f64 = 270.0;

const PROTEIN_STICK_RADIUS: f64 = 0.1;
const COGNATE_STICK_RADIUS: f64 = 0.25;
const HIGHLIGHT_OPACITY: f64 = 0.7;
const HIGHLIGHT_SCALE: f64 = 0.7;

/// Display options shared by both scene compositions.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    /// Animate through the poses instead of showing only the first one.
    pub animate: bool,
    /// Carbon color for the cognate ligand sticks.
    pub cognate_color: Color,
    /// Carbon color for the pose sticks.
    pub pose_color: Color,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            animate: true,
            cognate_color: Color::yellow(),
            pose_color: Color::green(),
        }
    }
}

/// Composes a docked-pose scene.
///
/// The protein loads as model 0 and is styled as cartoon backbone with thin
/// stick side chains. A cognate ligand, when given, loads as model 1 and is
/// styled as thick sticks with its carbons colored by the cognate color. The
/// poses load last: either every record of the pose file as frames of one
/// animated model, or only the first record as a static model. The camera
/// zooms to the cognate when present and to the protein otherwise, then
/// rotates by [`CAMERA_ROTATION_DEGREES`].
///
/// # Arguments
///
/// * `protein_file` - Protein structure file (PDB).
/// * `pose_file` - Multi-record pose file (SDF).
/// * `cognate_file` - Optional reference ligand structure file.
/// * `options` - Animation toggle and carbon colors.
///
/// # Returns
///
/// The composed viewer, or [`Error::Io`] when an input path is unreadable.
/// Content correctness is not checked here.
pub fn compose_docked_poses(
    protein_file: &Path,
    pose_file: &Path,
    cognate_file: Option<&Path>,
    options: &SceneOptions,
) -> Result<Viewer, Error> {
    let mut viewer = Viewer::new();
    load_protein(&mut viewer, protein_file)?;
    load_cognate(&mut viewer, cognate_file, &options.cognate_color)?;
    load_poses(&mut viewer, pose_file, options)?;

    let zoom_model = if cognate_file.is_some() { 1 } else { 0 };
    aim_camera(&mut viewer, zoom_model);

    Ok(viewer)
}

/// Composes a binding-site scene.
///
/// Identical to [`compose_docked_poses`] except that each residue in
/// `highlight_residues` receives a translucent sphere overlay on the protein
/// model, applied regardless of the animate and cognate settings, and that
/// with no cognate present the camera zooms to the pose model rather than to
/// the protein.
///
/// # Arguments
///
/// * `protein_file` - Protein structure file (PDB).
/// * `pose_file` - Multi-record pose file (SDF).
/// * `cognate_file` - Optional reference ligand structure file.
/// * `highlight_residues` - Residue sequence numbers to emphasize on model 0.
/// * `options` - Animation toggle and carbon colors.
///
/// # Returns
///
/// The composed viewer, or [`Error::Io`] when an input path is unreadable.
pub fn compose_binding_site(
    protein_file: &Path,
    pose_file: &Path,
    cognate_file: Option<&Path>,
    highlight_residues: &[i32],
    options: &SceneOptions,
) -> Result<Viewer, Error> {
    let mut viewer = Viewer::new();
    let protein_index = load_protein(&mut viewer, protein_file)?;

    for &resi in highlight_residues {
        viewer.add_style(
            Selection::residue(protein_index, resi),
            StyleSpec::new().with_sphere(SphereStyle {
                color: Color::magenta(),
                opacity: HIGHLIGHT_OPACITY,
                scale: HIGHLIGHT_SCALE,
            }),
        );
    }

    load_cognate(&mut viewer, cognate_file, &options.cognate_color)?;
    let pose_index = load_poses(&mut viewer, pose_file, options)?;

    let zoom_model = if cognate_file.is_some() { 1 } else { pose_index };
    aim_camera(&mut viewer, zoom_model);

    Ok(viewer)
}

fn load_protein(viewer: &mut Viewer, protein_file: &Path) -> Result<usize, Error> {
    let content = io::read_input(protein_file)?;
    let index = viewer.add_model(content, ModelFormat::Pdb);

    // The protein is styled with an unrestricted selection before any further
    // model is loaded; later per-model rules override it.
    viewer.set_style(
        Selection::all(),
        StyleSpec::new()
            .with_cartoon(CartoonStyle::default())
            .with_stick(StickStyle::new().with_radius(PROTEIN_STICK_RADIUS)),
    );

    Ok(index)
}

fn load_cognate(
    viewer: &mut Viewer,
    cognate_file: Option<&Path>,
    color: &Color,
) -> Result<(), Error> {
    let Some(path) = cognate_file else {
        return Ok(());
    };

    let content = io::read_input(path)?;
    let index = viewer.add_model(content, ModelFormat::Pdb);
    viewer.set_style(
        Selection::model(index),
        StyleSpec::new().with_stick(
            StickStyle::new()
                .with_carbon_scheme(color)
                .with_radius(COGNATE_STICK_RADIUS),
        ),
    );

    Ok(())
}

fn load_poses(viewer: &mut Viewer, pose_file: &Path, options: &SceneOptions) -> Result<usize, Error> {
    let content = io::read_input(pose_file)?;
    let style =
        StyleSpec::new().with_stick(StickStyle::new().with_carbon_scheme(&options.pose_color));

    let index = if options.animate {
        let index = viewer.add_models_as_frames(content, ModelFormat::Sdf);
        viewer.set_style(Selection::model(index), style);
        viewer.animate(ANIMATION_INTERVAL_MS);
        index
    } else {
        let first = sdf::first_record(&content).to_string();
        let index = viewer.add_model(first, ModelFormat::Sdf);
        viewer.set_style(Selection::model(index), style);
        index
    };

    Ok(index)
}

fn aim_camera(viewer: &mut Viewer, zoom_model: usize) {
    viewer.zoom_to(Selection::model(zoom_model));
    viewer.rotate(CAMERA_ROTATION_DEGREES);
}
