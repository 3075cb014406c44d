//! # PoseView
//!
//! **PoseView** composes ready-to-render molecular viewer scenes for protein-ligand docking results. It ingests a protein structure, a multi-record pose file, and an optional cognate ligand, records the exact sequence of viewer commands needed to display them, and emits that sequence as an embeddable 3Dmol.js document. The crate favors deterministic command streams and strong typing so a composed scene can be inspected, tested, and rendered without a browser in the loop.
//!
//! ## Features
//!
//! - **Typed viewer state** – `Viewer`, `Selection`, and the style specs model every command the underlying viewer accepts, with model indices assigned in strict load order.
//! - **Two named scene compositions** – `compose_docked_poses` for plain pose review and `compose_binding_site` for per-residue highlighting; their zoom-target rules differ deliberately and are kept separate.
//! - **Pass-through ingestion** – Structure files are read whole and handed to the viewer verbatim; the only failure this crate raises itself is an unreadable input path.
//! - **Deterministic rendering** – `render` turns a composed viewer into 3Dmol.js JavaScript or a standalone HTML page, one statement per recorded command.

mod viewer;

pub mod io;
pub mod render;
pub mod scene;

pub use scene::{compose_binding_site, compose_docked_poses, SceneOptions};
pub use viewer::color::Color;
pub use viewer::command::{Command, ModelFormat};
pub use viewer::selection::Selection;
pub use viewer::style::{CartoonStyle, SphereStyle, StickStyle, StyleSpec};
pub use viewer::view::Viewer;
