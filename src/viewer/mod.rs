//! Core data structures modeling a composed viewer scene.
//!
//! This module defines the foundational types for representing colors, selections,
//! style rules, and the ordered command log a viewer replays. These types are
//! produced by scene composition and consumed by the rendering routines.

pub mod color;
pub mod command;
pub mod selection;
pub mod style;
pub mod view;
