//! File ingestion for scene composition.
//!
//! Structure files are read whole and handed to the viewer verbatim; content
//! correctness is delegated entirely downstream. The only failure raised here
//! on the composition path is an unreadable input, tagged with the offending
//! path. The SDF helpers split and summarize pose records without validating
//! their chemistry.

mod error;

pub mod sdf;

pub use error::Error;

use std::fs;
use std::path::Path;

/// Reads a structure file into memory.
///
/// # Arguments
///
/// * `path` - Path to the file to read.
///
/// # Returns
///
/// The file content, or [`Error::Io`] carrying the path when the file cannot
/// be read.
pub fn read_input(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| Error::from_io(e, Some(path.to_path_buf())))
}
