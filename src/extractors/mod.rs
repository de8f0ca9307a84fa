// src/extractors/mod.rs
pub mod classes;
pub mod courses;
pub mod times;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::utils::error::ExtractError;

// Re-export the record types and entry points for convenience
pub use classes::{parse_class, MeetingTime};
pub use courses::{parse_courses, Course};

/// Opens a named text source for line-by-line scanning.
///
/// The path must name an existing regular file; anything else is rejected as
/// an invalid source before any data is read. Open failures on a valid path
/// surface as I/O faults.
pub(crate) fn open_source(path: &Path) -> Result<BufReader<File>, ExtractError> {
    if !path.is_file() {
        return Err(ExtractError::InvalidSource(path.display().to_string()));
    }

    Ok(BufReader::new(File::open(path)?))
}
