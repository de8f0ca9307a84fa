// src/extractors/courses.rs

use std::io::BufRead;
use std::path::Path;

use serde::Serialize;

use crate::extractors::open_source;
use crate::patterns::CoursePattern;
use crate::utils::error::ExtractError;

/// One course identifier pulled from a catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    /// Department code, possibly multi-word ("COMP SCI").
    pub subject: String,
    /// Numeric course code.
    pub number: String,
}

/// Scans a catalog listing file for course identifiers.
///
/// Each line is checked for the first occurrence of the course pattern;
/// lines without a match are skipped. Matches are returned in line order,
/// duplicates included. The path must name a readable file before any
/// reading starts; an open or read failure aborts the scan and discards
/// anything accumulated so far.
pub fn parse_courses(
    pattern: &CoursePattern,
    file_name: &Path,
) -> Result<Vec<Course>, ExtractError> {
    let reader = open_source(file_name)?;
    parse_courses_from(pattern, reader)
}

/// Scans any line-oriented reader for course identifiers.
pub fn parse_courses_from<R: BufRead>(
    pattern: &CoursePattern,
    reader: R,
) -> Result<Vec<Course>, ExtractError> {
    let mut courses = Vec::new();

    for line in reader.lines() {
        let line = line?;

        if let Some(found) = pattern.regex().find(&line) {
            courses.push(split_course(found.as_str())?);
        }
    }

    Ok(courses)
}

/// Splits matched course text at its last space into subject and number.
fn split_course(matched: &str) -> Result<Course, ExtractError> {
    // The pattern guarantees whitespace before the number; a match without
    // one is an internal inconsistency, not recoverable input.
    let sep = matched.rfind(' ').ok_or_else(|| {
        ExtractError::MalformedMatch(format!("Course match '{}' has no separator", matched))
    })?;

    Ok(Course {
        subject: matched[..sep].to_string(),
        number: matched[sep + 1..].to_string(),
    })
}
