// src/patterns/mod.rs

use regex::Regex;

// --- Pattern Sources ---

// Course listings: an uppercase subject code of up to three words followed by
// a course number of three or more digits, e.g. "COMP SCI 577".
// Digits are restricted to 1-9, so numbers containing a zero (e.g. "101")
// never match. TODO: check the catalog dumps for zero-bearing course numbers
// before widening this to [0-9].
const COURSE_EXPR: &str = r"[A-Z]+\s*[A-Z]*\s*[A-Z]*\s[1-9]{3,}";

// Class meetings: a run of day letters, an "hh:mm:ss - hh:mm:ss" range, and a
// parenthesized building code plus room tokens, e.g.
// "MWF 09:30:00 - 10:45:00 (SERF 1234 A)".
const CLASS_EXPR: &str =
    r"[MTWRF]+\s(?:[0-9]{2}:){2}[0-9]{2}\s-\s(?:[0-9]{2}:){2}[0-9]{2}\s\([A-Z]+[\sA-Za-z0-9]+\)";

/// Compiled pattern locating course identifiers (subject + number).
#[derive(Debug, Clone)]
pub struct CoursePattern(Regex);

impl CoursePattern {
    pub(crate) fn regex(&self) -> &Regex {
        &self.0
    }
}

/// Compiled pattern locating class meeting-time blocks.
#[derive(Debug, Clone)]
pub struct ClassPattern(Regex);

impl ClassPattern {
    pub(crate) fn regex(&self) -> &Regex {
        &self.0
    }
}

/// Compiles the course and class patterns.
///
/// Both are stateless and freely shareable; compile them once and pass them
/// into every extraction call. The pattern literals are known-good, so
/// compilation cannot fail at runtime.
pub fn init_patterns() -> (CoursePattern, ClassPattern) {
    let course = Regex::new(COURSE_EXPR).expect("Failed to compile COURSE_EXPR");
    let class = Regex::new(CLASS_EXPR).expect("Failed to compile CLASS_EXPR");

    (CoursePattern(course), ClassPattern(class))
}
