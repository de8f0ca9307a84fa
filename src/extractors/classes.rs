// src/extractors/classes.rs

use std::io::BufRead;
use std::path::Path;

use serde::Serialize;

use crate::extractors::open_source;
use crate::extractors::times::expand_slots;
use crate::patterns::ClassPattern;
use crate::utils::error::ExtractError;

/// A class's presence in one 30-minute slot on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingTime {
    /// Building code, e.g. "SERF".
    pub building: String,
    /// Day letter, one of M, T, W, R, F.
    pub day: char,
    /// Room designation; multi-token rooms are joined with '-'.
    pub room: String,
    /// Slot start, in minutes since midnight.
    pub time: u32,
}

/// Scans a course page file for class meeting times.
///
/// Each line with a match is expanded into one record per (day, 30-minute
/// slot) pair covered by its time range: days in the order they are
/// written, then ascending time. Lines without a match are skipped. Source
/// handling follows the same contract as the course extractor: the path is
/// checked before any reading, and an open or read failure aborts the scan
/// with nothing returned.
pub fn parse_class(
    pattern: &ClassPattern,
    file_name: &Path,
) -> Result<Vec<MeetingTime>, ExtractError> {
    let reader = open_source(file_name)?;
    parse_class_from(pattern, reader)
}

/// Scans any line-oriented reader for class meeting times.
pub fn parse_class_from<R: BufRead>(
    pattern: &ClassPattern,
    reader: R,
) -> Result<Vec<MeetingTime>, ExtractError> {
    let mut times = Vec::new();

    for line in reader.lines() {
        let line = line?;

        if let Some(found) = pattern.regex().find(&line) {
            expand_meeting(found.as_str(), &mut times)?;
        }
    }

    Ok(times)
}

/// Decomposes one matched meeting block and appends its slot records.
///
/// The pattern guarantees the shape `DAYS hh:mm:ss - hh:mm:ss (BLDG room..)`;
/// any divergence from it is an internal inconsistency and aborts the scan
/// rather than mis-splitting silently.
fn expand_meeting(matched: &str, out: &mut Vec<MeetingTime>) -> Result<(), ExtractError> {
    // Separate the time block from the building/room suffix.
    let (time_block, location) = matched.split_once('(').ok_or_else(|| bad_shape(matched))?;
    let location = location.strip_suffix(')').ok_or_else(|| bad_shape(matched))?;

    // First location token is the building; the rest name the room.
    let mut location_tokens = location.split_whitespace();
    let building = location_tokens.next().ok_or_else(|| bad_shape(matched))?;
    let room = location_tokens.collect::<Vec<_>>().join("-");

    // The time block carries exactly four tokens: days, start, separator
    // (discarded), end.
    let time_tokens: Vec<&str> = time_block.split_whitespace().collect();
    let (days, start, end) = match time_tokens.as_slice() {
        [days, start, _, end] => (*days, *start, *end),
        _ => return Err(bad_shape(matched)),
    };

    let slots = expand_slots(start, end)?;

    for day in days.chars() {
        for &time in &slots {
            out.push(MeetingTime {
                building: building.to_string(),
                day,
                room: room.clone(),
                time,
            });
        }
    }

    Ok(())
}

fn bad_shape(matched: &str) -> ExtractError {
    ExtractError::MalformedMatch(format!("Class match '{}' has unexpected shape", matched))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::init_patterns;
    use std::io::{Cursor, Write};

    fn meeting(building: &str, day: char, room: &str, time: u32) -> MeetingTime {
        MeetingTime {
            building: building.to_string(),
            day,
            room: room.to_string(),
            time,
        }
    }

    #[test]
    fn one_record_per_day_in_written_order() {
        let (_, pattern) = init_patterns();
        let input = Cursor::new("<td>MWF 09:00:00 - 09:30:00 (SERF 1234)</td>\n");

        let times = parse_class_from(&pattern, input).unwrap();

        assert_eq!(
            times,
            vec![
                meeting("SERF", 'M', "1234", 540),
                meeting("SERF", 'W', "1234", 540),
                meeting("SERF", 'F', "1234", 540),
            ]
        );
    }

    #[test]
    fn slots_ascend_within_each_day() {
        let (_, pattern) = init_patterns();
        let input = Cursor::new("TR 09:00:00 - 10:00:00 (EH 2317)\n");

        let times = parse_class_from(&pattern, input).unwrap();

        assert_eq!(
            times,
            vec![
                meeting("EH", 'T', "2317", 540),
                meeting("EH", 'T', "2317", 570),
                meeting("EH", 'R', "2317", 540),
                meeting("EH", 'R', "2317", 570),
            ]
        );
    }

    #[test]
    fn multi_token_rooms_are_hyphen_joined() {
        let (_, pattern) = init_patterns();
        let input = Cursor::new("M 13:00:00 - 13:30:00 (SERF 1234 A)\n");

        let times = parse_class_from(&pattern, input).unwrap();

        assert_eq!(times, vec![meeting("SERF", 'M', "1234-A", 780)]);
    }

    #[test]
    fn lines_without_a_meeting_are_skipped() {
        let (_, pattern) = init_patterns();
        let input = Cursor::new("<tr><td>Lecture</td></tr>\nonline only\n");

        let times = parse_class_from(&pattern, input).unwrap();

        assert!(times.is_empty(), "Expected no matches: {:?}", times);
    }

    #[test]
    fn reversed_range_produces_no_records() {
        // Lexically-reversed ranges expand to nothing; no midnight wrap.
        let (_, pattern) = init_patterns();
        let input = Cursor::new("W 22:00:00 - 01:00:00 (AH 105)\n");

        let times = parse_class_from(&pattern, input).unwrap();

        assert!(times.is_empty(), "Expected no records: {:?}", times);
    }

    #[test]
    fn line_order_is_preserved_across_matches() {
        let (_, pattern) = init_patterns();
        let input = Cursor::new(
            "F 08:00:00 - 08:30:00 (CS 1240)\nM 08:00:00 - 08:30:00 (CS 1240)\n",
        );

        let times = parse_class_from(&pattern, input).unwrap();

        assert_eq!(
            times,
            vec![meeting("CS", 'F', "1240", 480), meeting("CS", 'M', "1240", 480)]
        );
    }

    #[test]
    fn reads_meetings_from_a_file() {
        let (_, pattern) = init_patterns();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "<p>TR 11:00:00 - 11:30:00 (ME 1152)</p>").unwrap();

        let times = parse_class(&pattern, file.path()).unwrap();

        assert_eq!(
            times,
            vec![meeting("ME", 'T', "1152", 660), meeting("ME", 'R', "1152", 660)]
        );
    }

    #[test]
    fn missing_file_is_an_invalid_source() {
        let (_, pattern) = init_patterns();

        let err = parse_class(&pattern, Path::new("/no/such/page.html")).unwrap_err();

        assert!(matches!(err, ExtractError::InvalidSource(_)), "got {:?}", err);
    }
}
