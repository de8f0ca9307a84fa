// src/extractors/times.rs

use crate::utils::error::ExtractError;

/// Width of one meeting slot, in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Expands a meeting time range into slot offsets in minutes since midnight.
///
/// Both times are "hh:mm:ss" strings; the seconds component is accepted but
/// ignored. Slots begin exactly at the start time and step by 30 minutes,
/// covering [start, end); a final partial slot is dropped. A range whose
/// end is not after its start expands to nothing; ranges are never wrapped
/// past midnight.
pub fn expand_slots(start: &str, end: &str) -> Result<Vec<u32>, ExtractError> {
    let start_minutes = minutes_of_day(start)?;
    let end_minutes = minutes_of_day(end)?;

    Ok((start_minutes..end_minutes)
        .step_by(SLOT_MINUTES as usize)
        .collect())
}

/// Parses "hh:mm:ss" into minutes since midnight, discarding seconds.
fn minutes_of_day(clock: &str) -> Result<u32, ExtractError> {
    let mut parts = clock.split(':');

    let (hours, minutes) = match (parts.next(), parts.next()) {
        (Some(h), Some(m)) => (h, m),
        _ => return Err(bad_time(clock)),
    };

    let hours: u32 = hours.parse().map_err(|_| bad_time(clock))?;
    let minutes: u32 = minutes.parse().map_err(|_| bad_time(clock))?;

    Ok(60 * hours + minutes)
}

fn bad_time(clock: &str) -> ExtractError {
    ExtractError::MalformedMatch(format!("Time token '{}' is not hh:mm:ss", clock))
}
