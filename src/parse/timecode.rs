//! Timecode extraction
//!
//! Device exports stamp each row with an `HH:MM:SS[.mmm]` time, sometimes
//! wrapped in unit markers or other non-time characters. Extraction strips
//! everything but digits, colons and periods, then scans for the first
//! position where a time pattern matches.

use chrono::NaiveTime;

/// Extract an `HH:MM:SS[.mmm]` time from a raw field.
///
/// Returns `None` when no time pattern is present or the matched components
/// are out of range. Fractional seconds beyond millisecond precision are
/// truncated.
pub fn parse_timecode(raw: &str) -> Option<NaiveTime> {
    let cleaned: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ':' || *c == '.')
        .collect();

    (0..cleaned.len()).find_map(|start| match_time(&cleaned, start))
}

fn match_time(chars: &[char], start: usize) -> Option<NaiveTime> {
    let mut pos = start;
    let hours = take_number(chars, &mut pos)?;
    expect(chars, &mut pos, ':')?;
    let minutes = take_number(chars, &mut pos)?;
    expect(chars, &mut pos, ':')?;
    let seconds = take_number(chars, &mut pos)?;

    let millis = if chars.get(pos) == Some(&'.') {
        pos += 1;
        take_millis(chars, &mut pos).unwrap_or(0)
    } else {
        0
    };

    NaiveTime::from_hms_milli_opt(hours, minutes, seconds, millis)
}

/// Consume one or more digits as a number, capped to keep arithmetic safe.
fn take_number(chars: &[char], pos: &mut usize) -> Option<u32> {
    let mut value: u32 = 0;
    let mut consumed = false;

    while let Some(c) = chars.get(*pos) {
        let Some(digit) = c.to_digit(10) else { break };
        value = value.saturating_mul(10).saturating_add(digit);
        *pos += 1;
        consumed = true;
    }

    consumed.then_some(value)
}

/// Consume a fractional-seconds run, right-padded to milliseconds
/// ("5" reads as 500 ms); digits past the third are truncated.
fn take_millis(chars: &[char], pos: &mut usize) -> Option<u32> {
    let mut digits = String::new();

    while let Some(c) = chars.get(*pos) {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(*c);
        *pos += 1;
    }

    if digits.is_empty() {
        return None;
    }

    digits.truncate(3);
    while digits.len() < 3 {
        digits.push('0');
    }
    digits.parse().ok()
}

fn expect(chars: &[char], pos: &mut usize, wanted: char) -> Option<()> {
    if chars.get(*pos) == Some(&wanted) {
        *pos += 1;
        Some(())
    } else {
        None
    }
}
