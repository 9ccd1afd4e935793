use crate::domain::error::ParseError;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// Textual form timestamps take in the `time` column, e.g.
/// `2006-01-02T15:04:05.999999999-07:00`. The fraction is optional and may
/// carry up to nanosecond precision; the numeric offset is mandatory.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Renders `ts` in UTC. Normalizing the offset keeps the textual column in
/// chronological order under plain string comparison.
pub fn format_timestamp<Tz: TimeZone>(ts: &DateTime<Tz>) -> String {
    ts.with_timezone(&Utc).format(TIMESTAMP_FORMAT).to_string()
}

/// Parses the fixed-width layout only. Every numeric field has exactly its
/// width, the fraction has 1 to 9 digits, and the offset is `[+-]hh:mm`.
pub fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let invalid = |reason: String| ParseError::Timestamp {
        input: text.to_string(),
        reason,
    };
    check_layout(text.as_bytes()).map_err(|reason| invalid(reason.to_string()))?;
    DateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|e| invalid(e.to_string()))
}

fn check_layout(b: &[u8]) -> Result<(), &'static str> {
    // YYYY-MM-DDTHH:MM:SS plus a six byte offset.
    if b.len() < 25 {
        return Err("too short for the timestamp layout");
    }
    for (i, sep) in [(4, b'-'), (7, b'-'), (10, b'T'), (13, b':'), (16, b':')] {
        if b[i] != sep {
            return Err("unexpected separator");
        }
    }
    if [0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15, 17, 18]
        .iter()
        .any(|&i| !b[i].is_ascii_digit())
    {
        return Err("date and time fields must be two or four digits");
    }

    let mut pos = 19;
    if b[pos] == b'.' {
        let digits = b[pos + 1..].iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 || digits > 9 {
            return Err("fraction must have 1 to 9 digits");
        }
        pos += 1 + digits;
    }

    match &b[pos..] {
        [sign, h1, h2, b':', m1, m2]
            if matches!(*sign, b'+' | b'-')
                && [h1, h2, m1, m2].iter().all(|c| c.is_ascii_digit()) =>
        {
            Ok(())
        }
        _ => Err("offset must be [+-]hh:mm"),
    }
}
