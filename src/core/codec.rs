//! Time codec: human time notations ⇄ canonical seconds.
//!
//! Accepted input: ":"-separated segments ("6:45,3", "1:02:03", "45"),
//! with "," as the decimal separator. Output formatting rounds to one
//! decisecond and keeps minutes undivided ("21:30", never "0:21:30").

/// Placeholder shown wherever a time is unknown.
pub const NO_TIME: &str = "–";

/// Parse a human time string into canonical seconds.
///
/// 1 segment → seconds, 2 → minutes:seconds, 3 → hours:minutes:seconds.
/// Anything else (empty input, an unparsable segment, 4+ segments, a
/// negative or non-finite result) is "no value", never an error.
pub fn parse_time_to_seconds(input: &str) -> Option<f64> {
    let cleaned = input.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    for segment in cleaned.split(':') {
        parts.push(segment.parse::<f64>().ok()?);
    }

    let seconds = match parts.as_slice() {
        [s] => *s,
        [m, s] => m * 60.0 + s,
        [h, m, s] => h * 3600.0 + m * 60.0 + s,
        _ => return None,
    };

    (seconds.is_finite() && seconds >= 0.0).then_some(seconds)
}

/// Format canonical seconds back into "M:SS" or "M:SS,d".
///
/// Rounds to one decisecond; the decimal digit is printed only when
/// non-zero. Unknown ("no value") or non-finite input renders as the
/// placeholder dash. Not a textual inverse of parsing: "6:45,30" comes
/// back as "6:45,3".
pub fn format_seconds(seconds: Option<f64>) -> String {
    let Some(sec) = seconds.filter(|s| s.is_finite() && *s >= 0.0) else {
        return NO_TIME.to_string();
    };

    // Integer deciseconds, so the ,9 → ,0 rounding carry cannot produce
    // a "60"-seconds column.
    let total_ds = (sec * 10.0).round() as i64;
    let minutes = total_ds / 600;
    let rem_ds = total_ds % 600;
    let whole_seconds = rem_ds / 10;
    let decile = rem_ds % 10;

    if decile != 0 {
        format!("{}:{:02},{}", minutes, whole_seconds, decile)
    } else {
        format!("{}:{:02}", minutes, whole_seconds)
    }
}
