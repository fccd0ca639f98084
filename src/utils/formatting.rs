//! Formatting helpers for CLI output.

use crate::core::codec::NO_TIME;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Optional text field for display: the value, or the placeholder dash.
pub fn or_dash(opt: Option<&str>) -> String {
    match opt {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => NO_TIME.to_string(),
    }
}
