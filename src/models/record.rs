use super::test_type::TestType;
use crate::core::codec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One rowing performance test, in the wire shape of the results store.
///
/// Field names are camelCase on the wire (`testType`, `timeSeconds`).
/// Unknown fields round-trip through `extra` untouched; the store may add
/// columns at any time and the collection must not drop them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    /// Assigned by the store; absent on records not yet persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Rower display name; identity key for grouping.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub test_type: TestType,

    /// ISO-ordered "YYYY-MM-DD"; lexicographic compare is chronological.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Human-entered duration, e.g. "6:45,3".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Canonical seconds; derivable from `time` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_seconds: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TestRecord {
    /// Canonical duration of this test: `time_seconds` when present and
    /// finite, otherwise parsed from `time`. `None` means "no time": such
    /// a record never wins a best-time comparison.
    pub fn effective_seconds(&self) -> Option<f64> {
        self.time_seconds
            .filter(|s| s.is_finite())
            .or_else(|| self.time.as_deref().and_then(codec::parse_time_to_seconds))
    }

    /// Display string for the recorded time: the original notation when
    /// the rower entered one, otherwise the formatted canonical seconds.
    pub fn time_display(&self) -> String {
        match &self.time {
            Some(t) if !t.is_empty() => t.clone(),
            _ => codec::format_seconds(self.time_seconds),
        }
    }

    pub fn date_str(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }
}
