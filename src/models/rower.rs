use serde::Serialize;

/// Derived per-rower summary, recomputed from the record collection on
/// every query and never persisted.
///
/// `club` and `category` carry the first-seen values for the name; later
/// records that disagree do not override them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RowerSummary {
    pub name: String,
    pub club: Option<String>,
    pub category: Option<String>,
    pub test_count: usize,
}
