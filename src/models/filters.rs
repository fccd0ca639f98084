use serde::{Deserialize, Serialize};

/// Filter state for the rower list, persisted between runs.
///
/// Empty string = unconstrained, so a round-trip through the saved-filters
/// file keeps the exact shape the user last applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Filters {
    pub category: String,
    pub test_type: String,
    pub season: String,
    pub name: String,
}

impl Filters {
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_empty()
            && self.test_type.is_empty()
            && self.season.is_empty()
            && self.name.is_empty()
    }
}
