//! Saved-filters persistence.
//!
//! The last applied rower-list filters are kept in a small JSON file in
//! the config directory and re-applied with `list --saved`.

use super::Config;
use crate::errors::AppResult;
use crate::models::filters::Filters;
use std::fs;
use std::path::PathBuf;

pub fn filters_file() -> PathBuf {
    Config::config_dir().join("filters.json")
}

/// Load the saved filters; a missing or unreadable file means no
/// constraints, never an error.
pub fn load_saved() -> Filters {
    let path = filters_file();
    if !path.exists() {
        return Filters::default();
    }

    fs::read_to_string(&path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save(filters: &Filters) -> AppResult<()> {
    let dir = Config::config_dir();
    fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(filters)?;
    fs::write(filters_file(), json)?;
    Ok(())
}
