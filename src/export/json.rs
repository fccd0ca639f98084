use crate::errors::AppResult;
use crate::models::record::TestRecord;
use std::path::Path;

/// Write the records as formatted JSON in the wire shape; unknown fields
/// carried in `extra` flow through.
pub fn export_json(records: &[TestRecord], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
