use super::ResultStore;
use crate::core::codec;
use crate::errors::{AppError, AppResult};
use crate::models::record::TestRecord;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// File-backed results store: a pretty-printed JSON array of records.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the store file as an empty collection if it does not exist.
    pub fn init(&self) -> AppResult<()> {
        if !self.path.exists() {
            self.write(&[])?;
        }
        Ok(())
    }

    /// Bulk-add records obtained from the remote API's JSON.
    ///
    /// With `replace` the collection is rebuilt from the incoming
    /// records; otherwise incoming ids already present are skipped.
    /// Returns the number of records added.
    pub fn import(&mut self, incoming: Vec<TestRecord>, replace: bool) -> AppResult<usize> {
        let mut records = if replace { Vec::new() } else { self.read()? };
        let existing: HashSet<&str> = records.iter().filter_map(|r| r.id.as_deref()).collect();

        let mut added = Vec::new();
        for mut r in incoming {
            if let Some(id) = &r.id
                && existing.contains(id.as_str())
            {
                continue;
            }
            normalize(&mut r);
            added.push(r);
        }

        let count = added.len();
        records.extend(added);
        self.write(&records)?;
        Ok(count)
    }

    fn read(&self) -> AppResult<Vec<TestRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<TestRecord> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Store(format!("{} is not a valid results file: {}", self.path.display(), e))
        })?;
        Ok(records)
    }

    fn write(&self, records: &[TestRecord]) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Next id: max existing numeric id + 1, mirroring spreadsheet rows.
    fn next_id(records: &[TestRecord]) -> String {
        let max = records
            .iter()
            .filter_map(|r| r.id.as_deref()?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }
}

/// Fill in `time_seconds` from `time` when the store did not provide it.
fn normalize(record: &mut TestRecord) {
    if record.time_seconds.is_none_or(|s| !s.is_finite()) {
        record.time_seconds = record
            .time
            .as_deref()
            .and_then(codec::parse_time_to_seconds);
    }
}

impl ResultStore for JsonStore {
    fn load_all(&self) -> AppResult<Vec<TestRecord>> {
        let mut records = self.read()?;
        for r in &mut records {
            normalize(r);
        }
        Ok(records)
    }

    fn create(&mut self, mut record: TestRecord) -> AppResult<TestRecord> {
        let mut records = self.read()?;

        record.id = Some(Self::next_id(&records));
        normalize(&mut record);

        records.push(record.clone());
        self.write(&records)?;
        Ok(record)
    }
}
