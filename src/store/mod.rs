//! Results store boundary.
//!
//! The authoritative store in the field is a remote spreadsheet-backed
//! API; this crate talks to it only through the data contract below: the
//! full collection as a JSON array of records, and a create operation
//! that returns the stored record with its id populated. The shipped
//! backend is a local JSON file honoring the same contract.

mod json;

pub use json::JsonStore;

use crate::errors::AppResult;
use crate::models::record::TestRecord;

pub trait ResultStore {
    /// The full record collection.
    fn load_all(&self) -> AppResult<Vec<TestRecord>>;

    /// Persist a candidate record (no id) and return it with the id the
    /// store assigned. Callers append the returned record to their
    /// working collection without re-loading.
    fn create(&mut self, record: TestRecord) -> AppResult<TestRecord>;
}
