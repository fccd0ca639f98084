use crate::models::record::TestRecord;
use csv::Writer;
use std::path::Path;

/// Write the records as CSV with the wire column names.
pub fn export_csv(records: &[TestRecord], path: &Path) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "club",
        "category",
        "testType",
        "date",
        "time",
        "timeSeconds",
        "note",
    ])?;

    for r in records {
        wtr.write_record(&[
            r.id.clone().unwrap_or_default(),
            r.name.clone(),
            r.club.clone().unwrap_or_default(),
            r.category.clone().unwrap_or_default(),
            r.test_type.as_str().to_string(),
            r.date.clone().unwrap_or_default(),
            r.time.clone().unwrap_or_default(),
            r.time_seconds.map(|s| s.to_string()).unwrap_or_default(),
            r.note.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
