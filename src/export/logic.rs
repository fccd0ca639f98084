use crate::config::Config;
use crate::core::aggregate;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::notify_export_success;
use crate::models::filters::Filters;
use crate::store::{JsonStore, ResultStore};
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered record collection.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `filters`: same four constraints as `list`
    pub fn export(
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        filters: &Filters,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let store = JsonStore::new(&cfg.results_file);
        let records = aggregate::filter_results(&store.load_all()?, filters);

        if records.is_empty() {
            warning("No results match the active filters; nothing exported.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
