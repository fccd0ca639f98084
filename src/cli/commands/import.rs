use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::record::TestRecord;
use crate::store::JsonStore;
use crate::ui::messages;
use std::fs;

/// Import a JSON array of test records (the store's wire format) into
/// the local collection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, replace } = cmd {
        let raw = fs::read_to_string(file)?;
        let incoming: Vec<TestRecord> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Store(format!("{} is not a valid results file: {}", file, e)))?;

        let total = incoming.len();
        let mut store = JsonStore::new(&cfg.results_file);
        let added = store.import(incoming, *replace)?;

        if *replace {
            messages::success(format!("Imported {} results (collection replaced).", added));
        } else {
            messages::success(format!(
                "Imported {} new results ({} already present).",
                added,
                total - added
            ));
        }
    }
    Ok(())
}
