use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codec;
use crate::errors::{AppError, AppResult};
use crate::models::record::TestRecord;
use crate::models::test_type::TestType;
use crate::store::{JsonStore, ResultStore};
use crate::ui::messages;
use crate::utils::date;
use serde_json::Map;

/// Record a new test result.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        test_type,
        date: date_arg,
        time,
        club,
        category,
        note,
    } = cmd
    {
        //
        // 1. Validate the date (mandatory, YYYY-MM-DD)
        //
        let d = date::parse_date(date_arg)
            .ok_or_else(|| AppError::InvalidDate(date_arg.to_string()))?;

        //
        // 2. Validate the time through the codec
        //
        let seconds = codec::parse_time_to_seconds(time).ok_or_else(|| {
            AppError::InvalidTime(format!(
                "'{}' (use M:SS, MM:SS or H:MM:SS, decimals with a comma)",
                time
            ))
        })?;

        //
        // 3. Resolve the test type (flag or configured default)
        //
        let test_type = TestType::from(
            test_type
                .as_deref()
                .unwrap_or(cfg.default_test_type.as_str()),
        );

        //
        // 4. Inherit club/category from the rower's first known record
        //    when not given explicitly
        //
        let mut store = JsonStore::new(&cfg.results_file);
        let all = store.load_all()?;
        let known = all.iter().find(|r| r.name == *name);

        let club = club
            .clone()
            .or_else(|| known.and_then(|r| r.club.clone()));
        let category = category
            .clone()
            .or_else(|| known.and_then(|r| r.category.clone()));

        //
        // 5. Create through the store (assigns the id)
        //
        let record = TestRecord {
            id: None,
            name: name.clone(),
            club,
            category,
            test_type,
            date: Some(d.format("%Y-%m-%d").to_string()),
            time: Some(time.clone()),
            time_seconds: Some(seconds),
            note: note.clone().filter(|n| !n.is_empty()),
            extra: Map::new(),
        };

        let created = store.create(record)?;

        messages::success(format!(
            "Test saved for {} ({} on {}, id {}).",
            created.name,
            created.test_type,
            created.date_str(),
            created.id.as_deref().unwrap_or("?"),
        ));
    }
    Ok(())
}
