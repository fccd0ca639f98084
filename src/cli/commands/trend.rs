use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{aggregate, codec};
use crate::errors::AppResult;
use crate::models::test_type::TestType;
use crate::store::{JsonStore, ResultStore};
use crate::ui::messages;
use crate::utils::date;

/// Print the (date, seconds) trend series for a rower, per test type.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trend {
        name,
        test_type,
        current_season,
    } = cmd
    {
        let store = JsonStore::new(&cfg.results_file);
        let all = store.load_all()?;
        let tests = aggregate::history(&all, name);

        if tests.is_empty() {
            messages::warning(format!("No tests recorded for {}.", name));
            return Ok(());
        }

        let season = current_season.then(date::current_season);

        let types: Vec<TestType> = match test_type {
            Some(t) => vec![TestType::from(t.as_str())],
            None => vec![TestType::TwoK, TestType::SixK],
        };

        for t in &types {
            let points = aggregate::trend_series(&tests, t, season.as_deref());
            if points.is_empty() {
                messages::info(format!("No {} results for {}.", t.label(), name));
                continue;
            }

            println!("{}", t.label());
            for (label, sec) in &points {
                println!(
                    "  {:10}  {:>8}  {:8.1}s",
                    if label.is_empty() { "–" } else { label.as_str() },
                    codec::format_seconds(Some(*sec)),
                    sec
                );
            }
        }
    }
    Ok(())
}
