use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, filters as saved_filters};
use crate::core::aggregate;
use crate::errors::{AppError, AppResult};
use crate::models::filters::Filters;
use crate::models::record::TestRecord;
use crate::models::rower::RowerSummary;
use crate::store::{JsonStore, ResultStore};
use crate::ui::messages;
use crate::utils::date;
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, Table};

/// List rowers (or raw results) matching the active filters.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        category,
        test_type,
        season,
        name,
        saved,
        reset,
        results,
    } = cmd
    {
        let filters = resolve_filters(cli, category, test_type, season, name, *saved, *reset)?;

        let store = JsonStore::new(&cfg.results_file);
        let all = store.load_all()?;
        let filtered = aggregate::filter_results(&all, &filters);

        if *results {
            print_results(&filtered);
        } else {
            print_rowers(&aggregate::unique_rowers(&filtered));
        }
    }
    Ok(())
}

/// Resolve the filters for this run and keep the saved-filters file in
/// sync (the session memory of the dashboard this tool replaces).
fn resolve_filters(
    cli: &Cli,
    category: &Option<String>,
    test_type: &Option<String>,
    season: &Option<String>,
    name: &Option<String>,
    saved: bool,
    reset: bool,
) -> AppResult<Filters> {
    if saved {
        let filters = saved_filters::load_saved();
        if filters.is_unconstrained() {
            messages::info("No saved filters; listing everything.");
        }
        return Ok(filters);
    }

    let filters = if reset {
        Filters::default()
    } else {
        if let Some(s) = season
            && !date::is_valid_season(s)
        {
            return Err(AppError::InvalidSeason(format!(
                "'{}' (expected YYYY or YYYY-MM)",
                s
            )));
        }
        Filters {
            category: category.clone().unwrap_or_default(),
            test_type: test_type.clone().unwrap_or_default(),
            season: season.clone().unwrap_or_default(),
            name: name.clone().unwrap_or_default(),
        }
    };

    if !cli.test {
        saved_filters::save(&filters)?;
    }
    Ok(filters)
}

fn print_rowers(rowers: &[RowerSummary]) {
    if rowers.is_empty() {
        messages::warning("No rowers match the active filters.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Name", 24),
        Column::new("Club", 18),
        Column::new("Category", 10),
        Column::new("Tests", 5),
    ]);

    for r in rowers {
        table.add_row(vec![
            r.name.clone(),
            or_dash(r.club.as_deref()),
            or_dash(r.category.as_deref()),
            r.test_count.to_string(),
        ]);
    }

    print!("{}", table.render());
}

fn print_results(records: &[TestRecord]) {
    if records.is_empty() {
        messages::warning("No results match the active filters.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Name", 24),
        Column::new("Type", 6),
        Column::new("Time", 10),
        Column::new("Note", 24),
    ]);

    for r in records {
        table.add_row(vec![
            or_dash(r.date.as_deref()),
            r.name.clone(),
            r.test_type.as_str().to_string(),
            r.time_display(),
            r.note.clone().unwrap_or_default(),
        ]);
    }

    print!("{}", table.render());
}
