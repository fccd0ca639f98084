use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{aggregate, codec};
use crate::errors::AppResult;
use crate::models::record::TestRecord;
use crate::models::test_type::TestType;
use crate::store::{JsonStore, ResultStore};
use crate::ui::messages;
use crate::utils::formatting::{bold, or_dash};
use crate::utils::table::{Column, Table};

/// Show one rower: club, category, best 2k/6k, last test, full history.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { name } = cmd {
        let store = JsonStore::new(&cfg.results_file);
        let all = store.load_all()?;
        let tests = aggregate::history(&all, name);

        if tests.is_empty() {
            messages::warning(format!("No tests recorded for {}.", name));
            return Ok(());
        }

        // Club/category come from the earliest record, matching the
        // first-wins rule of the rower summaries.
        let first = &tests[0];
        messages::header(&first.name);
        println!("Club     : {}", or_dash(first.club.as_deref()));
        println!("Category : {}", or_dash(first.category.as_deref()));
        println!(
            "Best 2k  : {}",
            codec::format_seconds(aggregate::best_seconds(&tests, &TestType::TwoK))
        );
        println!(
            "Best 6k  : {}",
            codec::format_seconds(aggregate::best_seconds(&tests, &TestType::SixK))
        );

        if let Some(last) = aggregate::last_test(&tests) {
            println!("Last test: {}", last_test_line(last));
        }

        println!("\n{}", bold("History"));
        print_history(&tests);
    }
    Ok(())
}

/// "date – type – time", dropping the date part when absent.
fn last_test_line(last: &TestRecord) -> String {
    match &last.date {
        Some(d) => format!("{} – {} – {}", d, last.test_type, last.time_display()),
        None => format!("{} – {}", last.test_type, last.time_display()),
    }
}

fn print_history(tests: &[TestRecord]) {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Type", 6),
        Column::new("Time", 10),
        Column::new("Note", 28),
    ]);

    for t in tests {
        table.add_row(vec![
            or_dash(t.date.as_deref()),
            t.test_type.as_str().to_string(),
            t.time_display(),
            t.note.clone().unwrap_or_default(),
        ]);
    }

    print!("{}", table.render());
}
