//! Result aggregation: unique rowers, filtered subsets, best times,
//! per-rower history and trend series.
//!
//! Every function here is a pure scan over the caller-supplied records;
//! re-running with the same inputs yields the same output.

use crate::models::filters::Filters;
use crate::models::record::TestRecord;
use crate::models::rower::RowerSummary;
use crate::models::test_type::TestType;
use crate::utils::collate;
use std::collections::HashMap;

/// Canonical seconds for a record (`time_seconds` if finite, else parsed
/// from `time`).
pub fn effective_seconds(record: &TestRecord) -> Option<f64> {
    record.effective_seconds()
}

/// One summary per distinct rower name, sorted by Czech collation.
///
/// `club`/`category` keep the first-encountered values for the name;
/// later records with the same name never override them.
pub fn unique_rowers(records: &[TestRecord]) -> Vec<RowerSummary> {
    let mut by_name: HashMap<&str, RowerSummary> = HashMap::new();

    for r in records {
        by_name
            .entry(r.name.as_str())
            .and_modify(|s| s.test_count += 1)
            .or_insert_with(|| RowerSummary {
                name: r.name.clone(),
                club: r.club.clone(),
                category: r.category.clone(),
                test_count: 1,
            });
    }

    let mut rowers: Vec<RowerSummary> = by_name.into_values().collect();
    rowers.sort_by(|a, b| collate::cmp_czech(&a.name, &b.name));
    rowers
}

/// Subset of `records` satisfying every active constraint in `filters`.
pub fn filter_results(records: &[TestRecord], filters: &Filters) -> Vec<TestRecord> {
    records
        .iter()
        .filter(|r| matches(r, filters))
        .cloned()
        .collect()
}

fn matches(r: &TestRecord, f: &Filters) -> bool {
    if !f.category.is_empty() && r.category.as_deref() != Some(f.category.as_str()) {
        return false;
    }
    if !f.test_type.is_empty() && r.test_type.as_str() != f.test_type {
        return false;
    }
    if !f.season.is_empty() {
        // Season is a date prefix (year or year-month); dateless records
        // are excluded while a season filter is active.
        match &r.date {
            Some(d) if d.starts_with(&f.season) => {}
            _ => return false,
        }
    }
    if !f.name.is_empty() {
        let needle = f.name.to_lowercase();
        if !r.name.to_lowercase().contains(&needle) {
            return false;
        }
    }
    true
}

/// The fastest resolvable test of the given type.
///
/// The first record with a resolvable time seeds the best; each later
/// record replaces it only with strictly smaller seconds, so ties keep
/// the earlier record. Records without a resolvable time never win.
pub fn best_record<'a>(records: &'a [TestRecord], test_type: &TestType) -> Option<&'a TestRecord> {
    let mut best: Option<(&TestRecord, f64)> = None;

    for r in records.iter().filter(|r| &r.test_type == test_type) {
        let Some(sec) = r.effective_seconds() else {
            continue;
        };
        match best {
            Some((_, b)) if sec >= b => {}
            _ => best = Some((r, sec)),
        }
    }

    best.map(|(r, _)| r)
}

/// Best time in seconds for the given type, if any record resolves.
pub fn best_seconds(records: &[TestRecord], test_type: &TestType) -> Option<f64> {
    best_record(records, test_type).and_then(|r| r.effective_seconds())
}

/// All records for `name`, sorted ascending by date.
///
/// Missing dates compare as the empty string, so they sort before every
/// dated record; the sort is stable.
pub fn history(records: &[TestRecord], name: &str) -> Vec<TestRecord> {
    let mut tests: Vec<TestRecord> = records.iter().filter(|r| r.name == name).cloned().collect();
    tests.sort_by(|a, b| a.date_str().cmp(b.date_str()));
    tests
}

/// The most recent test of a date-sorted history.
pub fn last_test(history: &[TestRecord]) -> Option<&TestRecord> {
    history.last()
}

/// `(date, seconds)` points for one test type, in history order.
///
/// Records without a resolvable time are skipped; while `season` is set,
/// only dated records matching the prefix contribute. Dateless records
/// carry an empty label.
pub fn trend_series(
    history: &[TestRecord],
    test_type: &TestType,
    season: Option<&str>,
) -> Vec<(String, f64)> {
    let mut points = Vec::new();

    for r in history {
        if &r.test_type != test_type {
            continue;
        }
        if let Some(prefix) = season {
            match &r.date {
                Some(d) if d.starts_with(prefix) => {}
                _ => continue,
            }
        }
        let Some(sec) = r.effective_seconds() else {
            continue;
        };
        points.push((r.date.clone().unwrap_or_default(), sec));
    }

    points
}
