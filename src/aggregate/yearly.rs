//! Yearly Aggregator Module
//! Single-pass grouping of raw records into per-year job counts and average
//! salaries.

use crate::data::RawRecord;
use std::collections::HashMap;

/// Inclusive year range a record must fall in to qualify.
pub const MIN_YEAR: i32 = 2020;
pub const MAX_YEAR: i32 = 2024;

/// Per-year summary row shown in the chart and the main table.
///
/// `average_salary` is kept as its display string, fixed to two fractional
/// digits. The sorter compares it in that form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSummary {
    pub year: i32,
    pub total_jobs: usize,
    pub average_salary: String,
}

struct YearAccum {
    total_jobs: usize,
    total_salary: f64,
}

/// Group records by year, counting jobs and summing salaries.
///
/// Rows whose year does not parse to an integer in [`MIN_YEAR`, `MAX_YEAR`]
/// or whose salary does not parse to a finite number are skipped silently.
/// Output order is first-occurrence order of the qualifying years.
pub fn summarize_by_year(records: &[RawRecord]) -> Vec<YearSummary> {
    let mut totals: HashMap<i32, YearAccum> = HashMap::new();
    let mut order: Vec<i32> = Vec::new();

    for record in records {
        let Some(year) = qualifying_year(&record.work_year) else {
            continue;
        };
        let Ok(salary) = record.salary_in_usd.trim().parse::<f64>() else {
            continue;
        };
        if !salary.is_finite() {
            continue;
        }

        let accum = totals.entry(year).or_insert_with(|| {
            order.push(year);
            YearAccum {
                total_jobs: 0,
                total_salary: 0.0,
            }
        });
        accum.total_jobs += 1;
        accum.total_salary += salary;
    }

    order
        .into_iter()
        .map(|year| {
            let accum = &totals[&year];
            YearSummary {
                year,
                total_jobs: accum.total_jobs,
                average_salary: format!(
                    "{:.2}",
                    accum.total_salary / accum.total_jobs as f64
                ),
            }
        })
        .collect()
}

fn qualifying_year(raw: &str) -> Option<i32> {
    let year = raw.trim().parse::<i32>().ok()?;
    (MIN_YEAR..=MAX_YEAR).contains(&year).then_some(year)
}
