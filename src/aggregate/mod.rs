//! Aggregation core - pure reducers over raw salary records.
//! No I/O and no UI types here; everything is a function of its input.

mod job_title;
mod sorter;
mod yearly;

pub use job_title::{count_job_titles, JobTitleCount};
pub use sorter::{SortDirection, SortKey, TableSorter};
pub use yearly::{summarize_by_year, YearSummary};
