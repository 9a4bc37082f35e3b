//! GUI module - User interface components

mod app;
mod detail_table;
mod summary_table;

pub use app::DashboardApp;
pub use detail_table::JobTitleTable;
pub use summary_table::{SummaryTable, SummaryTableAction};
