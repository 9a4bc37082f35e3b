//! Summary Table Widget
//! Sortable per-year table; header clicks sort, row clicks select a year.

use crate::aggregate::{SortDirection, SortKey, TableSorter, YearSummary};
use egui::RichText;

const HEADERS: [(&str, SortKey); 3] = [
    ("Year", SortKey::Year),
    ("Number of Jobs", SortKey::TotalJobs),
    ("Average Salary (USD)", SortKey::AverageSalary),
];

/// Actions triggered by the summary table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryTableAction {
    None,
    Sort(SortKey),
    SelectYear(i32),
}

/// Draws the sortable yearly summary table.
pub struct SummaryTable;

impl SummaryTable {
    pub fn show(
        ui: &mut egui::Ui,
        rows: &[YearSummary],
        sorter: &TableSorter,
        selected_year: Option<i32>,
    ) -> SummaryTableAction {
        let mut action = SummaryTableAction::None;

        egui::Grid::new("year_summary_table")
            .striped(true)
            .num_columns(HEADERS.len())
            .min_col_width(140.0)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for (label, key) in HEADERS {
                    let marker = if sorter.key() == Some(key) {
                        match sorter.direction() {
                            SortDirection::Ascending => " ▲",
                            SortDirection::Descending => " ▼",
                        }
                    } else {
                        ""
                    };

                    let header = egui::Button::new(
                        RichText::new(format!("{label}{marker}")).strong().size(13.0),
                    )
                    .frame(false);
                    if ui.add(header).clicked() {
                        action = SummaryTableAction::Sort(key);
                    }
                }
                ui.end_row();

                for row in rows {
                    let selected = selected_year == Some(row.year);
                    let cells = [
                        row.year.to_string(),
                        row.total_jobs.to_string(),
                        row.average_salary.clone(),
                    ];
                    for cell in cells {
                        if ui
                            .selectable_label(selected, RichText::new(cell).size(12.0))
                            .clicked()
                        {
                            action = SummaryTableAction::SelectYear(row.year);
                        }
                    }
                    ui.end_row();
                }
            });

        if rows.is_empty() {
            ui.label(RichText::new("No data loaded").weak());
        }

        action
    }
}
