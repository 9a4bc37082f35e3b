//! Detail Table Widget
//! Job-title breakdown for the selected year, or a placeholder when no year
//! has been picked yet.

use crate::aggregate::JobTitleCount;
use egui::RichText;

/// Draws the per-year job-title drilldown.
pub struct JobTitleTable;

impl JobTitleTable {
    pub fn show(ui: &mut egui::Ui, selected_year: Option<i32>, rows: &[JobTitleCount]) {
        let Some(year) = selected_year else {
            ui.label(
                RichText::new(
                    "Select a year from the table above to view job titles and details.",
                )
                .weak(),
            );
            return;
        };

        ui.label(
            RichText::new(format!("Job Titles in {year}"))
                .strong()
                .size(15.0),
        );
        ui.add_space(6.0);

        if rows.is_empty() {
            ui.label(RichText::new(format!("No job titles recorded for {year}.")).weak());
            return;
        }

        egui::Grid::new("job_title_table")
            .striped(true)
            .num_columns(2)
            .min_col_width(180.0)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Job Title").strong().size(13.0));
                ui.label(RichText::new("Number of Jobs").strong().size(13.0));
                ui.end_row();

                for row in rows {
                    ui.label(RichText::new(&row.job_title).size(12.0));
                    ui.label(RichText::new(row.count.to_string()).size(12.0));
                    ui.end_row();
                }
            });
    }
}
