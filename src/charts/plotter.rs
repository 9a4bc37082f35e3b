//! Chart Plotter Module
//! Draws the jobs-per-year line chart with egui_plot.

use crate::aggregate::YearSummary;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Series color for the jobs line.
pub const LINE_COLOR: Color32 = Color32::from_rgb(56, 189, 248);

/// Creates the dashboard chart using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw total jobs per year as a line series.
    ///
    /// Points follow the current table order, so re-sorting the table also
    /// re-orders the line path.
    pub fn draw_jobs_line(ui: &mut egui::Ui, rows: &[YearSummary]) {
        let points: PlotPoints = rows
            .iter()
            .map(|row| [row.year as f64, row.total_jobs as f64])
            .collect();

        Plot::new("jobs_per_year")
            .height(300.0)
            .x_axis_label("Year")
            .y_axis_label("Number of Jobs")
            .allow_scroll(false)
            .legend(Legend::default())
            // Years are integers; suppress the fractional grid labels.
            .x_axis_formatter(|mark, _range| {
                let year = mark.value.round();
                if (mark.value - year).abs() < 1e-6 {
                    format!("{year:.0}")
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(points)
                        .color(LINE_COLOR)
                        .width(3.0)
                        .name("Total Jobs"),
                );
            });
    }
}
