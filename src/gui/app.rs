//! Salary Dashboard Main Application
//! Owns all session state and wires the load/sort/select events together.

use crate::aggregate::{
    count_job_titles, summarize_by_year, JobTitleCount, SortKey, TableSorter, YearSummary,
};
use crate::charts::ChartPlotter;
use crate::data::{RawRecord, SalaryLoader};
use crate::gui::{JobTitleTable, SummaryTable, SummaryTableAction};
use egui::{Color32, RichText, ScrollArea};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use tracing::{error, info};

/// Fixed relative path the dashboard reads at startup.
const CSV_PATH: &str = "salaries.csv";

/// CSV loading result from the background thread
enum LoadResult {
    Complete {
        records: Vec<RawRecord>,
        summaries: Vec<YearSummary>,
    },
    Error(String),
}

/// Main application window.
pub struct DashboardApp {
    records: Vec<RawRecord>,
    table_rows: Vec<YearSummary>,
    sorter: TableSorter,
    selected_year: Option<i32>,
    job_titles: Vec<JobTitleCount>,

    // Async CSV loading (runs once, at startup)
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
    status: String,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let (tx, rx) = channel();

        // Load and aggregate off the UI thread; the result crosses back
        // over the channel and is picked up in update().
        thread::spawn(move || {
            let result = match Self::load_and_summarize(CSV_PATH) {
                Ok((records, summaries)) => LoadResult::Complete { records, summaries },
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });

        Self {
            records: Vec::new(),
            table_rows: Vec::new(),
            sorter: TableSorter::new(),
            selected_year: None,
            job_titles: Vec::new(),
            load_rx: Some(rx),
            is_loading: true,
            status: format!("Loading {CSV_PATH}..."),
        }
    }

    fn load_and_summarize(path: &str) -> anyhow::Result<(Vec<RawRecord>, Vec<YearSummary>)> {
        let records = SalaryLoader::load_csv(path)?;
        let summaries = summarize_by_year(&records);
        info!(
            rows = records.len(),
            years = summaries.len(),
            "loaded {path}"
        );
        Ok((records, summaries))
    }

    /// Check for the CSV loading result
    fn check_load_result(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete { records, summaries }) => {
                self.status = format!(
                    "{} rows loaded, {} years summarized",
                    records.len(),
                    summaries.len()
                );
                self.records = records;
                self.table_rows = summaries;
                self.is_loading = false;
            }
            Ok(LoadResult::Error(e)) => {
                // Downstream state stays empty; the UI degrades to an
                // empty chart and table rather than an error banner.
                error!("failed to load {CSV_PATH}: {e}");
                self.status = format!("Error: {e}");
                self.is_loading = false;
            }
            Err(TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(TryRecvError::Disconnected) => {
                error!("CSV loading thread exited without a result");
                self.status = "Error: loading thread exited unexpectedly".to_string();
                self.is_loading = false;
            }
        }
    }

    /// Re-order the table rows, flipping or resetting the sort direction.
    fn handle_sort(&mut self, key: SortKey) {
        self.table_rows = self.sorter.sort(&self.table_rows, key);
    }

    /// Recompute the job-title breakdown for the clicked year.
    fn handle_year_selected(&mut self, year: i32) {
        self.selected_year = Some(year);
        self.job_titles = count_job_titles(&self.records, year);
    }

    fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui);
            });
        ui.add_space(12.0);
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_result();
        if self.is_loading {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("Machine Learning Engineer Salaries (2020-2024)")
                            .size(20.0)
                            .strong(),
                    );

                    let status_color = if self.status.contains("Error") {
                        Color32::from_rgb(220, 53, 69)
                    } else {
                        Color32::GRAY
                    };
                    ui.label(RichText::new(&self.status).size(11.0).color(status_color));
                });
                ui.add_space(10.0);

                Self::card(ui, |ui| {
                    ChartPlotter::draw_jobs_line(ui, &self.table_rows);
                });

                let mut action = SummaryTableAction::None;
                Self::card(ui, |ui| {
                    action =
                        SummaryTable::show(ui, &self.table_rows, &self.sorter, self.selected_year);
                });
                match action {
                    SummaryTableAction::Sort(key) => self.handle_sort(key),
                    SummaryTableAction::SelectYear(year) => self.handle_year_selected(year),
                    SummaryTableAction::None => {}
                }

                Self::card(ui, |ui| {
                    JobTitleTable::show(ui, self.selected_year, &self.job_titles);
                });
            });
        });
    }
}
