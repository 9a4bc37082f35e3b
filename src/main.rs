//! Salary Dashboard - ML engineer salaries (2020-2024)
//!
//! Loads a static CSV of salary records at startup, shows jobs-per-year as a
//! line chart and a sortable table, and drills into per-year job titles on
//! row click.

mod aggregate;
mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::DashboardApp;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> eframe::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 820.0])
            .with_min_inner_size([760.0, 600.0])
            .with_title("Salary Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Salary Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
