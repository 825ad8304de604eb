use clap::Parser;
use eframe::CreationContext;
use genesis_qa_dashboard::{DashboardConfig, DashboardError, GenesisDashboard};

fn main() -> Result<(), DashboardError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::parse();
    log::debug!("Starting with {:?}", config);
    let app = GenesisDashboard::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Genesis QA Dashboard",
        options,
        Box::new(move |_cc: &CreationContext| Box::new(app)),
    )
    .map_err(|e| DashboardError::Ui(e.to_string()))
}
