pub mod activity;
pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod csv_export;
pub mod error;
pub mod filter;
pub mod notify;
pub mod progress;
pub mod utils;
pub mod view;

pub use app::GenesisDashboard;
pub use config::DashboardConfig;
pub use controller::DashboardController;
pub use error::DashboardError;
