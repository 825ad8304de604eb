//! Command line and environment configuration.

use crate::csv_export::CsvQuoting;
use crate::view::PageKind;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "Desktop dashboard for the Genesis QA test-case generator")]
pub struct DashboardConfig {
    /// Base url of the Genesis QA backend.
    #[arg(long, env = "GENESIS_QA_SERVER", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Directory the CSV export is written to.
    #[arg(long, env = "GENESIS_QA_DOWNLOAD_DIR", default_value = ".")]
    pub download_dir: PathBuf,

    /// How fields are quoted in the CSV export.
    #[arg(long, value_enum, default_value_t = CsvQuoting::Legacy)]
    pub csv_quoting: CsvQuoting,

    /// Tab shown when the window opens.
    #[arg(long, value_enum, default_value_t = PageKind::Dashboard)]
    pub start_page: PageKind,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            download_dir: PathBuf::from("."),
            csv_quoting: CsvQuoting::default(),
            start_page: PageKind::Dashboard,
        }
    }
}
