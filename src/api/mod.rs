mod client;
mod types;

pub use client::{
    parse_server_url, HttpApi, TEST_CASES_ENDPOINT, UPLOAD_FILE_ENDPOINT, UPLOAD_STATUS_ENDPOINT,
};
pub use types::{SelectedFile, TestCase, UploadResponse, UploadStatusEntry};

use crate::error::DashboardError;
#[cfg(test)]
use mockall::automock;

/// The backend endpoints the dashboard consumes. Implemented over HTTP by
/// [`HttpApi`] and mocked in tests.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /api/test_cases`
    async fn test_cases(&self) -> Result<Vec<TestCase>, DashboardError>;

    /// `GET /api/upload_status`
    async fn upload_status(&self) -> Result<Vec<UploadStatusEntry>, DashboardError>;

    /// `POST /upload_file` with the file as multipart field `file`.
    async fn upload_file(&self, file: SelectedFile) -> Result<UploadResponse, DashboardError>;
}
