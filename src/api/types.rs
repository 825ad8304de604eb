use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A generated test case as served by `/api/test_cases`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub expected_result: String,
    #[serde(default)]
    pub compliance_tags: Vec<String>,
    pub created_date: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub requirement_id: Option<String>,
}

/// One entry of `/api/upload_status`. Only `processed` is relied upon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadStatusEntry {
    #[serde(default)]
    pub processed: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub requirements_count: Option<u64>,
    #[serde(default)]
    pub test_cases_count: Option<u64>,
}

/// Body returned by `POST /upload_file`.
///
/// Validation failures come back as `{"error": "..."}` without a `success`
/// field, so `success` defaults to false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub requirements_count: Option<u64>,
    #[serde(default)]
    pub test_cases_count: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
}

/// A file picked by the user, not yet read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}
