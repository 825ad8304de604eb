//! CSV export of the test-case list.

use crate::api::TestCase;
use crate::error::DashboardError;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

pub const CSV_FILE_NAME: &str = "genesis_qa_test_cases.csv";

pub const CSV_HEADERS: [&str; 7] = [
    "ID",
    "Title",
    "Description",
    "Priority",
    "Expected Result",
    "Compliance Tags",
    "Created Date",
];

const TAG_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CsvQuoting {
    /// Wrap every field in quotes and leave embedded quotes untouched.
    #[default]
    Legacy,
    /// Wrap every field in quotes and double embedded quotes.
    Rfc4180,
}

impl CsvQuoting {
    fn quote(self, field: &str) -> String {
        match self {
            Self::Legacy => format!("\"{}\"", field),
            Self::Rfc4180 => format!("\"{}\"", field.replace('"', "\"\"")),
        }
    }
}

fn row(case: &TestCase) -> [String; 7] {
    [
        case.id.clone(),
        case.title.clone(),
        case.description.clone(),
        case.priority.clone(),
        case.expected_result.clone(),
        case.compliance_tags.join(TAG_SEPARATOR),
        case.created_date.clone(),
    ]
}

/// Header line plus one line per case, joined with `\n` and no trailing
/// newline.
pub fn generate_csv(cases: &[TestCase], quoting: CsvQuoting) -> String {
    let header = CSV_HEADERS
        .iter()
        .map(|h| quoting.quote(h))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(cases.len() + 1);
    lines.push(header);
    for case in cases {
        lines.push(
            row(case)
                .iter()
                .map(|field| quoting.quote(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Writes the export into `dir` under [`CSV_FILE_NAME`], replacing any
/// previous export.
pub async fn write_csv(dir: &Path, content: &str) -> Result<PathBuf, DashboardError> {
    let path = dir.join(CSV_FILE_NAME);
    let write_err = |source| DashboardError::WriteFile {
        path: path.clone(),
        source,
    };

    tokio::fs::create_dir_all(dir).await.map_err(write_err)?;
    tokio::fs::write(&path, content).await.map_err(write_err)?;
    Ok(path)
}
