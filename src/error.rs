//! Error handling for the dashboard client

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The request could not be sent or its body could not be read.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something that is not the expected JSON.
    #[error("invalid response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid server url '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("ui error: {0}")]
    Ui(String),
}

impl DashboardError {
    /// True when the failure happened before or during the exchange with the
    /// server, as opposed to a problem with the local filesystem.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Decode { .. })
    }
}
