//! HTTP client for the Genesis QA backend.

use crate::api::types::{SelectedFile, TestCase, UploadResponse, UploadStatusEntry};
use crate::api::DashboardApi;
use crate::error::DashboardError;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

pub const TEST_CASES_ENDPOINT: &str = "/api/test_cases";
pub const UPLOAD_STATUS_ENDPOINT: &str = "/api/upload_status";
pub const UPLOAD_FILE_ENDPOINT: &str = "/upload_file";

/// Name of the multipart field the backend reads the document from.
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(server_url: &str) -> Result<Self, DashboardError> {
        Ok(Self {
            client: Client::new(),
            base_url: parse_server_url(server_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, DashboardError> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| DashboardError::InvalidServerUrl {
                url: format!("{}{}", self.base_url, endpoint),
                reason: e.to_string(),
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, DashboardError> {
        let url = self.endpoint_url(endpoint)?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| transport(endpoint, source))?;

        decode_body(endpoint, response).await
    }
}

/// Parses the server url and makes sure it ends with a slash so endpoints
/// join below it rather than replacing its last segment.
pub fn parse_server_url(server_url: &str) -> Result<Url, DashboardError> {
    let mut normalized = server_url.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    let url = Url::parse(&normalized).map_err(|e| DashboardError::InvalidServerUrl {
        url: server_url.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(DashboardError::InvalidServerUrl {
            url: server_url.to_string(),
            reason: "url cannot be used as a base".to_string(),
        });
    }

    Ok(url)
}

fn transport(endpoint: &str, source: reqwest::Error) -> DashboardError {
    DashboardError::Transport {
        endpoint: endpoint.to_string(),
        source,
    }
}

/// Reads the body regardless of status: the backend reports rejected uploads
/// with a 4xx status and a JSON body that still has to reach the user.
async fn decode_body<T: DeserializeOwned>(
    endpoint: &str,
    response: reqwest::Response,
) -> Result<T, DashboardError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|source| transport(endpoint, source))?;

    if !status.is_success() {
        log::debug!("{} answered with status {}", endpoint, status);
    }

    serde_json::from_slice(&bytes).map_err(|source| DashboardError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

#[async_trait::async_trait]
impl DashboardApi for HttpApi {
    async fn test_cases(&self) -> Result<Vec<TestCase>, DashboardError> {
        self.get_json(TEST_CASES_ENDPOINT).await
    }

    async fn upload_status(&self) -> Result<Vec<UploadStatusEntry>, DashboardError> {
        self.get_json(UPLOAD_STATUS_ENDPOINT).await
    }

    async fn upload_file(&self, file: SelectedFile) -> Result<UploadResponse, DashboardError> {
        let content = tokio::fs::read(&file.path)
            .await
            .map_err(|source| DashboardError::ReadFile {
                path: file.path.clone(),
                source,
            })?;

        let file_name = file.file_name();
        log::info!("Uploading '{}' ({} bytes)", file_name, content.len());

        let form = Form::new().part(UPLOAD_FIELD, Part::bytes(content).file_name(file_name));
        let url = self.endpoint_url(UPLOAD_FILE_ENDPOINT)?;

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| transport(UPLOAD_FILE_ENDPOINT, source))?;

        decode_body(UPLOAD_FILE_ENDPOINT, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one request with `status` and `body`; yields the raw request.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });

        (url, server)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            let Some(header_end) = text.find("\r\n\r\n") else {
                continue;
            };
            let content_length = text[..header_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok());
            let complete = match content_length {
                Some(len) => buf.len() >= header_end + 4 + len,
                None => text.ends_with("\r\n0\r\n\r\n"),
            };
            if complete {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn requirements_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "REQ-001: Patient data must be encrypted at rest.").unwrap();
        file
    }

    #[test]
    fn server_url_gets_trailing_slash() {
        let url = parse_server_url("http://localhost:5000/genesis").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/genesis/");
    }

    #[test]
    fn endpoints_join_below_the_server_path() {
        let api = HttpApi::new("http://localhost:5000/genesis").unwrap();
        let url = api.endpoint_url(TEST_CASES_ENDPOINT).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/genesis/api/test_cases");
    }

    #[test]
    fn rejects_unparseable_server_url() {
        let err = HttpApi::new("not a url").unwrap_err();
        assert!(matches!(err, DashboardError::InvalidServerUrl { .. }));
    }

    #[tokio::test]
    async fn missing_upload_file_is_a_read_error() {
        let api = HttpApi::new("http://127.0.0.1:9").unwrap();
        let err = api
            .upload_file(SelectedFile::new("/definitely/not/here.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::ReadFile { .. }));
    }

    #[tokio::test]
    async fn rejected_upload_decodes_as_unsuccessful_response() {
        let (url, server) = serve_once(
            "400 Bad Request",
            r#"{"error":"Only .txt files are supported in this demo"}"#,
        )
        .await;
        let file = requirements_file();

        let api = HttpApi::new(&url).unwrap();
        let response = api
            .upload_file(SelectedFile::new(file.path()))
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Only .txt files are supported in this demo")
        );

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /upload_file "));
        assert!(request.contains(r#"name="file""#));
        assert!(request.contains("REQ-001: Patient data must be encrypted at rest."));
    }

    #[tokio::test]
    async fn non_json_upload_answer_is_a_decode_error() {
        let (url, server) = serve_once("500 Internal Server Error", "<html>oops</html>").await;
        let file = requirements_file();

        let api = HttpApi::new(&url).unwrap();
        let err = api
            .upload_file(SelectedFile::new(file.path()))
            .await
            .unwrap_err();

        match err {
            DashboardError::Decode { endpoint, .. } => assert_eq!(endpoint, UPLOAD_FILE_ENDPOINT),
            other => panic!("expected a decode error, got {other:?}"),
        }
        server.await.unwrap();
    }
}
