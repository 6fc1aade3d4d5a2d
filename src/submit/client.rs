//! HTTP client for posting the onboarding form
//!
//! One JSON `POST` per submission. Any 2xx status is a success; network
//! failures and every other status are reported as [`SubmissionError`].

use super::traits::SubmissionChannel;
use crate::state::FormState;
use async_trait::async_trait;

/// Default submission endpoint
pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users";

/// Successful response from the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub status: u16,
    pub body: String,
}

/// Failure of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
}

/// Submission channel backed by `reqwest`
pub struct HttpSubmissionChannel {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionChannel {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpSubmissionChannel {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl SubmissionChannel for HttpSubmissionChannel {
    async fn submit(&self, form: &FormState) -> Result<SubmitReceipt, SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Failed to read response body ({}): {}", status, e);
                String::new()
            }
        };

        if status.is_success() {
            Ok(SubmitReceipt {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return its URL
    async fn serve_once(status_line: &str, body: &str) -> String {
        serve_raw(format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ))
        .await
    }

    async fn serve_raw(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            // Headers, then the JSON body named by Content-Length
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/api/users")
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(end) = text.find("\r\n\r\n") else {
            return false;
        };
        let length = text[..end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        request.len() >= end + 4 + length
    }

    /// Channel that talks to the local server directly, ignoring any proxy settings
    fn local(endpoint: String) -> HttpSubmissionChannel {
        HttpSubmissionChannel {
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
            endpoint,
        }
    }

    fn ann() -> FormState {
        FormState {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "secret1".to_string(),
            terms: true,
        }
    }

    #[test]
    fn test_default_endpoint() {
        let channel = HttpSubmissionChannel::default();
        assert_eq!(channel.endpoint(), "https://reqres.in/api/users");
    }

    #[test]
    fn test_custom_endpoint() {
        let channel = HttpSubmissionChannel::new("http://localhost:8080/users");
        assert_eq!(channel.endpoint(), "http://localhost:8080/users");
    }

    #[test]
    fn test_error_display() {
        let err = SubmissionError::Status {
            status: 500,
            body: "oops".to_string(),
        };
        assert_eq!(err.to_string(), "server responded with 500: oops");
        let err = SubmissionError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[tokio::test]
    async fn test_created_is_success() {
        let url = serve_once("201 Created", r#"{"id":"7"}"#).await;
        let result = local(url).submit(&ann()).await;
        assert_eq!(
            result,
            Ok(SubmitReceipt {
                status: 201,
                body: r#"{"id":"7"}"#.to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let url = serve_once("500 Internal Server Error", "oops").await;
        let result = local(url).submit(&ann()).await;
        assert_eq!(
            result,
            Err(SubmissionError::Status {
                status: 500,
                body: "oops".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_client_error_is_status_error() {
        let url = serve_once("400 Bad Request", "").await;
        let result = local(url).submit(&ann()).await;
        assert!(matches!(
            result,
            Err(SubmissionError::Status { status: 400, .. })
        ));
    }

    #[tokio::test]
    async fn test_truncated_body_is_read_as_empty() {
        // Promises 10 bytes, sends 2, then closes
        let url = serve_raw(
            "HTTP/1.1 201 Created\r\nContent-Length: 10\r\nConnection: close\r\n\r\nok"
                .to_string(),
        )
        .await;
        let result = local(url).submit(&ann()).await;
        assert_eq!(
            result,
            Ok(SubmitReceipt {
                status: 201,
                body: String::new(),
            })
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        // Nothing listens on port 1
        let channel = HttpSubmissionChannel::new("http://127.0.0.1:1/users");
        let result = channel.submit(&FormState::default()).await;
        assert!(result.is_err());
    }
}
