use crate::core::{BreedSource, BreedsPayload, ConfigProvider};
use crate::utils::error::{BreedError, Result};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::Client;
use std::error::Error as StdError;
use std::io::ErrorKind;

pub const DEFAULT_ENDPOINT: &str = "https://dog.ceo/api/breeds/list/all";

#[derive(Debug, Clone)]
pub struct HttpBreedSource {
    endpoint: String,
    client: Client,
}

impl HttpBreedSource {
    pub fn new(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_endpoint(), Client::new())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BreedSource for HttpBreedSource {
    async fn fetch_breeds(&self) -> Result<BreedsPayload> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(BreedError::HttpStatusError {
                status: status.as_u16(),
                text: status_text(&response),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        BreedsPayload::from_json(&body)
    }
}

/// 上游實際送出的 reason phrase（可能為空）；hyper 只在與標準不同時才保留它
fn status_text(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

/// 逾時、連線重置或中止視為 `TransportTimeout`，其餘皆為一般傳輸錯誤
pub fn classify_transport_error(err: &reqwest::Error) -> BreedError {
    if err.is_timeout() || is_reset_or_abort(err) {
        tracing::warn!("HTTP request was reset or timed out: {}", err);
        return BreedError::TransportTimeout;
    }

    tracing::warn!("HTTP request failed: {}", err);
    BreedError::TransportError {
        message: err.to_string(),
    }
}

/// 沿著 source 鏈尋找 ConnectionReset / ConnectionAborted
pub fn is_reset_or_abort(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(cause) = current {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted
            ) {
                return true;
            }
        }
        current = cause.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::fmt;
    use std::time::Duration;

    #[derive(Debug)]
    struct Wrapped(std::io::Error);

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "request failed, reason: socket hang up")
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_reset_in_source_chain_is_detected() {
        let err = Wrapped(std::io::Error::new(ErrorKind::ConnectionReset, "ECONNRESET"));
        assert!(is_reset_or_abort(&err));

        let aborted = std::io::Error::new(ErrorKind::ConnectionAborted, "aborted");
        assert!(is_reset_or_abort(&aborted));
    }

    #[test]
    fn test_other_io_errors_are_not_resets() {
        let err = Wrapped(std::io::Error::new(ErrorKind::ConnectionRefused, "refused"));
        assert!(!is_reset_or_abort(&err));
    }

    #[tokio::test]
    async fn test_connection_refused_is_generic_transport_error() {
        // 綁定後立即釋放，取得一個沒有人監聽的埠
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpBreedSource::new(format!("http://{}/breeds", addr), Client::new());
        let result = source.fetch_breeds().await;

        assert!(matches!(result, Err(BreedError::TransportError { .. })));
    }

    #[tokio::test]
    async fn test_client_timeout_is_transport_timeout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_millis(500)).body("{}");
        });

        let client = Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let source = HttpBreedSource::new(server.url("/slow"), client);

        assert!(matches!(
            source.fetch_breeds().await,
            Err(BreedError::TransportTimeout)
        ));
    }
}
