use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, header};

/// Status, `retry-after` and body of a provider response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub retry_after: Option<u64>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            retry_after: None,
            body: body.into(),
        }
    }

    pub fn with_retry_after(mut self, seconds: u64) -> Self {
        self.retry_after = Some(seconds);
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A request that never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection error: {}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// The two HTTP operations the extraction client needs.
///
/// Production code uses [`ReqwestTransport`]; tests plug in a scripted
/// implementation so retry and pipeline behaviour can be checked offline.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` with a bearer token.
    async fn get(&self, url: &str, bearer: &str) -> Result<HttpResponse, TransportError>;

    /// POST a form body with a raw `Authorization` header value.
    async fn post_form(
        &self,
        url: &str,
        authorization: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn into_response(res: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let status = res.status().as_u16();
        let retry_after = res
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = res
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(HttpResponse {
            status,
            retry_after,
            body,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, bearer: &str) -> Result<HttpResponse, TransportError> {
        let res = self
            .client
            .get(url)
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Self::into_response(res).await
    }

    async fn post_form(
        &self,
        url: &str,
        authorization: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        let res = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, authorization)
            .form(form)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Self::into_response(res).await
    }
}
