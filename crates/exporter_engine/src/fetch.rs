use std::time::Duration;

use bytes::Bytes;
use exporter_core::{ResourceKind, ResourceReference};

use crate::types::{FailureKind, FetchError};

/// Direct attachment URLs redirect to an interactive login page; the API
/// form of the same path serves the file when the auth token is presented.
const PUBLIC_ATTACHMENT_PREFIX: &str = "https://www.yuque.com/attachments/";
const API_ATTACHMENT_PREFIX: &str = "https://www.yuque.com/api/v2/attachments/";

/// Browser user-agent presented on authenticated requests; the service
/// rejects unadorned client strings.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub(crate) const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Rewrites a public attachment URL to its authenticated API form. URLs on
/// any other shape pass through unchanged.
pub fn api_attachment_url(url: &str) -> String {
    if let Some(rest) = url.strip_prefix(PUBLIC_ATTACHMENT_PREFIX) {
        format!("{API_ATTACHMENT_PREFIX}{rest}")
    } else {
        url.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Downloads one resource. Every call returns a `Result`, so the caller
/// decides how far a single failure propagates.
#[async_trait::async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch(&self, reference: &ResourceReference) -> Result<Bytes, FetchError>;
}

pub struct ReqwestFetcher {
    client: reqwest::Client,
    token: String,
}

impl ReqwestFetcher {
    pub fn new(settings: &FetchSettings, token: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            client,
            token: token.into(),
        })
    }
}

#[async_trait::async_trait]
impl ResourceFetcher for ReqwestFetcher {
    async fn fetch(&self, reference: &ResourceReference) -> Result<Bytes, FetchError> {
        let request = match reference.kind {
            // Images sit on a public CDN and need no credentials.
            ResourceKind::Image => self.client.get(parse_url(&reference.url)?),
            ResourceKind::Attachment => self
                .client
                .get(parse_url(&api_attachment_url(&reference.url))?)
                .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
                .header(AUTH_TOKEN_HEADER, self.token.as_str()),
        };

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        response.bytes().await.map_err(map_reqwest_error)
    }
}

fn parse_url(url: &str) -> Result<reqwest::Url, FetchError> {
    reqwest::Url::parse(url).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
