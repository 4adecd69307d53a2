use exporter_core::{DocEntry, Repo};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::fetch::{FetchSettings, AUTH_TOKEN_HEADER, BROWSER_USER_AGENT};

pub const YUQUE_API_BASE: &str = "https://www.yuque.com/api/v2";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid api url: {0}")]
    InvalidUrl(String),
    #[error("api request failed: {0}")]
    Request(String),
    #[error("api returned http status {0}")]
    HttpStatus(u16),
    #[error("malformed api response: {0}")]
    Decode(String),
}

/// The document service seen by the orchestrator: list repositories of the
/// authenticated user, list a repository's documents, fetch a raw body.
#[async_trait::async_trait]
pub trait DocSource: Send + Sync {
    async fn list_repos(&self) -> Result<Vec<Repo>, ApiError>;
    async fn list_docs(&self, repo_id: &str) -> Result<Vec<DocEntry>, ApiError>;
    async fn fetch_body(&self, repo_id: &str, doc_id: &str) -> Result<String, ApiError>;
}

// Responses arrive wrapped in a `{"data": ...}` envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct UserData {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct RepoData {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct DocData {
    id: u64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct DocDetailData {
    #[serde(default)]
    body: Option<String>,
}

/// REST client for the hosted service, authenticated with a service-issued
/// token. The base URL is explicit so tests can point it at a local server.
pub struct YuqueClient {
    http: reqwest::Client,
    base: String,
    token: String,
}

impl YuqueClient {
    pub fn new(
        base: &str,
        token: impl Into<String>,
        settings: &FetchSettings,
    ) -> Result<Self, ApiError> {
        Url::parse(base).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Request(err.to_string()))?;
        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = Url::parse(&format!("{}/{}", self.base, path))
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        let response = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .header(AUTH_TOKEN_HEADER, self.token.as_str())
            .send()
            .await
            .map_err(|err| ApiError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(envelope.data)
    }
}

#[async_trait::async_trait]
impl DocSource for YuqueClient {
    async fn list_repos(&self) -> Result<Vec<Repo>, ApiError> {
        let user: UserData = self.get_json("user").await?;
        let repos: Vec<RepoData> = self.get_json(&format!("users/{}/repos", user.id)).await?;
        Ok(repos
            .into_iter()
            .map(|repo| Repo {
                id: repo.id.to_string(),
                name: repo.name,
            })
            .collect())
    }

    async fn list_docs(&self, repo_id: &str) -> Result<Vec<DocEntry>, ApiError> {
        let docs: Vec<DocData> = self.get_json(&format!("repos/{repo_id}/docs")).await?;
        Ok(docs
            .into_iter()
            .map(|doc| DocEntry {
                id: doc.id.to_string(),
                title: doc.title,
            })
            .collect())
    }

    async fn fetch_body(&self, repo_id: &str, doc_id: &str) -> Result<String, ApiError> {
        let detail: DocDetailData = self
            .get_json(&format!("repos/{repo_id}/docs/{doc_id}"))
            .await?;
        Ok(detail.body.unwrap_or_default())
    }
}
