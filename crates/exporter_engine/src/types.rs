use std::fmt;
use std::path::PathBuf;

use exporter_core::DocEntry;

use crate::api::ApiError;
use crate::persist::PersistError;

/// A resource download failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Anything that can abort a single document's export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("resource fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of one successfully exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDoc {
    pub id: String,
    pub title: String,
    pub path: PathBuf,
    pub images: usize,
    pub attachments: usize,
}

/// A document whose export was aborted; the repository run continues.
#[derive(Debug)]
pub struct DocFailure {
    pub entry: DocEntry,
    pub error: ExportError,
}

/// Outcome of a repository export: exported documents in export order, plus
/// the documents that failed.
#[derive(Debug, Default)]
pub struct RepoExportSummary {
    pub exported: Vec<ExportedDoc>,
    pub failures: Vec<DocFailure>,
}
