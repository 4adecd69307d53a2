//! Exporter engine: IO pipeline composing the pure core per document.
//!
//! The engine fetches document bodies and resources over HTTP, runs the
//! sanitize/extract/rewrite pipeline from `exporter_core`, and persists the
//! results: one Markdown file per document, downloaded assets beside it, and
//! an append-only index per repository.
mod api;
mod export;
mod fetch;
mod persist;
mod types;

pub use api::{ApiError, DocSource, YuqueClient, YUQUE_API_BASE};
pub use export::Exporter;
pub use fetch::{
    api_attachment_url, FetchSettings, ReqwestFetcher, ResourceFetcher, BROWSER_USER_AGENT,
};
pub use persist::{append_line, ensure_dir, AtomicFileWriter, PersistError};
pub use types::{
    DocFailure, ExportError, ExportedDoc, FailureKind, FetchError, RepoExportSummary,
};
