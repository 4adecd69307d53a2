use std::path::PathBuf;

use exporter_core::{
    attachment_reference_markdown, attachment_references, document_filename, extension_of,
    image_asset_name, image_reference_markdown, image_references, index_filename, index_line,
    replace_span, sanitize, DocEntry, Document, Repo,
};

use crate::api::DocSource;
use crate::fetch::ResourceFetcher;
use crate::persist::{append_line, ensure_dir, AtomicFileWriter};
use crate::types::{DocFailure, ExportError, ExportedDoc, RepoExportSummary};

const ASSETS_DIR: &str = "assets";

/// Runs the per-document pipeline against an explicit output directory.
///
/// Documents are processed strictly one at a time and resources within a
/// document are downloaded sequentially; the index file is the only state
/// shared across documents.
pub struct Exporter<'a> {
    base_dir: PathBuf,
    source: &'a dyn DocSource,
    fetcher: &'a dyn ResourceFetcher,
}

impl<'a> Exporter<'a> {
    pub fn new(
        base_dir: impl Into<PathBuf>,
        source: &'a dyn DocSource,
        fetcher: &'a dyn ResourceFetcher,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            source,
            fetcher,
        }
    }

    /// Exports the selected documents of one repository. A failing document
    /// is recorded and skipped; the remaining documents still export.
    pub async fn export_repo(&self, repo: &Repo, docs: &[DocEntry]) -> RepoExportSummary {
        let mut summary = RepoExportSummary::default();
        for entry in docs {
            log::info!("exporting {} ...", entry.title);
            match self.export_document(repo, entry).await {
                Ok(exported) => summary.exported.push(exported),
                Err(error) => {
                    log::warn!("export of {} failed: {error}", entry.title);
                    summary.failures.push(DocFailure {
                        entry: entry.clone(),
                        error,
                    });
                }
            }
        }
        summary
    }

    /// Exports one document: sanitize, extract, fetch-and-rewrite each
    /// resource, write the Markdown file, append the index entry.
    ///
    /// Not transactional: a failure mid-document can leave already-written
    /// assets behind with no `.md` file and no index entry.
    pub async fn export_document(
        &self,
        repo: &Repo,
        entry: &DocEntry,
    ) -> Result<ExportedDoc, ExportError> {
        let body = self.source.fetch_body(&repo.id, &entry.id).await?;
        let document = Document {
            id: entry.id.clone(),
            title: entry.title.clone(),
            body,
        };

        let repo_dir = self.base_dir.join(&repo.name);
        let assets_dir = repo_dir.join(ASSETS_DIR);
        ensure_dir(&repo_dir)?;
        ensure_dir(&assets_dir)?;
        let assets = AtomicFileWriter::new(&assets_dir);

        let mut text = sanitize(&document.body);

        let images = image_references(&text);
        for reference in &images {
            let extension = extension_of(&reference.filename);
            let bytes = self.fetcher.fetch(reference).await?;
            let asset_name = image_asset_name(&document.title, reference.ordinal, extension);
            let path = assets.write_bytes(&asset_name, &bytes)?;
            log::info!("downloaded {}", path.display());
            let local = image_reference_markdown(&document.title, reference.ordinal, extension);
            text = replace_span(&text, &reference.span, &local);
        }

        let attachments = attachment_references(&text);
        for reference in &attachments {
            let bytes = self.fetcher.fetch(reference).await?;
            let path = assets.write_bytes(&reference.filename, &bytes)?;
            log::info!("downloaded {}", path.display());
            let local = attachment_reference_markdown(&reference.filename);
            text = replace_span(&text, &reference.span, &local);
        }

        let path = AtomicFileWriter::new(&repo_dir)
            .write_text(&document_filename(&document.title), &text)?;
        append_line(
            &self.base_dir.join(index_filename(&repo.name)),
            &index_line(&repo.name, &document.title),
        )?;

        Ok(ExportedDoc {
            id: document.id,
            title: document.title,
            path,
            images: images.len(),
            attachments: attachments.len(),
        })
    }
}
