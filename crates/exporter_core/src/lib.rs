//! Exporter core: pure document pipeline, no IO.
//!
//! Everything here is a function from text (or parsed references) to text:
//! markup sanitation, resource-link extraction, local-link rewriting,
//! path-safe naming, index-entry formatting and id-selection parsing. The IO
//! pipeline in `exporter_engine` composes these per document.
mod extract;
mod filename;
mod index;
mod rewrite;
mod sanitize;
mod selection;
mod types;

pub use extract::{attachment_references, image_references};
pub use filename::{
    document_filename, encode_title, extension_of, image_asset_name,
};
pub use index::{index_filename, index_line};
pub use rewrite::{
    attachment_reference_markdown, image_reference_markdown, replace_span,
};
pub use sanitize::sanitize;
pub use selection::{parse_selection, Selection, UnknownId};
pub use types::{DocEntry, Document, Repo, ResourceKind, ResourceReference};
