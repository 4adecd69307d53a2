#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    pub id: String,
    pub name: String,
}

/// One row of a repository's document listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    pub id: String,
    pub title: String,
}

/// A document assembled for one export run: listing metadata plus the raw
/// Markdown body fetched from the service. Discarded after the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Attachment,
}

/// An embedded image or attachment link found in a document body.
///
/// `span` is the full matched Markdown text, kept verbatim so the rewriter
/// can substitute it. `ordinal` counts matches of the same kind within one
/// document, starting at 0, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    pub kind: ResourceKind,
    pub span: String,
    pub label: String,
    pub url: String,
    pub filename: String,
    pub ordinal: usize,
}
