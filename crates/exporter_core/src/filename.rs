use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

// Characters that would break a path segment or the Markdown link pointing
// at it. Encoded rather than replaced so distinct titles stay distinct.
const PATH_UNSAFE: &AsciiSet = &CONTROLS
    .add(b'/')
    .add(b'\\')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b':')
    .add(b'"')
    .add(b'|')
    .add(b'*');

/// Percent-encodes the filesystem-unsafe characters of a document title.
///
/// Every path segment and every generated Markdown link label/target derives
/// from this one function, so links always agree with the files on disk.
pub fn encode_title(title: &str) -> String {
    utf8_percent_encode(title, PATH_UNSAFE).to_string()
}

/// `{encoded_title}.md`
pub fn document_filename(title: &str) -> String {
    format!("{}.md", encode_title(title))
}

/// `{encoded_title}-{ordinal}.{extension}` — the deterministic local name
/// for the `ordinal`-th image of a document.
pub fn image_asset_name(title: &str, ordinal: usize, extension: &str) -> String {
    format!("{}-{}.{}", encode_title(title), ordinal, extension)
}

/// File extension of a remote resource filename (last dot segment).
pub fn extension_of(filename: &str) -> &str {
    filename.rsplit('.').next().unwrap_or(filename)
}
