use crate::filename::{encode_title, image_asset_name};

/// The local Markdown form of an image reference:
/// `![{encoded_title}-{ordinal}](assets/{encoded_title}-{ordinal}.{ext})`.
///
/// Label and path share the encoding of [`encode_title`], so the link
/// resolves to exactly the asset file the fetch step wrote.
pub fn image_reference_markdown(title: &str, ordinal: usize, extension: &str) -> String {
    format!(
        "![{}-{}](assets/{})",
        encode_title(title),
        ordinal,
        image_asset_name(title, ordinal, extension)
    )
}

/// The local Markdown form of an attachment reference:
/// `[{filename}](assets/{filename})`.
pub fn attachment_reference_markdown(filename: &str) -> String {
    format!("[{filename}](assets/{filename})")
}

/// Substitutes `replacement` for every occurrence of the matched `span`.
///
/// Replace-all is deliberate: a document repeating the same literal image
/// span twice gets the same local reference in both places.
pub fn replace_span(body: &str, span: &str, replacement: &str) -> String {
    body.replace(span, replacement)
}
