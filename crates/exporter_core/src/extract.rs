use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ResourceKind, ResourceReference};

// `![label](url)` where the URL lives on the service CDN and carries a
// numeric path segment before the filename. The span ends at its own closing
// parenthesis; anything between the filename and the parenthesis is junk the
// sanitizer did not recognize.
static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\((https://cdn\.nlark\.com/yuque[^)\n]*/(\d+)/([^)/\n]*?\.[a-zA-Z]+))[^)\n]*\)")
        .expect("valid image pattern")
});

// `[label](url)` on the attachment-hosting path shape.
static ATTACHMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]\((https://www\.yuque\.com/attachments/yuque[^)\n]*/(\d+)/([^)/\n]*?\.[a-zA-Z]+))[^)\n]*\)")
        .expect("valid attachment pattern")
});

/// All image references in `body`, in document order, ordinals from 0.
pub fn image_references(body: &str) -> Vec<ResourceReference> {
    references(body, ResourceKind::Image, &IMAGE)
}

/// All attachment references in `body`, in document order, ordinals from 0.
pub fn attachment_references(body: &str) -> Vec<ResourceReference> {
    references(body, ResourceKind::Attachment, &ATTACHMENT)
}

fn references(body: &str, kind: ResourceKind, pattern: &Regex) -> Vec<ResourceReference> {
    pattern
        .captures_iter(body)
        .enumerate()
        .map(|(ordinal, captures)| ResourceReference {
            kind,
            span: captures[0].to_string(),
            label: captures[1].to_string(),
            url: captures[2].to_string(),
            filename: captures[4].to_string(),
            ordinal,
        })
        .collect()
}
