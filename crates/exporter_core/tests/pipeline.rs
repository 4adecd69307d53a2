use exporter_core::{
    attachment_references, extension_of, image_asset_name, image_references,
    image_reference_markdown, index_line, replace_span, sanitize, ResourceKind,
};
use pretty_assertions::assert_eq;

#[test]
fn sanitized_text_has_no_anchor_or_break_markers() {
    let raw = concat!(
        "<a name=\"intro\"></a># Title<br />\n",
        "text<br />![image.png](https://cdn.nlark.com/yuque/0/2023/png/1/image.png#averageHue=fff)",
        "<br />tail<br/>end"
    );
    let clean = sanitize(raw);
    assert!(!clean.contains("<a name="));
    assert!(!clean.contains("<br"));
}

#[test]
fn sanitize_is_idempotent() {
    let raw = "a<br />![x](https://cdn.nlark.com/yuque/0/1/2/x.png#f)<br />b<a name=\"n\"></a>";
    let once = sanitize(raw);
    assert_eq!(sanitize(&once), once);
}

#[test]
fn break_adjacent_to_image_becomes_surrounding_newlines() {
    let raw = "intro<br />![image.png](https://cdn.nlark.com/yuque/0/1/22/image.png)<br />next";
    let clean = sanitize(raw);
    assert_eq!(
        clean,
        "intro\n![image.png](https://cdn.nlark.com/yuque/0/1/22/image.png)\nnext"
    );
}

#[test]
fn image_url_fragment_is_cleaned_to_a_resource_path() {
    let raw = "![x](https://cdn.nlark.com/yuque/0/123/pic.png#abc)";
    let clean = sanitize(raw);
    assert_eq!(clean, "![x](https://cdn.nlark.com/yuque/0/123/pic.png)");
    assert!(clean.contains(".png)"));
}

#[test]
fn ordinals_are_monotonic_in_document_order() {
    let body = "\
![a](https://cdn.nlark.com/yuque/0/2023/png/11/a.png)
middle
![b](https://cdn.nlark.com/yuque/0/2023/png/22/b.png)
![c](https://cdn.nlark.com/yuque/0/2023/jpeg/33/c.jpeg)
[z.zip](https://www.yuque.com/attachments/yuque/0/2023/zip/44/z.zip)";

    let images = image_references(body);
    assert_eq!(images.len(), 3);
    for (position, reference) in images.iter().enumerate() {
        assert_eq!(reference.ordinal, position);
    }
    assert_eq!(images[0].filename, "a.png");
    assert_eq!(images[2].filename, "c.jpeg");

    // Ordinals restart per kind.
    let attachments = attachment_references(body);
    assert_eq!(attachments.len(), 1);
    assert_eq!(attachments[0].ordinal, 0);
    assert_eq!(attachments[0].kind, ResourceKind::Attachment);
}

#[test]
fn rewritten_link_path_equals_the_asset_destination() {
    // Round trip: the rewriter's relative path and the fetcher's target file
    // are both derived from the same asset name.
    let title = "Deploy Guide";
    let markdown = image_reference_markdown(title, 2, "png");
    let asset = image_asset_name(title, 2, "png");
    assert_eq!(markdown, format!("![Deploy Guide-2](assets/{asset})"));
}

#[test]
fn unsafe_title_is_encoded_identically_in_path_and_links() {
    let title = "A/B?";
    let asset = image_asset_name(title, 0, "png");
    let markdown = image_reference_markdown(title, 0, "png");
    let index = index_line("repo", title);

    assert_eq!(asset, "A%2FB%3F-0.png");
    assert_eq!(markdown, "![A%2FB%3F-0](assets/A%2FB%3F-0.png)");
    assert_eq!(index, "- [A/B?](./repo/A%2FB%3F.md)");
}

#[test]
fn full_image_pipeline_scenario() {
    let raw = "![x](https://cdn.nlark.com/yuque/0/123/pic.png#abc)";
    let mut body = sanitize(raw);

    let refs = image_references(&body);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].url, "https://cdn.nlark.com/yuque/0/123/pic.png");
    assert_eq!(extension_of(&refs[0].filename), "png");

    let local = image_reference_markdown("Title", refs[0].ordinal, "png");
    body = replace_span(&body, &refs[0].span, &local);
    assert_eq!(body, "![Title-0](assets/Title-0.png)");
}

#[test]
fn document_without_references_only_gets_sanitized() {
    let raw = "# Plain<br />text";
    let body = sanitize(raw);
    assert!(image_references(&body).is_empty());
    assert!(attachment_references(&body).is_empty());
    assert_eq!(body, "# Plain\ntext");
}
