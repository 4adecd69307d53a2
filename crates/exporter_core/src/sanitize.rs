use std::sync::LazyLock;

use regex::Regex;

type RuleFn = fn(&str) -> String;

/// Ordered sanitation rules. The adjacency rules around image/link spans run
/// before the general line-break collapse, otherwise the collapse would
/// consume the markers they target.
const RULES: &[RuleFn] = &[
    strip_named_anchors,
    break_before_image,
    break_after_reference,
    collapse_line_breaks,
    clean_image_url_suffix,
];

/// Normalizes service-specific HTML artifacts out of a raw document body.
///
/// Applies each rule in order; a rule that matches nothing leaves the text
/// unchanged. Running the pipeline on already-sanitized text is a no-op.
pub fn sanitize(body: &str) -> String {
    RULES
        .iter()
        .fold(body.to_string(), |text, rule| rule(&text))
}

static NAMED_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a name="[^"]*">.*?</a>"#).expect("valid anchor pattern"));

/// The service emits `<a name="...">...</a>` anchors that carry no content.
fn strip_named_anchors(text: &str) -> String {
    NAMED_ANCHOR.replace_all(text, "").into_owned()
}

static BREAK_BEFORE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<br\s*/?>(!\[)").expect("valid break-before-image pattern"));

/// A forced line break directly before an image becomes a real newline, so
/// image references always start a line.
fn break_before_image(text: &str) -> String {
    BREAK_BEFORE_IMAGE.replace_all(text, "\n${1}").into_owned()
}

static BREAK_AFTER_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)<br\s*/?>").expect("valid break-after-reference pattern"));

/// A forced line break directly after a closed image/link reference becomes
/// a trailing newline.
fn break_after_reference(text: &str) -> String {
    BREAK_AFTER_REFERENCE.replace_all(text, ")\n").into_owned()
}

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<br\s*/?>").expect("valid line-break pattern"));

fn collapse_line_breaks(text: &str) -> String {
    LINE_BREAK.replace_all(text, "\n").into_owned()
}

static IMAGE_URL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(png|jpeg)[#?][^)\n]*\)").expect("valid image-url-suffix pattern")
});

/// Strips query/fragment suffixes from image URLs so the link target is a
/// clean resource path: `...png#anything)` becomes `...png)`.
fn clean_image_url_suffix(text: &str) -> String {
    IMAGE_URL_SUFFIX.replace_all(text, "${1})").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_anchors_are_removed_without_residue() {
        assert_eq!(strip_named_anchors(r#"x<a name="abc"></a>y"#), "xy");
        assert_eq!(
            strip_named_anchors(r#"<a name="h1">Heading</a> text"#),
            " text"
        );
    }

    #[test]
    fn break_before_image_starts_a_line() {
        assert_eq!(
            break_before_image("text<br />![image.png](url)"),
            "text\n![image.png](url)"
        );
    }

    #[test]
    fn break_after_reference_ends_the_line() {
        assert_eq!(break_after_reference("(url)<br />more"), "(url)\nmore");
    }

    #[test]
    fn remaining_breaks_collapse_to_newlines() {
        assert_eq!(collapse_line_breaks("a<br />b<br/>c<br>d"), "a\nb\nc\nd");
    }

    #[test]
    fn image_url_suffixes_are_stripped() {
        assert_eq!(
            clean_image_url_suffix("(https://x/pic.png#averageHue=abc)"),
            "(https://x/pic.png)"
        );
        assert_eq!(
            clean_image_url_suffix("(https://x/pic.jpeg?x-oss-process=resize)"),
            "(https://x/pic.jpeg)"
        );
        // Does not reach past the closing parenthesis.
        assert_eq!(
            clean_image_url_suffix("(https://x/a.png#f) tail (https://x/b.png#g)"),
            "(https://x/a.png) tail (https://x/b.png)"
        );
    }

    #[test]
    fn rules_without_matches_leave_text_unchanged() {
        let plain = "# Title\n\nJust a paragraph.\n";
        assert_eq!(sanitize(plain), plain);
    }
}
