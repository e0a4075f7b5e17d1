//! HTML Sanitization
//!
//! Everything user-authored or model-generated passes through here before it
//! is submitted or rendered. Markup is reduced to a fixed allow-list of tags
//! and attributes; anything else is stripped, not escaped, so the result is
//! safe to hand to `inner_html`.

use ammonia::Builder;
use std::sync::OnceLock;

/// Tags that survive sanitization
const ALLOWED_TAGS: &[&str] = &[
    "b", "i", "u", "em", "strong", "a", "p", "br", "ul", "ol", "li", "blockquote", "code", "pre",
    "span",
];

/// Attributes that survive sanitization (on any allowed tag)
const ALLOWED_ATTRS: &[&str] = &["href", "target", "title", "class", "style"];

/// URL schemes an `href` may carry
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

static CLEANER: OnceLock<Builder<'static>> = OnceLock::new();
static TEXT_CLEANER: OnceLock<Builder<'static>> = OnceLock::new();

fn cleaner() -> &'static Builder<'static> {
    CLEANER.get_or_init(|| {
        let mut builder = Builder::default();
        builder
            .tags(ALLOWED_TAGS.iter().copied().collect())
            .generic_attributes(ALLOWED_ATTRS.iter().copied().collect())
            .url_schemes(ALLOWED_SCHEMES.iter().copied().collect())
            .link_rel(None);
        builder
    })
}

fn text_cleaner() -> &'static Builder<'static> {
    TEXT_CLEANER.get_or_init(|| {
        let mut builder = Builder::default();
        builder.tags(Default::default()).generic_attributes(Default::default());
        builder
    })
}

/// Reduce `html` to the allow-listed subset.
///
/// Pure and idempotent; malformed input degrades to the closest compliant
/// markup instead of erroring. Script and style elements vanish together
/// with their contents.
pub fn sanitize(html: &str) -> String {
    cleaner().clean(html).to_string()
}

/// Text content of `html` with tags dropped and entities decoded.
///
/// Used for content-length validation so markup does not count toward the
/// minimum.
pub fn plain_text(html: &str) -> String {
    let text = text_cleaner().clean(html).to_string();
    // The serializer only ever emits these four entities
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

/// Shorten long titles for list display
pub fn truncate_title(input: &str) -> String {
    if input.chars().count() > 25 {
        let head: String = input.chars().take(22).collect();
        format!("{}...", head)
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_allowed_markup() {
        let out = sanitize("<p>Hello <strong>world</strong></p>");
        assert_eq!(out, "<p>Hello <strong>world</strong></p>");
    }

    #[test]
    fn test_strips_disallowed_tags_keeps_text() {
        let out = sanitize("<div><b>bold</b> body</div>");
        assert!(!out.contains("<div"));
        assert!(out.contains("<b>bold</b>"));
        assert!(out.contains("body"));
    }

    #[test]
    fn test_script_content_removed_entirely() {
        let out = sanitize("<script>x</script>");
        assert!(!out.contains("script"));
        assert!(!out.contains('x'));
    }

    #[test]
    fn test_event_handler_attributes_removed() {
        let out = sanitize(r#"<p onclick="alert(1)" class="note">hi</p>"#);
        assert!(!out.contains("onclick"));
        assert!(out.contains(r#"class="note""#));
    }

    #[test]
    fn test_javascript_scheme_href_dropped() {
        let out = sanitize(r#"<a href="javascript:alert(1)">link</a>"#);
        assert!(!out.contains("javascript"));
        assert!(out.contains("link"));
    }

    #[test]
    fn test_https_and_mailto_hrefs_survive() {
        let out = sanitize(r#"<a href="https://example.com" target="_blank">e</a>"#);
        assert!(out.contains(r#"href="https://example.com""#));
        let out = sanitize(r#"<a href="mailto:a@b.c">m</a>"#);
        assert!(out.contains("mailto:a@b.c"));
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "<p>plain</p>",
            "<div><script>x</script><b onmouseover=bad>t</b></div>",
            "broken <b>markup",
            r#"<a href="ftp://no">x</a>"#,
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_malformed_input_never_panics() {
        for input in ["<<<>>>", "<b", "</p></p>", "<a href=>x", "&#xZZ;"] {
            let _ = sanitize(input);
        }
    }

    #[test]
    fn test_plain_text_strips_tags_and_decodes() {
        assert_eq!(plain_text("<p>a &amp; b</p>"), "a & b");
        assert_eq!(plain_text("<ul><li>one</li><li>two</li></ul>"), "onetwo");
        assert_eq!(plain_text("  <br>  "), "");
    }

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title("short"), "short");
        let long = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(truncate_title(long), "abcdefghijklmnopqrstuv...");
        assert_eq!(truncate_title(&"日".repeat(26)), format!("{}...", "日".repeat(22)));
    }
}
