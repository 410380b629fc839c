//! Markup helpers shared by the page components

use std::borrow::Cow;

/// Escape text for use in HTML element content and quoted attributes.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// URL schemes allowed in rendered `href` attributes
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Escape a configured URL for an `href` attribute.
///
/// Relative URLs pass through. Absolute URLs must use one of
/// [`SAFE_SCHEMES`]; anything else (`javascript:`, `data:`, ...) and URLs
/// containing control characters yield `None`, and callers render the
/// label as plain text.
pub fn safe_href(url: &str) -> Option<Cow<'_, str>> {
    let url = url.trim();
    if url.is_empty() || url.chars().any(char::is_control) {
        return None;
    }

    if let Some(end) = url.find([':', '/', '?', '#']) {
        if url[end..].starts_with(':') {
            let scheme = &url[..end];
            if !SAFE_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s)) {
                return None;
            }
        }
    }
    Some(escape(url))
}

/// Inline stylesheet embedded in every rendered document
pub const STYLESHEET: &str = r#"
:root { --fg: #1f2933; --muted: #616e7c; --accent: #c2410c; --bg: #fdfcfb; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: var(--fg); background: var(--bg); line-height: 1.6; }
header.site-header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; border-bottom: 1px solid #e4e7eb; }
header.site-header nav a { margin-left: 1.25rem; color: var(--muted); text-decoration: none; }
header.site-header nav a:hover { color: var(--accent); }
.brand { font-weight: 700; font-size: 1.25rem; color: var(--fg); text-decoration: none; }
section { max-width: 56rem; margin: 0 auto; padding: 3rem 2rem; }
#hero { text-align: center; padding: 6rem 2rem; }
#hero h1 { font-size: 2.75rem; margin: 0 0 1rem; }
#hero p { color: var(--muted); font-size: 1.25rem; }
.projects { list-style: none; padding: 0; display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); }
.projects li { border: 1px solid #e4e7eb; border-radius: 0.5rem; padding: 1.25rem; }
footer#contact { max-width: 56rem; margin: 0 auto; padding: 3rem 2rem; border-top: 1px solid #e4e7eb; }
footer#contact .copyright { color: var(--muted); font-size: 0.875rem; }
a { color: var(--accent); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_borrows() {
        assert!(matches!(escape("plain text"), Cow::Borrowed("plain text")));
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_keeps_unicode() {
        assert_eq!(escape("Café <Über>"), "Café &lt;Über&gt;");
    }

    #[test]
    fn test_escape_empty_string() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_safe_href_allows_web_and_mail_schemes() {
        assert_eq!(
            safe_href("https://example.com/?a=1&b=2").as_deref(),
            Some("https://example.com/?a=1&amp;b=2")
        );
        assert!(safe_href("HTTP://example.com").is_some());
        assert!(safe_href("mailto:hi@example.com").is_some());
    }

    #[test]
    fn test_safe_href_allows_relative_urls() {
        assert_eq!(safe_href("/projects/a:b").as_deref(), Some("/projects/a:b"));
        assert_eq!(safe_href("#contact").as_deref(), Some("#contact"));
    }

    #[test]
    fn test_safe_href_rejects_script_schemes() {
        assert_eq!(safe_href("javascript:alert(1)"), None);
        assert_eq!(safe_href("  JavaScript:alert(1)"), None);
        assert_eq!(safe_href("java\tscript:alert(1)"), None);
        assert_eq!(safe_href("data:text/html,<script>x</script>"), None);
        assert_eq!(safe_href("vbscript:msgbox"), None);
        assert_eq!(safe_href(""), None);
    }
}
