//! Server-rendered HTML for the showcase page

pub mod charts;
pub mod pages;
mod style;

pub use pages::{showcase_page, SubmissionView};

use askama_escape::{escape, Html};

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    escape(s, Html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        let out = escape_html(r#"<a href="x">'&'</a>"#);
        assert!(out.starts_with("&lt;a href=&quot;x&quot;&gt;"));
        assert!(out.contains("&amp;"));
        assert!(out.ends_with("&lt;/a&gt;"));
        assert!(!out.contains('\''));
        assert!(!out.contains('<'));
    }

    #[test]
    fn test_escape_html_keeps_cjk_text() {
        assert_eq!(escape_html("传承“徽”煌数学"), "传承“徽”煌数学");
    }
}
