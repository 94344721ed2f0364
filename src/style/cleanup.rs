//! Structural cleanup of markup remnants.
//!
//! The styling passes only consume the inline tags they recognize; this
//! module turns the block structure into newlines, strips whatever tags
//! remain, and normalizes whitespace. It is also the whole of the
//! plain-text rendering: applied to raw markup it yields the unstyled
//! text of the same fragment.

use std::sync::OnceLock;

use regex::Regex;

fn br_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"))
}

fn paragraph_boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</p><p[^>]*>").expect("valid regex"))
}

fn paragraph_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<p[^>]*>").expect("valid regex"))
}

fn paragraph_close_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</p>").expect("valid regex"))
}

fn any_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid regex"))
}

fn excess_newlines_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n\s*\n").expect("valid regex"))
}

/// Resolve block structure to newlines, strip leftover tags, trim.
///
/// Order matters: paragraph boundaries must be rewritten before the
/// individual `<p>` and `</p>` rules see them, and the catch-all tag
/// strip runs last so it only ever removes tags no earlier rule claimed.
pub(crate) fn structural_cleanup(text: &str) -> String {
    let text = br_re().replace_all(text, "\n");
    let text = paragraph_boundary_re().replace_all(&text, "\n\n");
    let text = paragraph_open_re().replace_all(&text, "");
    let text = paragraph_close_re().replace_all(&text, "\n");
    let text = any_tag_re().replace_all(&text, "");
    let text = excess_newlines_re().replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_br_to_newline() {
        assert_eq!(structural_cleanup("Line1<br>Line2"), "Line1\nLine2");
        assert_eq!(structural_cleanup("Line1<br/>Line2"), "Line1\nLine2");
        assert_eq!(structural_cleanup("Line1<br />Line2"), "Line1\nLine2");
        assert_eq!(structural_cleanup("Line1<BR>Line2"), "Line1\nLine2");
    }

    #[test]
    fn test_paragraph_break() {
        assert_eq!(structural_cleanup("<p>A</p><p>B</p>"), "A\n\nB");
    }

    #[test]
    fn test_paragraph_with_attributes() {
        assert_eq!(
            structural_cleanup("<p style=\"text-align: center\">A</p><p>B</p>"),
            "A\n\nB"
        );
    }

    #[test]
    fn test_unrecognized_tags_stripped() {
        assert_eq!(structural_cleanup("<span class='x'>Z</span>"), "Z");
        assert_eq!(structural_cleanup("<div><ul><li>a</li></ul></div>"), "a");
    }

    #[test]
    fn test_collapse_excess_newlines() {
        assert_eq!(structural_cleanup("A\n\n\n\nB"), "A\n\nB");
        assert_eq!(structural_cleanup("A\n \n \nB"), "A\n\nB");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(structural_cleanup("  <p>A</p>  "), "A");
        assert_eq!(structural_cleanup("<p></p>"), "");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(structural_cleanup("no tags here"), "no tags here");
    }
}
