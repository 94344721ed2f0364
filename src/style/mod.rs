//! Styled-text rendering.
//!
//! Converts a rich markup fragment into a plain Unicode string that
//! keeps its styling on surfaces that strip formatting: bold and italic
//! spans become mathematical alphanumeric symbols, underline and
//! strikethrough spans gain combining marks, and the block structure
//! collapses to newlines.
//!
//! The conversion is a fixed sequence of string-rewrite passes, not a
//! parse tree. Each pass consumes the previous pass's output, so the
//! pass order is part of the contract: a bold pass that swallows an
//! inner italic tag leaves letter-mangled tag text behind, and the
//! final cleanup strips it. Overlapping styles resolve to whichever
//! pass ran first rather than stacking.
//!
//! # Example
//!
//! ```
//! use unimark::to_styled_text;
//!
//! let styled = to_styled_text("<p>say it <strong>bold</strong></p>");
//! assert_eq!(styled, "say it \u{1D5EF}\u{1D5FC}\u{1D5F9}\u{1D5F1}");
//! ```

mod cleanup;
mod maps;
mod options;
mod plain;

pub use options::StyleOptions;
pub use plain::{clear_formatting, to_plain_text};

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// COMBINING LOW LINE, appended per character for underline.
const COMBINING_LOW_LINE: char = '\u{0332}';

/// COMBINING LONG STROKE OVERLAY, appended per character for strikethrough.
const COMBINING_LONG_STROKE: char = '\u{0336}';

fn strong_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<strong\b[^>]*>(.*?)</strong>").expect("valid regex"))
}

fn b_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<b\b[^>]*>(.*?)</b>").expect("valid regex"))
}

fn em_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<em\b[^>]*>(.*?)</em>").expect("valid regex"))
}

fn i_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<i\b[^>]*>(.*?)</i>").expect("valid regex"))
}

fn u_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<u\b[^>]*>(.*?)</u>").expect("valid regex"))
}

fn s_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<s\b[^>]*>(.*?)</s>").expect("valid regex"))
}

fn strike_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<strike\b[^>]*>(.*?)</strike>").expect("valid regex"))
}

fn del_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<del\b[^>]*>(.*?)</del>").expect("valid regex"))
}

/// Convert a markup fragment to Unicode styled text.
///
/// Pure and deterministic; never fails. Unrecognized or malformed tags
/// are stripped rather than rejected, and tag-free input comes back
/// unchanged.
///
/// # Example
///
/// ```
/// use unimark::to_styled_text;
///
/// assert_eq!(to_styled_text("<u>hi</u>"), "h\u{0332}i\u{0332}");
/// assert_eq!(to_styled_text("no tags"), "no tags");
/// ```
pub fn to_styled_text(markup: &str) -> String {
    to_styled_text_with_options(markup, &StyleOptions::default())
}

/// Convert a markup fragment to Unicode styled text with options.
///
/// Passes run in fixed order: bold, italic, underline, strikethrough,
/// structural cleanup. Disabled passes are skipped; their tags then fall
/// to the cleanup's catch-all strip.
pub fn to_styled_text_with_options(markup: &str, options: &StyleOptions) -> String {
    let mut text = markup.to_string();

    if options.bold {
        text = replace_spans(strong_re(), &text, maps::to_bold);
        text = replace_spans(b_re(), &text, maps::to_bold);
    }

    if options.italic {
        text = replace_spans(em_re(), &text, maps::to_italic);
        text = replace_spans(i_re(), &text, maps::to_italic);
    }

    if options.underline {
        text = replace_spans(u_re(), &text, |span| append_mark(span, COMBINING_LOW_LINE));
    }

    if options.strikethrough {
        text = replace_spans(s_re(), &text, |span| {
            append_mark(span, COMBINING_LONG_STROKE)
        });
        text = replace_spans(strike_re(), &text, |span| {
            append_mark(span, COMBINING_LONG_STROKE)
        });
        text = replace_spans(del_re(), &text, |span| {
            append_mark(span, COMBINING_LONG_STROKE)
        });
    }

    if options.cleanup {
        text = cleanup::structural_cleanup(&text);
    }

    text
}

/// Replace each tagged span with its transformed inner text.
fn replace_spans(re: &Regex, text: &str, transform: impl Fn(&str) -> String) -> String {
    re.replace_all(text, |caps: &Captures<'_>| transform(&caps[1]))
        .into_owned()
}

/// Append a combining mark after every character of the span.
fn append_mark(span: &str, mark: char) -> String {
    span.chars().flat_map(|ch| [ch, mark]).collect()
}
