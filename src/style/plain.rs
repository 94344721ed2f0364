//! Plain-text rendering.
//!
//! The unstyled counterpart of the styled export: the same block
//! structure resolution and tag stripping, with no character
//! substitution. This is the fallback clipboard payload and the input
//! for text statistics.

use super::cleanup::structural_cleanup;

/// Render a markup fragment to unstyled plain text.
///
/// `<br>` and paragraph boundaries become newlines; every tag,
/// recognized or not, is stripped; runs of blank lines collapse to one
/// and the result is trimmed.
///
/// # Example
///
/// ```
/// use unimark::to_plain_text;
///
/// let text = to_plain_text("<p>Hello <strong>world</strong></p>");
/// assert_eq!(text, "Hello world");
/// ```
pub fn to_plain_text(markup: &str) -> String {
    structural_cleanup(markup)
}

/// Reduce a markup fragment to an unstyled fragment.
///
/// Renders to plain text and re-expresses line breaks as `<br>`, so an
/// editing surface can adopt the result as its new document markup.
///
/// # Example
///
/// ```
/// use unimark::clear_formatting;
///
/// let markup = clear_formatting("<p>A</p><p><b>B</b></p>");
/// assert_eq!(markup, "A<br><br>B");
/// ```
pub fn clear_formatting(markup: &str) -> String {
    to_plain_text(markup).replace('\n', "<br>")
}
