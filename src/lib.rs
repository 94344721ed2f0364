//! # unimark
//!
//! Unicode styled-text export for rich-text notes.
//!
//! This library converts rich markup fragments (bold, italic,
//! underline, strikethrough, paragraphs) into plain Unicode strings
//! that keep their styling on surfaces that strip formatting, such as
//! chat apps and social posts. Bold and italic spans become
//! mathematical alphanumeric symbols; underline and strikethrough
//! spans gain combining marks.
//!
//! ## Quick Start
//!
//! ```
//! use unimark::{to_plain_text, to_styled_text};
//!
//! // Styled export
//! let styled = to_styled_text("<p>Ship it <strong>today</strong></p>");
//! assert_eq!(styled, "Ship it \u{1D601}\u{1D5FC}\u{1D5F1}\u{1D5EE}\u{1D606}");
//!
//! // Unstyled rendering of the same fragment
//! assert_eq!(to_plain_text("<p>Ship it <strong>today</strong></p>"), "Ship it today");
//! ```
//!
//! ## Copying to the clipboard
//!
//! ```no_run
//! use unimark::{copy_styled, BufferSurface, SystemClipboard};
//!
//! let surface = BufferSurface::new("<p><strong>Hi</strong></p>");
//! let mut clipboard = SystemClipboard::new()?;
//! let outcome = copy_styled(&surface, &mut clipboard);
//! if outcome.succeeded() {
//!     println!("Copied with style!");
//! }
//! # Ok::<(), unimark::Error>(())
//! ```
//!
//! ## Persisted note
//!
//! ```no_run
//! use unimark::{Note, NoteStore};
//!
//! let store = NoteStore::open_default()?;
//! let mut note = store.load();
//! note.markup = "<p>Meeting at <u>noon</u></p>".to_string();
//! store.save(&note)?;
//! # Ok::<(), unimark::Error>(())
//! ```
//!
//! ## Features
//!
//! - `clipboard` (default): system clipboard support via arboard

pub mod clipboard;
pub mod copy;
pub mod error;
pub mod stats;
pub mod store;
pub mod style;
pub mod surface;

// Re-exports
pub use clipboard::ClipboardSink;
#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use copy::{copy_styled, copy_styled_with_options, resolve_scope, CopyOutcome};
pub use error::{Error, Result};
pub use stats::TextStats;
pub use store::{Note, NoteStore, SaveDebouncer, DEFAULT_NOTE_MARKUP};
pub use style::{
    clear_formatting, to_plain_text, to_styled_text, to_styled_text_with_options, StyleOptions,
};
pub use surface::{BufferSurface, EditingSurface};

/// Export a markup fragment straight to the system clipboard.
///
/// Convenience wrapper over [`copy_styled`] for callers without an
/// editing surface of their own: the whole fragment is the scope.
///
/// # Example
///
/// ```no_run
/// use unimark::copy_markup;
///
/// let outcome = copy_markup("<p><strong>Done!</strong></p>")?;
/// assert!(outcome.succeeded());
/// # Ok::<(), unimark::Error>(())
/// ```
#[cfg(feature = "clipboard")]
pub fn copy_markup(markup: &str) -> Result<CopyOutcome> {
    let surface = BufferSurface::new(markup);
    let mut clipboard = SystemClipboard::new()?;
    Ok(copy_styled(&surface, &mut clipboard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_on_untagged_input() {
        let input = "The quick brown fox jumps over the lazy dog";
        assert_eq!(to_styled_text(input), input);
    }

    #[test]
    fn test_styled_and_plain_agree_on_structure() {
        let markup = "<p>A</p><p><strong>B</strong></p>";
        assert_eq!(to_plain_text(markup), "A\n\nB");
        assert_eq!(to_styled_text(markup), "A\n\n\u{1D5D5}");
    }
}
