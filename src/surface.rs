//! Editing-surface capability.
//!
//! The export pipeline is agnostic to where markup comes from; an
//! editing surface is anything that can hand over the current selection
//! and the whole document as markup strings. [`BufferSurface`] is the
//! in-memory implementation used by the CLI and tests.

use crate::error::{Error, Result};

/// A source of markup for export.
pub trait EditingSurface {
    /// Markup of the active selection, if one exists.
    fn selection_markup(&self) -> Option<String>;

    /// Markup of the whole document.
    fn document_markup(&self) -> String;
}

/// In-memory editing surface over a markup string.
///
/// The selection is a byte range into the markup, validated against
/// UTF-8 character boundaries when set.
///
/// # Example
///
/// ```
/// use unimark::{BufferSurface, EditingSurface};
///
/// let mut surface = BufferSurface::new("<p>Hello</p>");
/// assert!(surface.selection_markup().is_none());
///
/// surface.select(3, 8)?;
/// assert_eq!(surface.selection_markup().as_deref(), Some("Hello"));
/// # Ok::<(), unimark::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferSurface {
    markup: String,
    selection: Option<(usize, usize)>,
}

impl BufferSurface {
    /// Create a surface over the given document markup, no selection.
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            selection: None,
        }
    }

    /// Create a surface with an active selection.
    pub fn with_selection(markup: impl Into<String>, start: usize, end: usize) -> Result<Self> {
        let mut surface = Self::new(markup);
        surface.select(start, end)?;
        Ok(surface)
    }

    /// Set the active selection to `start..end` (byte offsets).
    pub fn select(&mut self, start: usize, end: usize) -> Result<()> {
        if start > end || end > self.markup.len() {
            return Err(Error::InvalidSelection(format!(
                "{start}..{end} is out of bounds for {} bytes",
                self.markup.len()
            )));
        }
        if !self.markup.is_char_boundary(start) || !self.markup.is_char_boundary(end) {
            return Err(Error::InvalidSelection(format!(
                "{start}..{end} splits a character"
            )));
        }
        self.selection = Some((start, end));
        Ok(())
    }

    /// Drop the active selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Replace the document markup, dropping any selection.
    pub fn set_markup(&mut self, markup: impl Into<String>) {
        self.markup = markup.into();
        self.selection = None;
    }
}

impl EditingSurface for BufferSurface {
    fn selection_markup(&self) -> Option<String> {
        self.selection
            .map(|(start, end)| self.markup[start..end].to_string())
    }

    fn document_markup(&self) -> String {
        self.markup.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_markup() {
        let surface = BufferSurface::new("<p>doc</p>");
        assert_eq!(surface.document_markup(), "<p>doc</p>");
        assert!(surface.selection_markup().is_none());
    }

    #[test]
    fn test_selection_markup() {
        let surface = BufferSurface::with_selection("<p>doc</p>", 3, 6).unwrap();
        assert_eq!(surface.selection_markup().as_deref(), Some("doc"));
    }

    #[test]
    fn test_selection_out_of_bounds() {
        let mut surface = BufferSurface::new("abc");
        assert!(surface.select(0, 4).is_err());
        assert!(surface.select(2, 1).is_err());
    }

    #[test]
    fn test_selection_on_char_boundary() {
        let mut surface = BufferSurface::new("héllo");
        // 'é' occupies bytes 1..3; byte 2 is inside it.
        assert!(surface.select(0, 2).is_err());
        assert!(surface.select(0, 3).is_ok());
    }

    #[test]
    fn test_set_markup_clears_selection() {
        let mut surface = BufferSurface::with_selection("abc", 0, 1).unwrap();
        surface.set_markup("xyz");
        assert!(surface.selection_markup().is_none());
        assert_eq!(surface.document_markup(), "xyz");
    }
}
