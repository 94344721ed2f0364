//! Text statistics.
//!
//! Counts are computed client-side over the plain-text rendering of the
//! markup, in a single pass. They feed the word-count display and the
//! CLI `stats` command.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::style::to_plain_text;

/// Statistics for a note's text content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Whitespace-delimited word count
    pub words: usize,

    /// Characters including whitespace
    pub characters: usize,

    /// Characters excluding whitespace
    pub characters_no_spaces: usize,

    /// Line count (a non-empty text has at least one)
    pub lines: usize,

    /// Paragraphs: runs of non-blank lines
    pub paragraphs: usize,

    /// Widest line in terminal cells
    pub display_width: usize,
}

impl TextStats {
    /// Compute statistics for a markup fragment.
    ///
    /// The fragment is rendered to plain text first, so tags never
    /// count as content.
    ///
    /// # Example
    ///
    /// ```
    /// use unimark::TextStats;
    ///
    /// let stats = TextStats::from_markup("<p>Hello <strong>world</strong></p>");
    /// assert_eq!(stats.words, 2);
    /// assert_eq!(stats.paragraphs, 1);
    /// ```
    pub fn from_markup(markup: &str) -> Self {
        Self::from_text(&to_plain_text(markup))
    }

    /// Compute statistics for plain text.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        let mut stats = Self {
            words: text.split_whitespace().count(),
            display_width: text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0),
            ..Self::default()
        };

        let mut prev_blank = true;
        for line in text.lines() {
            stats.lines += 1;
            let blank = line.trim().is_empty();
            if !blank && prev_blank {
                stats.paragraphs += 1;
            }
            prev_blank = blank;
        }

        for ch in text.chars() {
            stats.characters += 1;
            if !ch.is_whitespace() {
                stats.characters_no_spaces += 1;
            }
        }

        stats
    }

    /// Render a compact status line, e.g. `12 words · 68 chars`.
    pub fn summary(&self) -> String {
        format!("{} words · {} chars", self.words, self.characters)
    }
}
