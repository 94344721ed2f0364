//! Styling pipeline configuration.

/// Options for the styled-text pipeline.
///
/// Each flag enables one rewrite pass. The defaults run the full
/// pipeline; disabling a pass leaves its tags for the structural
/// cleanup's catch-all strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOptions {
    /// Substitute bold spans through the bold code-point map
    pub bold: bool,

    /// Substitute italic spans through the italic code-point map
    pub italic: bool,

    /// Append a combining low line to each underlined character
    pub underline: bool,

    /// Append a combining long stroke to each struck-through character
    pub strikethrough: bool,

    /// Resolve block structure to newlines, strip leftover tags, trim
    pub cleanup: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            bold: true,
            italic: true,
            underline: true,
            strikethrough: true,
            cleanup: true,
        }
    }
}

impl StyleOptions {
    /// Create options running the full pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable bold substitution.
    pub fn with_bold(mut self, enable: bool) -> Self {
        self.bold = enable;
        self
    }

    /// Enable or disable italic substitution.
    pub fn with_italic(mut self, enable: bool) -> Self {
        self.italic = enable;
        self
    }

    /// Enable or disable underline marks.
    pub fn with_underline(mut self, enable: bool) -> Self {
        self.underline = enable;
        self
    }

    /// Enable or disable strikethrough marks.
    pub fn with_strikethrough(mut self, enable: bool) -> Self {
        self.strikethrough = enable;
        self
    }

    /// Enable or disable structural cleanup.
    pub fn with_cleanup(mut self, enable: bool) -> Self {
        self.cleanup = enable;
        self
    }
}
