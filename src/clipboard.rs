//! Clipboard sink capability.
//!
//! The export pipeline writes through a [`ClipboardSink`] so the styled
//! transform stays free of any host dependency. [`SystemClipboard`]
//! adapts the real system clipboard behind the `clipboard` cargo
//! feature; tests substitute their own sinks.

use crate::error::Result;

/// A destination for exported text.
pub trait ClipboardSink {
    /// Write text, replacing the current clipboard contents.
    ///
    /// May fail on platforms without a clipboard, in headless sessions,
    /// or when access is denied; callers are expected to handle the
    /// failure with a fallback rather than abort.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

#[cfg(feature = "clipboard")]
mod system {
    use arboard::Clipboard;

    use super::ClipboardSink;
    use crate::error::{Error, Result};

    /// System clipboard backed by arboard.
    pub struct SystemClipboard {
        inner: Clipboard,
    }

    impl SystemClipboard {
        /// Open the system clipboard.
        pub fn new() -> Result<Self> {
            let inner =
                Clipboard::new().map_err(|e| Error::ClipboardAccess(e.to_string()))?;
            Ok(Self { inner })
        }
    }

    impl ClipboardSink for SystemClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.inner
                .set_text(text)
                .map_err(|e| Error::ClipboardWrite(e.to_string()))
        }
    }

    impl std::fmt::Debug for SystemClipboard {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SystemClipboard").finish_non_exhaustive()
        }
    }

    // Actual clipboard round-trips need a display context, which CI
    // environments typically lack; behavior is covered through mock
    // sinks in the integration tests.
}

#[cfg(feature = "clipboard")]
pub use system::SystemClipboard;
