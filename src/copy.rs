//! The copy pipeline: scope resolution, styled export, clipboard write,
//! plain-text fallback.
//!
//! The exporter itself cannot fail; the clipboard can. This module owns
//! the caller-side policy around that: which markup gets exported, and
//! what happens when the styled write is rejected.

use log::{error, warn};

use crate::clipboard::ClipboardSink;
use crate::style::{to_plain_text, to_styled_text_with_options, StyleOptions};
use crate::surface::EditingSurface;

/// Which payload reached the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The styled text was written.
    Styled,
    /// The styled write was rejected; the plain rendering was written.
    PlainFallback,
    /// Both writes were rejected. Logged, not raised.
    Failed,
}

impl CopyOutcome {
    /// True when something reached the clipboard.
    pub fn succeeded(&self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Resolve the markup scope for an export.
///
/// The active selection wins when it exists and renders to non-blank
/// text; otherwise the whole document is exported.
pub fn resolve_scope<S: EditingSurface>(surface: &S) -> String {
    if let Some(selection) = surface.selection_markup() {
        if !to_plain_text(&selection).is_empty() {
            return selection;
        }
    }
    surface.document_markup()
}

/// Export the surface's current scope and write it to the sink.
///
/// On a rejected styled write, retries once with the unstyled plain
/// rendering of the same scope. A rejection of the fallback too is
/// logged and reported as [`CopyOutcome::Failed`], never as an error:
/// the copy action is best-effort by design.
///
/// # Example
///
/// ```no_run
/// use unimark::{copy_styled, BufferSurface, SystemClipboard};
///
/// let surface = BufferSurface::new("<p><strong>Hi</strong></p>");
/// let mut clipboard = SystemClipboard::new()?;
/// let outcome = copy_styled(&surface, &mut clipboard);
/// assert!(outcome.succeeded());
/// # Ok::<(), unimark::Error>(())
/// ```
pub fn copy_styled<S, C>(surface: &S, sink: &mut C) -> CopyOutcome
where
    S: EditingSurface,
    C: ClipboardSink,
{
    copy_styled_with_options(surface, sink, &StyleOptions::default())
}

/// Like [`copy_styled`], with explicit style options.
pub fn copy_styled_with_options<S, C>(
    surface: &S,
    sink: &mut C,
    options: &StyleOptions,
) -> CopyOutcome
where
    S: EditingSurface,
    C: ClipboardSink,
{
    let scope = resolve_scope(surface);
    let styled = to_styled_text_with_options(&scope, options);

    match sink.write_text(&styled) {
        Ok(()) => CopyOutcome::Styled,
        Err(err) => {
            warn!("styled clipboard write failed, falling back to plain text: {err}");
            let plain = to_plain_text(&scope);
            match sink.write_text(&plain) {
                Ok(()) => CopyOutcome::PlainFallback,
                Err(err) => {
                    error!("plain-text clipboard write failed: {err}");
                    CopyOutcome::Failed
                }
            }
        }
    }
}
