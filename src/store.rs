//! Note persistence.
//!
//! The note lives as a small JSON file in the platform data directory:
//! `%APPDATA%\unimark\` on Windows, `~/Library/Application Support/unimark/`
//! on macOS, `~/.local/share/unimark/` on Linux. Saves are atomic
//! (write to a temp file, back up the previous note, rename) and loads
//! fall back to the default note on a missing or corrupted file, so the
//! editor always has something to show.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::stats::TextStats;
use crate::style::to_plain_text;

/// Application name used for the data directory.
const APP_NAME: &str = "unimark";

/// Note file name.
const NOTE_FILE_NAME: &str = "note.json";

/// Markup of a fresh note.
pub const DEFAULT_NOTE_MARKUP: &str = "<p>Start writing...</p>";

/// A persisted note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    /// Markup content of the note.
    pub markup: String,
}

impl Default for Note {
    fn default() -> Self {
        Self {
            markup: DEFAULT_NOTE_MARKUP.to_string(),
        }
    }
}

impl Note {
    /// Create a note with the given markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// The note's unstyled text.
    pub fn plain_text(&self) -> String {
        to_plain_text(&self.markup)
    }

    /// Statistics over the note's text.
    pub fn stats(&self) -> TextStats {
        TextStats::from_markup(&self.markup)
    }
}

/// Loads and saves the note file.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Store at the platform default location.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::data_dir().ok_or(Error::StoreDir)?.join(APP_NAME);
        Ok(Self {
            path: dir.join(NOTE_FILE_NAME),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the note file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the note.
    ///
    /// A missing file yields the default note; a corrupted file logs a
    /// warning and yields the default note. This never fails.
    pub fn load(&self) -> Note {
        match self.try_load() {
            Ok(note) => note,
            Err(err) => {
                warn!(
                    "failed to load note from {}, using default: {err}",
                    self.path.display()
                );
                Note::default()
            }
        }
    }

    /// Load the note, surfacing read and parse failures.
    pub fn try_load(&self) -> Result<Note> {
        if !self.path.exists() {
            debug!("note file not found at {}, using default", self.path.display());
            return Ok(Note::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|e| Error::Store {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Save the note atomically.
    ///
    /// Creates the parent directory on first save and keeps a `.bak`
    /// copy of the previous note file.
    pub fn save(&self, note: &Note) -> Result<()> {
        let dir = self.path.parent().ok_or(Error::StoreDir)?;
        if !dir.exists() {
            debug!("creating note directory: {}", dir.display());
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(note).map_err(|e| Error::Store {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;

        if self.path.exists() {
            fs::copy(&self.path, self.path.with_extension("json.bak"))?;
        }
        fs::rename(&tmp, &self.path)?;

        debug!("note saved to {}", self.path.display());
        Ok(())
    }
}

/// Interval gate for note saves.
///
/// The editor feeds every content change through [`accept`]; the
/// debouncer keeps the latest content pending and writes at most once
/// per interval. [`flush`] forces the pending write, for shutdown.
///
/// [`accept`]: SaveDebouncer::accept
/// [`flush`]: SaveDebouncer::flush
#[derive(Debug)]
pub struct SaveDebouncer {
    store: NoteStore,
    interval: Duration,
    last_save: Option<Instant>,
    pending: Option<String>,
}

impl SaveDebouncer {
    /// Default save interval.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);

    /// Debouncer with the default interval.
    pub fn new(store: NoteStore) -> Self {
        Self::with_interval(store, Self::DEFAULT_INTERVAL)
    }

    /// Debouncer with an explicit interval.
    pub fn with_interval(store: NoteStore, interval: Duration) -> Self {
        Self {
            store,
            interval,
            last_save: None,
            pending: None,
        }
    }

    /// Record changed content; write when the interval has elapsed.
    ///
    /// Returns whether a write happened.
    pub fn accept(&mut self, markup: impl Into<String>) -> Result<bool> {
        self.pending = Some(markup.into());

        let due = match self.last_save {
            Some(at) => at.elapsed() >= self.interval,
            None => true,
        };
        if due {
            self.write_pending()?;
        }
        Ok(due)
    }

    /// Write any pending content immediately.
    pub fn flush(&mut self) -> Result<()> {
        self.write_pending()
    }

    /// True when content is waiting for the next interval.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn write_pending(&mut self) -> Result<()> {
        if let Some(markup) = self.pending.take() {
            self.store.save(&Note::new(markup))?;
            self.last_save = Some(Instant::now());
        }
        Ok(())
    }
}
