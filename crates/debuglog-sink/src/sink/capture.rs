//! In-memory sink that keeps every line it receives.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::LineSink;
use crate::Channel;

/// A line recorded by [`CaptureSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedLine {
    /// Channel the line was written to.
    pub channel: Channel,
    /// The complete line, caller label included.
    pub text: String,
}

/// Records lines in memory in the order they were written.
///
/// Useful for tests and for hosts that want to show recent log output in
/// their own UI.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<CapturedLine>>,
}

impl CaptureSink {
    /// Creates an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line captured so far.
    #[must_use]
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lock().clone()
    }

    /// Returns only the text of every captured line.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.lock().iter().map(|line| line.text.clone()).collect()
    }

    /// Removes and returns all captured lines.
    pub fn drain(&self) -> Vec<CapturedLine> {
        self.lock().drain(..).collect()
    }

    /// Number of captured lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LineSink for CaptureSink {
    fn write_line(&self, channel: Channel, line: &str) {
        self.lock().push(CapturedLine {
            channel,
            text: line.to_owned(),
        });
    }
}
