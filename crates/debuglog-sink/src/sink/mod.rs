//! crates/debuglog-sink/src/sink/mod.rs
//! The [`LineSink`] seam and its bundled implementations.

use std::sync::Arc;

use crate::Channel;

mod capture;
mod console;
mod message_sink;
#[cfg(feature = "tracing")]
mod tracing;
mod writer;

pub use capture::{CaptureSink, CapturedLine};
pub use console::ConsoleSink;
pub use message_sink::MessageSink;
#[cfg(feature = "tracing")]
pub use self::tracing::TracingSink;
pub use writer::WriterSink;

/// Destination for fully rendered log lines.
///
/// Implementations receive one pre-formatted line per call together with the
/// [`Channel`] it belongs to. The trait is object safe so a logger can hold a
/// `Box<dyn LineSink>`; `Send + Sync` is required because a single logger is
/// shared by every thread in the process.
///
/// Writing is infallible from the caller's side. A sink that can fail must
/// absorb the error itself.
pub trait LineSink: Send + Sync {
    /// Writes `line` to the destination associated with `channel`.
    fn write_line(&self, channel: Channel, line: &str);

    /// Flushes any buffered output. The default does nothing.
    fn flush(&self) {}
}

impl<S: LineSink + ?Sized> LineSink for &S {
    fn write_line(&self, channel: Channel, line: &str) {
        (**self).write_line(channel, line);
    }

    fn flush(&self) {
        (**self).flush();
    }
}

impl<S: LineSink + ?Sized> LineSink for Box<S> {
    fn write_line(&self, channel: Channel, line: &str) {
        (**self).write_line(channel, line);
    }

    fn flush(&self) {
        (**self).flush();
    }
}

impl<S: LineSink + ?Sized> LineSink for Arc<S> {
    fn write_line(&self, channel: Channel, line: &str) {
        (**self).write_line(channel, line);
    }

    fn flush(&self) {
        (**self).flush();
    }
}
