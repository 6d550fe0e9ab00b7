use std::io::{self, Write};

use super::LineSink;
use crate::Channel;

/// Writes informational lines to stdout and warnings or errors to stderr.
///
/// Each line is written while holding the stream's lock so concurrent
/// callers never interleave within a line. Console write failures (a closed
/// pipe, typically) are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    _private: (),
}

impl ConsoleSink {
    /// Creates a console sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

fn write_locked(mut out: impl Write, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}

impl LineSink for ConsoleSink {
    fn write_line(&self, channel: Channel, line: &str) {
        let _ = if channel.is_diagnostic() {
            write_locked(io::stderr().lock(), line)
        } else {
            write_locked(io::stdout().lock(), line)
        };
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}
