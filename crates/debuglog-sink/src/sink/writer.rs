use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::{LineSink, MessageSink};
use crate::{Channel, LineMode};

/// Thread-safe [`LineSink`] backed by any [`Write`] implementor.
///
/// Lines are serialised through a mutex around a [`MessageSink`], so
/// concurrent writers never interleave within a line. Writer errors do not
/// reach the logging call site; they are counted and can be inspected with
/// [`failed_writes`](Self::failed_writes).
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: Mutex<MessageSink<W>>,
    failed_writes: AtomicU64,
}

impl<W> WriterSink<W> {
    /// Wraps `writer`, appending a newline after every line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::from_message_sink(MessageSink::new(writer))
    }

    /// Wraps `writer` with an explicit [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self::from_message_sink(MessageSink::with_line_mode(writer, line_mode))
    }

    /// Wraps a preconfigured [`MessageSink`].
    #[must_use]
    pub fn from_message_sink(sink: MessageSink<W>) -> Self {
        Self {
            inner: Mutex::new(sink),
            failed_writes: AtomicU64::new(0),
        }
    }

    /// Number of lines the underlying writer rejected.
    #[must_use]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Runs `f` with exclusive access to the wrapped [`MessageSink`].
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut MessageSink<W>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .into_inner()
    }

    fn lock(&self) -> MutexGuard<'_, MessageSink<W>> {
        // A panic while holding the lock leaves the writer usable; keep logging.
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn record_failure(&self, error: &std::io::Error) {
        let previous = self.failed_writes.fetch_add(1, Ordering::Relaxed);
        #[cfg(feature = "tracing")]
        if previous == 0 {
            ::tracing::warn!(
                target: "debuglog",
                %error,
                "log writer rejected a line; further failures are only counted"
            );
        }
        #[cfg(not(feature = "tracing"))]
        let _ = (previous, error);
    }
}

impl<W> LineSink for WriterSink<W>
where
    W: Write + Send,
{
    fn write_line(&self, channel: Channel, line: &str) {
        let result = self.lock().write(channel, line);
        if let Err(error) = result {
            self.record_failure(&error);
        }
    }

    fn flush(&self) {
        let result = self.lock().flush();
        if let Err(error) = result {
            self.record_failure(&error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;
    use std::thread;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_lines_into_buffer() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line(Channel::Info, "one");
        sink.write_line(Channel::Error, "two");

        assert_eq!(sink.failed_writes(), 0);
        assert_eq!(sink.into_inner(), b"one\ntwo\n".to_vec());
    }

    #[test]
    fn failures_are_counted_not_propagated() {
        let sink = WriterSink::new(FailingWriter);
        sink.write_line(Channel::Info, "lost");
        sink.write_line(Channel::Warning, "also lost");
        assert_eq!(sink.failed_writes(), 2);
    }

    #[test]
    fn with_sink_exposes_configuration() {
        let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.with_sink(|inner| inner.set_line_mode(LineMode::WithNewline));
        sink.write_line(Channel::Info, "x");
        assert_eq!(sink.into_inner(), b"x\n".to_vec());
    }

    #[test]
    fn concurrent_writers_do_not_interleave_lines() {
        let sink = Arc::new(WriterSink::new(Vec::new()));
        let handles: Vec<_> = (0..4)
            .map(|id| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for n in 0..50 {
                        sink.write_line(Channel::Info, &format!("worker{id}-line{n}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }

        let sink = Arc::try_unwrap(sink).expect("sole owner");
        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output.lines().count(), 200);
        assert!(output.lines().all(|line| line.starts_with("worker")));
    }
}
