use std::fmt;

use crate::line_mode::LineMode;

/// Streaming sink that writes log lines into an [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with the configured
/// [`LineMode`]. Each call to [`write`](Self::write) emits one line,
/// optionally prefixed by its channel name when channel tags are enabled.
/// `MessageSink` is single-owner; wrap it in a [`WriterSink`](crate::WriterSink)
/// to share it between threads.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use debuglog_sink::{Channel, MessageSink};
///
/// let mut sink = MessageSink::new(Vec::new());
///
/// sink.write(Channel::Warning, "Level.load: slow asset")?;
/// sink.write(Channel::Error, "Level.load: missing asset")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 2);
/// assert!(output.ends_with('\n'));
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Tag each line with its channel and skip the terminator:
///
/// ```
/// use debuglog_sink::{Channel, LineMode, MessageSink};
///
/// let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline)
///     .with_channel_tags(true);
/// sink.write(Channel::Warning, "ready")?;
///
/// assert_eq!(sink.into_inner(), b"warning: ready".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    line_mode: LineMode,
    channel_tags: bool,
}

mod constructors;
mod writing;

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .field("channel_tags", &self.channel_tags)
            .finish()
    }
}
