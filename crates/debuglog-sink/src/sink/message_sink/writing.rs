use super::MessageSink;
use crate::Channel;
use crate::line_mode::LineMode;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes a single line using the sink's current [`LineMode`].
    pub fn write(&mut self, channel: Channel, line: &str) -> io::Result<()> {
        self.write_with_mode(channel, line, self.line_mode)
    }

    /// Writes `line` using an explicit [`LineMode`] without mutating the sink.
    pub fn write_with_mode(
        &mut self,
        channel: Channel,
        line: &str,
        line_mode: LineMode,
    ) -> io::Result<()> {
        if self.channel_tags {
            write!(self.writer, "{channel}: ")?;
        }
        self.writer.write_all(line.as_bytes())?;

        if line_mode.append_newline() && !line.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }

        Ok(())
    }

    /// Writes each `(channel, line)` pair from the iterator.
    ///
    /// Stops at the first writer error and returns it.
    pub fn write_all<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = (Channel, S)>,
        S: AsRef<str>,
    {
        for (channel, line) in lines {
            self.write(channel, line.as_ref())?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
