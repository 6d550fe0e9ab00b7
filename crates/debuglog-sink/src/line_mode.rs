/// Controls whether a [`MessageSink`](crate::MessageSink) terminates each line it writes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum LineMode {
    /// Append a newline terminator after each line.
    #[default]
    WithNewline,
    /// Emit the line without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline.
    ///
    /// Hosts that already write through a line-oriented API (a platform log
    /// buffer, for instance) use [`LineMode::WithoutNewline`] so the sink does
    /// not double up terminators.
    ///
    /// # Examples
    ///
    /// ```
    /// use debuglog_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl From<bool> for LineMode {
    /// `true` maps to [`LineMode::WithNewline`], `false` to [`LineMode::WithoutNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests;
