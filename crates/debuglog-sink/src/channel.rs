//! crates/debuglog-sink/src/channel.rs
//! Logical output channels understood by every sink.

use std::fmt;

/// Destination channel for a rendered log line.
///
/// Trace and info messages share the informational channel; warnings and
/// errors each have their own so hosts can colour or route them separately.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Channel {
    /// Informational output.
    Info,
    /// Warnings.
    Warning,
    /// Errors.
    Error,
}

impl Channel {
    /// Returns the lower-case channel name used in tagged output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Reports whether the console sink sends this channel to stderr.
    #[must_use]
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
