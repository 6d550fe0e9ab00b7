//! crates/debuglog/src/levels.rs
//! Message severities and their mapping onto sink channels.

use std::fmt;
use std::str::FromStr;

use debuglog_sink::Channel;

use crate::error::ParseSeverityError;

/// Ordinal log level shared by messages and thresholds.
///
/// Lower values are more verbose. [`Severity::None`] is meant as a threshold:
/// it sits below every other severity, so a `None` threshold admits
/// everything. A message logged at `None` passes only a `None` threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(i8)]
pub enum Severity {
    /// Reserved threshold value.
    None = -1,
    /// Fine-grained tracing output.
    Trace = 0,
    /// General information.
    Info = 1,
    /// Something unexpected that the application recovered from.
    Warning = 2,
    /// A failure.
    Error = 3,
}

impl Severity {
    /// Every severity a message can carry, most verbose first.
    pub const ALL: [Self; 4] = [Self::Trace, Self::Info, Self::Warning, Self::Error];

    /// Returns the numeric value of the severity.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Converts a numeric value back into a severity.
    #[must_use]
    pub const fn from_i8(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Self::None),
            0 => Some(Self::Trace),
            1 => Some(Self::Info),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            _ => None,
        }
    }

    /// Lower-case name of the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Trace => "trace",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Sink channel used for messages of this severity.
    ///
    /// Trace and info share the informational channel. `None` has no channel.
    #[must_use]
    pub const fn channel(self) -> Option<Channel> {
        match self {
            Self::None => None,
            Self::Trace | Self::Info => Some(Channel::Info),
            Self::Warning => Some(Channel::Warning),
            Self::Error => Some(Channel::Error),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(value) = token.parse::<i8>() {
            return Self::from_i8(value).ok_or_else(|| ParseSeverityError::new(token));
        }

        match token.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "trace" => Ok(Self::Trace),
            "info" | "log" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ParseSeverityError::new(token)),
        }
    }
}

impl TryFrom<i8> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: i8) -> Result<Self, ParseSeverityError> {
        Self::from_i8(value).ok_or_else(|| ParseSeverityError::new(value.to_string()))
    }
}
