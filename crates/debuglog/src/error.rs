//! crates/debuglog/src/error.rs
//! Error types surfaced by the facility.

/// A severity name or number that does not match any [`Severity`](crate::Severity).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{token}' (expected none, trace, info, warning, error or -1..=3)")]
pub struct ParseSeverityError {
    token: String,
}

impl ParseSeverityError {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Fault raised by a malformed format template.
///
/// Positions are byte offsets into the template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A placeholder names an argument that was not supplied.
    #[error("placeholder {{{index}}} at byte {position} has no argument ({available} supplied)")]
    MissingArgument {
        /// Index named by the placeholder.
        index: usize,
        /// Number of arguments supplied.
        available: usize,
        /// Offset of the opening brace.
        position: usize,
    },
    /// A `{` was never closed.
    #[error("unterminated placeholder starting at byte {position}")]
    Unterminated {
        /// Offset of the opening brace.
        position: usize,
    },
    /// A lone `}` outside any placeholder.
    #[error("unmatched '}}' at byte {position}")]
    UnmatchedClose {
        /// Offset of the stray brace.
        position: usize,
    },
    /// The placeholder body could not be parsed.
    #[error("invalid placeholder '{{{body}}}' at byte {position}")]
    InvalidPlaceholder {
        /// Text between the braces.
        body: String,
        /// Offset of the opening brace.
        position: usize,
    },
}

/// Invalid value found while building a [`LogConfig`](crate::LogConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A threshold variable held an unknown severity.
    #[error("{variable}: {source}")]
    Severity {
        /// Name of the offending variable.
        variable: &'static str,
        /// Parse failure.
        #[source]
        source: ParseSeverityError,
    },
    /// The build-mode variable held something other than a boolean.
    #[error("{variable}: expected true/false, 1/0 or debug/release, found '{value}'")]
    BuildMode {
        /// Name of the offending variable.
        variable: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Returned by [`set_logger`](crate::set_logger) once the process-wide logger exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the process-wide logger has already been initialised")]
pub struct SetLoggerError(pub(crate) ());
