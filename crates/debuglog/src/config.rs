//! crates/debuglog/src/config.rs
//! Threshold and build-mode settings for a logger.

use crate::error::ConfigError;
use crate::levels::Severity;

/// Environment variable holding the debug-build threshold.
pub const DEBUG_LEVEL_VAR: &str = "DEBUGLOG_DEBUG_LEVEL";
/// Environment variable holding the release-build threshold.
pub const RELEASE_LEVEL_VAR: &str = "DEBUGLOG_RELEASE_LEVEL";
/// Environment variable forcing the build mode.
pub const DEBUG_BUILD_VAR: &str = "DEBUGLOG_DEBUG_BUILD";

/// Settings a [`LevelPolicy`](crate::LevelPolicy) starts from.
///
/// Defaults emit `Info` and above in debug builds and only `Error` in
/// release builds, resolving the build mode lazily.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Minimum severity emitted in debug builds.
    pub debug_threshold: Severity,
    /// Minimum severity emitted in release builds.
    pub release_threshold: Severity,
    /// Forces debug (`Some(true)`) or release (`Some(false)`) mode instead of
    /// asking the build-mode source.
    pub debug_build_override: Option<bool>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug_threshold: Severity::Info,
            release_threshold: Severity::Error,
            debug_build_override: None,
        }
    }
}

impl LogConfig {
    /// Sets the debug-build threshold.
    pub fn with_debug_threshold(mut self, threshold: Severity) -> Self {
        self.debug_threshold = threshold;
        self
    }

    /// Sets the release-build threshold.
    pub fn with_release_threshold(mut self, threshold: Severity) -> Self {
        self.release_threshold = threshold;
        self
    }

    /// Sets or clears the build-mode override.
    pub fn with_debug_build_override(mut self, debug_build: Option<bool>) -> Self {
        self.debug_build_override = debug_build;
        self
    }

    /// Reads overrides from the process environment.
    ///
    /// Unset variables keep their defaults. See [`DEBUG_LEVEL_VAR`],
    /// [`RELEASE_LEVEL_VAR`] and [`DEBUG_BUILD_VAR`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through
    /// `lookup`.
    ///
    /// ```
    /// use debuglog::{LogConfig, Severity};
    ///
    /// let config = LogConfig::from_lookup(|name| match name {
    ///     "DEBUGLOG_RELEASE_LEVEL" => Some("warning".to_owned()),
    ///     "DEBUGLOG_DEBUG_BUILD" => Some("release".to_owned()),
    ///     _ => None,
    /// })?;
    ///
    /// assert_eq!(config.release_threshold, Severity::Warning);
    /// assert_eq!(config.debug_build_override, Some(false));
    /// assert_eq!(config.debug_threshold, Severity::Info);
    /// # Ok::<(), debuglog::ConfigError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DEBUG_LEVEL_VAR) {
            config.debug_threshold = parse_severity(DEBUG_LEVEL_VAR, &value)?;
        }
        if let Some(value) = lookup(RELEASE_LEVEL_VAR) {
            config.release_threshold = parse_severity(RELEASE_LEVEL_VAR, &value)?;
        }
        if let Some(value) = lookup(DEBUG_BUILD_VAR) {
            config.debug_build_override = Some(parse_build_mode(DEBUG_BUILD_VAR, &value)?);
        }

        Ok(config)
    }
}

fn parse_severity(variable: &'static str, value: &str) -> Result<Severity, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::Severity { variable, source })
}

fn parse_build_mode(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "debug" => Ok(true),
        "0" | "false" | "no" | "release" => Ok(false),
        _ => Err(ConfigError::BuildMode {
            variable,
            value: value.to_owned(),
        }),
    }
}
