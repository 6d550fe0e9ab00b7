//! crates/debuglog/src/global.rs
//! The process-wide logger used by the macros.

use std::sync::OnceLock;

use debuglog_sink::ConsoleSink;

use crate::config::LogConfig;
use crate::error::{ConfigError, SetLoggerError};
use crate::logger::Logger;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
///
/// Built on first use from [`LogConfig::from_env`] with a [`ConsoleSink`],
/// unless [`set_logger`] installed one earlier. An invalid environment
/// falls back to [`LogConfig::default`]. The thread making the first call
/// owns build-mode resolution.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(config_from_env(), ConsoleSink::new()))
}

/// Installs `logger` as the process-wide logger.
///
/// Fails once the global logger exists, whether it came from an earlier
/// `set_logger` or from a call to [`logger`].
pub fn set_logger(logger: Logger) -> Result<(), SetLoggerError> {
    LOGGER.set(logger).map_err(|_| SetLoggerError(()))
}

fn config_from_env() -> LogConfig {
    match LogConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            report_config_error(&error);
            LogConfig::default()
        }
    }
}

#[cfg(feature = "tracing")]
fn report_config_error(error: &ConfigError) {
    ::tracing::warn!(target: "debuglog", %error, "ignoring invalid logger configuration");
}

#[cfg(not(feature = "tracing"))]
const fn report_config_error(_error: &ConfigError) {}
