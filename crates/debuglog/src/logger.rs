//! crates/debuglog/src/logger.rs
//! The logging facade: gate, label, render, write.
//!
//! Every entry point follows the same order. The [`LevelPolicy`] is asked
//! first and a disabled call returns before the caller label is resolved or
//! any value is rendered. An enabled call builds
//! `"<Type>.<Function>: <body>"` and hands it to the sink on the channel
//! matching its severity.

use std::fmt;

use debuglog_sink::{Channel, ConsoleSink, LineSink};

use crate::caller::CallerContext;
use crate::config::LogConfig;
use crate::error::FormatError;
use crate::levels::Severity;
use crate::policy::{BuildModeSource, CompileTimeBuildMode, LevelPolicy};
use crate::render::{Loggable, join_values, render_each};
use crate::template::format_template;

/// A level policy paired with the sink its lines go to.
///
/// ```
/// use std::sync::Arc;
/// use debuglog::{CallerContext, CaptureSink, FixedBuildMode, Logger};
///
/// let capture = Arc::new(CaptureSink::new());
/// let logger = Logger::builder()
///     .sink(Arc::clone(&capture))
///     .build_mode_source(FixedBuildMode(true))
///     .build();
///
/// let caller = CallerContext::named("Inventory", "add");
/// logger.info(&caller, &[&"sword", &vec![1, 2]]);
/// logger.trace(&caller, &[&"hidden"]);
///
/// assert_eq!(capture.texts(), ["Inventory.add: sword | [ 1, 2 ]"]);
/// ```
pub struct Logger {
    policy: LevelPolicy,
    sink: Box<dyn LineSink>,
}

impl Logger {
    /// Logger with `config`, writing to `sink`, taking the build mode from
    /// the compilation profile.
    pub fn new(config: LogConfig, sink: impl LineSink + 'static) -> Self {
        Self::builder().config(config).sink(sink).build()
    }

    /// Starts a [`LoggerBuilder`].
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// The level policy. Thresholds and the build-mode override can be
    /// changed through it at any time, from any thread.
    pub fn policy(&self) -> &LevelPolicy {
        &self.policy
    }

    /// Reports whether a message at `severity` would currently be written.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.policy.should_log(severity)
    }

    /// Logs `values` rendered and joined with `" | "`.
    ///
    /// An empty `values` slice logs `<NOTHING_TO_LOG>`.
    pub fn log_values(&self, severity: Severity, caller: &CallerContext, values: &[&dyn Loggable]) {
        if !self.enabled(severity) {
            return;
        }
        let mut line = caller.label();
        line.push_str(&join_values(values));
        self.emit(severity, &line);
    }

    /// Logs `template` with each of `args` rendered and substituted.
    ///
    /// A disabled call returns `Ok(())` without looking at the template.
    /// A malformed template or a placeholder without an argument writes
    /// nothing and returns the fault.
    pub fn log_formatted(
        &self,
        severity: Severity,
        caller: &CallerContext,
        template: &str,
        args: &[&dyn Loggable],
    ) -> Result<(), FormatError> {
        if !self.enabled(severity) {
            return Ok(());
        }
        let body = format_template(template, &render_each(args))?;
        let mut line = caller.label();
        line.push_str(&body);
        self.emit(severity, &line);
        Ok(())
    }

    /// Logs at [`Severity::Trace`].
    pub fn trace(&self, caller: &CallerContext, values: &[&dyn Loggable]) {
        self.log_values(Severity::Trace, caller, values);
    }

    /// Logs at [`Severity::Info`].
    pub fn info(&self, caller: &CallerContext, values: &[&dyn Loggable]) {
        self.log_values(Severity::Info, caller, values);
    }

    /// Logs at [`Severity::Warning`].
    pub fn warn(&self, caller: &CallerContext, values: &[&dyn Loggable]) {
        self.log_values(Severity::Warning, caller, values);
    }

    /// Logs at [`Severity::Error`].
    pub fn error(&self, caller: &CallerContext, values: &[&dyn Loggable]) {
        self.log_values(Severity::Error, caller, values);
    }

    /// Formatted log at [`Severity::Trace`].
    pub fn trace_fmt(
        &self,
        caller: &CallerContext,
        template: &str,
        args: &[&dyn Loggable],
    ) -> Result<(), FormatError> {
        self.log_formatted(Severity::Trace, caller, template, args)
    }

    /// Formatted log at [`Severity::Info`].
    pub fn info_fmt(
        &self,
        caller: &CallerContext,
        template: &str,
        args: &[&dyn Loggable],
    ) -> Result<(), FormatError> {
        self.log_formatted(Severity::Info, caller, template, args)
    }

    /// Formatted log at [`Severity::Warning`].
    pub fn warn_fmt(
        &self,
        caller: &CallerContext,
        template: &str,
        args: &[&dyn Loggable],
    ) -> Result<(), FormatError> {
        self.log_formatted(Severity::Warning, caller, template, args)
    }

    /// Formatted log at [`Severity::Error`].
    pub fn error_fmt(
        &self,
        caller: &CallerContext,
        template: &str,
        args: &[&dyn Loggable],
    ) -> Result<(), FormatError> {
        self.log_formatted(Severity::Error, caller, template, args)
    }

    /// Flushes the sink.
    pub fn flush(&self) {
        self.sink.flush();
    }

    // Severity::None has no channel of its own; it only passes the gate when
    // the threshold is None as well, and then goes out as informational.
    fn emit(&self, severity: Severity, line: &str) {
        let channel = severity.channel().unwrap_or(Channel::Info);
        self.sink.write_line(channel, line);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`].
///
/// Unset parts default to [`LogConfig::default`], a [`ConsoleSink`] and
/// [`CompileTimeBuildMode`].
#[derive(Default)]
pub struct LoggerBuilder {
    config: LogConfig,
    sink: Option<Box<dyn LineSink>>,
    build_mode_source: Option<Box<dyn BuildModeSource>>,
}

impl LoggerBuilder {
    /// Initial thresholds and build-mode override.
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Where lines are written.
    pub fn sink(mut self, sink: impl LineSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// How the build mode is determined when no override is configured.
    pub fn build_mode_source(mut self, source: impl BuildModeSource + 'static) -> Self {
        self.build_mode_source = Some(Box::new(source));
        self
    }

    /// Builds the logger. The calling thread becomes the one allowed to
    /// resolve the build mode.
    pub fn build(self) -> Logger {
        let source = self
            .build_mode_source
            .unwrap_or_else(|| Box::new(CompileTimeBuildMode));
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::new()));
        Logger {
            policy: LevelPolicy::new(&self.config, source),
            sink,
        }
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("sink", &self.sink.is_some())
            .field("build_mode_source", &self.build_mode_source.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::FixedBuildMode;
    use debuglog_sink::CaptureSink;
    use std::cell::Cell;
    use std::sync::Arc;

    fn capture_logger(debug: bool) -> (Logger, Arc<CaptureSink>) {
        let capture = Arc::new(CaptureSink::new());
        let logger = Logger::builder()
            .sink(Arc::clone(&capture))
            .build_mode_source(FixedBuildMode(debug))
            .build();
        (logger, capture)
    }

    struct Counted<'a>(&'a Cell<usize>);

    impl Loggable for Counted<'_> {
        fn to_value(&self) -> crate::Value<'_> {
            self.0.set(self.0.get() + 1);
            crate::Value::text("counted")
        }
    }

    const CALLER: CallerContext = CallerContext::named("Game", "tick");

    #[test]
    fn enabled_message_is_labelled_and_joined() {
        let (logger, capture) = capture_logger(true);
        logger.info(&CALLER, &[&"a", &1, &None::<u8>]);

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].channel, Channel::Info);
        assert_eq!(lines[0].text, "Game.tick: a | 1 | <NULL>");
    }

    #[test]
    fn empty_value_list_logs_nothing_marker() {
        let (logger, capture) = capture_logger(true);
        logger.warn(&CALLER, &[]);
        assert_eq!(capture.texts(), ["Game.tick: <NOTHING_TO_LOG>"]);
    }

    #[test]
    fn severities_map_to_channels() {
        let (logger, capture) = capture_logger(true);
        logger.policy().set_debug_threshold(Severity::Trace);
        logger.trace(&CALLER, &[&"t"]);
        logger.info(&CALLER, &[&"i"]);
        logger.warn(&CALLER, &[&"w"]);
        logger.error(&CALLER, &[&"e"]);

        let channels: Vec<_> = capture.lines().into_iter().map(|l| l.channel).collect();
        assert_eq!(
            channels,
            [Channel::Info, Channel::Info, Channel::Warning, Channel::Error]
        );
    }

    #[test]
    fn disabled_call_renders_nothing() {
        let (logger, capture) = capture_logger(false);
        let renders = Cell::new(0);
        logger.warn(&CALLER, &[&Counted(&renders)]);
        logger
            .warn_fmt(&CALLER, "{0}", &[&Counted(&renders)])
            .unwrap();
        assert_eq!(renders.get(), 0);
        assert!(capture.is_empty());

        logger.error(&CALLER, &[&Counted(&renders)]);
        assert_eq!(renders.get(), 1);
        assert_eq!(capture.len(), 1);
    }

    #[test]
    fn formatted_message_substitutes_rendered_arguments() {
        let (logger, capture) = capture_logger(true);
        logger
            .info_fmt(&CALLER, "{0} has {1}", &[&"bag", &vec!["key", "map"]])
            .unwrap();
        assert_eq!(capture.texts(), ["Game.tick: bag has [ key, map ]"]);
    }

    #[test]
    fn format_fault_writes_nothing() {
        let (logger, capture) = capture_logger(true);
        let err = logger
            .error_fmt(&CALLER, "{0} and {1}", &[&"only"])
            .unwrap_err();
        assert!(matches!(err, FormatError::MissingArgument { index: 1, .. }));
        assert!(capture.is_empty());
    }

    #[test]
    fn disabled_format_call_skips_template_validation() {
        let (logger, capture) = capture_logger(true);
        assert_eq!(logger.trace_fmt(&CALLER, "{9}", &[]), Ok(()));
        assert!(capture.is_empty());
    }

    #[test]
    fn unknown_caller_has_no_prefix() {
        let (logger, capture) = capture_logger(true);
        logger.error(&CallerContext::unknown(), &[&"bare"]);
        assert_eq!(capture.texts(), ["bare"]);
    }

    #[test]
    fn none_severity_only_passes_a_none_threshold() {
        let (logger, capture) = capture_logger(true);
        logger.log_values(Severity::None, &CALLER, &[&"quiet"]);
        assert!(capture.is_empty());

        logger.policy().set_debug_threshold(Severity::None);
        logger.log_values(Severity::None, &CALLER, &[&"loud"]);
        assert_eq!(capture.lines()[0].channel, Channel::Info);
    }

    #[test]
    fn threshold_change_applies_to_next_call() {
        let (logger, capture) = capture_logger(false);
        logger.warn(&CALLER, &[&"dropped"]);
        logger.policy().set_release_threshold(Severity::Warning);
        logger.warn(&CALLER, &[&"kept"]);
        assert_eq!(capture.texts(), ["Game.tick: kept"]);
    }

    #[test]
    fn builder_applies_config() {
        let capture = Arc::new(CaptureSink::new());
        let logger = Logger::builder()
            .config(LogConfig::default().with_debug_build_override(Some(false)))
            .sink(Arc::clone(&capture))
            .build_mode_source(FixedBuildMode(true))
            .build();
        assert!(!logger.policy().is_debug_build());
        assert!(!logger.enabled(Severity::Warning));
        assert!(logger.enabled(Severity::Error));
    }
}
