//! crates/debuglog/src/tracing_bridge.rs
//! Bridge from the tracing crate into a [`Logger`].
//!
//! [`DebuglogLayer`] is a tracing-subscriber layer that turns each tracing
//! event into a debuglog line. The event level is mapped to a [`Severity`],
//! the logger's level policy decides whether it is kept, and the event's
//! module path stands in for the caller label.
//!
//! # Usage
//!
//! ```rust,ignore
//! use debuglog::{Logger, init_tracing};
//!
//! init_tracing(Logger::default())?;
//! tracing::warn!(target: "game::save", slot = 2, "save failed");
//! ```
//!
//! Events with the `debuglog` target are ignored, so a logger that writes
//! through [`TracingSink`](crate::TracingSink) cannot feed its own output
//! back into itself.

use std::fmt;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::caller::CallerContext;
use crate::levels::Severity;
use crate::logger::Logger;
use crate::render::Value;

const OWN_TARGET: &str = "debuglog";

/// Routes tracing events through a [`Logger`].
pub struct DebuglogLayer {
    logger: Option<Arc<Logger>>,
}

impl DebuglogLayer {
    /// Layer writing through `logger`.
    pub fn new(logger: impl Into<Arc<Logger>>) -> Self {
        Self {
            logger: Some(logger.into()),
        }
    }

    /// Layer writing through the process-wide [`logger()`](crate::logger).
    pub const fn global() -> Self {
        Self { logger: None }
    }

    fn logger(&self) -> &Logger {
        self.logger.as_deref().unwrap_or_else(|| crate::logger())
    }

    /// Map a tracing level to a severity.
    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Trace,
        }
    }
}

impl fmt::Debug for DebuglogLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebuglogLayer")
            .field("global", &self.logger.is_none())
            .finish()
    }
}

impl<S> Layer<S> for DebuglogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target() == OWN_TARGET {
            return;
        }

        let logger = self.logger();
        let severity = Self::severity_for(metadata.level());
        if !logger.enabled(severity) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let path = metadata.module_path().unwrap_or_else(|| metadata.target());
        let caller = CallerContext::from_path(path);
        let message = visitor.message.unwrap_or_default();

        if visitor.fields.is_empty() {
            logger.log_values(severity, &caller, &[&message]);
        } else {
            let fields = Value::mapping(
                visitor
                    .fields
                    .iter()
                    .map(|(name, value)| (Value::from(*name), Value::from(value.as_str()))),
            );
            logger.log_values(severity, &caller, &[&message, &fields]);
        }
    }
}

/// Collects the message and the remaining fields of an event.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let text = format!("{value:?}");
        if field.name() == "message" {
            self.message = Some(text);
        } else {
            self.fields.push((field.name(), text));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push((field.name(), value.to_owned()));
        }
    }
}

/// Installs a global tracing subscriber that writes through `logger`.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(logger: Logger) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(DebuglogLayer::new(logger))
        .try_init()
}

/// Same as [`init_tracing`] with an additional filter layer, such as an
/// `EnvFilter`, applied before the logger's own thresholds.
///
/// ```rust,ignore
/// use debuglog::{Logger, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(Logger::default(), EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<F>(logger: Logger, filter: F) -> Result<(), TryInitError>
where
    F: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(DebuglogLayer::new(logger))
        .try_init()
}
