//! crates/debuglog-sink/src/sink/tracing.rs
//! Sink that hands log lines to the `tracing` ecosystem.

use super::LineSink;
use crate::Channel;

/// Forwards lines to `tracing` events with target `"debuglog"`.
///
/// The informational channel maps to `INFO`, warnings to `WARN` and errors to
/// `ERROR`. Level filtering has already happened in the logger by the time a
/// line reaches this sink, so subscribers normally let every event through.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink {
    _private: (),
}

impl TracingSink {
    /// Creates a tracing sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl LineSink for TracingSink {
    fn write_line(&self, channel: Channel, line: &str) {
        match channel {
            Channel::Info => ::tracing::info!(target: "debuglog", "{line}"),
            Channel::Warning => ::tracing::warn!(target: "debuglog", "{line}"),
            Channel::Error => ::tracing::error!(target: "debuglog", "{line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Seen = Arc<Mutex<Vec<(::tracing::Level, String, String)>>>;

    struct Recorder(Seen);

    #[derive(Default)]
    struct MessageVisitor(Option<String>);

    impl ::tracing::field::Visit for MessageVisitor {
        fn record_debug(&mut self, field: &::tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = Some(format!("{value:?}"));
            }
        }
    }

    impl<S: ::tracing::Subscriber> Layer<S> for Recorder {
        fn on_event(&self, event: &::tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            self.0.lock().unwrap().push((
                *event.metadata().level(),
                event.metadata().target().to_owned(),
                visitor.0.unwrap_or_default(),
            ));
        }
    }

    #[test]
    fn channels_map_to_tracing_levels() {
        let seen: Seen = Arc::default();
        let subscriber = tracing_subscriber::registry().with(Recorder(Arc::clone(&seen)));

        ::tracing::subscriber::with_default(subscriber, || {
            let sink = TracingSink::new();
            sink.write_line(Channel::Info, "hello");
            sink.write_line(Channel::Warning, "careful");
            sink.write_line(Channel::Error, "broken");
        });

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].0, ::tracing::Level::INFO);
        assert_eq!(seen[1].0, ::tracing::Level::WARN);
        assert_eq!(seen[2].0, ::tracing::Level::ERROR);
        assert!(seen.iter().all(|(_, target, _)| target == "debuglog"));
        assert_eq!(seen[0].2, "hello");
    }
}
