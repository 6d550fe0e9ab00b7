//! Integration tests for message bodies.
//!
//! Values of every supported shape are rendered and joined exactly as they
//! appear in the emitted line.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::sync::{Arc, Mutex};

use debuglog::{
    AsDebug, CaptureSink, FixedBuildMode, LineMode, LogConfig, Logger, Severity, WriterSink,
};

fn capture_logger() -> (Logger, Arc<CaptureSink>) {
    let capture = Arc::new(CaptureSink::new());
    let logger = Logger::builder()
        .config(LogConfig::default().with_debug_threshold(Severity::Trace))
        .sink(Arc::clone(&capture))
        .build_mode_source(FixedBuildMode(true))
        .build();
    (logger, capture)
}

fn only_line(capture: &CaptureSink) -> String {
    let texts = capture.texts();
    assert_eq!(texts.len(), 1, "expected one line, got {texts:?}");
    texts[0]
        .split_once(": ")
        .map(|(_, body)| body.to_owned())
        .unwrap_or_default()
}

// ============================================================================
// Variadic Bodies
// ============================================================================

#[test]
fn values_are_joined_with_pipes() {
    let (logger, capture) = capture_logger();
    debuglog::info!(logger: logger; "a", 1, true);
    assert_eq!(only_line(&capture), "a | 1 | true");
}

#[test]
fn no_values_logs_nothing_marker() {
    let (logger, capture) = capture_logger();
    debuglog::trace!(logger: logger;);
    assert_eq!(only_line(&capture), "<NOTHING_TO_LOG>");
}

#[test]
fn absent_value_logs_null_marker() {
    let (logger, capture) = capture_logger();
    let missing: Option<&str> = None;
    debuglog::warn!(logger: logger; missing, Some(5));
    assert_eq!(only_line(&capture), "<NULL> | 5");
}

#[test]
fn empty_list_logs_empty_marker() {
    let (logger, capture) = capture_logger();
    debuglog::info!(logger: logger; Vec::<u8>::new());
    assert_eq!(only_line(&capture), "<EMPTY>");
}

#[test]
fn sequences_and_maps() {
    let (logger, capture) = capture_logger();
    let inventory = BTreeMap::from([("gold", vec![10, 20]), ("keys", vec![])]);
    debuglog::info!(logger: logger; vec![1, 2, 3], inventory);
    assert_eq!(
        only_line(&capture),
        "[ 1, 2, 3 ] | [ gold: [ 10, 20 ], keys: <EMPTY> ]"
    );
}

#[test]
fn hash_map_with_single_entry() {
    let (logger, capture) = capture_logger();
    let scores = HashMap::from([("p1", 7)]);
    debuglog::error!(logger: logger; scores);
    assert_eq!(only_line(&capture), "[ p1: 7 ]");
}

#[test]
fn debug_wrapper_for_foreign_types() {
    let (logger, capture) = capture_logger();
    debuglog::info!(logger: logger; AsDebug(std::time::Duration::from_millis(250)));
    assert_eq!(only_line(&capture), "250ms");
}

#[test]
fn log_alias_matches_info() {
    let (logger, capture) = capture_logger();
    debuglog::log!(logger: logger; "via alias");
    assert_eq!(capture.lines()[0].channel, debuglog::Channel::Info);
    assert_eq!(only_line(&capture), "via alias");
}

// ============================================================================
// Writer-Backed Sinks
// ============================================================================

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_sink_writes_one_line_per_call() {
    let buffer = SharedBuffer::default();
    let logger = Logger::builder()
        .sink(WriterSink::with_line_mode(buffer.clone(), LineMode::WithNewline))
        .build_mode_source(FixedBuildMode(true))
        .build();

    logger.info(&debuglog::CallerContext::named("Net", "poll"), &[&"up"]);
    logger.warn(&debuglog::CallerContext::named("Net", "poll"), &[&"slow", &120]);
    logger.flush();

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert_eq!(output, "Net.poll: up\nNet.poll: slow | 120\n");
}
