//! Integration tests for the formatted log calls.
//!
//! A formatted call substitutes rendered arguments into a positional
//! template. A malformed template is reported to the caller and nothing is
//! written, but only when the call's level is enabled.

use std::sync::Arc;

use debuglog::{CaptureSink, FixedBuildMode, FormatError, Logger};

fn capture_logger(debug: bool) -> (Logger, Arc<CaptureSink>) {
    let capture = Arc::new(CaptureSink::new());
    let logger = Logger::builder()
        .sink(Arc::clone(&capture))
        .build_mode_source(FixedBuildMode(debug))
        .build();
    (logger, capture)
}

// ============================================================================
// Substitution
// ============================================================================

#[test]
fn positional_arguments_are_substituted() {
    let (logger, capture) = capture_logger(true);
    debuglog::info_fmt!(logger: logger; "{0} and {1}", "a", "b").unwrap();
    assert!(capture.texts()[0].ends_with(": a and b"));
}

#[test]
fn arguments_are_rendered_before_substitution() {
    let (logger, capture) = capture_logger(true);
    debuglog::warn_fmt!(logger: logger; "items={0} owner={1}", vec![1, 2], None::<&str>).unwrap();
    assert!(capture.texts()[0].ends_with(": items=[ 1, 2 ] owner=<NULL>"));
}

#[test]
fn surplus_arguments_are_ignored() {
    let (logger, capture) = capture_logger(true);
    debuglog::error_fmt!(logger: logger; "only {0}", "x", "unused").unwrap();
    assert!(capture.texts()[0].ends_with(": only x"));
}

#[test]
fn alignment_and_escapes() {
    let (logger, capture) = capture_logger(true);
    debuglog::info_fmt!(logger: logger; "{{{0,4}}}", 7).unwrap();
    assert!(capture.texts()[0].ends_with(": {   7}"));
}

// ============================================================================
// Faults
// ============================================================================

#[test]
fn missing_argument_is_reported() {
    let (logger, capture) = capture_logger(true);
    let err = debuglog::info_fmt!(logger: logger; "{0} and {1}", "a").unwrap_err();
    assert_eq!(
        err,
        FormatError::MissingArgument {
            index: 1,
            available: 1,
            position: 8,
        }
    );
    assert!(capture.is_empty());
}

#[test]
fn malformed_templates_are_reported() {
    let (logger, capture) = capture_logger(true);
    assert!(matches!(
        debuglog::error_fmt!(logger: logger; "{0", 1),
        Err(FormatError::Unterminated { position: 0 })
    ));
    assert!(matches!(
        debuglog::error_fmt!(logger: logger; "stray }", 1),
        Err(FormatError::UnmatchedClose { .. })
    ));
    assert!(matches!(
        debuglog::error_fmt!(logger: logger; "{name}", 1),
        Err(FormatError::InvalidPlaceholder { .. })
    ));
    assert!(capture.is_empty());
}

#[test]
fn oversized_alignment_is_reported() {
    let (logger, capture) = capture_logger(true);
    let template = format!("{{0,{}}}", i32::MAX);
    assert!(matches!(
        debuglog::info_fmt!(logger: logger; &template, "x"),
        Err(FormatError::InvalidPlaceholder { position: 0, .. })
    ));
    assert!(matches!(
        debuglog::info_fmt!(logger: logger; "{0,1000000}", "x"),
        Err(FormatError::InvalidPlaceholder { .. })
    ));
    assert!(capture.is_empty());
}

#[test]
fn suppressed_call_does_not_validate_template() {
    let (logger, capture) = capture_logger(false);
    assert_eq!(debuglog::warn_fmt!(logger: logger; "{5}"), Ok(()));
    assert_eq!(debuglog::trace_fmt!(logger: logger; "{"), Ok(()));
    assert!(capture.is_empty());
}

#[test]
fn fault_message_names_the_placeholder() {
    let (logger, _capture) = capture_logger(true);
    let err = debuglog::info_fmt!(logger: logger; "{2}", 0, 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "placeholder {2} at byte 0 has no argument (2 supplied)"
    );
}
