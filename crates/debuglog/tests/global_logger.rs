//! Integration test for the process-wide logger.
//!
//! Kept to a single test: the global logger can only be installed once per
//! process, and each file under `tests/` runs as its own process.

use std::sync::Arc;

use debuglog::{CaptureSink, FixedBuildMode, Logger, Severity, set_logger};

struct Menu;

impl Menu {
    fn open() {
        debuglog::info!("opened", 2);
        debuglog::trace!("not shown");
    }

    fn close() -> Result<(), debuglog::FormatError> {
        debuglog::warn_fmt!("closing {0}", "menu")
    }
}

#[test]
fn installed_logger_serves_macros() {
    let capture = Arc::new(CaptureSink::new());
    let logger = Logger::builder()
        .sink(Arc::clone(&capture))
        .build_mode_source(FixedBuildMode(true))
        .build();

    set_logger(logger).expect("first installation succeeds");
    assert!(set_logger(Logger::default()).is_err());

    Menu::open();
    Menu::close().unwrap();
    assert_eq!(
        capture.texts(),
        ["Menu.open: opened | 2", "Menu.close: closing menu"]
    );

    debuglog::logger().policy().set_debug_threshold(Severity::Trace);
    Menu::open();
    assert_eq!(capture.len(), 4);
    assert_eq!(capture.texts()[3], "Menu.open: not shown");
}
