#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/debuglog/src/lib.rs
//!
//! # Overview
//!
//! `debuglog` is a leveled logging facility for application code. Each call
//! is tagged with one of four severities and prefixed with the calling
//! type and function (`"Player.spawn: "`). Arbitrary values are rendered
//! into readable text: collections become `[ a, b ]`, maps `[ k: v ]`,
//! absent values `<NULL>` and empty collections `<EMPTY>`.
//!
//! # Design
//!
//! - [`LevelPolicy`] holds one threshold for debug builds and one for
//!   release builds. The build mode is resolved lazily and memoized.
//! - [`CallerContext`] is captured at the call site by [`caller!`] and
//!   turned into a label only when the message is actually emitted.
//! - [`Loggable`] lowers values into a [`Value`] tree that
//!   [`render`] turns into text.
//! - [`Logger`] ties a policy to a [`LineSink`] from the `debuglog-sink`
//!   crate. [`logger()`] returns the process-wide instance used by the
//!   macros.
//!
//! # Invariants
//!
//! - The level check happens before the label is resolved or any value is
//!   rendered. The macros check it before evaluating their arguments.
//! - Thresholds may be changed from any thread at any time; a change
//!   affects calls that start after it.
//! - Rendering never fails. Formatted calls fail only on a malformed
//!   template, and only when their level is enabled.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use debuglog::{CaptureSink, FixedBuildMode, Logger, Severity};
//!
//! let capture = Arc::new(CaptureSink::new());
//! let logger = Logger::builder()
//!     .sink(Arc::clone(&capture))
//!     .build_mode_source(FixedBuildMode(false))
//!     .build();
//!
//! struct Inventory;
//! impl Inventory {
//!     fn add(logger: &Logger) {
//!         debuglog::warn!(logger: logger; "dropped");
//!         debuglog::error!(logger: logger; "full", vec!["sword", "shield"]);
//!     }
//! }
//!
//! Inventory::add(&logger);
//! assert_eq!(capture.texts(), ["Inventory.add: full | [ sword, shield ]"]);
//!
//! logger.policy().set_release_threshold(Severity::Warning);
//! Inventory::add(&logger);
//! assert_eq!(capture.len(), 3);
//! ```
//!
//! # Features
//!
//! - `serde` derives serialization for [`Severity`] and [`LogConfig`].
//! - `tracing` adds the `TracingSink` output and a layer that routes
//!   `tracing` events through a [`Logger`].

mod caller;
mod config;
mod error;
mod global;
mod levels;
mod logger;
mod macros;
mod policy;
mod render;
pub mod template;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use caller::{CallerContext, MARKER as CALLER_MARKER};
pub use config::{DEBUG_BUILD_VAR, DEBUG_LEVEL_VAR, LogConfig, RELEASE_LEVEL_VAR};
pub use error::{ConfigError, FormatError, ParseSeverityError, SetLoggerError};
pub use global::{logger, set_logger};
pub use levels::Severity;
pub use logger::{Logger, LoggerBuilder};
pub use policy::{BuildModeSource, CompileTimeBuildMode, FixedBuildMode, LevelPolicy};
pub use render::{
    AsDebug, AsDisplay, EMPTY_MARKER, Loggable, NOTHING_MARKER, NULL_MARKER, Value, join_rendered,
    join_values, render, render_each, render_mapping, render_sequence, render_value,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{DebuglogLayer, init_tracing, init_tracing_with_filter};

#[cfg(feature = "tracing")]
pub use debuglog_sink::TracingSink;
pub use debuglog_sink::{
    CaptureSink, CapturedLine, Channel, ConsoleSink, LineMode, LineSink, MessageSink, WriterSink,
};

#[doc(hidden)]
pub mod __private {
    pub use crate::caller::type_name_of;
}
