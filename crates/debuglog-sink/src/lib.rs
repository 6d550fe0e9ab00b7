#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/debuglog-sink/src/lib.rs
//!
//! # Overview
//!
//! `debuglog-sink` is the output side of the debuglog facility. The facade in
//! the `debuglog` crate decides *whether* a line is emitted and *what* it
//! says; this crate decides *where* it goes. A line is always delivered as a
//! single pre-formatted string on one of three logical [`Channel`]s.
//!
//! # Design
//!
//! [`LineSink`] is the object-safe seam the facade writes through. The crate
//! ships a few implementations:
//!
//! - [`ConsoleSink`] routes the informational channel to stdout and the
//!   warning and error channels to stderr. It is the default sink.
//! - [`WriterSink`] wraps any [`std::io::Write`] behind a mutex, rendering
//!   through a [`MessageSink`] that honours the configured [`LineMode`].
//! - [`CaptureSink`] records lines in memory so tests and embedders can
//!   inspect what was logged.
//! - `TracingSink` (behind the `tracing` feature) forwards lines to the
//!   `tracing` macros.
//!
//! # Invariants
//!
//! - Each call to [`LineSink::write_line`] produces exactly one line on the
//!   destination.
//! - Sinks never fail from the caller's point of view. Writer errors are
//!   counted by [`WriterSink::failed_writes`] instead of being propagated.
//! - `LineMode::WithNewline` is the default so every line ends up on its own
//!   row in the destination.
//!
//! # Examples
//!
//! ```
//! use debuglog_sink::{CaptureSink, Channel, LineSink};
//!
//! let sink = CaptureSink::new();
//! sink.write_line(Channel::Info, "Player.spawn: ready");
//! sink.write_line(Channel::Error, "Player.spawn: missing prefab");
//!
//! let lines = sink.lines();
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[1].channel, Channel::Error);
//! ```

mod channel;
mod line_mode;
mod sink;

pub use channel::Channel;
pub use line_mode::LineMode;
#[cfg(feature = "tracing")]
pub use sink::TracingSink;
pub use sink::{CaptureSink, CapturedLine, ConsoleSink, LineSink, MessageSink, WriterSink};
