//! crates/debuglog/src/policy.rs
//! Level gating: which severities are emitted under the current build mode.
//!
//! A [`LevelPolicy`] holds two thresholds, one for debug builds and one for
//! release builds, plus a lazily resolved build-mode flag. Every piece of
//! state is an atomic accessed with relaxed ordering, so reads and writes
//! from different threads never block. A reader racing a threshold change
//! sees either the old or the new value, and both are acceptable.
//!
//! The build mode is resolved on first use from a [`BuildModeSource`]. Only
//! the thread that created the policy may perform that resolution; other
//! threads asking before it has happened are told "debug" (the most verbose
//! answer) without caching anything. Once resolved, the mode stays fixed
//! unless [`LevelPolicy::set_debug_build_override`] replaces it.

use std::fmt;
use std::sync::atomic::{AtomicI8, AtomicU8, Ordering};
use std::thread::{self, ThreadId};

use crate::config::LogConfig;
use crate::levels::Severity;

const UNRESOLVED: u8 = 0;
const RELEASE: u8 = 1;
const DEBUG: u8 = 2;

/// Answers "is this a debug build".
///
/// Queried at most once per [`LevelPolicy`], from the thread that created it.
pub trait BuildModeSource: Send + Sync {
    /// Returns `true` for debug builds.
    fn is_debug_build(&self) -> bool;
}

/// Uses `cfg!(debug_assertions)` of the profile this crate was compiled with.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompileTimeBuildMode;

impl BuildModeSource for CompileTimeBuildMode {
    fn is_debug_build(&self) -> bool {
        cfg!(debug_assertions)
    }
}

/// Always reports the wrapped value.
#[derive(Clone, Copy, Debug)]
pub struct FixedBuildMode(pub bool);

impl BuildModeSource for FixedBuildMode {
    fn is_debug_build(&self) -> bool {
        self.0
    }
}

impl<F> BuildModeSource for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_debug_build(&self) -> bool {
        self()
    }
}

/// Thresholds and build mode deciding whether a message is emitted.
pub struct LevelPolicy {
    debug_threshold: AtomicI8,
    release_threshold: AtomicI8,
    build_mode: AtomicU8,
    initializer: ThreadId,
    source: Box<dyn BuildModeSource>,
}

impl LevelPolicy {
    /// Creates a policy owned by the calling thread.
    #[must_use]
    pub fn new(config: &LogConfig, source: Box<dyn BuildModeSource>) -> Self {
        Self {
            debug_threshold: AtomicI8::new(config.debug_threshold.as_i8()),
            release_threshold: AtomicI8::new(config.release_threshold.as_i8()),
            build_mode: AtomicU8::new(encode(config.debug_build_override)),
            initializer: thread::current().id(),
            source,
        }
    }

    /// Reports whether a message at `severity` clears the active threshold.
    pub fn should_log(&self, severity: Severity) -> bool {
        severity >= self.active_threshold()
    }

    /// Threshold for the build mode currently in effect.
    pub fn active_threshold(&self) -> Severity {
        if self.is_debug_build() {
            self.debug_threshold()
        } else {
            self.release_threshold()
        }
    }

    /// Minimum severity emitted in debug builds.
    pub fn debug_threshold(&self) -> Severity {
        decode(self.debug_threshold.load(Ordering::Relaxed))
    }

    /// Changes the debug-build threshold. Takes effect on the next call.
    pub fn set_debug_threshold(&self, threshold: Severity) {
        self.debug_threshold
            .store(threshold.as_i8(), Ordering::Relaxed);
    }

    /// Minimum severity emitted in release builds.
    pub fn release_threshold(&self) -> Severity {
        decode(self.release_threshold.load(Ordering::Relaxed))
    }

    /// Changes the release-build threshold. Takes effect on the next call.
    pub fn set_release_threshold(&self, threshold: Severity) {
        self.release_threshold
            .store(threshold.as_i8(), Ordering::Relaxed);
    }

    /// Resolves the build mode, querying the source on first use.
    ///
    /// Threads other than the creator get `true` until the creator has
    /// resolved the mode.
    pub fn is_debug_build(&self) -> bool {
        match self.build_mode.load(Ordering::Relaxed) {
            DEBUG => true,
            RELEASE => false,
            _ => self.resolve_build_mode(),
        }
    }

    /// The memoized build mode, or `None` when it has not been resolved yet.
    pub fn resolved_build_mode(&self) -> Option<bool> {
        decode_mode(self.build_mode.load(Ordering::Relaxed))
    }

    /// Forces the build mode, or with `None` forgets it so the next query on
    /// the creating thread asks the source again.
    pub fn set_debug_build_override(&self, debug_build: Option<bool>) {
        self.build_mode
            .store(encode(debug_build), Ordering::Relaxed);
    }

    /// Current settings as a [`LogConfig`].
    pub fn snapshot(&self) -> LogConfig {
        LogConfig {
            debug_threshold: self.debug_threshold(),
            release_threshold: self.release_threshold(),
            debug_build_override: self.resolved_build_mode(),
        }
    }

    /// Replaces thresholds and override from `config`.
    pub fn apply(&self, config: &LogConfig) {
        self.set_debug_threshold(config.debug_threshold);
        self.set_release_threshold(config.release_threshold);
        self.set_debug_build_override(config.debug_build_override);
    }

    fn resolve_build_mode(&self) -> bool {
        if thread::current().id() != self.initializer {
            return true;
        }

        let is_debug = self.source.is_debug_build();
        // An override stored while the source was queried takes precedence.
        match self.build_mode.compare_exchange(
            UNRESOLVED,
            encode(Some(is_debug)),
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => {
                #[cfg(feature = "tracing")]
                ::tracing::debug!(target: "debuglog", debug_build = is_debug, "build mode resolved");
                is_debug
            }
            Err(current) => current == DEBUG,
        }
    }
}

impl Default for LevelPolicy {
    fn default() -> Self {
        Self::new(&LogConfig::default(), Box::new(CompileTimeBuildMode))
    }
}

impl fmt::Debug for LevelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelPolicy")
            .field("debug_threshold", &self.debug_threshold())
            .field("release_threshold", &self.release_threshold())
            .field("build_mode", &self.resolved_build_mode())
            .field("initializer", &self.initializer)
            .finish_non_exhaustive()
    }
}

const fn encode(debug_build: Option<bool>) -> u8 {
    match debug_build {
        None => UNRESOLVED,
        Some(false) => RELEASE,
        Some(true) => DEBUG,
    }
}

const fn decode_mode(raw: u8) -> Option<bool> {
    match raw {
        DEBUG => Some(true),
        RELEASE => Some(false),
        _ => None,
    }
}

fn decode(raw: i8) -> Severity {
    // Only values produced by Severity::as_i8 are ever stored.
    Severity::from_i8(raw).unwrap_or(Severity::Trace)
}
