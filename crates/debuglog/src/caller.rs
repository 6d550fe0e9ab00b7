//! crates/debuglog/src/caller.rs
//! Caller identification for log-line prefixes.
//!
//! Rust has no runtime reflection over the call stack, so the caller is
//! captured at the call site instead. [`caller!`](crate::caller) defines a
//! marker function inside the calling function and reads its fully
//! qualified path with [`std::any::type_name`]. For a call inside
//! `impl Player { fn spawn() { .. } }` that path looks like
//! `game::world::Player::spawn::__debuglog_caller`.
//!
//! [`CallerContext::scopes`] turns the path into a list of named scopes,
//! innermost first, dropping the marker, closure frames and generic
//! arguments. The label is then built from the first two scopes:
//! `"Player.spawn: "`. Shallower paths degrade to `"spawn: "` and finally to
//! the empty string; resolution never fails.
//!
//! Resolution only happens once a message has passed its level check, so
//! disabled log calls pay nothing beyond storing a `&'static str`.

use std::fmt;

/// Name of the marker function defined by [`caller!`](crate::caller).
pub const MARKER: &str = "__debuglog_caller";

/// Compile-time capture of where a log call was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallerContext {
    origin: Origin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Origin {
    Path(&'static str),
    Named {
        enclosing: &'static str,
        function: &'static str,
    },
    Unknown,
}

impl CallerContext {
    /// Context from a `::`-separated path such as a `type_name` or
    /// `module_path!()` result. A trailing [`MARKER`] segment is ignored.
    #[must_use]
    pub const fn from_path(path: &'static str) -> Self {
        Self {
            origin: Origin::Path(path),
        }
    }

    /// Context with explicitly supplied type and function names.
    #[must_use]
    pub const fn named(enclosing: &'static str, function: &'static str) -> Self {
        Self {
            origin: Origin::Named {
                enclosing,
                function,
            },
        }
    }

    /// Context that resolves to an empty label.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            origin: Origin::Unknown,
        }
    }

    /// Named scopes of the call site, innermost first.
    ///
    /// ```
    /// use debuglog::CallerContext;
    ///
    /// let ctx = CallerContext::from_path(
    ///     "game::world::Player<f32>::spawn::{{closure}}::__debuglog_caller",
    /// );
    /// assert_eq!(ctx.scopes(), ["spawn", "Player", "world", "game"]);
    /// ```
    #[must_use]
    pub fn scopes(&self) -> Vec<&'static str> {
        match self.origin {
            Origin::Path(path) => split_path(path)
                .into_iter()
                .rev()
                .filter(|segment| *segment != MARKER && !segment.starts_with("{{"))
                .filter_map(clean_segment)
                .collect(),
            Origin::Named {
                enclosing,
                function,
            } => [function, enclosing]
                .into_iter()
                .filter(|name| !name.is_empty())
                .collect(),
            Origin::Unknown => Vec::new(),
        }
    }

    /// Builds the `"Type.Function: "` prefix after skipping `skip` scopes.
    ///
    /// Skipping lets a helper that logs on behalf of its caller attribute the
    /// line one level up. When fewer than two scopes remain the label
    /// degrades to `"Function: "`, and to `""` when none remain.
    #[must_use]
    pub fn resolve_label(&self, skip: usize) -> String {
        let scopes = self.scopes();
        match (scopes.get(skip), scopes.get(skip + 1)) {
            (Some(function), Some(enclosing)) => format!("{enclosing}.{function}: "),
            (Some(function), None) => format!("{function}: "),
            _ => String::new(),
        }
    }

    /// The prefix used by the logging facade.
    #[must_use]
    pub fn label(&self) -> String {
        self.resolve_label(0)
    }

    /// Name of the calling function, or `""` when unknown.
    #[must_use]
    pub fn method_name(&self) -> String {
        self.scopes()
            .first()
            .map_or_else(String::new, |name| (*name).to_owned())
    }

    /// `"Type.Function"` without the trailing colon.
    #[must_use]
    pub fn class_and_method(&self) -> String {
        let mut label = self.label();
        if label.ends_with(": ") {
            label.truncate(label.len() - 2);
        }
        label
    }
}

impl fmt::Display for CallerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_and_method())
    }
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Splits on `::` outside of `<...>` so generic arguments stay intact.
fn split_path(path: &'static str) -> Vec<&'static str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments.retain(|segment| !segment.is_empty());
    segments
}

/// Reduces a path segment to a bare identifier.
///
/// `Player<f32>` becomes `Player`; a qualified `<Player as Spawn>` becomes
/// `Player`.
fn clean_segment(segment: &'static str) -> Option<&'static str> {
    if let Some(inner) = segment
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
    {
        let self_type = inner.split(" as ").next().unwrap_or(inner);
        let self_type = self_type.trim_start_matches(['&', '*']).trim_start_matches("mut ");
        return split_path(self_type).last().copied().and_then(clean_segment);
    }

    let name = segment.split('<').next().unwrap_or(segment).trim();
    (!name.is_empty()).then_some(name)
}
