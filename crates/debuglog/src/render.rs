//! crates/debuglog/src/render.rs
//! Recursive value-to-string rendering.
//!
//! Anything handed to a log call is first lowered into a [`Value`], a small
//! tagged union with four shapes: null, text, sequence and mapping. Rendering
//! then dispatches on the tag:
//!
//! | shape                 | output                       |
//! |-----------------------|------------------------------|
//! | null                  | `<NULL>`                     |
//! | text                  | the text itself              |
//! | empty sequence/map    | `<EMPTY>`                    |
//! | sequence              | `[ a, b, c ]`                |
//! | mapping               | `[ k1: v1, k2: v2 ]`         |
//!
//! Elements are rendered recursively and joined with `", "`. Mappings keep
//! the iteration order of the collection they came from, so a `HashMap`
//! renders in hash order and a `BTreeMap` in key order.
//!
//! There is no depth or cycle guard. A structure that nests deeply enough
//! (or a hand-written [`Loggable`] that produces an endless chain) exhausts
//! the stack.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

/// Marker for an absent value.
pub const NULL_MARKER: &str = "<NULL>";
/// Marker for a sequence or mapping without elements.
pub const EMPTY_MARKER: &str = "<EMPTY>";
/// Body used when a variadic log call receives no values.
pub const NOTHING_MARKER: &str = "<NOTHING_TO_LOG>";

const ELEMENT_SEPARATOR: &str = ", ";
const VALUE_SEPARATOR: &str = " | ";

/// The renderable shapes a logged value can take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    /// No value.
    Null,
    /// A scalar already converted to text.
    Text(Cow<'a, str>),
    /// An ordered or unordered collection of values.
    Sequence(Vec<Value<'a>>),
    /// Key/value pairs in the source collection's iteration order.
    Mapping(Vec<(Value<'a>, Value<'a>)>),
}

impl<'a> Value<'a> {
    /// Text value.
    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Self::Text(text.into())
    }

    /// Text value produced by a type's [`Display`](fmt::Display) implementation.
    pub fn display(value: &impl fmt::Display) -> Self {
        Self::Text(Cow::Owned(value.to_string()))
    }

    /// Sequence value from loggable items.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Mapping value from key/value pairs.
    pub fn mapping<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Self>,
        V: Into<Self>,
    {
        Self::Mapping(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Renders the value following the rules in the [module docs](self).
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Appends the rendered value to `out`.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str(NULL_MARKER),
            Self::Text(text) => out.push_str(text),
            Self::Sequence(items) if items.is_empty() => out.push_str(EMPTY_MARKER),
            Self::Mapping(pairs) if pairs.is_empty() => out.push_str(EMPTY_MARKER),
            Self::Sequence(items) => {
                out.push_str("[ ");
                push_sequence_body(out, items);
                out.push_str(" ]");
            }
            Self::Mapping(pairs) => {
                out.push_str("[ ");
                push_mapping_body(out, pairs);
                out.push_str(" ]");
            }
        }
    }

    /// Reborrows the value without cloning any owned text.
    #[must_use]
    pub fn borrowed(&self) -> Value<'_> {
        match self {
            Self::Null => Value::Null,
            Self::Text(text) => Value::Text(Cow::Borrowed(text)),
            Self::Sequence(items) => Value::Sequence(items.iter().map(Value::borrowed).collect()),
            Self::Mapping(pairs) => Value::Mapping(
                pairs
                    .iter()
                    .map(|(key, value)| (key.borrowed(), value.borrowed()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Value<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! value_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(value: $ty) -> Self {
                    Self::display(&value)
                }
            }
        )*
    };
}

value_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// Anything that can be handed to a log call.
///
/// Implementations lower `self` into a [`Value`]. Scalars become text via
/// their `Display` output; standard collections become sequences or
/// mappings of their elements; `Option::None` and `()` become null. Strings
/// are always text, never a sequence of characters.
///
/// Types that only implement `Display` or `Debug` can be logged through the
/// [`AsDisplay`] and [`AsDebug`] wrappers.
///
/// ```
/// use debuglog::{render, Loggable, Value};
///
/// struct Health(u32);
///
/// impl Loggable for Health {
///     fn to_value(&self) -> Value<'_> {
///         Value::text(format!("{} hp", self.0))
///     }
/// }
///
/// assert_eq!(render(&vec![Health(3), Health(7)]), "[ 3 hp, 7 hp ]");
/// ```
pub trait Loggable {
    /// Lowers `self` into its renderable shape.
    fn to_value(&self) -> Value<'_>;
}

macro_rules! loggable_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loggable for $ty {
                fn to_value(&self) -> Value<'_> {
                    Value::display(self)
                }
            }
        )*
    };
}

loggable_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    std::num::NonZeroU32, std::num::NonZeroU64, std::num::NonZeroUsize,
    std::net::IpAddr, std::net::SocketAddr,
);

impl Loggable for str {
    fn to_value(&self) -> Value<'_> {
        Value::Text(Cow::Borrowed(self))
    }
}

impl Loggable for String {
    fn to_value(&self) -> Value<'_> {
        Value::Text(Cow::Borrowed(self.as_str()))
    }
}

impl Loggable for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::Text(Cow::Borrowed(self.as_ref()))
    }
}

impl Loggable for std::path::Path {
    fn to_value(&self) -> Value<'_> {
        Value::Text(self.to_string_lossy())
    }
}

impl Loggable for std::path::PathBuf {
    fn to_value(&self) -> Value<'_> {
        self.as_path().to_value()
    }
}

impl Loggable for () {
    fn to_value(&self) -> Value<'_> {
        Value::Null
    }
}

impl Loggable for Value<'_> {
    fn to_value(&self) -> Value<'_> {
        self.borrowed()
    }
}

impl<T: Loggable> Loggable for Option<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_ref().map_or(Value::Null, Loggable::to_value)
    }
}

impl<A: Loggable, B: Loggable> Loggable for (A, B) {
    fn to_value(&self) -> Value<'_> {
        Value::Sequence(vec![self.0.to_value(), self.1.to_value()])
    }
}

macro_rules! loggable_via_deref {
    ($($wrapper:ty),* $(,)?) => {
        $(
            impl<T: Loggable + ?Sized> Loggable for $wrapper {
                fn to_value(&self) -> Value<'_> {
                    (**self).to_value()
                }
            }
        )*
    };
}

loggable_via_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

fn sequence_of<'a, T, I>(items: I) -> Value<'a>
where
    T: Loggable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Value::Sequence(items.into_iter().map(Loggable::to_value).collect())
}

fn mapping_of<'a, K, V, I>(pairs: I) -> Value<'a>
where
    K: Loggable + 'a,
    V: Loggable + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    Value::Mapping(
        pairs
            .into_iter()
            .map(|(key, value)| (key.to_value(), value.to_value()))
            .collect(),
    )
}

impl<T: Loggable> Loggable for [T] {
    fn to_value(&self) -> Value<'_> {
        sequence_of(self)
    }
}

impl<T: Loggable, const N: usize> Loggable for [T; N] {
    fn to_value(&self) -> Value<'_> {
        sequence_of(self)
    }
}

impl<T: Loggable> Loggable for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        sequence_of(self)
    }
}

impl<T: Loggable> Loggable for VecDeque<T> {
    fn to_value(&self) -> Value<'_> {
        sequence_of(self)
    }
}

impl<T: Loggable> Loggable for LinkedList<T> {
    fn to_value(&self) -> Value<'_> {
        sequence_of(self)
    }
}

impl<T: Loggable, S: BuildHasher> Loggable for HashSet<T, S> {
    fn to_value(&self) -> Value<'_> {
        sequence_of(self)
    }
}

impl<T: Loggable> Loggable for BTreeSet<T> {
    fn to_value(&self) -> Value<'_> {
        sequence_of(self)
    }
}

impl<K: Loggable, V: Loggable, S: BuildHasher> Loggable for HashMap<K, V, S> {
    fn to_value(&self) -> Value<'_> {
        mapping_of(self)
    }
}

impl<K: Loggable, V: Loggable> Loggable for BTreeMap<K, V> {
    fn to_value(&self) -> Value<'_> {
        mapping_of(self)
    }
}

/// Logs a value through its [`Display`](fmt::Display) implementation.
///
/// ```
/// use debuglog::{render, AsDisplay};
/// use std::time::Duration;
///
/// let elapsed = format!("{:?}", Duration::from_millis(1500));
/// assert_eq!(render(&AsDisplay(&elapsed)), "1.5s");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AsDisplay<T>(pub T);

impl<T: fmt::Display> Loggable for AsDisplay<T> {
    fn to_value(&self) -> Value<'_> {
        Value::display(&self.0)
    }
}

/// Logs a value through its [`Debug`](fmt::Debug) implementation.
#[derive(Clone, Copy, Debug)]
pub struct AsDebug<T>(pub T);

impl<T: fmt::Debug> Loggable for AsDebug<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Text(Cow::Owned(format!("{:?}", self.0)))
    }
}

/// Renders any loggable value.
///
/// ```
/// use debuglog::render;
/// use std::collections::BTreeMap;
///
/// assert_eq!(render(&None::<i32>), "<NULL>");
/// assert_eq!(render(&Vec::<i32>::new()), "<EMPTY>");
/// assert_eq!(render(&vec![1, 2, 3]), "[ 1, 2, 3 ]");
///
/// let scores = BTreeMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(render(&scores), "[ a: 1, b: 2 ]");
/// ```
#[must_use]
pub fn render<T: Loggable + ?Sized>(value: &T) -> String {
    value.to_value().render()
}

/// Renders each item and joins them with `", "`, without brackets.
///
/// `<EMPTY>` for no items. This is the body [`render`] puts between `[ `
/// and ` ]` for a sequence.
///
/// ```
/// use debuglog::render_sequence;
///
/// assert_eq!(render_sequence([1, 2, 3]), "1, 2, 3");
/// assert_eq!(render_sequence([vec![1], vec![]]), "[ 1 ], <EMPTY>");
/// assert_eq!(render_sequence(Vec::<u8>::new()), "<EMPTY>");
/// ```
#[must_use]
pub fn render_sequence<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Loggable,
{
    let mut out = String::new();
    let mut any = false;
    for item in items {
        if any {
            out.push_str(ELEMENT_SEPARATOR);
        }
        item.to_value().render_into(&mut out);
        any = true;
    }
    if any { out } else { EMPTY_MARKER.to_owned() }
}

/// Renders each pair as `key: value` and joins them with `", "`, without
/// brackets, in the iterator's order.
///
/// `<EMPTY>` for no pairs.
#[must_use]
pub fn render_mapping<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Loggable,
    V: Loggable,
{
    let mut out = String::new();
    let mut any = false;
    for (key, value) in pairs {
        if any {
            out.push_str(ELEMENT_SEPARATOR);
        }
        key.to_value().render_into(&mut out);
        out.push_str(": ");
        value.to_value().render_into(&mut out);
        any = true;
    }
    if any { out } else { EMPTY_MARKER.to_owned() }
}

fn push_sequence_body(out: &mut String, items: &[Value<'_>]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(ELEMENT_SEPARATOR);
        }
        item.render_into(out);
    }
}

fn push_mapping_body(out: &mut String, pairs: &[(Value<'_>, Value<'_>)]) {
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push_str(ELEMENT_SEPARATOR);
        }
        key.render_into(out);
        out.push_str(": ");
        value.render_into(out);
    }
}

/// Renders a [`Value`]. Same as [`Value::render`].
#[must_use]
pub fn render_value(value: &Value<'_>) -> String {
    value.render()
}

/// Joins already-rendered values with `separator`, or returns
/// `<NOTHING_TO_LOG>` when there are none.
#[must_use]
pub fn join_rendered<I>(rendered: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    let mut any = false;
    for text in rendered {
        if any {
            out.push_str(separator);
        }
        out.push_str(text.as_ref());
        any = true;
    }
    if any { out } else { NOTHING_MARKER.to_owned() }
}

/// Builds the body of a variadic log call: every value rendered and joined
/// with `" | "`, or `<NOTHING_TO_LOG>` when there are none.
#[must_use]
pub fn join_values(values: &[&dyn Loggable]) -> String {
    join_rendered(values.iter().map(|value| render(*value)), VALUE_SEPARATOR)
}

/// Renders each value on its own, for substitution into a format template.
#[must_use]
pub fn render_each(values: &[&dyn Loggable]) -> Vec<String> {
    values.iter().map(|value| render(*value)).collect()
}
