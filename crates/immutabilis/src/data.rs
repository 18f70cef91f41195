//! Raw input accepted by [`from_data`](crate::from_data) and `set`, plus the
//! keys used to address children.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Number, Value as JsonValue};

use crate::node::Node;
use crate::value::{Opaque, Value};

// ── Data ──────────────────────────────────────────────────────────────────

/// Raw, not yet ingested data.
///
/// A `Data::Node` is adopted as-is wherever a node would be built, which keeps
/// re-ingesting an existing subtree reference-preserving.
#[derive(Clone, Debug)]
pub enum Data {
    Node(Node),
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Opaque(Opaque),
    List(Vec<Data>),
    Map(IndexMap<String, Data>),
}

/// The variant decision for a piece of [`Data`], made once.
pub(crate) enum Shape {
    Node(Node),
    List(Vec<Data>),
    Map(IndexMap<String, Data>),
    Scalar(Value),
}

impl Data {
    pub(crate) fn into_shape(self) -> Shape {
        match self {
            Data::Node(node) => Shape::Node(node),
            Data::List(items) => Shape::List(items),
            Data::Map(entries) => Shape::Map(entries),
            Data::Null => Shape::Scalar(Value::Null),
            Data::Bool(b) => Shape::Scalar(Value::Bool(b)),
            Data::Number(n) => Shape::Scalar(Value::Number(n)),
            Data::String(s) => Shape::Scalar(Value::String(s)),
            Data::Opaque(o) => Shape::Scalar(Value::Opaque(o)),
        }
    }

    /// The plain value this data stands for. Nodes contribute their rollup.
    pub(crate) fn into_value(self) -> Value {
        self.into_shape().into_value()
    }

    pub fn opaque<T: std::any::Any + Send + Sync>(payload: T) -> Self {
        Data::Opaque(Opaque::new(payload))
    }
}

impl Shape {
    pub(crate) fn into_value(self) -> Value {
        match self {
            Shape::Node(node) => node.val().clone(),
            Shape::Scalar(value) => value,
            Shape::List(items) => {
                Value::List(Arc::new(items.into_iter().map(Data::into_value).collect()))
            }
            Shape::Map(entries) => Value::Map(Arc::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, v.into_value()))
                    .collect(),
            )),
        }
    }
}

impl From<Node> for Data {
    fn from(node: Node) -> Self {
        Data::Node(node)
    }
}

impl From<&Node> for Data {
    fn from(node: &Node) -> Self {
        Data::Node(node.clone())
    }
}

impl From<Opaque> for Data {
    fn from(opaque: Opaque) -> Self {
        Data::Opaque(opaque)
    }
}

impl From<&str> for Data {
    fn from(s: &str) -> Self {
        Data::String(s.to_owned())
    }
}

impl From<String> for Data {
    fn from(s: String) -> Self {
        Data::String(s)
    }
}

impl From<bool> for Data {
    fn from(b: bool) -> Self {
        Data::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Data {
                fn from(n: $t) -> Self {
                    Data::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Non-finite floats have no number representation and become null.
impl From<f64> for Data {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Data::Null, Data::Number)
    }
}

impl From<f32> for Data {
    fn from(n: f32) -> Self {
        Data::from(f64::from(n))
    }
}

impl<T: Into<Data>> From<Vec<T>> for Data {
    fn from(items: Vec<T>) -> Self {
        Data::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Data>> From<IndexMap<String, T>> for Data {
    fn from(entries: IndexMap<String, T>) -> Self {
        Data::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Data>> FromIterator<(K, V)> for Data {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Data::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<JsonValue> for Data {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Data::Null,
            JsonValue::Bool(b) => Data::Bool(b),
            JsonValue::Number(n) => Data::Number(n),
            JsonValue::String(s) => Data::String(s),
            JsonValue::Array(items) => Data::List(items.into_iter().map(Data::from).collect()),
            JsonValue::Object(entries) => {
                Data::Map(entries.into_iter().map(|(k, v)| (k, Data::from(v))).collect())
            }
        }
    }
}

impl From<Value> for Data {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Data::Null,
            Value::Bool(b) => Data::Bool(b),
            Value::Number(n) => Data::Number(n),
            Value::String(s) => Data::String(s),
            Value::Opaque(o) => Data::Opaque(o),
            Value::List(items) => Data::List(
                Arc::unwrap_or_clone(items)
                    .into_iter()
                    .map(Data::from)
                    .collect(),
            ),
            Value::Map(entries) => Data::Map(
                Arc::unwrap_or_clone(entries)
                    .into_iter()
                    .map(|(k, v)| (k, Data::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for Data {
    fn from(value: &Value) -> Self {
        Data::from(value.clone())
    }
}

// ── Key ───────────────────────────────────────────────────────────────────

/// Addresses a direct child.
///
/// Map nodes read an `Index` as its decimal string. List nodes read a `Name`
/// as an index only when it is a canonical non-negative decimal; any other
/// name, and any negative index, addresses nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Name(String),
    Index(i64),
}

impl Key {
    pub(crate) fn as_name(&self) -> Cow<'_, str> {
        match self {
            Key::Name(name) => Cow::Borrowed(name),
            Key::Index(index) => Cow::Owned(index.to_string()),
        }
    }

    pub(crate) fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => usize::try_from(*index).ok(),
            Key::Name(name) if is_valid_index(name) => name.parse().ok(),
            Key::Name(_) => None,
        }
    }
}

/// A canonical array index: ASCII digits without a leading zero.
fn is_valid_index(index: &str) -> bool {
    let bytes = index.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return false;
    }
    bytes.iter().all(u8::is_ascii_digit)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(i64::from(index))
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}
