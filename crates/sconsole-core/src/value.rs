//! # Message Payload Values
//!
//! A log message is either a plain scalar (usually text) or a keyed structure.
//! [`Value`] models both, and [`Fields`] is the ordered keyed structure.
//!
//! Rendering follows a shallow rule: a structure prints its own fields, but
//! any nested structure (or null) collapses to `{ ... }` and any callable to
//! `function ()`.

use std::fmt;

/// Literal text shown in place of a callable value
pub const CALLABLE_TEXT: &str = "function ()";

/// Literal text shown in place of a nested structured value
pub const NESTED_TEXT: &str = "{ ... }";

// ============================================================================
// Value
// ============================================================================

/// A message payload or field value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// A callable; only its presence is recorded
    Callable,
    List(Vec<Value>),
    Map(Fields),
}

impl Value {
    /// True for `List` and `Map`
    pub fn is_structured(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Callable)
    }

    /// Render as a field value inside a structure.
    ///
    /// Nested structures and null collapse, callables are replaced by a marker.
    pub fn field_text(&self) -> String {
        match self {
            Value::Callable => CALLABLE_TEXT.to_string(),
            Value::Null => NESTED_TEXT.to_string(),
            v if v.is_structured() => NESTED_TEXT.to_string(),
            v => v.to_string(),
        }
    }

    /// Iterate `(key, value)` pairs of a structured value.
    ///
    /// Lists use their index as the key. Scalars yield nothing.
    pub fn entries(&self) -> Box<dyn Iterator<Item = (String, &Value)> + '_> {
        match self {
            Value::Map(fields) => Box::new(fields.iter().map(|(k, v)| (k.to_string(), v))),
            Value::List(items) => Box::new(items.iter().enumerate().map(|(i, v)| (i.to_string(), v))),
            _ => Box::new(std::iter::empty()),
        }
    }
}

/// Natural string form of a value
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write_number(f, *n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Callable => write!(f, "{}", CALLABLE_TEXT),
            Value::List(_) | Value::Map(_) => write!(f, "{}", NESTED_TEXT),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 prints as 0
        write!(f, "0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Exponent form with an explicit sign, e.g. 1e+21 and 1e-7
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{}e+{}", mantissa, exp),
            _ => write!(f, "{}", text),
        }
    } else {
        write!(f, "{}", n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Fields> for Value {
    fn from(fields: Fields) -> Self {
        Value::Map(fields)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// JSON objects keep their key order (serde_json `preserve_order`).
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

// ============================================================================
// Fields
// ============================================================================

/// Ordered keyed structure; iteration follows insertion order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields {
    entries: Vec<(String, Value)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}
