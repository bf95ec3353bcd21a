use crate::document::number::Number;
use indexmap::IndexMap;
use std::fmt;

/// The recursive in-memory representation of a JSON document. A document's
/// root is exactly one `Value`; containers exclusively own their children, so
/// the whole thing forms a strict tree with no sharing and no cycles.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Object(IndexMap<String, Value>),
    Array(Vec<Value>),
    Number(Number),
    String(String),
    Boolean(bool),
    Null,
}

impl Value {
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(num) => Some(num),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_null(&self) -> Option<()> {
        match self {
            Value::Null => Some(()),
            _ => None,
        }
    }

    /// Child under `key`. Absence, not failure: `None` covers both a missing
    /// key and a non-object receiver. Combined with the `as_*` family this is
    /// the strict path that tells apart absent, wrong type and present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Element at `index`; `None` when out of range or not an array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(values) => values.get(index),
            _ => None,
        }
    }

    pub fn has_key(&self, key: &str) -> bool {
        matches!(self, Value::Object(map) if map.contains_key(key))
    }

    // The lenient accessors below never fail: a missing key, an out-of-range
    // index and a wrong-typed value all collapse into the default. Callers who
    // need to tell those apart use get()/get_index() plus as_*().

    /// String under `key`, or `""` when missing or not a string.
    pub fn get_string(&self, key: &str) -> &str {
        match self.get(key) {
            Some(Value::String(s)) => s,
            _ => "",
        }
    }

    /// Integer under `key`, or `0` when missing or not a number. Fractional
    /// numbers truncate toward zero.
    pub fn get_int(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(Value::Number(num)) => num.to_i64(),
            _ => 0,
        }
    }

    /// Float under `key`, or `0.0` when missing or not a number. Integral
    /// numbers widen.
    pub fn get_double(&self, key: &str) -> f64 {
        match self.get(key) {
            Some(Value::Number(num)) => num.to_f64(),
            _ => 0.0,
        }
    }

    /// Object under `key`, or `None` when missing or not an object.
    pub fn get_object(&self, key: &str) -> Option<&Value> {
        match self.get(key) {
            Some(val @ Value::Object(_)) => Some(val),
            _ => None,
        }
    }

    /// String at `index`, or `""` when out of range or not a string.
    pub fn string_at(&self, index: usize) -> &str {
        match self.get_index(index) {
            Some(Value::String(s)) => s,
            _ => "",
        }
    }

    /// Integer at `index`, or `0`; fractional numbers truncate toward zero.
    pub fn int_at(&self, index: usize) -> i64 {
        match self.get_index(index) {
            Some(Value::Number(num)) => num.to_i64(),
            _ => 0,
        }
    }

    /// Float at `index`, or `0.0`; integral numbers widen.
    pub fn double_at(&self, index: usize) -> f64 {
        match self.get_index(index) {
            Some(Value::Number(num)) => num.to_f64(),
            _ => 0.0,
        }
    }

    /// Inserts `value` under `key`, taking ownership. An existing entry is
    /// replaced and its subtree dropped. On a non-object receiver the write is
    /// a no-op and `value` is dropped, mirroring the lenient read policy.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        if let Value::Object(map) = self {
            map.insert(key.into(), value);
        }
    }

    /// Appends `value`, taking ownership. Insertion order is preserved. On a
    /// non-array receiver the write is a no-op and `value` is dropped.
    pub fn add(&mut self, value: Value) {
        if let Value::Array(values) = self {
            values.push(value);
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::render::render(self, 0))
    }
}

// used by the json!() macro; literals can only be &str or a numeric type
impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::String(val.to_string())
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::String(val)
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Boolean(val)
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Value::Number(Number::from(val as i64))
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Number(Number::from(val))
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Number(Number::from(val))
    }
}

impl From<Number> for Value {
    fn from(val: Number) -> Self {
        Value::Number(val)
    }
}
