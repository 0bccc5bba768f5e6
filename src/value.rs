//! Self-describing MessagePack value.
//!
//! [`Value`] is what the interface-typed decode entry point produces when
//! the wire turns out not to hold a string: the generic decoder parses
//! whatever is there into this enum.

/// A decoded MessagePack value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Nil.
    Nil,
    /// Boolean.
    Bool(bool),
    /// Signed integer (any int family code).
    Int(i64),
    /// Unsigned integer that does not fit `i64`.
    UInt(u64),
    /// Floating point (float 32 is widened on decode).
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Raw binary blob.
    Bin(Vec<u8>),
    /// Array of values.
    Array(Vec<Value>),
    /// Map preserving entry order.
    Map(Vec<(Value, Value)>),
    /// Application extension payload: type id plus raw bytes.
    Ext(i8, Vec<u8>),
}

impl Value {
    /// Returns the string slice if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// True for [`Value::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
