//! A JSON-like value, held in memory.
//!
//! Used to feed arbitrary data to a `StructuredWriter` and as the result
//! of decoding UBJSON.

use crate::io::StructuredWriter;
use crate::WriterError;

/// A structured value.
///
/// Objects keep their members in order, duplicates included.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Emit this value, depth-first.
    pub fn write_to<W>(&self, out: &mut W) -> Result<(), WriterError>
    where
        W: StructuredWriter + ?Sized,
    {
        match *self {
            Value::Null => out.null(),
            Value::Bool(value) => out.boolean(value),
            Value::Integer(value) => out.integer(value),
            Value::Float(value) => out.float(value),
            Value::String(ref value) => out.string(value),
            Value::Array(ref items) => {
                out.start_array()?;
                for item in items {
                    item.write_to(out)?;
                }
                out.end_array()
            }
            Value::Object(ref members) => {
                out.start_object()?;
                for (name, value) in members {
                    out.member(name)?;
                    value.write_to(out)?;
                }
                out.end_object()
            }
        }
    }
}

impl<'a> From<&'a str> for Value {
    fn from(value: &'a str) -> Self {
        Value::String(value.to_string())
    }
}
impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

/// Numbers that fit in an `i64` are integers, all others are floats.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as JSON;
        match value {
            JSON::Null => Value::Null,
            JSON::Bool(value) => Value::Bool(value),
            JSON::Number(number) => match number.as_i64() {
                Some(value) => Value::Integer(value),
                None => Value::Float(number.as_f64().unwrap_or(std::f64::NAN)),
            },
            JSON::String(value) => Value::String(value),
            JSON::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JSON::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(name, value)| (name, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Emit a `serde_json::Value`, depth-first, without converting it first.
pub fn write_json<W>(value: &serde_json::Value, out: &mut W) -> Result<(), WriterError>
where
    W: StructuredWriter + ?Sized,
{
    use serde_json::Value as JSON;
    match *value {
        JSON::Null => out.null(),
        JSON::Bool(value) => out.boolean(value),
        JSON::Number(ref number) => match number.as_i64() {
            Some(value) => out.integer(value),
            None => out.float(number.as_f64().unwrap_or(std::f64::NAN)),
        },
        JSON::String(ref value) => out.string(value),
        JSON::Array(ref items) => {
            out.start_array()?;
            for item in items {
                write_json(item, out)?;
            }
            out.end_array()
        }
        JSON::Object(ref members) => {
            out.start_object()?;
            for (name, value) in members {
                out.member(name)?;
                write_json(value, out)?;
            }
            out.end_object()
        }
    }
}
