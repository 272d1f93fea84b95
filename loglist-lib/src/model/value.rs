//! Field values of a log record.

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

/// A dynamic value held by a record field.
///
/// # Type Mapping
///
/// | JSON / host type | Rust Variant |
/// |------------------|--------------|
/// | null | `Null` |
/// | boolean | `Bool` |
/// | integer (32-bit) | `Int` |
/// | integer (64-bit) | `Long` |
/// | number | `Float` |
/// | string (timestamps included) | `String` |
/// | relationship object (`LoggedBy__r`) | `Record` |
/// | array | `Json` |
///
/// Values are built from host JSON by the `Record` deserializer only.
/// Timestamps stay strings until read through [`Value::as_datetime`], so
/// free text that looks like a date survives a round trip.
///
/// # Example
///
/// ```
/// use loglist_lib::model::Value;
///
/// let level = Value::from("ERROR");
/// let line = Value::from(42);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null from the host.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Date and time.
    DateTime(DateTime<Utc>),
    /// Nested record (from a relationship lookup).
    Record(Box<super::Record>),
    /// Fallback for JSON values with no dedicated variant (arrays).
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Record(_) => "record",
            Value::Json(_) => "json",
        }
    }

    /// Returns the value as an `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(f64::from(*n)),
            Value::Long(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Reads the value as a timestamp, parsing host date-time strings.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            Value::String(s) => parse_datetime(s),
            _ => None,
        }
    }
}

/// Layout the host uses when it isn't RFC 3339 (`+0000` offsets).
const HOST_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, HOST_DATETIME_FORMAT))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Value::Record(r) => f.write_str(r.name().unwrap_or_default()),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! value_from {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(v: $source) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i32 => Int,
    i64 => Long,
    f64 => Float,
    String => String,
    DateTime<Utc> => DateTime,
    serde_json::Value => Json,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<super::Record> for Value {
    fn from(record: super::Record) -> Self {
        Value::Record(Box::new(record))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
