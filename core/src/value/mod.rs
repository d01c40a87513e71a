//! Bound values passed to and read back from the execution backend

mod conversions;
mod drivers;

pub use conversions::{FromValue, ToValue};

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

//------------------------------------------------------------------------------
// Value Definition
//------------------------------------------------------------------------------

/// A single SQL value.
///
/// Every field binding reads and writes through this type, so it is the
/// closed set of scalars a record can persist. `Option<T>` fields map `None`
/// to [`Value::Null`].
///
/// # Examples
///
/// ```
/// use rowbind_core::Value;
///
/// let id: Value = 42i64.into();
/// assert!(matches!(id, Value::Bigint(42)));
///
/// let missing: Value = Option::<String>::None.into();
/// assert!(missing.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// NULL value
    #[default]
    Null,
    /// BOOLEAN values
    Boolean(bool),
    /// SMALLINT values (16-bit signed integer)
    Smallint(i16),
    /// INTEGER values (32-bit signed integer)
    Integer(i32),
    /// BIGINT values (64-bit signed integer)
    Bigint(i64),
    /// Unsigned integers; bound as BIGINT when they fit
    Unsigned(u64),
    /// REAL values (32-bit floating point)
    Real(f32),
    /// DOUBLE PRECISION values (64-bit floating point)
    DoublePrecision(f64),
    /// TEXT, VARCHAR, CHAR values
    Text(String),
    /// TIMESTAMPTZ values
    Timestamp(DateTime<Utc>),
}

impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// SQL-ish name of the variant, used in mapping errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Boolean(_) => "BOOLEAN",
            Value::Smallint(_) => "SMALLINT",
            Value::Integer(_) => "INTEGER",
            Value::Bigint(_) => "BIGINT",
            Value::Unsigned(_) => "UNSIGNED",
            Value::Real(_) => "REAL",
            Value::DoublePrecision(_) => "DOUBLE PRECISION",
            Value::Text(_) => "TEXT",
            Value::Timestamp(_) => "TIMESTAMPTZ",
        }
    }

    /// Widens any integer variant, `None` for everything else.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Value::Smallint(i) => Some(i128::from(*i)),
            Value::Integer(i) => Some(i128::from(*i)),
            Value::Bigint(i) => Some(i128::from(*i)),
            Value::Unsigned(u) => Some(i128::from(*u)),
            Value::Null
            | Value::Boolean(_)
            | Value::Real(_)
            | Value::DoublePrecision(_)
            | Value::Text(_)
            | Value::Timestamp(_) => None,
        }
    }

    /// Equality used to match foreign keys against related records.
    ///
    /// Integers compare by numeric value across widths, so an INTEGER
    /// foreign key matches a BIGINT primary key. NULL never matches.
    pub fn key_eq(&self, other: &Value) -> bool {
        match (self.as_integer(), other.as_integer()) {
            (Some(a), Some(b)) => a == b,
            _ => !self.is_null() && self == other,
        }
    }

    /// Renders the value the way it would read inline in a SQL statement.
    ///
    /// Strings and timestamps are single-quoted, numbers and booleans are
    /// literal, NULL renders as `null`.
    pub fn to_log_string(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Smallint(i) => i.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Bigint(i) => i.to_string(),
            Value::Unsigned(u) => u.to_string(),
            Value::Real(r) => r.to_string(),
            Value::DoublePrecision(r) => r.to_string(),
            Value::Text(s) => format!("'{}'", s),
            Value::Timestamp(ts) => format!("'{}'", ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_log_string())
    }
}
