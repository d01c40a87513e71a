//! From<T>, ToValue and FromValue implementations

use super::Value;
use crate::error::TypeMismatch;
use chrono::{DateTime, Utc};

/// Reads a Rust value out as a [`Value`].
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Converts a [`Value`] back into a Rust value.
pub trait FromValue: Sized {
    /// Name reported in [`TypeMismatch::expected`].
    const EXPECTED: &'static str;

    fn from_value(value: Value) -> Result<Self, TypeMismatch>;
}

#[inline]
fn mismatch<T: FromValue>(value: &Value) -> TypeMismatch {
    TypeMismatch::new(T::EXPECTED, value.type_name())
}

//------------------------------------------------------------------------------
// Integers
//------------------------------------------------------------------------------

// Any integer variant converts as long as it fits the target width.
macro_rules! integer_value {
    ($($ty:ty => $variant:ident($inner:ty), $name:literal;)+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(<$inner>::from(value))
                }
            }

            impl ToValue for $ty {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }

            impl FromValue for $ty {
                const EXPECTED: &'static str = $name;

                fn from_value(value: Value) -> Result<Self, TypeMismatch> {
                    value
                        .as_integer()
                        .and_then(|i| <$ty>::try_from(i).ok())
                        .ok_or_else(|| mismatch::<Self>(&value))
                }
            }
        )+
    };
}

integer_value! {
    i8 => Smallint(i16), "i8";
    i16 => Smallint(i16), "i16";
    i32 => Integer(i32), "i32";
    i64 => Bigint(i64), "i64";
    u8 => Smallint(i16), "u8";
    u16 => Integer(i32), "u16";
    u32 => Bigint(i64), "u32";
    u64 => Unsigned(u64), "u64";
}

//------------------------------------------------------------------------------
// Floats
//------------------------------------------------------------------------------

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real(value)
    }
}

impl ToValue for f32 {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Real(*self)
    }
}

impl FromValue for f32 {
    const EXPECTED: &'static str = "f32";

    fn from_value(value: Value) -> Result<Self, TypeMismatch> {
        match value {
            Value::Real(r) => Ok(r),
            Value::DoublePrecision(r) => Ok(r as f32),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::DoublePrecision(value)
    }
}

impl ToValue for f64 {
    #[inline]
    fn to_value(&self) -> Value {
        Value::DoublePrecision(*self)
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "f64";

    fn from_value(value: Value) -> Result<Self, TypeMismatch> {
        match value {
            Value::Real(r) => Ok(f64::from(r)),
            Value::DoublePrecision(r) => Ok(r),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

//------------------------------------------------------------------------------
// Booleans, text, timestamps
//------------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl ToValue for bool {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_value(value: Value) -> Result<Self, TypeMismatch> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl ToValue for String {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "String";

    fn from_value(value: Value) -> Result<Self, TypeMismatch> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl ToValue for DateTime<Utc> {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl FromValue for DateTime<Utc> {
    const EXPECTED: &'static str = "DateTime<Utc>";

    fn from_value(value: Value) -> Result<Self, TypeMismatch> {
        match value {
            Value::Timestamp(ts) => Ok(ts),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

//------------------------------------------------------------------------------
// Option<T>
//------------------------------------------------------------------------------

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Value::from)
    }
}

impl<T: ToValue> ToValue for Option<T> {
    #[inline]
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_value(value: Value) -> Result<Self, TypeMismatch> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_narrow_when_they_fit() {
        assert_eq!(i32::from_value(Value::Bigint(7)), Ok(7));
        assert_eq!(
            i16::from_value(Value::Bigint(1 << 20)),
            Err(TypeMismatch::new("i16", "BIGINT"))
        );
        assert!(u64::from_value(Value::Integer(-1)).is_err());
    }

    #[test]
    fn null_only_fits_options() {
        assert_eq!(Option::<i64>::from_value(Value::Null), Ok(None));
        assert_eq!(Option::<i64>::from_value(Value::Integer(5)), Ok(Some(5)));
        assert_eq!(
            String::from_value(Value::Null),
            Err(TypeMismatch::new("String", "NULL"))
        );
    }
}
