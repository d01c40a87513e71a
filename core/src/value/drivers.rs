//! Database driver implementations for Value

//------------------------------------------------------------------------------
// postgres ToSql implementation
//------------------------------------------------------------------------------

#[cfg(feature = "postgres-sync")]
mod postgres_tosql_impl {
    use super::super::Value;
    use bytes::BytesMut;
    use postgres::types::{IsNull, ToSql, Type};
    use std::error::Error;

    type BoxError = Box<dyn Error + Sync + Send>;

    // Integers are narrowed or widened to the width the server asked for,
    // so an i64 field can bind against an INT4 column.
    fn integer_to_sql(value: i128, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
        match *ty {
            Type::INT2 => i16::try_from(value)?.to_sql(ty, out),
            Type::INT4 => i32::try_from(value)?.to_sql(ty, out),
            Type::FLOAT4 => (value as f32).to_sql(ty, out),
            Type::FLOAT8 => (value as f64).to_sql(ty, out),
            Type::TEXT | Type::VARCHAR => value.to_string().to_sql(ty, out),
            _ => i64::try_from(value)?.to_sql(ty, out),
        }
    }

    impl ToSql for Value {
        fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
            match self {
                Value::Null => Ok(IsNull::Yes),
                Value::Boolean(b) => b.to_sql(ty, out),
                Value::Smallint(_) | Value::Integer(_) | Value::Bigint(_) | Value::Unsigned(_) => {
                    let value = self.as_integer().ok_or("integer value expected")?;
                    integer_to_sql(value, ty, out)
                }
                Value::Real(r) => match *ty {
                    Type::FLOAT8 => f64::from(*r).to_sql(ty, out),
                    _ => r.to_sql(ty, out),
                },
                Value::DoublePrecision(r) => match *ty {
                    Type::FLOAT4 => (*r as f32).to_sql(ty, out),
                    _ => r.to_sql(ty, out),
                },
                Value::Text(s) => s.as_str().to_sql(ty, out),
                Value::Timestamp(ts) => match *ty {
                    Type::TIMESTAMP => ts.naive_utc().to_sql(ty, out),
                    _ => ts.to_sql(ty, out),
                },
            }
        }

        fn accepts(_ty: &Type) -> bool {
            // Accept all types - conversion is handled per variant
            true
        }

        postgres::types::to_sql_checked!();
    }
}
