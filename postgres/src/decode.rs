//! Result row decoding, driven by each column's PostgreSQL type.

use chrono::{DateTime, NaiveDateTime, Utc};
use postgres::types::Type;
use rowbind_core::{Result, Row, RowbindError, Value};

/// The column types rows can be decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Boolean,
    Smallint,
    Integer,
    Bigint,
    Real,
    DoublePrecision,
    Text,
    /// TIMESTAMPTZ
    Timestamptz,
    /// TIMESTAMP, read as UTC
    Timestamp,
}

impl ColumnKind {
    pub fn of(ty: &Type) -> Option<Self> {
        let kind = match *ty {
            Type::BOOL => ColumnKind::Boolean,
            Type::INT2 => ColumnKind::Smallint,
            Type::INT4 => ColumnKind::Integer,
            Type::INT8 => ColumnKind::Bigint,
            Type::FLOAT4 => ColumnKind::Real,
            Type::FLOAT8 => ColumnKind::DoublePrecision,
            Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => ColumnKind::Text,
            Type::TIMESTAMPTZ => ColumnKind::Timestamptz,
            Type::TIMESTAMP => ColumnKind::Timestamp,
            _ => return None,
        };
        Some(kind)
    }
}

/// Converts a driver row into a [`Row`], SQL NULL becoming [`Value::Null`].
pub fn decode_row(row: &postgres::Row) -> Result<Row> {
    let mut values = Vec::with_capacity(row.len());

    for (idx, column) in row.columns().iter().enumerate() {
        let Some(kind) = ColumnKind::of(column.type_()) else {
            return Err(RowbindError::UnsupportedType {
                column: column.name().to_string(),
                type_name: column.type_().name().to_string(),
            });
        };

        let value = match kind {
            ColumnKind::Boolean => row.try_get::<_, Option<bool>>(idx)?.map(Value::Boolean),
            ColumnKind::Smallint => row.try_get::<_, Option<i16>>(idx)?.map(Value::Smallint),
            ColumnKind::Integer => row.try_get::<_, Option<i32>>(idx)?.map(Value::Integer),
            ColumnKind::Bigint => row.try_get::<_, Option<i64>>(idx)?.map(Value::Bigint),
            ColumnKind::Real => row.try_get::<_, Option<f32>>(idx)?.map(Value::Real),
            ColumnKind::DoublePrecision => row
                .try_get::<_, Option<f64>>(idx)?
                .map(Value::DoublePrecision),
            ColumnKind::Text => row.try_get::<_, Option<String>>(idx)?.map(Value::Text),
            ColumnKind::Timestamptz => row
                .try_get::<_, Option<DateTime<Utc>>>(idx)?
                .map(Value::Timestamp),
            ColumnKind::Timestamp => row
                .try_get::<_, Option<NaiveDateTime>>(idx)?
                .map(|ts| Value::Timestamp(ts.and_utc())),
        };
        values.push(value.unwrap_or(Value::Null));
    }

    Ok(Row::new(values))
}
