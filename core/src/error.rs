use thiserror::Error;

#[derive(Debug, Error)]
pub enum RowbindError {
    /// No row matched the record's unique identifier
    #[error("No rows found in '{table}'")]
    NotFound { table: &'static str },

    /// A DELETE did not affect exactly one row
    #[error("Nothing was deleted from '{table}' ({affected} rows affected)")]
    NotDeleted { table: &'static str, affected: u64 },

    /// None of the record's unique identifier fields is set
    #[error("There is no unique identifier field set on '{table}'")]
    NoUniqueIdentifier { table: &'static str },

    /// ORDER BY referenced a column the record does not declare
    #[error("Could not order table '{table}' by the invalid column '{column}'")]
    InvalidOrderBy { table: &'static str, column: String },

    /// A result row did not have one column per declared field
    #[error("Row has {actual} columns, expected {expected}")]
    ColumnCount { expected: usize, actual: usize },

    /// A column value could not be written into its bound field
    #[error("Mapping error on column '{column}': {source}")]
    Mapping {
        column: String,
        #[source]
        source: TypeMismatch,
    },

    /// The backend returned a column of a type no [`Value`](crate::Value) represents
    #[error("Mapping error on column '{column}': unsupported type {type_name}")]
    UnsupportedType { column: String, type_name: String },

    /// Error reported by the execution backend
    #[error("Execution error: {0}")]
    Execution(String),

    /// Postgres driver errors
    #[cfg(feature = "postgres-sync")]
    #[error("Postgres error: {0}")]
    Postgres(#[from] postgres::Error),
}

impl RowbindError {
    /// True for every "the row you asked for isn't there" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RowbindError::NotFound { .. }
                | RowbindError::NotDeleted { .. }
                | RowbindError::NoUniqueIdentifier { .. }
        )
    }
}

/// A [`Value`](crate::Value) could not convert into the Rust type of a bound field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot assign {found} to {expected}")]
pub struct TypeMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}

impl TypeMismatch {
    pub const fn new(expected: &'static str, found: &'static str) -> Self {
        Self { expected, found }
    }
}

/// Result type for rowbind operations
pub type Result<T> = std::result::Result<T, RowbindError>;
