pub mod backend;
pub mod bulk;
pub mod configuration;
pub mod db;
pub mod error;
pub mod field;
pub mod foreign;
pub mod identifier;
pub mod log;
pub mod model;
pub mod order_by;
pub mod placeholder;
pub mod predicate;
pub mod query;
pub mod row;
pub mod tracing;
pub mod value;

// Re-export key types and traits
pub use backend::Backend;
pub use bulk::BulkFetchOptions;
pub use configuration::Configuration;
pub use db::Db;
pub use error::{Result, RowbindError, TypeMismatch};
pub use field::{Column, Field, IsSet, is_set};
pub use foreign::{Reference, RelatedSet, Relation};
pub use identifier::Resolution;
pub use log::{QueryLog, StdoutLog, WriterLog};
pub use model::{Model, Record};
pub use order_by::{Direction, OrderBy};
pub use placeholder::{Placeholder, Placeholders};
pub use predicate::{ArityError, Predicate, PredicateKind};
pub use query::Statement;
pub use row::Row;
pub use value::{FromValue, ToValue, Value};

/// Everything needed to declare and persist a record.
pub mod prelude {
    pub use crate::{
        BulkFetchOptions, Configuration, Db, Field, Model, OrderBy, Predicate, Record, Reference,
        Result, RowbindError, Value, is_set,
    };
}
