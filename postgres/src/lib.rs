//! PostgreSQL backend for rowbind, built on the synchronous [`postgres`] client.
//!
//! ```no_run
//! use rowbind_core::Db;
//! use rowbind_postgres::PostgresBackend;
//!
//! fn main() -> rowbind_core::Result<()> {
//!     let backend = PostgresBackend::connect("host=localhost user=postgres")?;
//!     let _db = Db::new(backend);
//!     Ok(())
//! }
//! ```

mod backend;
mod decode;

pub use backend::{DATABASE_URL, PostgresBackend};
pub use decode::{ColumnKind, decode_row};

pub use postgres::{Client, NoTls};
