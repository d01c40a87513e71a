//! # rowbind
//!
//! A declaration-driven micro ORM. A record lists its table and its column
//! bindings once; rowbind renders the INSERT, SELECT, UPDATE and DELETE
//! statements, runs them through a [`Backend`], writes result rows back into
//! the record and resolves foreign references.
//!
//! ## Quick Start
//!
//! ```rust
//! use rowbind::prelude::*;
//!
//! #[derive(Debug, Default, Clone)]
//! struct Animal {
//!     id: i64,
//!     slug: String,
//!     name: String,
//! }
//!
//! impl Model for Animal {
//!     fn configuration(&mut self) -> Configuration<'_> {
//!         Configuration::new("animals")
//!             .field(Field::new("id", &mut self.id).unique().is_set(is_set::non_zero))
//!             .field(
//!                 Field::new("slug", &mut self.slug)
//!                     .insertable()
//!                     .unique()
//!                     .is_set(is_set::non_empty),
//!             )
//!             .field(Field::new("name", &mut self.name).insertable().updatable())
//!     }
//! }
//!
//! let mut rigby = Animal {
//!     slug: "rigby".into(),
//!     name: "Rigby".into(),
//!     ..Default::default()
//! };
//! let insert = rowbind::query::insert(&rigby.configuration());
//! assert_eq!(
//!     insert.sql,
//!     "INSERT INTO animals(slug, name) VALUES($1, $2) RETURNING id, slug, name"
//! );
//! ```
//!
//! Executing needs a [`Db`] over a backend:
//!
//! ```rust,ignore
//! let backend = rowbind::postgres::PostgresBackend::from_env()?;
//! let mut db = Db::new(backend).with_query_log(StdoutLog::stdout());
//! rigby.insert(&mut db)?;
//! ```
//!
//! ## Database Support
//!
//! | Database   | Driver   | Feature Flag    |
//! |------------|----------|-----------------|
//! | PostgreSQL | postgres | `postgres-sync` |
//!
//! Any other store can be plugged in by implementing [`Backend`].

pub use rowbind_core::*;

// =============================================================================
// PostgreSQL module
// =============================================================================

/// PostgreSQL backend over the synchronous `postgres` client.
#[cfg(feature = "postgres-sync")]
pub mod postgres {
    pub use rowbind_postgres::*;
}
