//! Record types and the operations every record gets.

use crate::bulk::BulkFetchOptions;
use crate::configuration::Configuration;
use crate::db::Db;
use crate::error::{Result, RowbindError};
use crate::foreign;
use crate::identifier::{self, Resolution};
use crate::query;

/// A type that persists to one table.
///
/// `configuration` binds the fields of this instance, in the column order
/// every generated statement uses. It must describe the same table and the
/// same fields, in the same order, for every instance of the type.
///
/// `Default` provides the blank instance bulk fetches materialize into.
pub trait Model: Default {
    fn configuration(&mut self) -> Configuration<'_>;
}

/// Persistence operations, available on every [`Model`].
pub trait Record: Model {
    /// Inserts the insertable fields and reads the full row back, including
    /// database-generated columns.
    fn insert(&mut self, db: &mut Db) -> Result<()>;

    /// Replaces every field with the row matching the record's identifier.
    fn load(&mut self, db: &mut Db) -> Result<()>;

    /// Writes the updatable fields and reads the full row back.
    fn update(&mut self, db: &mut Db) -> Result<()>;

    /// Deletes the row matching the record's identifier.
    ///
    /// Anything other than exactly one affected row is
    /// [`RowbindError::NotDeleted`].
    fn delete(&mut self, db: &mut Db) -> Result<()>;

    /// Shorthand for [`Db::bulk_fetch`].
    fn bulk_fetch(db: &mut Db, options: &BulkFetchOptions) -> Result<Vec<Self>> {
        db.bulk_fetch(options)
    }
}

impl<T: Model> Record for T {
    fn insert(&mut self, db: &mut Db) -> Result<()> {
        let mut config = self.configuration();
        let statement = query::insert(&config);

        let row = db.query_one(&statement)?.ok_or(RowbindError::NotFound {
            table: config.table(),
        })?;
        config.materialize(row)?;
        foreign::expand(&mut config, db)
    }

    fn load(&mut self, db: &mut Db) -> Result<()> {
        let mut config = self.configuration();
        let identifier = identifier::resolve(&config, Resolution::Load)?;
        let statement = query::load(&config, identifier);

        let row = db.query_one(&statement)?.ok_or(RowbindError::NotFound {
            table: config.table(),
        })?;
        config.materialize(row)?;
        foreign::expand(&mut config, db)
    }

    fn update(&mut self, db: &mut Db) -> Result<()> {
        let mut config = self.configuration();
        let identifier = identifier::resolve(&config, Resolution::Mutate)?;
        let statement = query::update(&config, identifier);

        let row = db.query_one(&statement)?.ok_or(RowbindError::NotFound {
            table: config.table(),
        })?;
        config.materialize(row)?;
        foreign::expand(&mut config, db)
    }

    fn delete(&mut self, db: &mut Db) -> Result<()> {
        let config = self.configuration();
        let identifier = identifier::resolve(&config, Resolution::Mutate)?;
        let statement = query::delete(&config, identifier);

        match db.exec(&statement)? {
            1 => Ok(()),
            affected => Err(RowbindError::NotDeleted {
                table: config.table(),
                affected,
            }),
        }
    }
}
