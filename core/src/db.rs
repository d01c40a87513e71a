use crate::backend::Backend;
use crate::bulk::BulkFetchOptions;
use crate::error::Result;
use crate::foreign;
use crate::log::QueryLog;
use crate::model::Model;
use crate::query::{self, Statement};
use crate::row::Row;
use std::fmt;

/// Entry point for every operation: the execution backend plus an optional
/// query log.
///
/// Operations borrow the `Db` mutably, so one backend serves one operation at
/// a time.
pub struct Db {
    backend: Box<dyn Backend>,
    log: Option<Box<dyn QueryLog>>,
}

impl Db {
    /// Wraps `backend` with query logging disabled.
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            log: None,
        }
    }

    /// Sends every executed statement to `log` before it runs.
    pub fn with_query_log(mut self, log: impl QueryLog + 'static) -> Self {
        self.log = Some(Box::new(log));
        self
    }

    #[inline]
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// Direct access to the backend, e.g. for schema setup.
    #[inline]
    pub fn backend_mut(&mut self) -> &mut dyn Backend {
        self.backend.as_mut()
    }

    pub fn into_backend(self) -> Box<dyn Backend> {
        self.backend
    }

    /// Fetches a batch of `T` and expands its foreign fields.
    ///
    /// The ORDER BY terms are validated before anything reaches the backend.
    ///
    /// ```
    /// use rowbind_core::{Backend, BulkFetchOptions, Configuration, Db, Field, Model, Result, Row, Value};
    ///
    /// #[derive(Default)]
    /// struct Animal {
    ///     id: i64,
    ///     name: String,
    /// }
    ///
    /// impl Model for Animal {
    ///     fn configuration(&mut self) -> Configuration<'_> {
    ///         Configuration::new("animals")
    ///             .field(Field::new("id", &mut self.id).unique())
    ///             .field(Field::new("name", &mut self.name).insertable())
    ///     }
    /// }
    ///
    /// struct Fixed;
    ///
    /// impl Backend for Fixed {
    ///     fn query_one(&mut self, _: &str, _: &[Value]) -> Result<Option<Row>> {
    ///         Ok(None)
    ///     }
    ///     fn query_many(&mut self, _: &str, _: &[Value]) -> Result<Vec<Row>> {
    ///         Ok(vec![Row::from(vec![Value::Bigint(1), Value::from("Rigby")])])
    ///     }
    ///     fn exec(&mut self, _: &str, _: &[Value]) -> Result<u64> {
    ///         Ok(0)
    ///     }
    /// }
    ///
    /// let mut db = Db::new(Fixed);
    /// let animals: Vec<Animal> = db.bulk_fetch(&BulkFetchOptions::new().limit(10))?;
    /// assert_eq!(animals[0].name, "Rigby");
    /// # Ok::<(), rowbind_core::RowbindError>(())
    /// ```
    pub fn bulk_fetch<T: Model>(&mut self, options: &BulkFetchOptions) -> Result<Vec<T>> {
        let statement = query::bulk_fetch(&T::default().configuration(), options)?;
        let rows = self.query_many(&statement)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let mut record = T::default();
            record.configuration().materialize(row)?;
            records.push(record);
        }

        foreign::expand_batch(&mut records, self)?;
        Ok(records)
    }

    fn record(&self, statement: &Statement) {
        crate::rowbind_trace_query!(&statement.sql, statement.args.len());
        if let Some(log) = &self.log {
            log.record(&statement.sql, &statement.args);
        }
    }

    pub(crate) fn query_one(&mut self, statement: &Statement) -> Result<Option<Row>> {
        self.record(statement);
        self.backend.query_one(&statement.sql, &statement.args)
    }

    pub(crate) fn query_many(&mut self, statement: &Statement) -> Result<Vec<Row>> {
        self.record(statement);
        self.backend.query_many(&statement.sql, &statement.args)
    }

    pub(crate) fn exec(&mut self, statement: &Statement) -> Result<u64> {
        self.record(statement);
        self.backend.exec(&statement.sql, &statement.args)
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("query_log", &self.log.is_some())
            .finish_non_exhaustive()
    }
}
