use crate::decode::decode_row;
use postgres::types::ToSql;
use postgres::{Client, NoTls};
use rowbind_core::{Backend, Result, Row, RowbindError, Value};
use smallvec::SmallVec;
use std::fmt;

/// Environment variable [`PostgresBackend::from_env`] reads the connection
/// string from.
pub const DATABASE_URL: &str = "DATABASE_URL";

/// [`Backend`] over a synchronous PostgreSQL client.
pub struct PostgresBackend {
    client: Client,
}

impl PostgresBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connects without TLS.
    pub fn connect(params: &str) -> Result<Self> {
        let client = Client::connect(params, NoTls)?;
        Ok(Self::new(client))
    }

    /// Connects to the database named by `DATABASE_URL`.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(DATABASE_URL)
            .map_err(|_| RowbindError::Execution(format!("{DATABASE_URL} is not set")))?;
        Self::connect(&url)
    }

    #[inline]
    pub fn client(&self) -> &Client {
        &self.client
    }

    #[inline]
    pub fn client_mut(&mut self) -> &mut Client {
        &mut self.client
    }

    pub fn into_client(self) -> Client {
        self.client
    }
}

fn param_refs(args: &[Value]) -> SmallVec<[&(dyn ToSql + Sync); 8]> {
    let mut param_refs: SmallVec<[&(dyn ToSql + Sync); 8]> = SmallVec::with_capacity(args.len());
    param_refs.extend(args.iter().map(|arg| arg as &(dyn ToSql + Sync)));
    param_refs
}

impl Backend for PostgresBackend {
    fn query_one(&mut self, sql: &str, args: &[Value]) -> Result<Option<Row>> {
        let params = param_refs(args);
        let row = self.client.query_opt(sql, &params[..])?;
        row.as_ref().map(decode_row).transpose()
    }

    fn query_many(&mut self, sql: &str, args: &[Value]) -> Result<Vec<Row>> {
        let params = param_refs(args);
        let rows = self.client.query(sql, &params[..])?;
        rows.iter().map(decode_row).collect()
    }

    fn exec(&mut self, sql: &str, args: &[Value]) -> Result<u64> {
        let params = param_refs(args);
        Ok(self.client.execute(sql, &params[..])?)
    }
}

impl fmt::Debug for PostgresBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresBackend")
            .field("closed", &self.client.is_closed())
            .finish()
    }
}
