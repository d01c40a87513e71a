use crate::error::Result;
use crate::row::Row;
use crate::value::Value;

/// Executes rendered statements.
///
/// Placeholders are positional and 1-based (`$1`, `$2`, ...), and `args[0]`
/// binds to `$1`. Implementations pass driver failures through unchanged;
/// the engine never retries.
pub trait Backend {
    /// Runs a statement expected to produce at most one row.
    fn query_one(&mut self, sql: &str, args: &[Value]) -> Result<Option<Row>>;

    /// Runs a statement and returns every row it produced, in order.
    fn query_many(&mut self, sql: &str, args: &[Value]) -> Result<Vec<Row>>;

    /// Runs a statement and returns the number of affected rows.
    fn exec(&mut self, sql: &str, args: &[Value]) -> Result<u64>;
}

impl<B: Backend + ?Sized> Backend for &mut B {
    fn query_one(&mut self, sql: &str, args: &[Value]) -> Result<Option<Row>> {
        (**self).query_one(sql, args)
    }

    fn query_many(&mut self, sql: &str, args: &[Value]) -> Result<Vec<Row>> {
        (**self).query_many(sql, args)
    }

    fn exec(&mut self, sql: &str, args: &[Value]) -> Result<u64> {
        (**self).exec(sql, args)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn query_one(&mut self, sql: &str, args: &[Value]) -> Result<Option<Row>> {
        (**self).query_one(sql, args)
    }

    fn query_many(&mut self, sql: &str, args: &[Value]) -> Result<Vec<Row>> {
        (**self).query_many(sql, args)
    }

    fn exec(&mut self, sql: &str, args: &[Value]) -> Result<u64> {
        (**self).exec(sql, args)
    }
}
