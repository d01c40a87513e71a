//! Tracing utilities for query observability.
//!
//! Enable the `tracing` feature (on by default) to emit events via the
//! `tracing` crate. These macros no-op when the feature is disabled, avoiding
//! `#[cfg]` boilerplate at every call site.

/// Emit a debug-level tracing event with the SQL text and parameter count.
///
/// ```ignore
/// rowbind_trace_query!(&stmt.sql, stmt.args.len());
/// ```
#[macro_export]
macro_rules! rowbind_trace_query {
    ($sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(sql = %$sql, params = $param_count, "rowbind.query");
    };
}

/// Emit a debug-level tracing event for a batched foreign key expansion.
///
/// ```ignore
/// rowbind_trace_expand!("pets", "owner_id", keys.len());
/// ```
#[macro_export]
macro_rules! rowbind_trace_expand {
    ($table:expr, $field:expr, $keys:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(table = $table, field = $field, keys = $keys, "rowbind.expand");
    };
}
