//! Statement rendering.
//!
//! Every function here is pure: a configuration (plus options) in, SQL text
//! and its positional arguments out. Column lists always enumerate every
//! field in declaration order so result rows line up with
//! [`Configuration::materialize`].

use crate::bulk::BulkFetchOptions;
use crate::configuration::Configuration;
use crate::error::{Result, RowbindError};
use crate::field::Field;
use crate::placeholder::Placeholders;
use crate::predicate::render_where;
use crate::value::Value;
use core::fmt;

/// Rendered SQL plus the values bound to its placeholders, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statement {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Statement {
    pub fn new(sql: String, args: Vec<Value>) -> Self {
        Self { sql, args }
    }

    /// The statement with every `$n` replaced by its argument, for humans.
    pub fn to_inline_string(&self) -> String {
        crate::log::render_inline(&self.sql, &self.args)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

fn all_columns(config: &Configuration<'_>) -> String {
    config.column_names().collect::<Vec<_>>().join(", ")
}

/// `INSERT INTO t(c1, c2) VALUES($1, $2) RETURNING <all columns>`
///
/// Only insertable fields are written. With none, the row is inserted with
/// `DEFAULT VALUES`.
pub fn insert(config: &Configuration<'_>) -> Statement {
    let insertable: Vec<&Field<'_>> = config
        .fields()
        .iter()
        .filter(|field| field.is_insertable())
        .collect();

    let returning = all_columns(config);
    if insertable.is_empty() {
        return Statement::new(
            format!(
                "INSERT INTO {} DEFAULT VALUES RETURNING {}",
                config.table(),
                returning
            ),
            Vec::new(),
        );
    }

    let mut placeholders = Placeholders::default();
    let columns = insertable
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ");
    let values = insertable
        .iter()
        .map(|_| placeholders.next_placeholder().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    Statement::new(
        format!(
            "INSERT INTO {}({}) VALUES({}) RETURNING {}",
            config.table(),
            columns,
            values,
            returning
        ),
        insertable.iter().map(|field| field.value()).collect(),
    )
}

/// `SELECT <all columns> FROM t WHERE <identifier>=$1`
pub fn load(config: &Configuration<'_>, identifier: usize) -> Statement {
    let field = &config.fields()[identifier];
    Statement::new(
        format!(
            "SELECT {} FROM {} WHERE {}=$1",
            all_columns(config),
            config.table(),
            field.name()
        ),
        vec![field.value()],
    )
}

/// `UPDATE t SET c1=$1, c2=$2 WHERE <identifier>=$3 RETURNING <all columns>`
pub fn update(config: &Configuration<'_>, identifier: usize) -> Statement {
    let mut placeholders = Placeholders::default();
    let mut args = Vec::new();

    let assignments = config
        .fields()
        .iter()
        .filter(|field| field.is_updatable())
        .map(|field| {
            args.push(field.value());
            format!("{}={}", field.name(), placeholders.next_placeholder())
        })
        .collect::<Vec<_>>()
        .join(", ");

    let field = &config.fields()[identifier];
    args.push(field.value());

    Statement::new(
        format!(
            "UPDATE {} SET {} WHERE {}={} RETURNING {}",
            config.table(),
            assignments,
            field.name(),
            placeholders.next_placeholder(),
            all_columns(config)
        ),
        args,
    )
}

/// `DELETE FROM t WHERE <identifier>=$1`
pub fn delete(config: &Configuration<'_>, identifier: usize) -> Statement {
    let field = &config.fields()[identifier];
    Statement::new(
        format!("DELETE FROM {} WHERE {}=$1", config.table(), field.name()),
        vec![field.value()],
    )
}

/// `SELECT <all columns> FROM t [WHERE ...] [ORDER BY ...] LIMIT n OFFSET m`
///
/// Fails with [`RowbindError::InvalidOrderBy`] when an ORDER BY term names a
/// column the configuration doesn't declare.
///
/// # Panics
///
/// If a predicate violates its kind's arity.
pub fn bulk_fetch(config: &Configuration<'_>, options: &BulkFetchOptions) -> Result<Statement> {
    if let Some(order_by) = options
        .order_bys
        .iter()
        .find(|order_by| config.position(&order_by.field).is_none())
    {
        return Err(RowbindError::InvalidOrderBy {
            table: config.table(),
            column: order_by.field.clone(),
        });
    }

    let mut sql = format!("SELECT {} FROM {}", all_columns(config), config.table());

    let (where_clause, args) = render_where(1, &options.predicates);
    if !where_clause.is_empty() {
        sql.push(' ');
        sql.push_str(&where_clause);
    }

    if !options.order_bys.is_empty() {
        let order_by = options
            .order_bys
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        sql.push_str(" ORDER BY ");
        sql.push_str(&order_by);
    }

    sql.push_str(&format!(" LIMIT {} OFFSET {}", options.limit, options.offset));

    Ok(Statement::new(sql, args))
}
