//! WHERE predicates for bulk fetches.
//!
//! A predicate is a column, a comparison kind and the values to compare
//! against. Rendering turns a list of predicates into a `WHERE` clause with
//! positional placeholders and returns the values to bind, in placeholder
//! order.
//!
//! Arity is a programming contract: an `IN` with no values or an `=` with two
//! is a bug at the call site, so rendering panics on it rather than handing
//! back an error.

use crate::placeholder::Placeholders;
use crate::value::Value;
use core::fmt;

//------------------------------------------------------------------------------
// PredicateKind
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    IsNull,
    IsNotNull,
    In,
    NotIn,
    Like,
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl PredicateKind {
    /// Stable diagnostic name, e.g. `WHERE_IN`.
    pub fn name(self) -> &'static str {
        match self {
            PredicateKind::IsNull => "WHERE_IS_NULL",
            PredicateKind::IsNotNull => "WHERE_IS_NOT_NULL",
            PredicateKind::In => "WHERE_IN",
            PredicateKind::NotIn => "WHERE_NOT_IN",
            PredicateKind::Like => "WHERE_LIKE",
            PredicateKind::Eq => "WHERE_EQUAL",
            PredicateKind::Ne => "WHERE_NOT_EQUAL",
            PredicateKind::Gt => "WHERE_GREATER_THAN",
            PredicateKind::Ge => "WHERE_GREATER_THAN_OR_EQUAL_TO",
            PredicateKind::Lt => "WHERE_LESS_THAN",
            PredicateKind::Le => "WHERE_LESS_THAN_OR_EQUAL_TO",
        }
    }

    /// SQL operator text.
    pub fn operator(self) -> &'static str {
        match self {
            PredicateKind::IsNull => "IS NULL",
            PredicateKind::IsNotNull => "IS NOT NULL",
            PredicateKind::In => "IN",
            PredicateKind::NotIn => "NOT IN",
            PredicateKind::Like => "LIKE",
            PredicateKind::Eq => "=",
            PredicateKind::Ne => "!=",
            PredicateKind::Gt => ">",
            PredicateKind::Ge => ">=",
            PredicateKind::Lt => "<",
            PredicateKind::Le => "<=",
        }
    }

    /// Checks `count` values against the kind's arity.
    pub fn check_arity(self, count: usize) -> Result<(), ArityError> {
        let ok = match self {
            PredicateKind::IsNull | PredicateKind::IsNotNull => true,
            PredicateKind::In | PredicateKind::NotIn => count >= 1,
            PredicateKind::Like
            | PredicateKind::Eq
            | PredicateKind::Ne
            | PredicateKind::Gt
            | PredicateKind::Ge
            | PredicateKind::Lt
            | PredicateKind::Le => count == 1,
        };
        if ok {
            Ok(())
        } else {
            Err(ArityError { kind: self, count })
        }
    }
}

/// A predicate was built with the wrong number of values for its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityError {
    pub kind: PredicateKind,
    pub count: usize,
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PredicateKind::In | PredicateKind::NotIn => write!(
                f,
                "`{}` predicates require at least one value.",
                self.kind.name()
            ),
            _ => write!(
                f,
                "`{}` predicates require exactly one value, got {}.",
                self.kind.name(),
                self.count
            ),
        }
    }
}

impl std::error::Error for ArityError {}

//------------------------------------------------------------------------------
// Predicate
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub field: String,
    pub kind: PredicateKind,
    pub values: Vec<Value>,
}

impl Predicate {
    pub fn new(field: impl Into<String>, kind: PredicateKind, values: Vec<Value>) -> Self {
        Self {
            field: field.into(),
            kind,
            values,
        }
    }

    pub fn is_null(field: impl Into<String>) -> Self {
        Self::new(field, PredicateKind::IsNull, Vec::new())
    }

    pub fn is_not_null(field: impl Into<String>) -> Self {
        Self::new(field, PredicateKind::IsNotNull, Vec::new())
    }

    pub fn in_list<V, I>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::new(
            field,
            PredicateKind::In,
            values.into_iter().map(Into::into).collect(),
        )
    }

    pub fn not_in<V, I>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::new(
            field,
            PredicateKind::NotIn,
            values.into_iter().map(Into::into).collect(),
        )
    }

    pub fn like(field: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::new(field, PredicateKind::Like, vec![pattern.into()])
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, PredicateKind::Eq, vec![value.into()])
    }

    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, PredicateKind::Ne, vec![value.into()])
    }

    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, PredicateKind::Gt, vec![value.into()])
    }

    pub fn ge(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, PredicateKind::Ge, vec![value.into()])
    }

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, PredicateKind::Lt, vec![value.into()])
    }

    pub fn le(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, PredicateKind::Le, vec![value.into()])
    }

    /// Renders the predicate with placeholders starting at `start`.
    ///
    /// # Panics
    ///
    /// If the predicate violates its kind's arity.
    pub fn render(&self, start: usize) -> (String, Vec<Value>) {
        let mut placeholders = Placeholders::starting_at(start);
        let mut values = Vec::new();
        let sql = self.render_into(&mut placeholders, &mut values);
        (sql, values)
    }

    fn render_into(&self, placeholders: &mut Placeholders, values: &mut Vec<Value>) -> String {
        if let Err(err) = self.kind.check_arity(self.values.len()) {
            panic!("{err}");
        }

        let mut sql = format!("{} {}", self.field, self.kind.operator());
        match self.kind {
            PredicateKind::IsNull | PredicateKind::IsNotNull => {}
            PredicateKind::In | PredicateKind::NotIn => {
                let list = self
                    .values
                    .iter()
                    .map(|value| {
                        values.push(value.clone());
                        placeholders.next_placeholder().to_string()
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                sql.push_str(" (");
                sql.push_str(&list);
                sql.push(')');
            }
            PredicateKind::Like
            | PredicateKind::Eq
            | PredicateKind::Ne
            | PredicateKind::Gt
            | PredicateKind::Ge
            | PredicateKind::Lt
            | PredicateKind::Le => {
                values.push(self.values[0].clone());
                sql.push(' ');
                sql.push_str(&placeholders.next_placeholder().to_string());
            }
        }
        sql
    }
}

/// Renders `WHERE p1 AND p2 ...`, numbering placeholders from `start`.
///
/// An empty list renders as an empty string.
///
/// # Panics
///
/// If any predicate violates its kind's arity.
pub fn render_where(start: usize, predicates: &[Predicate]) -> (String, Vec<Value>) {
    if predicates.is_empty() {
        return (String::new(), Vec::new());
    }

    let mut placeholders = Placeholders::starting_at(start);
    let mut values = Vec::new();
    let clauses = predicates
        .iter()
        .map(|predicate| predicate.render_into(&mut placeholders, &mut values))
        .collect::<Vec<_>>();

    (format!("WHERE {}", clauses.join(" AND ")), values)
}
