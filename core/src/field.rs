//! Field descriptors: one persisted attribute of a record.

use crate::error::TypeMismatch;
use crate::foreign::Relation;
use crate::value::{FromValue, ToValue, Value};
use std::fmt;

//------------------------------------------------------------------------------
// Column
//------------------------------------------------------------------------------

/// Accessor over the storage slot a field is bound to.
///
/// The record owns the slot; a [`Field`] only borrows it for as long as the
/// configuration lives.
pub trait Column {
    /// Reads the current value out of the slot.
    fn value(&self) -> Value;

    /// Writes `value` into the slot.
    fn assign(&mut self, value: Value) -> Result<(), TypeMismatch>;
}

impl<T> Column for T
where
    T: ToValue + FromValue,
{
    #[inline]
    fn value(&self) -> Value {
        self.to_value()
    }

    #[inline]
    fn assign(&mut self, value: Value) -> Result<(), TypeMismatch> {
        *self = T::from_value(value)?;
        Ok(())
    }
}

/// Reports whether a bound value is meaningfully populated.
pub type IsSet = fn(&Value) -> bool;

/// Common [`IsSet`] predicates.
pub mod is_set {
    use crate::value::Value;

    /// Numbers other than zero. NULL is never set; every other value is.
    pub fn non_zero(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Real(r) => *r != 0.0,
            Value::DoublePrecision(r) => *r != 0.0,
            other => other.as_integer().is_none_or(|i| i != 0),
        }
    }

    /// Text other than the empty string. NULL is never set.
    pub fn non_empty(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Text(s) => !s.is_empty(),
            _ => true,
        }
    }

    pub fn not_null(value: &Value) -> bool {
        !value.is_null()
    }
}

//------------------------------------------------------------------------------
// Field
//------------------------------------------------------------------------------

/// A single column binding inside a [`Configuration`](crate::Configuration).
///
/// ```
/// use rowbind_core::{Field, is_set};
///
/// let mut id = 0i64;
/// let field = Field::new("id", &mut id).unique().is_set(is_set::non_zero);
/// assert!(field.is_unique());
/// assert_eq!(field.reports_set(), Some(false));
/// ```
pub struct Field<'a> {
    name: &'static str,
    column: &'a mut dyn Column,
    insertable: bool,
    updatable: bool,
    unique: bool,
    is_set: Option<IsSet>,
    reference: Option<Box<dyn Relation + 'a>>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, column: &'a mut dyn Column) -> Self {
        Self {
            name,
            column,
            insertable: false,
            updatable: false,
            unique: false,
            is_set: None,
            reference: None,
        }
    }

    /// Include this column in INSERT statements.
    pub fn insertable(mut self) -> Self {
        self.insertable = true;
        self
    }

    /// Include this column in UPDATE ... SET.
    pub fn updatable(mut self) -> Self {
        self.updatable = true;
        self
    }

    /// Marks the column as a unique identifier candidate for load, update
    /// and delete.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn is_set(mut self, is_set: IsSet) -> Self {
        self.is_set = Some(is_set);
        self
    }

    /// Declares this column as a foreign key, see [`Reference`](crate::Reference).
    pub fn references(mut self, relation: impl Relation + 'a) -> Self {
        self.reference = Some(Box::new(relation));
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn value(&self) -> Value {
        self.column.value()
    }

    #[inline]
    pub fn assign(&mut self, value: Value) -> Result<(), TypeMismatch> {
        self.column.assign(value)
    }

    #[inline]
    pub fn is_insertable(&self) -> bool {
        self.insertable
    }

    #[inline]
    pub fn is_updatable(&self) -> bool {
        self.updatable
    }

    #[inline]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    #[inline]
    pub fn is_foreign(&self) -> bool {
        self.reference.is_some()
    }

    #[inline]
    pub fn has_is_set(&self) -> bool {
        self.is_set.is_some()
    }

    /// Result of the field's `is_set` predicate, `None` if it has none.
    pub fn reports_set(&self) -> Option<bool> {
        self.is_set.map(|is_set| is_set(&self.value()))
    }

    pub(crate) fn relation(&self) -> Option<&(dyn Relation + 'a)> {
        self.reference.as_deref()
    }

    pub(crate) fn relation_mut(&mut self) -> Option<&mut (dyn Relation + 'a)> {
        self.reference.as_deref_mut()
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("value", &self.value())
            .field("insertable", &self.insertable)
            .field("updatable", &self.updatable)
            .field("unique", &self.unique)
            .field("is_set", &self.is_set.is_some())
            .field("foreign", &self.reference.is_some())
            .finish()
    }
}
