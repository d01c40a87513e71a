use crate::error::{Result, RowbindError};
use crate::field::Field;
use crate::row::Row;

/// The persistence shape of one record instance: table name plus its
/// ordered field bindings.
///
/// Field order is also the column order of every SELECT and RETURNING list
/// the query builder renders, which is what lets [`materialize`](Self::materialize)
/// read result columns positionally.
#[derive(Debug)]
pub struct Configuration<'a> {
    table: &'static str,
    fields: Vec<Field<'a>>,
}

impl<'a> Configuration<'a> {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    ///
    /// # Panics
    ///
    /// If a field with the same name was already added.
    pub fn field(mut self, field: Field<'a>) -> Self {
        if self.position(field.name()).is_some() {
            panic!(
                "Field `{}` is declared twice on table `{}`",
                field.name(),
                self.table
            );
        }
        self.fields.push(field);
        self
    }

    #[inline]
    pub fn table(&self) -> &'static str {
        self.table
    }

    #[inline]
    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    #[inline]
    pub fn fields_mut(&mut self) -> &mut [Field<'a>] {
        &mut self.fields
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&Field<'a>> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field<'a>> {
        self.fields.iter_mut().find(|field| field.name() == name)
    }

    /// Every column name, in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(Field::name)
    }

    /// Unique identifier candidates with their positions, in declaration order.
    pub fn unique_fields(&self) -> impl Iterator<Item = (usize, &Field<'a>)> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_unique())
    }

    /// Copies `row` into the bound fields, column `i` into field `i`.
    ///
    /// Storage may be partially written when a later column fails to convert.
    pub fn materialize(&mut self, row: Row) -> Result<()> {
        if row.len() != self.fields.len() {
            return Err(RowbindError::ColumnCount {
                expected: self.fields.len(),
                actual: row.len(),
            });
        }

        for (field, value) in self.fields.iter_mut().zip(row) {
            field.assign(value).map_err(|source| RowbindError::Mapping {
                column: field.name().to_string(),
                source,
            })?;
        }
        Ok(())
    }
}
