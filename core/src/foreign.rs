//! Foreign key expansion.
//!
//! A field declared with [`Field::references`](crate::Field::references)
//! carries a [`Relation`]: the related record type, the related column its
//! value matches, and the slot on the owning record the related record is
//! attached to.
//!
//! Single records expand with one `load` per set foreign field. Batches from
//! [`Db::bulk_fetch`](crate::Db::bulk_fetch) expand with one `IN` query per
//! relation, whatever the batch size.

use crate::bulk::BulkFetchOptions;
use crate::configuration::Configuration;
use crate::db::Db;
use crate::error::{Result, RowbindError};
use crate::field::Field;
use crate::model::{Model, Record};
use crate::predicate::{Predicate, PredicateKind};
use crate::value::Value;
use std::any::Any;
use std::fmt;

//------------------------------------------------------------------------------
// Relation
//------------------------------------------------------------------------------

/// The related side of a foreign field.
///
/// Implemented by [`Reference`]; the trait exists so a [`Field`] can hold a
/// reference to any related record type.
pub trait Relation {
    /// The column on the related record the foreign value is matched against.
    fn target_column(&self) -> &'static str;

    /// Loads the related record whose target column equals `key` and attaches
    /// it to the slot.
    fn load_into(&mut self, key: Value, db: &mut Db) -> Result<()>;

    /// Fetches every related record whose target column is one of `keys`.
    fn fetch_related(&self, keys: Vec<Value>, db: &mut Db) -> Result<RelatedSet>;

    /// Attaches the first record in `related` matching `key`.
    ///
    /// Returns `false`, leaving the slot untouched, when nothing matches.
    fn attach_from(&mut self, related: &RelatedSet, key: &Value) -> bool;
}

/// Related records fetched for a batch, keyed by their target column value.
#[derive(Default)]
pub struct RelatedSet {
    entries: Vec<(Value, Box<dyn Any>)>,
}

impl RelatedSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First record whose key matches, compared with [`Value::key_eq`].
    pub fn find<R: 'static>(&self, key: &Value) -> Option<&R> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate.key_eq(key))
            .and_then(|(_, record)| record.downcast_ref::<R>())
    }
}

impl fmt::Debug for RelatedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(key, _)| key))
            .finish()
    }
}

//------------------------------------------------------------------------------
// Reference
//------------------------------------------------------------------------------

/// Foreign reference to a record of type `R`, matched on `R`'s `target`
/// column and attached into `slot`.
///
/// The target column should be a unique identifier of `R`: single records
/// are expanded with [`Record::load`], which queries by `R`'s identifier.
///
/// ```
/// use rowbind_core::{Configuration, Field, Model, Reference, is_set};
///
/// #[derive(Debug, Default, Clone)]
/// struct Person {
///     id: i64,
///     name: String,
/// }
///
/// impl Model for Person {
///     fn configuration(&mut self) -> Configuration<'_> {
///         Configuration::new("people")
///             .field(Field::new("id", &mut self.id).unique())
///             .field(Field::new("name", &mut self.name).insertable().updatable())
///     }
/// }
///
/// #[derive(Debug, Default, Clone)]
/// struct Pet {
///     id: i64,
///     owner_id: Option<i64>,
///     owner: Option<Person>,
/// }
///
/// impl Model for Pet {
///     fn configuration(&mut self) -> Configuration<'_> {
///         Configuration::new("pets")
///             .field(Field::new("id", &mut self.id).unique().is_set(is_set::non_zero))
///             .field(
///                 Field::new("owner_id", &mut self.owner_id)
///                     .insertable()
///                     .updatable()
///                     .references(Reference::to("id", &mut self.owner)),
///             )
///     }
/// }
///
/// let mut pet = Pet::default();
/// assert!(pet.configuration().get("owner_id").unwrap().is_foreign());
/// ```
pub struct Reference<'a, R> {
    target: &'static str,
    slot: &'a mut Option<R>,
}

impl<'a, R> Reference<'a, R> {
    pub fn to(target: &'static str, slot: &'a mut Option<R>) -> Self {
        Self { target, slot }
    }
}

impl<R> Relation for Reference<'_, R>
where
    R: Model + Clone + 'static,
{
    fn target_column(&self) -> &'static str {
        self.target
    }

    fn load_into(&mut self, key: Value, db: &mut Db) -> Result<()> {
        let mut related = R::default();
        {
            let mut config = related.configuration();
            let table = config.table();
            let Some(field) = config.get_mut(self.target) else {
                panic!("Table `{table}` has no column `{}` to reference", self.target);
            };
            field.assign(key).map_err(|source| RowbindError::Mapping {
                column: self.target.to_string(),
                source,
            })?;
        }

        related.load(db)?;
        *self.slot = Some(related);
        Ok(())
    }

    fn fetch_related(&self, keys: Vec<Value>, db: &mut Db) -> Result<RelatedSet> {
        let options = BulkFetchOptions::new()
            .limit(keys.len())
            .predicate(Predicate::new(self.target, PredicateKind::In, keys));

        let records = db.bulk_fetch::<R>(&options)?;
        let mut entries = Vec::with_capacity(records.len());
        for mut record in records {
            let key = record
                .configuration()
                .get(self.target)
                .map(Field::value)
                .unwrap_or_default();
            entries.push((key, Box::new(record) as Box<dyn Any>));
        }
        Ok(RelatedSet { entries })
    }

    fn attach_from(&mut self, related: &RelatedSet, key: &Value) -> bool {
        match related.find::<R>(key) {
            Some(record) => {
                *self.slot = Some(record.clone());
                true
            }
            None => false,
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for Reference<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("target", &self.target)
            .field("slot", &self.slot)
            .finish()
    }
}

//------------------------------------------------------------------------------
// Expansion
//------------------------------------------------------------------------------

/// Loads the related record of every set foreign field in `config`.
pub(crate) fn expand(config: &mut Configuration<'_>, db: &mut Db) -> Result<()> {
    for field in config.fields_mut().iter_mut().filter(|f| f.is_foreign()) {
        let key = field.value();
        let is_set = field.reports_set().unwrap_or(!key.is_null());
        if !is_set {
            continue;
        }
        if let Some(relation) = field.relation_mut() {
            relation.load_into(key, db)?;
        }
    }
    Ok(())
}

/// Expands every foreign field across `records` with one query per field.
pub(crate) fn expand_batch<T: Model>(records: &mut [T], db: &mut Db) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let mut blank = T::default();
    let template = blank.configuration();

    for (position, field) in template.fields().iter().enumerate() {
        let Some(relation) = field.relation() else {
            continue;
        };

        let mut keys: Vec<Value> = Vec::new();
        for record in records.iter_mut() {
            let key = record.configuration().fields()[position].value();
            if !key.is_null() && !keys.iter().any(|seen| seen.key_eq(&key)) {
                keys.push(key);
            }
        }
        if keys.is_empty() {
            continue;
        }

        crate::rowbind_trace_expand!(template.table(), field.name(), keys.len());
        let related = relation.fetch_related(keys, db)?;

        for record in records.iter_mut() {
            let mut config = record.configuration();
            let field = &mut config.fields_mut()[position];
            let key = field.value();
            if key.is_null() {
                continue;
            }
            if let Some(relation) = field.relation_mut() {
                relation.attach_from(&related, &key);
            }
        }
    }
    Ok(())
}
