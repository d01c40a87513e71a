//! Picks the unique identifier a load, update or delete queries by.

use crate::configuration::Configuration;
use crate::error::{Result, RowbindError};

/// How strictly candidates without an `is_set` predicate are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Loading: skip every candidate whose `is_set` says it is unset, so a
    /// record can be found "by id, else by slug". A candidate without
    /// `is_set` is only usable when it is the sole unique field.
    Load,
    /// Updating or deleting: the first candidate that is not demonstrably
    /// unset wins; a missing `is_set` means "assume set".
    Mutate,
}

/// Returns the position of the unique identifier field to query by.
///
/// Candidates are the `unique` fields in declaration order.
///
/// # Panics
///
/// With [`Resolution::Load`], when one of several candidates has no `is_set`
/// predicate: there is no way to tell whether it is populated.
pub fn resolve(config: &Configuration<'_>, resolution: Resolution) -> Result<usize> {
    let candidates = config.unique_fields().count();

    for (position, field) in config.unique_fields() {
        match (field.reports_set(), resolution) {
            (Some(true), _) => return Ok(position),
            (Some(false), _) => continue,
            (None, Resolution::Mutate) => return Ok(position),
            (None, Resolution::Load) if candidates == 1 => return Ok(position),
            (None, Resolution::Load) => panic!(
                "Field `{}` on `{}` must implement is_set, as it is one of several unique identifiers",
                field.name(),
                config.table()
            ),
        }
    }

    Err(RowbindError::NoUniqueIdentifier {
        table: config.table(),
    })
}
