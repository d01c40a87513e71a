use crate::order_by::OrderBy;
use crate::predicate::Predicate;

/// Pagination, ordering and filtering for [`Db::bulk_fetch`](crate::Db::bulk_fetch).
///
/// `limit` is always rendered, so the default (0) fetches nothing; set it.
///
/// ```
/// use rowbind_core::{BulkFetchOptions, OrderBy, Predicate};
///
/// let options = BulkFetchOptions::new()
///     .limit(20)
///     .offset(40)
///     .predicate(Predicate::gt("age", 2))
///     .consume_sort_query("-age,name");
///
/// assert_eq!(options.order_bys, vec![OrderBy::desc("age"), OrderBy::asc("name")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkFetchOptions {
    pub limit: usize,
    pub offset: usize,
    pub order_bys: Vec<OrderBy>,
    pub predicates: Vec<Predicate>,
}

impl BulkFetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_bys.push(order_by);
        self
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Replaces the ordering with a parsed `sort` query parameter,
    /// see [`OrderBy::parse_sort`].
    pub fn consume_sort_query(mut self, sort: &str) -> Self {
        self.order_bys = OrderBy::parse_sort(sort);
        self
    }
}
