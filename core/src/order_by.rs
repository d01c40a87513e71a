use core::fmt;

/// Sort direction for ORDER BY clauses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// One ORDER BY term: `<field> ASC` or `<field> DESC`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

impl OrderBy {
    /// Creates an ascending ORDER BY term
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending ORDER BY term
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }

    /// Parses the `sort` shorthand: `"name,-age"` sorts by name ascending,
    /// then age descending.
    ///
    /// Terms are split on commas and not trimmed. Empty terms are skipped.
    ///
    /// ```
    /// use rowbind_core::OrderBy;
    ///
    /// assert_eq!(
    ///     OrderBy::parse_sort("-name,id"),
    ///     vec![OrderBy::desc("name"), OrderBy::asc("id")]
    /// );
    /// ```
    pub fn parse_sort(sort: &str) -> Vec<OrderBy> {
        sort.split(',')
            .filter(|term| !term.is_empty())
            .map(|term| match term.strip_prefix('-') {
                Some(field) => OrderBy::desc(field),
                None => OrderBy::asc(term),
            })
            .collect()
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_terms() {
        assert_eq!(OrderBy::parse_sort("name"), vec![OrderBy::asc("name")]);
        assert_eq!(OrderBy::parse_sort("-name"), vec![OrderBy::desc("name")]);
    }

    #[test]
    fn parse_keeps_whitespace() {
        assert_eq!(
            OrderBy::parse_sort("name, -age"),
            vec![OrderBy::asc("name"), OrderBy::asc(" -age")]
        );
    }

    #[test]
    fn parse_skips_empty_terms() {
        assert!(OrderBy::parse_sort("").is_empty());
        assert_eq!(
            OrderBy::parse_sort("a,,b"),
            vec![OrderBy::asc("a"), OrderBy::asc("b")]
        );
    }

    #[test]
    fn renders_field_and_direction() {
        assert_eq!(OrderBy::asc("id").to_string(), "id ASC");
        assert_eq!(OrderBy::desc("id").to_string(), "id DESC");
    }
}
