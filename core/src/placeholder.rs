use core::fmt;

/// A positional SQL parameter placeholder, rendered `$1`, `$2`, ...
///
/// Indices are 1-based and refer to the statement's argument list.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Placeholder(pub usize);

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Hands out sequential placeholders so that several clauses rendered one
/// after another never reuse an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    next: usize,
}

impl Placeholders {
    /// Starts numbering at `first` (1 for a fresh statement).
    pub const fn starting_at(first: usize) -> Self {
        Self { next: first }
    }

    /// Returns the next placeholder and advances the counter.
    #[inline]
    pub fn next_placeholder(&mut self) -> Placeholder {
        let placeholder = Placeholder(self.next);
        self.next += 1;
        placeholder
    }

    /// Index the next placeholder will get.
    #[inline]
    pub fn peek(&self) -> usize {
        self.next
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
