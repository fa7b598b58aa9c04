use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a borrower for the lifetime of a simulation run.
pub type BorrowerId = usize;

/// A book in the library's collection.
///
/// Books are identified by title only; two `Book` values with the same title
/// are the same copy. The collection is seeded with `Book 0`, `Book 1`, ...
/// (see [`Book::numbered`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Book(String);

impl Book {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// The `n`th book of a freshly stocked library.
    pub fn numbered(n: usize) -> Self {
        Self(format!("Book {}", n))
    }

    pub fn title(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Book {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}
