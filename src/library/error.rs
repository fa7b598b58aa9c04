//! Error types for circulation operations.

use crate::domain::Book;
use thiserror::Error;

/// Outcomes of a circulation request that did not go through.
///
/// None of these are fatal. A borrower reports them and tries again on a
/// later tick.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CirculationError {
    /// The collection was empty when a recommendation was requested.
    #[error("no book to borrow")]
    NoBookAvailable,

    /// The book was taken by someone else between recommendation and checkout.
    #[error("unavailable: {0}")]
    Unavailable(Book),

    /// The book was already on the shelf when it was checked in.
    #[error("already returned {0}")]
    AlreadyReturned(Book),
}
