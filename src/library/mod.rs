//! # The Library (shared resource pool)
//!
//! One [`Library`] is shared by every borrower. It owns the [`Catalog`] of
//! books on the shelf behind a single async mutex, the *circulation* lock.
//!
//! ## Critical sections
//!
//! The catalog's functions are only reachable through the guard returned by
//! [`Library::circulation`]. Everything done through one guard happens
//! atomically with respect to every other borrower:
//!
//! ```rust
//! use library_circulation::library::Library;
//!
//! #[tokio::main]
//! async fn main() {
//!     let library = Library::new(3);
//!
//!     let mut desk = library.circulation().await;
//!     if let Some(book) = desk.recommend() {
//!         // Same critical section, so the recommendation is still valid
//!         desk.checkout(&book).unwrap();
//!     }
//!     drop(desk);
//!
//!     assert_eq!(library.snapshot().await.len(), 2);
//! }
//! ```
//!
//! Releasing the guard between `recommend` and `checkout` is allowed, but then
//! the checkout can fail with [`CirculationError::Unavailable`] because another
//! borrower got there first.

pub mod catalog;
pub mod error;

pub use catalog::*;
pub use error::*;

use crate::domain::Book;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Exclusive access to the catalog. Dropping it ends the critical section.
pub type CirculationDesk<'a> = MutexGuard<'a, Catalog>;

/// The shared book collection and its circulation lock.
#[derive(Debug, Default)]
pub struct Library {
    circulation: Mutex<Catalog>,
}

impl Library {
    /// Creates a library stocked with `nbooks` books.
    pub fn new(nbooks: usize) -> Self {
        Self::with_catalog(Catalog::stocked(nbooks))
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        debug!(available = catalog.len(), "Library opened");
        Self {
            circulation: Mutex::new(catalog),
        }
    }

    /// Enters the circulation critical section, waiting for the lock.
    pub async fn circulation(&self) -> CirculationDesk<'_> {
        self.circulation.lock().await
    }

    /// Copies the shelf contents. Stale as soon as it returns.
    pub async fn snapshot(&self) -> Vec<Book> {
        self.circulation.lock().await.available().to_vec()
    }
}
