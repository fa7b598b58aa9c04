//! # Library Circulation
//!
//! > **Many borrowers, one shelf, one lock.**
//!
//! This crate simulates a library whose books are shared by borrowers running
//! as independent Tokio tasks. Each borrower walks through simulated time,
//! borrowing one book at a time, reading it until it is due, and returning it.
//! There is always at least one borrower more than there are books, so
//! borrowers regularly go without.
//!
//! ## 🏗️ Design
//!
//! ### One coarse lock
//! The whole [`Catalog`](library::Catalog) sits behind a single async mutex.
//! The catalog's `recommend`, `checkout` and `checkin` functions can only be
//! called through the lock guard, so every critical section is explicit at the
//! call site.
//!
//! ### Recommend, then check out
//! A recommendation is only a promise while the lock is held. Borrowers ask for
//! one and check it out inside the same critical section. Both steps stay
//! separate functions, and a checkout made after the lock was released can fail
//! with [`CirculationError::Unavailable`](library::CirculationError::Unavailable).
//!
//! ### Poll on a timer
//! Nobody waits for a book to come back. A borrower who finds the shelf empty
//! reports it and tries again on the next tick.
//!
//! ## 🗺️ Module Tour
//!
//! - [`domain`]: [`Book`](domain::Book) and borrower ids.
//! - [`library`]: the shared pool, [`Library`](library::Library), and its errors.
//! - [`borrower`]: the per-borrower state machine and tick loop.
//! - [`reporter`]: the [`Reporter`](reporter::Reporter) seam and observer lines.
//! - [`runtime`]: [`LibraryConfig`](runtime::LibraryConfig),
//!   [`CirculationSystem`](runtime::CirculationSystem) and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Four borrowers, three books, one tick per second
//! cargo run
//!
//! # Faster, with diagnostics
//! RUST_LOG=debug cargo run -- --tick-delay-ms 100
//! ```

pub mod borrower;
pub mod domain;
pub mod library;
pub mod reporter;
pub mod runtime;
