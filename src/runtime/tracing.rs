//! # Observability & Tracing
//!
//! Diagnostics are emitted with `tracing` and structured fields:
//!
//! - **Borrower lifecycle**: `Borrower started` / `Borrower finished` with `borrower` and `loans`
//! - **Circulation**: each checkout or checkin at `debug`, with `borrower`, `tick`, `book` and
//!   the number of books left on the shelf
//! - **System**: start and join, plus a `warn!` if books are missing from the shelf at the end
//!
//! Observer lines (`Actor 0 [ 1]: borrowed Book 0`) are *not* logs; they go through a
//! [`Reporter`](crate::reporter::Reporter) to stdout.
//!
//! ```bash
//! RUST_LOG=debug library-sim --tick-delay-ms 0
//! ```

/// Installs the global subscriber, filtered by `RUST_LOG`.
///
/// Logs are written to stderr so stdout only carries observer lines.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
