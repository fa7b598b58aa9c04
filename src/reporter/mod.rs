//! # Reporting
//!
//! Borrowers describe every tick as a [`Report`]. Where the reports go is up
//! to the [`Reporter`] the system is started with:
//!
//! - [`ConsoleReporter`] prints observer lines (or JSON lines) to stdout.
//! - [`ChannelReporter`] forwards reports over a channel, for tests and for
//!   embedding the simulation in a larger program.
//!
//! Reports are program output. Diagnostics go through `tracing` instead.

pub mod channel;
pub mod console;
pub mod report;

pub use channel::*;
pub use console::*;
pub use report::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a report sink.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The receiving side of the sink has gone away.
    #[error("Report sink closed")]
    Closed,

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A sink for borrower reports.
///
/// Implementations must be cheap: borrowers call `report` while holding the
/// circulation lock.
#[async_trait]
pub trait Reporter: Send + Sync {
    async fn report(&self, report: &Report) -> Result<(), ReportError>;
}
