//! Errors raised while setting up or tearing down a simulation run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A borrower task panicked or was aborted.
    #[error("Borrower task failed: {0}")]
    BorrowerFailed(String),
}
