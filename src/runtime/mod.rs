//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for running a simulation:
//!
//! - **Configuration**: [`LibraryConfig`] and the per-borrower [`LoanPolicy`]
//! - **Orchestration**: [`CirculationSystem`] opens the library, spawns borrowers and joins them
//! - **Observability setup**: [`setup_tracing`]

pub mod circulation_system;
pub mod config;
pub mod error;
pub mod tracing;

pub use circulation_system::*;
pub use config::*;
pub use error::*;
pub use self::tracing::setup_tracing;
