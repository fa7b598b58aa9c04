//! Simulation parameters.

use super::SystemError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything a run of the simulation can be tuned with.
///
/// The defaults reproduce the classic setup: four borrowers competing for
/// three books, a two-tick loan period, and the library closing at tick 7.
///
/// ```
/// use library_circulation::runtime::LibraryConfig;
/// use std::time::Duration;
///
/// let config = LibraryConfig::for_borrowers(6)
///     .with_closing_time(10)
///     .with_tick_delay(Duration::ZERO);
/// assert_eq!(config.books, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Number of borrowers spawned.
    pub borrowers: usize,
    /// Number of books the library is stocked with.
    pub books: usize,
    /// Ticks a book may be kept.
    pub circulation_period: u32,
    /// Last valid tick. No borrowing at or after it.
    pub closing_time: u32,
    /// Wall-clock pause at the start of every tick.
    pub tick_delay: Duration,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self::for_borrowers(4)
    }
}

impl LibraryConfig {
    /// One book fewer than borrowers, so someone always goes without.
    pub fn for_borrowers(borrowers: usize) -> Self {
        Self {
            borrowers,
            books: borrowers.saturating_sub(1),
            circulation_period: 2,
            closing_time: 7,
            tick_delay: Duration::from_secs(1),
        }
    }

    pub fn with_books(mut self, books: usize) -> Self {
        self.books = books;
        self
    }

    pub fn with_circulation_period(mut self, ticks: u32) -> Self {
        self.circulation_period = ticks;
        self
    }

    pub fn with_closing_time(mut self, tick: u32) -> Self {
        self.closing_time = tick;
        self
    }

    pub fn with_tick_delay(mut self, delay: Duration) -> Self {
        self.tick_delay = delay;
        self
    }

    /// The loan rules every borrower follows.
    pub fn policy(&self) -> LoanPolicy {
        LoanPolicy {
            circulation_period: self.circulation_period,
            closing_time: self.closing_time,
            tick_delay: self.tick_delay,
        }
    }

    pub fn validate(&self) -> Result<(), SystemError> {
        if self.borrowers == 0 {
            return Err(SystemError::InvalidConfig(
                "at least one borrower is required".to_string(),
            ));
        }
        if self.circulation_period == 0 {
            return Err(SystemError::InvalidConfig(
                "circulation period must be at least one tick".to_string(),
            ));
        }
        Ok(())
    }
}

/// The per-borrower view of [`LibraryConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPolicy {
    pub circulation_period: u32,
    pub closing_time: u32,
    pub tick_delay: Duration,
}

impl LoanPolicy {
    /// When a book borrowed at `tick` must be back. Never after closing.
    pub fn due_by(&self, tick: u32) -> u32 {
        tick.saturating_add(self.circulation_period)
            .min(self.closing_time)
    }
}
