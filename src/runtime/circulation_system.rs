use super::{LibraryConfig, SystemError};
use crate::borrower::{Borrower, BorrowerOutcome};
use crate::domain::Book;
use crate::library::Library;
use crate::reporter::Reporter;
use std::sync::Arc;
use tracing::{error, info, warn};

/// The runtime orchestrator for one simulation run.
///
/// `CirculationSystem` is responsible for:
/// - **Stocking**: Opening a [`Library`] with the configured number of books
/// - **Spawning**: Starting one Tokio task per [`Borrower`], all sharing the library
/// - **Joining**: Waiting for every borrower to finish and collecting their outcomes
///
/// # Example
///
/// ```ignore
/// let config = LibraryConfig::default();
/// let system = CirculationSystem::start(&config, Arc::new(ConsoleReporter::default()))?;
///
/// // Wait for the library to close
/// let summary = system.join().await?;
/// assert!(summary.all_returned());
/// ```
pub struct CirculationSystem {
    /// The pool shared by every borrower
    library: Arc<Library>,

    /// Books the library was stocked with
    initial_books: usize,

    /// Task handles for all running borrowers
    handles: Vec<tokio::task::JoinHandle<BorrowerOutcome>>,
}

impl CirculationSystem {
    /// Validates `config`, opens the library and spawns every borrower.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &LibraryConfig, reporter: Arc<dyn Reporter>) -> Result<Self, SystemError> {
        config.validate()?;

        let library = Arc::new(Library::new(config.books));
        let policy = config.policy();

        let handles = (0..config.borrowers)
            .map(|id| {
                let borrower = Borrower::new(id, Arc::clone(&library), policy, Arc::clone(&reporter));
                tokio::spawn(borrower.run())
            })
            .collect();

        info!(
            borrowers = config.borrowers,
            books = config.books,
            closing_time = config.closing_time,
            "Library open"
        );

        Ok(Self {
            library,
            initial_books: config.books,
            handles,
        })
    }

    /// The shared library, for observing the shelf while the run is in progress.
    pub fn library(&self) -> &Arc<Library> {
        &self.library
    }

    /// Waits for every borrower to pass closing time.
    ///
    /// # Returns
    ///
    /// - `Ok(summary)` once all borrowers finished
    /// - `Err(SystemError::BorrowerFailed)` if any borrower task panicked
    pub async fn join(self) -> Result<CirculationSummary, SystemError> {
        let mut outcomes = Vec::with_capacity(self.handles.len());

        for handle in self.handles {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    error!("Borrower task failed: {:?}", e);
                    return Err(SystemError::BorrowerFailed(e.to_string()));
                }
            }
        }

        let available = self.library.snapshot().await;
        let summary = CirculationSummary {
            outcomes,
            available,
            initial_books: self.initial_books,
        };

        if !summary.all_returned() {
            warn!(
                available = summary.available.len(),
                initial_books = summary.initial_books,
                "Books missing from the shelf after closing"
            );
        }
        info!(loans = summary.total_loans(), "Library closed");
        Ok(summary)
    }
}

/// The result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CirculationSummary {
    /// One entry per borrower, in id order.
    pub outcomes: Vec<BorrowerOutcome>,
    /// The shelf after every borrower finished.
    pub available: Vec<Book>,
    pub initial_books: usize,
}

impl CirculationSummary {
    pub fn total_loans(&self) -> u32 {
        self.outcomes.iter().map(|o| o.loans).sum()
    }

    /// True when every book the library was stocked with is back on the shelf.
    pub fn all_returned(&self) -> bool {
        self.available.len() == self.initial_books
    }
}
