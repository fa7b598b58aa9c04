//! # Borrower
//!
//! A [`Borrower`] is one concurrent actor. It walks through simulated time one
//! tick at a time, and on each tick it either tries to borrow a book, keeps
//! reading the one it has, or returns it once it is due.
//!
//! ## State machine
//!
//! ```text
//!            borrowed                due
//!   Idle ───────────────▶ Reading ───────▶ Idle ──▶ ... ──▶ Finished
//!    ▲ │ no book / unavailable
//!    └─┘
//! ```
//!
//! Every tick produces at most one [`Report`]. Borrowing and returning happen
//! inside the library's circulation critical section, and the resulting report
//! is handed to the reporter before the lock is released.

use crate::domain::{Book, BorrowerId};
use crate::library::{Catalog, CirculationError, Library};
use crate::reporter::{Event, Report, Reporter};
use crate::runtime::LoanPolicy;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where a borrower is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowerState {
    Idle,
    Reading { book: Book, due_by: u32 },
    Finished,
}

/// What a borrower hands back to the driver when it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowerOutcome {
    pub id: BorrowerId,
    pub loans: u32,
}

/// A library patron running its own tick loop.
pub struct Borrower {
    id: BorrowerId,
    library: Arc<Library>,
    policy: LoanPolicy,
    reporter: Arc<dyn Reporter>,
    book: Option<Book>,
    due_by: u32,
    current_time: u32,
    borrowed_count: u32,
    finished: bool,
}

impl Borrower {
    pub fn new(
        id: BorrowerId,
        library: Arc<Library>,
        policy: LoanPolicy,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            id,
            library,
            policy,
            reporter,
            book: None,
            due_by: 0,
            current_time: 0,
            borrowed_count: 0,
            finished: false,
        }
    }

    pub fn id(&self) -> BorrowerId {
        self.id
    }

    /// The tick the borrower will act on next.
    pub fn current_time(&self) -> u32 {
        self.current_time
    }

    /// Number of successful checkouts so far.
    pub fn loans(&self) -> u32 {
        self.borrowed_count
    }

    pub fn state(&self) -> BorrowerState {
        match (&self.book, self.finished) {
            (_, true) => BorrowerState::Finished,
            (Some(book), false) => BorrowerState::Reading {
                book: book.clone(),
                due_by: self.due_by,
            },
            (None, false) => BorrowerState::Idle,
        }
    }

    /// Runs the tick loop until the library has closed.
    ///
    /// Every tick starts with the configured delay. Nothing here can fail:
    /// contention is reported and retried on the next tick.
    pub async fn run(mut self) -> BorrowerOutcome {
        info!(borrower = self.id, "Borrower started");

        loop {
            pace(&self.policy).await;
            if self.tick().await == BorrowerState::Finished {
                break;
            }
        }

        info!(borrower = self.id, loans = self.borrowed_count, "Borrower finished");
        BorrowerOutcome {
            id: self.id,
            loans: self.borrowed_count,
        }
    }

    /// Acts on the current tick, then advances the clock.
    ///
    /// Once the clock is past closing time this reports the final loan count
    /// and returns [`BorrowerState::Finished`]; further calls do nothing.
    pub async fn tick(&mut self) -> BorrowerState {
        if self.finished {
            return BorrowerState::Finished;
        }

        if self.current_time > self.policy.closing_time {
            self.finished = true;
            self.report(Event::Finished {
                loans: self.borrowed_count,
            })
            .await;
            return BorrowerState::Finished;
        }

        if self.book.is_none() {
            self.borrow_book().await;
        } else if self.current_time >= self.due_by {
            self.return_book().await;
        } else if let Some(book) = self.book.clone() {
            self.report(Event::Reading { book }).await;
        }

        self.current_time += 1;
        self.state()
    }

    /// Borrows the recommended book, if any, in one critical section.
    ///
    /// Silently skipped once the library is closing.
    async fn borrow_book(&mut self) {
        if self.current_time >= self.policy.closing_time {
            return;
        }

        let library = Arc::clone(&self.library);
        let mut desk = library.circulation().await;

        match take_recommended(&mut desk) {
            Ok(book) => {
                self.due_by = self.policy.due_by(self.current_time);
                self.borrowed_count += 1;
                debug!(
                    borrower = self.id,
                    tick = self.current_time,
                    %book,
                    due_by = self.due_by,
                    available = desk.len(),
                    "Checked out"
                );
                self.report(Event::Borrowed { book: book.clone() }).await;
                self.book = Some(book);
            }
            Err(err) => {
                debug!(borrower = self.id, tick = self.current_time, error = %err, "Checkout failed");
                self.book = None;
                self.report(Event::from(err)).await;
            }
        }
    }

    /// Returns the held book in one critical section.
    ///
    /// The book is let go of even if the library says it was already returned.
    async fn return_book(&mut self) {
        let Some(book) = self.book.take() else {
            return;
        };

        let library = Arc::clone(&self.library);
        let mut desk = library.circulation().await;

        let event = match desk.checkin(book.clone()) {
            Ok(()) => {
                debug!(
                    borrower = self.id,
                    tick = self.current_time,
                    %book,
                    available = desk.len(),
                    "Checked in"
                );
                Event::Returned { book }
            }
            Err(err) => {
                warn!(borrower = self.id, tick = self.current_time, error = %err, "Checkin rejected");
                Event::from(err)
            }
        };
        self.report(event).await;
    }

    async fn report(&self, event: Event) {
        let report = Report::new(self.id, self.current_time, event);
        if let Err(e) = self.reporter.report(&report).await {
            warn!(borrower = self.id, error = %e, %report, "Report dropped");
        }
    }
}

/// Recommendation and checkout as one step. Callers hold the circulation lock.
fn take_recommended(catalog: &mut Catalog) -> Result<Book, CirculationError> {
    let book = catalog
        .recommend()
        .ok_or(CirculationError::NoBookAvailable)?;
    catalog.checkout(&book)?;
    Ok(book)
}

async fn pace(policy: &LoanPolicy) {
    if policy.tick_delay.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(policy.tick_delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::ChannelReporter;
    use crate::runtime::LibraryConfig;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn policy(period: u32, closing: u32) -> LoanPolicy {
        LibraryConfig::for_borrowers(1)
            .with_circulation_period(period)
            .with_closing_time(closing)
            .with_tick_delay(Duration::ZERO)
            .policy()
    }

    fn drain(receiver: &mut UnboundedReceiver<Report>) -> Vec<Report> {
        let mut reports = vec![];
        while let Ok(report) = receiver.try_recv() {
            reports.push(report);
        }
        reports
    }

    #[tokio::test]
    async fn test_state_follows_loan_cycle() {
        let library = Arc::new(Library::new(1));
        let (reporter, mut receiver) = ChannelReporter::new();
        let mut borrower = Borrower::new(0, library.clone(), policy(2, 7), Arc::new(reporter));

        assert_eq!(borrower.state(), BorrowerState::Idle);

        let state = borrower.tick().await;
        assert_eq!(
            state,
            BorrowerState::Reading {
                book: Book::numbered(0),
                due_by: 2
            }
        );
        assert!(library.snapshot().await.is_empty());

        borrower.tick().await;
        assert_eq!(borrower.tick().await, BorrowerState::Idle);
        assert_eq!(library.snapshot().await, vec![Book::numbered(0)]);
        assert_eq!(borrower.loans(), 1);
        assert_eq!(borrower.current_time(), 3);

        let events: Vec<Event> = drain(&mut receiver).into_iter().map(|r| r.event).collect();
        assert_eq!(
            events,
            vec![
                Event::Borrowed { book: Book::numbered(0) },
                Event::Reading { book: Book::numbered(0) },
                Event::Returned { book: Book::numbered(0) },
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_shelf_leaves_borrower_idle() {
        let library = Arc::new(Library::new(1));
        let (reporter, mut receiver) = ChannelReporter::new();
        let reporter = Arc::new(reporter);
        let mut first = Borrower::new(0, library.clone(), policy(2, 7), reporter.clone());
        let mut second = Borrower::new(1, library.clone(), policy(2, 7), reporter);

        first.tick().await;
        assert_eq!(second.tick().await, BorrowerState::Idle);
        assert_eq!(second.loans(), 0);

        let reports = drain(&mut receiver);
        assert_eq!(reports[1], Report::new(1, 0, Event::NoBookToBorrow));
    }

    #[tokio::test]
    async fn test_double_return_is_reported_and_book_released() {
        let library = Arc::new(Library::new(1));
        let (reporter, mut receiver) = ChannelReporter::new();
        let mut borrower = Borrower::new(0, library.clone(), policy(1, 7), Arc::new(reporter));

        borrower.tick().await;
        // Someone slips the same title back onto the shelf behind the borrower's back
        library
            .circulation()
            .await
            .checkin(Book::numbered(0))
            .unwrap();

        assert_eq!(borrower.tick().await, BorrowerState::Idle);
        assert_eq!(library.snapshot().await, vec![Book::numbered(0)]);

        let reports = drain(&mut receiver);
        assert_eq!(
            reports.last().unwrap().to_string(),
            "Actor 0 [ 1]: ***already returned Book 0"
        );
    }

    #[tokio::test]
    async fn test_finished_is_reported_once() {
        let library = Arc::new(Library::new(0));
        let (reporter, mut receiver) = ChannelReporter::new();
        let mut borrower = Borrower::new(0, library, policy(2, 0), Arc::new(reporter));

        // Tick 0 is closing time: no borrowing, no report
        assert_eq!(borrower.tick().await, BorrowerState::Idle);
        assert_eq!(borrower.tick().await, BorrowerState::Finished);
        assert_eq!(borrower.tick().await, BorrowerState::Finished);

        let reports = drain(&mut receiver);
        assert_eq!(reports, vec![Report::new(0, 1, Event::Finished { loans: 0 })]);
    }

    #[test]
    fn test_take_recommended_on_empty_catalog() {
        let mut catalog = Catalog::stocked(0);
        assert_eq!(
            take_recommended(&mut catalog),
            Err(CirculationError::NoBookAvailable)
        );
    }
}
