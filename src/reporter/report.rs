//! The observable record of what a borrower did on a tick.

use crate::domain::{Book, BorrowerId};
use crate::library::CirculationError;
use serde::Serialize;
use std::fmt;

/// What happened to a borrower on one tick.
///
/// The `Display` form is the message part of an observer line and must not
/// change: log scrapers match on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Borrowed { book: Book },
    Returned { book: Book },
    Reading { book: Book },
    NoBookToBorrow,
    Unavailable { book: Book },
    AlreadyReturned { book: Book },
    Finished { loans: u32 },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Borrowed { book } => write!(f, "borrowed {}", book),
            Event::Returned { book } => write!(f, "returned {}", book),
            Event::Reading { book } => write!(f, "reading {}", book),
            Event::NoBookToBorrow => f.write_str("no book to borrow"),
            Event::Unavailable { book } => write!(f, "***unavailable: {}", book),
            Event::AlreadyReturned { book } => write!(f, "***already returned {}", book),
            Event::Finished { loans } => write!(f, "finished {} books", loans),
        }
    }
}

impl From<CirculationError> for Event {
    fn from(err: CirculationError) -> Self {
        match err {
            CirculationError::NoBookAvailable => Event::NoBookToBorrow,
            CirculationError::Unavailable(book) => Event::Unavailable { book },
            CirculationError::AlreadyReturned(book) => Event::AlreadyReturned { book },
        }
    }
}

/// One observer line: who, when, and what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub borrower: BorrowerId,
    pub tick: u32,
    #[serde(flatten)]
    pub event: Event,
}

impl Report {
    pub fn new(borrower: BorrowerId, tick: u32, event: Event) -> Self {
        Self {
            borrower,
            tick,
            event,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Actor {} [{:2}]: {}", self.borrower, self.tick, self.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_lines() {
        let book = Book::numbered(2);
        let cases = [
            (Event::Borrowed { book: book.clone() }, "borrowed Book 2"),
            (Event::Returned { book: book.clone() }, "returned Book 2"),
            (Event::Reading { book: book.clone() }, "reading Book 2"),
            (Event::NoBookToBorrow, "no book to borrow"),
            (Event::Unavailable { book: book.clone() }, "***unavailable: Book 2"),
            (Event::AlreadyReturned { book: book.clone() }, "***already returned Book 2"),
            (Event::Finished { loans: 3 }, "finished 3 books"),
        ];
        for (event, message) in cases {
            assert_eq!(event.to_string(), message);
        }
    }

    #[test]
    fn test_report_line_pads_tick() {
        let report = Report::new(1, 4, Event::NoBookToBorrow);
        assert_eq!(report.to_string(), "Actor 1 [ 4]: no book to borrow");

        let report = Report::new(0, 12, Event::Finished { loans: 0 });
        assert_eq!(report.to_string(), "Actor 0 [12]: finished 0 books");
    }

    #[test]
    fn test_circulation_errors_map_to_events() {
        let book = Book::numbered(0);
        assert_eq!(Event::from(CirculationError::NoBookAvailable), Event::NoBookToBorrow);
        assert_eq!(
            Event::from(CirculationError::Unavailable(book.clone())),
            Event::Unavailable { book: book.clone() }
        );
        assert_eq!(
            Event::from(CirculationError::AlreadyReturned(book.clone())),
            Event::AlreadyReturned { book }
        );
    }

    #[test]
    fn test_report_json_shape() {
        let report = Report::new(3, 0, Event::Borrowed { book: Book::numbered(1) });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "borrower": 3, "tick": 0, "event": "borrowed", "book": "Book 1" })
        );

        let json = serde_json::to_value(Report::new(0, 1, Event::NoBookToBorrow)).unwrap();
        assert_eq!(json, serde_json::json!({ "borrower": 0, "tick": 1, "event": "no_book_to_borrow" }));
    }
}
