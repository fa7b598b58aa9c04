use library_circulation::borrower::Borrower;
use library_circulation::domain::Book;
use library_circulation::library::Library;
use library_circulation::reporter::{ChannelReporter, Event, Report};
use library_circulation::runtime::LibraryConfig;
use std::sync::Arc;
use std::time::Duration;

/// Runs a lone borrower against a fresh library and returns everything it reported.
async fn run_alone(books: usize, period: u32, closing: u32) -> (Vec<Report>, u32) {
    let policy = LibraryConfig::for_borrowers(1)
        .with_circulation_period(period)
        .with_closing_time(closing)
        .with_tick_delay(Duration::ZERO)
        .policy();
    let library = Arc::new(Library::new(books));
    let (reporter, mut receiver) = ChannelReporter::new();

    let outcome = Borrower::new(0, library, policy, Arc::new(reporter)).run().await;

    let mut reports = vec![];
    while let Some(report) = receiver.recv().await {
        reports.push(report);
    }
    (reports, outcome.loans)
}

/// An empty library: the borrower is told so on every tick before closing.
#[tokio::test]
async fn test_empty_library_until_closing() {
    let (reports, loans) = run_alone(0, 2, 2).await;

    let lines: Vec<String> = reports.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Actor 0 [ 0]: no book to borrow",
            "Actor 0 [ 1]: no book to borrow",
            "Actor 0 [ 3]: finished 0 books",
        ]
    );
    assert_eq!(loans, 0);
}

/// One book, one borrower: borrow, read, return, repeat until closing.
#[tokio::test]
async fn test_single_book_loan_cycle() {
    let (reports, loans) = run_alone(1, 2, 7).await;
    let book = Book::numbered(0);

    let expected = vec![
        Report::new(0, 0, Event::Borrowed { book: book.clone() }),
        Report::new(0, 1, Event::Reading { book: book.clone() }),
        Report::new(0, 2, Event::Returned { book: book.clone() }),
        Report::new(0, 3, Event::Borrowed { book: book.clone() }),
        Report::new(0, 4, Event::Reading { book: book.clone() }),
        Report::new(0, 5, Event::Returned { book: book.clone() }),
        // Due at closing time rather than tick 8
        Report::new(0, 6, Event::Borrowed { book: book.clone() }),
        Report::new(0, 7, Event::Returned { book: book.clone() }),
        Report::new(0, 8, Event::Finished { loans: 3 }),
    ];
    assert_eq!(reports, expected);
    assert_eq!(loans, 3);
}

/// A loan period longer than the library is open still ends with the book back.
#[tokio::test]
async fn test_loan_is_cut_short_at_closing() {
    let (reports, loans) = run_alone(1, 10, 3).await;
    let events: Vec<String> = reports.iter().map(|r| r.event.to_string()).collect();

    assert_eq!(
        events,
        vec![
            "borrowed Book 0",
            "reading Book 0",
            "reading Book 0",
            "returned Book 0",
            "finished 1 books",
        ]
    );
    assert_eq!(loans, 1);
}
