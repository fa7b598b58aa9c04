use super::{Report, ReportError, Reporter};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Forwards every report over an unbounded channel.
///
/// Borrowers report circulation outcomes while they still hold the
/// circulation lock, so the receiver sees `borrowed` and `returned` reports in
/// exactly the order the catalog was changed. Tests replay that log to check
/// the pool invariants.
///
/// ```rust
/// use library_circulation::reporter::{ChannelReporter, Event, Report, Reporter};
///
/// #[tokio::main]
/// async fn main() {
///     let (reporter, mut reports) = ChannelReporter::new();
///     reporter.report(&Report::new(0, 0, Event::NoBookToBorrow)).await.unwrap();
///     drop(reporter);
///
///     assert_eq!(reports.recv().await.unwrap().event, Event::NoBookToBorrow);
///     assert!(reports.recv().await.is_none());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ChannelReporter {
    sender: mpsc::UnboundedSender<Report>,
}

impl ChannelReporter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Report>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl Reporter for ChannelReporter {
    async fn report(&self, report: &Report) -> Result<(), ReportError> {
        self.sender
            .send(report.clone())
            .map_err(|_| ReportError::Closed)
    }
}
