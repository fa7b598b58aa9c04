//! # library-sim
//!
//! Runs one library simulation and prints every borrower report to stdout,
//! framed by `Start` and `End`.
//!
//! ```bash
//! library-sim                          # 4 borrowers, 3 books, 1s ticks
//! library-sim --borrowers 8 --json     # JSON lines
//! LIBRARY_TICK_DELAY_MS=0 library-sim  # as fast as possible
//! ```

use clap::Parser;
use library_circulation::reporter::{ConsoleReporter, ReportFormat};
use library_circulation::runtime::{setup_tracing, CirculationSystem, LibraryConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "library-sim", about = "Simulate borrowers sharing a library's books")]
struct Cli {
    /// Number of concurrent borrowers
    #[arg(long, env = "LIBRARY_BORROWERS", default_value_t = 4)]
    borrowers: usize,

    /// Number of books on the shelf [default: borrowers - 1]
    #[arg(long, env = "LIBRARY_BOOKS")]
    books: Option<usize>,

    /// Ticks a book may be kept
    #[arg(long, env = "LIBRARY_CIRCULATION_PERIOD", default_value_t = 2)]
    circulation_period: u32,

    /// Last tick on which the library lends books
    #[arg(long, env = "LIBRARY_CLOSING_TIME", default_value_t = 7)]
    closing_time: u32,

    /// Wall-clock milliseconds per tick
    #[arg(long, env = "LIBRARY_TICK_DELAY_MS", default_value_t = 1000)]
    tick_delay_ms: u64,

    /// Print reports as JSON lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> LibraryConfig {
        let mut config = LibraryConfig::for_borrowers(self.borrowers)
            .with_circulation_period(self.circulation_period)
            .with_closing_time(self.closing_time)
            .with_tick_delay(Duration::from_millis(self.tick_delay_ms));
        if let Some(books) = self.books {
            config = config.with_books(books);
        }
        config
    }

    fn format(&self) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    println!("Start");

    let reporter = Arc::new(ConsoleReporter::new(cli.format()));
    let system = CirculationSystem::start(&config, reporter)?;
    let summary = system.join().await?;

    for outcome in &summary.outcomes {
        info!(borrower = outcome.id, loans = outcome.loans, "Outcome");
    }

    println!("End");
    Ok(())
}
