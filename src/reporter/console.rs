use super::{Report, ReportError, Reporter};
use async_trait::async_trait;
use std::io::Write;

/// How a [`ConsoleReporter`] renders each report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// `Actor <id> [<tick>]: <message>`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes reports to standard output, one line each.
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter {
    format: ReportFormat,
}

impl ConsoleReporter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Renders a report without the trailing newline.
    pub fn render(&self, report: &Report) -> Result<String, ReportError> {
        match self.format {
            ReportFormat::Text => Ok(report.to_string()),
            ReportFormat::Json => Ok(serde_json::to_string(report)?),
        }
    }
}

#[async_trait]
impl Reporter for ConsoleReporter {
    async fn report(&self, report: &Report) -> Result<(), ReportError> {
        let line = self.render(report)?;
        // Lock stdout so concurrent borrowers never interleave within a line
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }
}
