//! Ordered reporting
//!
//! A run writes one line per unit into a [`ResultBuffer`]; after the join the
//! lines become a [`Report`], which [`ResultAggregator`] emits in slot order.

mod buffer;

pub use buffer::{ResultBuffer, Slot};

use std::io::Write;
use std::time::Duration;

use crate::schedule::DepthPlan;
use crate::BenchError;

/// Completed run: ordered lines plus timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Plan the run executed
    pub plan: DepthPlan,

    /// One line per slot, stretch first and long-lived last
    pub lines: Vec<String>,

    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl Report {
    /// Elapsed-time footer
    pub fn elapsed_line(&self) -> String {
        format!("elapsed: {:?}", self.elapsed)
    }
}

/// Writes reports to an output sink
#[derive(Debug)]
pub struct ResultAggregator<W: Write> {
    out: W,
    show_elapsed: bool,
}

impl<W: Write> ResultAggregator<W> {
    /// Emit lines followed by the elapsed-time footer
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_elapsed: true,
        }
    }

    /// Toggle the elapsed-time footer
    pub fn with_elapsed(mut self, show_elapsed: bool) -> Self {
        self.show_elapsed = show_elapsed;
        self
    }

    /// Write each line in slot order, then the footer
    pub fn emit(&mut self, report: &Report) -> Result<(), BenchError> {
        for line in &report.lines {
            writeln!(self.out, "{}", line)?;
        }
        if self.show_elapsed {
            writeln!(self.out, "{}", report.elapsed_line())?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Recover the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            plan: DepthPlan::new(0),
            lines: vec!["first".to_string(), "second".to_string()],
            elapsed: Duration::from_millis(12),
        }
    }

    #[test]
    fn test_emit_with_footer() {
        let mut aggregator = ResultAggregator::new(Vec::new());
        aggregator.emit(&sample()).unwrap();

        let text = String::from_utf8(aggregator.into_inner()).unwrap();
        assert_eq!(text, "first\nsecond\nelapsed: 12ms\n");
    }

    #[test]
    fn test_emit_without_footer() {
        let mut aggregator = ResultAggregator::new(Vec::new()).with_elapsed(false);
        aggregator.emit(&sample()).unwrap();

        let text = String::from_utf8(aggregator.into_inner()).unwrap();
        assert_eq!(text, "first\nsecond\n");
    }
}
