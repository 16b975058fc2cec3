//! CLI result presenter.

use std::io::{self, Write};
use std::time::Duration;

use strassen_core::tracking::AllocationStats;
use strassen_core::Matrix;

use crate::output::{format_duration, write_matrix, OutputFormat};

/// What a single multiplier run did, for `--details`.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub algorithm: &'static str,
    pub n: usize,
    pub padded: usize,
    pub threshold: Option<usize>,
    pub duration: Duration,
    pub stats: AllocationStats,
}

/// CLI result presenter.
pub struct CliPresenter {
    format: OutputFormat,
    prompt: bool,
    details: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, prompt: bool, details: bool) -> Self {
        Self {
            format,
            prompt,
            details,
        }
    }

    /// Write the product matrix, preceded by a header in prompt mode.
    pub fn present_result(&self, out: &mut dyn Write, product: &Matrix) -> io::Result<()> {
        if self.prompt && self.format == OutputFormat::Text {
            writeln!(out, "Resultant matrix:")?;
        }
        write_matrix(out, product, self.format)
    }

    /// Write run statistics when details are enabled.
    pub fn present_details(&self, out: &mut dyn Write, report: &RunReport) -> io::Result<()> {
        if !self.details {
            return Ok(());
        }
        writeln!(out, "Algorithm: {}", report.algorithm)?;
        writeln!(out, "Size: {0}x{0} (padded to {1}x{1})", report.n, report.padded)?;
        if let Some(threshold) = report.threshold {
            writeln!(out, "Base-case threshold: {threshold}")?;
        }
        writeln!(out, "Duration: {}", format_duration(report.duration))?;
        writeln!(
            out,
            "Matrices allocated: {} (peak live {})",
            report.stats.allocated, report.stats.peak
        )
    }

    /// Note that results were cross-checked.
    pub fn present_agreement(&self, out: &mut dyn Write, count: usize) -> io::Result<()> {
        if self.details {
            writeln!(out, "All {count} algorithms agree")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RunReport {
        RunReport {
            algorithm: "Strassen",
            n: 3,
            padded: 4,
            threshold: Some(2),
            duration: Duration::from_millis(3),
            stats: AllocationStats {
                live: 1,
                peak: 40,
                allocated: 120,
            },
        }
    }

    #[test]
    fn prompt_header_only_in_prompt_mode() {
        let m = Matrix::identity(1).unwrap();
        let mut buf = Vec::new();
        CliPresenter::new(OutputFormat::Text, true, false)
            .present_result(&mut buf, &m)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Resultant matrix:\n1\n");

        let mut buf = Vec::new();
        CliPresenter::new(OutputFormat::Text, false, false)
            .present_result(&mut buf, &m)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1\n");
    }

    #[test]
    fn details_suppressed_by_default() {
        let mut buf = Vec::new();
        CliPresenter::new(OutputFormat::Text, false, false)
            .present_details(&mut buf, &report())
            .unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn details_written() {
        let mut buf = Vec::new();
        CliPresenter::new(OutputFormat::Text, false, true)
            .present_details(&mut buf, &report())
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Algorithm: Strassen"));
        assert!(text.contains("padded to 4x4"));
        assert!(text.contains("Base-case threshold: 2"));
        assert!(text.contains("Matrices allocated: 120 (peak live 40)"));
    }
}
