//! Result formatting.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;
use strassen_core::{Element, Matrix};

/// Output format for the product matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per row, entries separated by single spaces.
    #[default]
    Text,
    /// A JSON object with `rows`, `cols` and nested `data`.
    Json,
}

#[derive(Serialize)]
struct MatrixJson {
    rows: usize,
    cols: usize,
    data: Vec<Vec<Element>>,
}

/// Write `m` in the requested format, followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_matrix(w: &mut dyn Write, m: &Matrix, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(w, "{m}"),
        OutputFormat::Json => {
            let doc = MatrixJson {
                rows: m.rows(),
                cols: m.cols(),
                data: m.to_rows(),
            };
            serde_json::to_writer(&mut *w, &doc)?;
            writeln!(w)
        }
    }
}

/// Elapsed time in the largest unit it reaches, with three decimals.
///
/// Anything under a microsecond prints as whole `ns`.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    const UNITS: [(&str, u128); 3] = [("s", 1_000_000_000), ("ms", 1_000_000), ("µs", 1_000)];
    let nanos = d.as_nanos();
    for (suffix, scale) in UNITS {
        if nanos >= scale {
            let frac = nanos % scale * 1000 / scale;
            return format!("{}.{frac:03}{suffix}", nanos / scale);
        }
    }
    format!("{nanos}ns")
}
