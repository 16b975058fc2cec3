//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use strassen_cli::output::OutputFormat;

/// Strassen-rs: multiply two square integer matrices with Strassen's algorithm.
///
/// Reads `n`, then `n*n` entries of A, then `n*n` entries of B (row-major,
/// whitespace separated) and prints the `n x n` product.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
pub struct AppConfig {
    /// Base-case side length; at or below it matrices are multiplied directly (0 = default).
    #[arg(short, long, default_value = "2", env = "STRASSEN_THRESHOLD")]
    pub threshold: usize,

    /// Algorithm to use: strassen, direct, or all (cross-checks every algorithm).
    #[arg(long, default_value = "strassen")]
    pub algo: String,

    /// Read input from a file instead of stdin.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format for the product.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print interactive prompts and a header before the result.
    #[arg(long)]
    pub prompt: bool,

    /// Print timing and allocation statistics to stderr.
    #[arg(short, long)]
    pub details: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Abort after this long (e.g. "500ms", "30s", "5m", "1h").
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms" or bare seconds.
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let invalid = || format!("invalid duration: {s:?}");
    let number = |digits: &str| digits.parse::<u64>().map_err(|_| invalid());
    if let Some(ms) = s.strip_suffix("ms") {
        Ok(Duration::from_millis(number(ms)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        Ok(Duration::from_secs(number(secs)?))
    } else if let Some(mins) = s.strip_suffix('m') {
        Ok(Duration::from_secs(number(mins)?.saturating_mul(60)))
    } else if let Some(hours) = s.strip_suffix('h') {
        Ok(Duration::from_secs(number(hours)?.saturating_mul(3600)))
    } else {
        Ok(Duration::from_secs(number(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("5m"), Ok(Duration::from_secs(300)));
        assert_eq!(parse_duration("1h"), Ok(Duration::from_secs(3600)));
        assert_eq!(parse_duration("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_duration("12"), Ok(Duration::from_secs(12)));
    }

    #[test]
    fn parse_duration_ms() {
        assert_eq!(parse_duration("1ms"), Ok(Duration::from_millis(1)));
        assert_eq!(parse_duration("500ms"), Ok(Duration::from_millis(500)));
    }

    #[test]
    fn parse_duration_rejects_garbage() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("-3s").is_err());
    }

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["strassen"]).unwrap();
        assert_eq!(config.threshold, 2);
        assert_eq!(config.algo, "strassen");
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn flags() {
        let config = AppConfig::try_parse_from([
            "strassen",
            "--threshold",
            "8",
            "--algo",
            "all",
            "--format",
            "json",
            "--timeout",
            "2s",
            "-d",
        ])
        .unwrap();
        assert_eq!(config.threshold, 8);
        assert_eq!(config.algo, "all");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.timeout, Some(Duration::from_secs(2)));
        assert!(config.details);
    }
}
