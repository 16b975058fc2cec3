//! Application entry point and dispatch.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use strassen_cli::input::{read_pair, MatrixPair};
use strassen_cli::presenter::{CliPresenter, RunReport};
use strassen_core::padding::next_power_of_two;
use strassen_core::{multipliers_for, tracking, CancellationToken, Matrix, Options};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::version;

/// Run the application against the process's stdin, stdout and stderr.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "strassen", &mut io::stdout());
        return Ok(());
    }

    debug!(version = %version::full_version(), "starting");

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            run_with(config, BufReader::new(file), &mut out, &mut err, &cancel)
        }
        None => run_with(config, io::stdin().lock(), &mut out, &mut err, &cancel),
    }
}

/// Read the operands from `input`, multiply, and write the product to `out`.
///
/// Prompts go to `out` alongside the result; details go to `err`. The
/// `--timeout` deadline starts once both operands have been read.
pub fn run_with<R: BufRead>(
    config: &AppConfig,
    input: R,
    out: &mut dyn Write,
    err: &mut dyn Write,
    cancel: &CancellationToken,
) -> Result<()> {
    let presenter = CliPresenter::new(config.format, config.prompt, config.details);

    let pair = if config.prompt {
        read_pair(input, out)?
    } else {
        read_pair(input, &mut io::sink())?
    };

    let cancel = match config.timeout {
        Some(timeout) => cancel.timed(timeout),
        None => cancel.clone(),
    };
    let product = multiply_pair(config, &pair, &presenter, err, &cancel)?;
    presenter.present_result(out, &product)?;
    out.flush()?;
    Ok(())
}

/// Run every selected multiplier on `pair` and cross-check their products.
fn multiply_pair(
    config: &AppConfig,
    pair: &MatrixPair,
    presenter: &CliPresenter,
    err: &mut dyn Write,
    cancel: &CancellationToken,
) -> Result<Matrix> {
    let opts = Options {
        threshold: config.threshold,
    }
    .normalize();
    let multipliers = multipliers_for(&config.algo, &opts)?;

    let mut products: Vec<(&'static str, Matrix)> = Vec::with_capacity(multipliers.len());
    for multiplier in &multipliers {
        let padded = match multiplier.threshold() {
            Some(_) => next_power_of_two(pair.n)?,
            None => pair.n,
        };

        tracking::reset();
        let start = Instant::now();
        let product = multiplier.multiply(&pair.a, &pair.b, cancel)?;
        let duration = start.elapsed();
        info!(algorithm = multiplier.name(), n = pair.n, ?duration, "multiplication complete");

        presenter.present_details(
            err,
            &RunReport {
                algorithm: multiplier.name(),
                n: pair.n,
                padded,
                threshold: multiplier.threshold(),
                duration,
                stats: tracking::snapshot(),
            },
        )?;
        products.push((multiplier.name(), product));
    }

    let mut products = products.into_iter();
    let (first_name, first) = products
        .next()
        .context("no multiplication algorithm selected")?;
    let mut checked = 1;
    for (name, product) in products {
        if product != first {
            return Err(AppError::Mismatch {
                left: first_name,
                right: name,
            }
            .into());
        }
        checked += 1;
    }
    if checked > 1 {
        presenter.present_agreement(err, checked)?;
    }
    Ok(first)
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("failed to install Ctrl+C handler")
}
