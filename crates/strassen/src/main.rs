//! Strassen-rs: square integer matrix multiplication.

use strassen_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing on stderr; stdout carries the result matrix
    let default_level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        std::process::exit(errors::handle_error(&err));
    }
}
