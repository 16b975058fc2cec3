//! Strassen-rs library: application logic for the matrix multiplication CLI.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
