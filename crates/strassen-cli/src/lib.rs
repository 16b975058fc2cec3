//! Input parsing, result output and presentation for the strassen CLI.

pub mod input;
pub mod output;
pub mod presenter;
