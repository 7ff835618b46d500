//! Error types shared by all engines.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the engines.
///
/// Every error is returned to the immediate caller. The engines never retry,
/// never skip bad input, and never substitute defaults: a math-computation
/// layer's value is exactness.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed expression or bitstring.
    #[error("parse error: {0}")]
    Parse(String),

    /// Symbol, codeword, or variable not present in the known table.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// Empty alphabet, empty sample, or an otherwise unusable input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
