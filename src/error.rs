//! Typed errors for the generator's library surface.

use thiserror::Error;

/// Everything that can make a run fail.
///
/// All variants abort the run immediately; there is no recoverable error
/// path once `Config::validate` has run (see `config.rs`).
#[derive(Debug, Error)]
pub enum GenError {
    #[error("no number of points specified")]
    MissingPoints,

    #[error("{0} is not a power of two")]
    NotPowerOfTwo(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
