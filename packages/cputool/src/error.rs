use std::io;

use thiserror::Error;

/// Errors reported by the command line tools.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The combination of command line arguments does not make sense.
    #[error("{0}")]
    Usage(String),

    /// The core set input could not be parsed.
    #[error(transparent)]
    CoreSet(#[from] coreset::Error),

    /// The CPU information could not be read or parsed.
    #[error(transparent)]
    CpuInfo(#[from] cpuinfo::Error),

    /// Standard input could not be read.
    #[error("failed to read standard input")]
    Stdin(#[source] io::Error),
}

/// A specialized `Result` type for the command line tools, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
