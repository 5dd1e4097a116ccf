use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading CPU information from platform command output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The output did not contain a key that is needed to answer the question.
    #[error("CPU information does not contain the key '{key}'")]
    MissingKey {
        /// The lowercase key that was looked up.
        key: String,
    },

    /// The output contained the key but its value could not be interpreted.
    #[error("CPU information key '{key}' has value '{value}' which is not a valid number")]
    InvalidValue {
        /// The lowercase key that was looked up.
        key: String,

        /// The raw value found for the key.
        value: String,
    },

    /// The platform source does not report this kind of information at all.
    #[error("{what} is not reported by this platform")]
    NotReported {
        /// What was asked for, e.g. "socket count".
        what: &'static str,
    },

    /// The output as a whole did not have the expected shape.
    #[error("malformed CPU information: {problem}")]
    Malformed {
        /// A human-readable description of the problem.
        problem: String,
    },

    /// The platform name was not recognized.
    #[error("unknown platform '{name}' - expected one of linux, darwin, win32")]
    UnknownPlatform {
        /// The name that was provided.
        name: String,
    },

    /// The file holding the command output could not be read.
    #[error("failed to read CPU information from '{}'", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// A specialized `Result` type for CPU information operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
