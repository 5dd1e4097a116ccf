use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when building a [`CoreSet`][crate::CoreSet] from text.
///
/// Building a core set from a numeric mask never fails, so all errors here describe text that
/// did not match one of the accepted formats.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided a core set description or mask string that did not match the
    /// expected format.
    #[error("invalid core set format: '{invalid_value}' is invalid: {problem}")]
    Format {
        /// The specific value that was invalid. This may either be the entire input string
        /// or a specific token of it, depending on the problem.
        invalid_value: String,

        /// A human-readable description of the problem.
        problem: String,

        /// The integer parsing failure that triggered the error, if any.
        #[source]
        source: Option<ParseIntError>,
    },
}

impl Error {
    pub(crate) fn new(invalid_value: impl Into<String>, problem: impl Into<String>) -> Self {
        Self::Format {
            invalid_value: invalid_value.into(),
            problem: problem.into(),
            source: None,
        }
    }

    pub(crate) fn caused_by(
        invalid_value: impl Into<String>,
        problem: impl Into<String>,
        inner: ParseIntError,
    ) -> Self {
        Self::Format {
            invalid_value: invalid_value.into(),
            problem: problem.into(),
            source: Some(inner),
        }
    }

    /// The value that was rejected.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        match self {
            Self::Format { invalid_value, .. } => invalid_value,
        }
    }
}

/// A specialized `Result` type for core set operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::error::Error as _;
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn display_names_value_and_problem() {
        let error = Error::new("abc", "not a number");

        assert_eq!(
            error.to_string(),
            "invalid core set format: 'abc' is invalid: not a number"
        );
        assert_eq!(error.invalid_value(), "abc");
        assert!(error.source().is_none());
    }

    #[test]
    fn caused_by_keeps_source() {
        let inner = "x".parse::<u32>().unwrap_err();
        let error = Error::caused_by("x", "not a number", inner);

        assert!(error.source().is_some());
    }
}
