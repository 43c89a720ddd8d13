//! Crate error type.
//!
//! Every search operation is total over a valid configuration, so the only
//! failures are rejected configurations and the fatal empty-population case.

use std::fmt;

/// Errors produced by configuration validation and the evolutionary loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A configuration parameter is out of its valid range.
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description.
        reason: String,
    },

    /// The population was empty when the best candidate was requested.
    EmptyPopulation,
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig { field, reason } => {
                write!(f, "invalid configuration `{field}`: {reason}")
            }
            Error::EmptyPopulation => write!(f, "population is empty at convergence"),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_config() {
        let err = Error::invalid("num_instructors", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration `num_instructors`: must be at least 1"
        );
    }

    #[test]
    fn test_display_empty_population() {
        assert_eq!(
            Error::EmptyPopulation.to_string(),
            "population is empty at convergence"
        );
    }
}
