//! Error types for postal code validation.
//!
//! Lookups against a covered table only ever fail with
//! [`PostalCodeError::UnknownCountry`]. The remaining variants are raised
//! while building or loading a custom [`FormatTable`](crate::FormatTable).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for postal code operations.
pub type PostalCodeResult<T> = Result<T, PostalCodeError>;

/// Error type for all postal code operations.
#[derive(Debug, Error)]
pub enum PostalCodeError {
    /// The country code is not a key of the format table.
    #[error("Invalid country code: \"{code}\"")]
    UnknownCountry { code: String },

    /// A table key is not a two-letter uppercase ASCII code.
    #[error("Malformed country code in format table: \"{code}\"")]
    InvalidCountryCode { code: String },

    /// The same country code appears twice in a table.
    #[error("Duplicate country code in format table: \"{code}\"")]
    DuplicateCountry { code: String },

    /// A format pattern could not be compiled into a matcher.
    #[error("Format '{pattern}' for {country} failed to compile: {source}")]
    InvalidFormat {
        country: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Error occurred while reading a table file
    #[error("IO error for path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Table file is not valid JSON or has the wrong shape
    #[error("Malformed format table: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl PostalCodeError {
    pub(crate) fn unknown_country(code: &str) -> Self {
        Self::UnknownCountry {
            code: code.to_string(),
        }
    }

    /// Returns the country code this error refers to, if any.
    pub fn country_code(&self) -> Option<&str> {
        match self {
            Self::UnknownCountry { code }
            | Self::InvalidCountryCode { code }
            | Self::DuplicateCountry { code } => Some(code),
            Self::InvalidFormat { country, .. } => Some(country),
            Self::Io { .. } | Self::Json { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PostalCodeError::unknown_country("ZZ");
        assert_eq!(err.to_string(), "Invalid country code: \"ZZ\"");
    }

    #[test]
    fn test_country_code_accessor() {
        let err = PostalCodeError::DuplicateCountry {
            code: "US".to_string(),
        };
        assert_eq!(err.country_code(), Some("US"));

        let err = PostalCodeError::Io {
            path: PathBuf::from("table.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.country_code(), None);
    }
}
