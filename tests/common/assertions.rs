//! Custom assertions for validator results.

use postcode::{PostalCodeError, PostalCodeResult};

/// Asserts that a result is an `UnknownCountry` error for `code`.
pub fn assert_unknown_country<T: std::fmt::Debug>(result: PostalCodeResult<T>, code: &str) {
    match result {
        Err(PostalCodeError::UnknownCountry { code: reported }) => {
            assert_eq!(reported, code, "error should carry the offending code");
        }
        other => panic!("expected UnknownCountry for {code:?}, got {other:?}"),
    }
}

/// Collects the format strings of a country as plain `&str`s.
pub fn format_strings(formats: &[postcode::PostalFormat]) -> Vec<&str> {
    formats.iter().map(|format| format.as_str()).collect()
}
