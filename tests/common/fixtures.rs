//! Test fixtures and generators.
//!
//! Everything here is derived from the built-in table so the tests follow
//! the data when it changes.

use postcode::format::{Placeholder, COUNTRY_FORMATS};
use proptest::prelude::*;

/// Every `(country, format)` pair in the built-in table.
pub fn all_formats() -> Vec<(&'static str, &'static str)> {
    COUNTRY_FORMATS
        .iter()
        .flat_map(|row| row.formats.iter().map(move |format| (row.code, *format)))
        .collect()
}

/// Countries that are covered but have no formats.
pub fn unconstrained_countries() -> Vec<&'static str> {
    COUNTRY_FORMATS
        .iter()
        .filter(|row| row.formats.is_empty())
        .map(|row| row.code)
        .collect()
}

/// Countries with at least one format.
pub fn constrained_countries() -> Vec<&'static str> {
    COUNTRY_FORMATS
        .iter()
        .filter(|row| !row.formats.is_empty())
        .map(|row| row.code)
        .collect()
}

fn placeholder_char(placeholder: Placeholder) -> BoxedStrategy<char> {
    let digit = prop::char::range('0', '9');
    let lower = prop::char::range('a', 'z');
    let upper = prop::char::range('A', 'Z');

    match placeholder {
        Placeholder::Digit => digit.boxed(),
        Placeholder::Letter => prop_oneof![lower, upper].boxed(),
        Placeholder::Alphanumeric => prop_oneof![digit, lower, upper].boxed(),
    }
}

/// Strategy producing random postal codes of the given format: each
/// placeholder becomes a random member of its class, literals stay as is.
pub fn instantiate(format: &str) -> impl Strategy<Value = String> {
    let chars: Vec<BoxedStrategy<char>> = format
        .chars()
        .map(|c| match Placeholder::from_symbol(c) {
            Some(placeholder) => placeholder_char(placeholder),
            None => Just(c).boxed(),
        })
        .collect();

    chars.prop_map(|chars| chars.into_iter().collect())
}

/// Strategy producing `(country, postal code)` pairs over the whole table.
pub fn any_generated_code() -> impl Strategy<Value = (&'static str, String)> {
    prop::sample::select(all_formats()).prop_flat_map(|(country, format)| {
        instantiate(format).prop_map(move |code| (country, code))
    })
}

/// Two-letter uppercase codes that the built-in table does not cover.
pub fn uncovered_code() -> impl Strategy<Value = String> {
    "[A-Z]{2}".prop_filter("code must not be covered", |code| {
        !COUNTRY_FORMATS.iter().any(|row| row.code == code.as_str())
    })
}
