//! Translation of format patterns into compiled matchers.
//!
//! A format pattern such as `@#@ #@#` is turned into a regular expression
//! by substituting each [`Placeholder`] with its character class and
//! escaping every literal. The [`MatchMode`] then decides how the
//! translated expression is anchored.

use super::Placeholder;
use regex::Regex;
use std::fmt;

/// Name of the capture group holding the matched postal code.
pub const CAPTURE_GROUP: &str = "code";

/// How a compiled pattern is applied to its subject string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// The whole subject must match the pattern.
    Strict,
    /// The pattern may match anywhere inside the subject.
    Relaxed,
    /// Like [`MatchMode::Relaxed`], exposing the match as the `code` group.
    Capture,
}

impl MatchMode {
    /// Every mode, in declaration order.
    pub const ALL: [MatchMode; 3] = [Self::Strict, Self::Relaxed, Self::Capture];

    fn wrap(self, body: &str) -> String {
        match self {
            Self::Strict => format!("^(?:{body})$"),
            Self::Relaxed => body.to_string(),
            Self::Capture => format!("(?P<{CAPTURE_GROUP}>{body})"),
        }
    }
}

/// Translates a format pattern into an unanchored regex body.
///
/// Placeholders become ASCII character classes; all other characters are
/// escaped so they only ever match themselves.
pub fn translate(format: &str) -> String {
    let mut body = String::with_capacity(format.len() * 4);
    let mut buf = [0u8; 4];

    for c in format.chars() {
        match Placeholder::from_symbol(c) {
            Some(placeholder) => body.push_str(placeholder.class()),
            None => body.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }

    body
}

/// Compiles a format pattern into a regex for the given mode.
pub fn compile_pattern(format: &str, mode: MatchMode) -> Result<Regex, regex::Error> {
    Regex::new(&mode.wrap(&translate(format)))
}

/// A format pattern together with its compiled matchers.
///
/// Matchers for all three modes are built up front, so matching never
/// compiles anything.
#[derive(Debug, Clone)]
pub struct PostalFormat {
    pattern: String,
    strict: Regex,
    relaxed: Regex,
    capture: Regex,
}

impl PostalFormat {
    /// Compiles `pattern` for every [`MatchMode`].
    pub fn new(pattern: impl Into<String>) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        let strict = compile_pattern(&pattern, MatchMode::Strict)?;
        let relaxed = compile_pattern(&pattern, MatchMode::Relaxed)?;
        let capture = compile_pattern(&pattern, MatchMode::Capture)?;

        Ok(Self {
            pattern,
            strict,
            relaxed,
            capture,
        })
    }

    /// The pattern exactly as it appears in the table.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the compiled matcher for `mode`.
    pub fn matcher(&self, mode: MatchMode) -> &Regex {
        match mode {
            MatchMode::Strict => &self.strict,
            MatchMode::Relaxed => &self.relaxed,
            MatchMode::Capture => &self.capture,
        }
    }

    /// Returns true if `text` matches this format under `mode`.
    pub fn is_match(&self, mode: MatchMode, text: &str) -> bool {
        let matched = self.matcher(mode).is_match(text);
        tracing::trace!(pattern = %self.pattern, ?mode, matched, "format match attempt");
        matched
    }

    /// Returns the leftmost substring of `text` matching this format.
    pub fn capture<'a>(&self, text: &'a str) -> Option<&'a str> {
        let found = self
            .capture
            .captures(text)
            .and_then(|caps| caps.name(CAPTURE_GROUP))
            .map(|m| m.as_str());
        tracing::trace!(pattern = %self.pattern, found = ?found, "format capture attempt");
        found
    }

    /// Renders an example postal code for this format.
    ///
    /// Placeholders are replaced by [`Placeholder::sample`]; literals are
    /// kept verbatim. The result always matches strictly.
    pub fn sample(&self) -> String {
        self.pattern
            .chars()
            .map(|c| Placeholder::from_symbol(c).map_or(c, Placeholder::sample))
            .collect()
    }
}

impl fmt::Display for PostalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl AsRef<str> for PostalFormat {
    fn as_ref(&self) -> &str {
        &self.pattern
    }
}

impl PartialEq for PostalFormat {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for PostalFormat {}

impl PartialEq<str> for PostalFormat {
    fn eq(&self, other: &str) -> bool {
        self.pattern == other
    }
}

impl PartialEq<&str> for PostalFormat {
    fn eq(&self, other: &&str) -> bool {
        self.pattern == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_placeholders() {
        assert_eq!(translate("#"), "[0-9]");
        assert_eq!(translate("@"), "[a-zA-Z]");
        assert_eq!(translate("*"), "[a-zA-Z0-9]");
        assert_eq!(translate("KY#"), "KY[0-9]");
        assert_eq!(translate("### ##"), "[0-9][0-9][0-9] [0-9][0-9]");
    }

    #[test]
    fn test_translate_escapes_metacharacters() {
        let regex = compile_pattern("#.(#)+", MatchMode::Strict).unwrap();
        assert!(regex.is_match("1.(2)+"));
        assert!(!regex.is_match("1x(2)"));
        assert!(!regex.is_match("1.(2)))"));
    }

    #[test]
    fn test_every_mode_compiles_any_literal() {
        for mode in MatchMode::ALL {
            for format in ["\\#", "[@", "*)", "$^", "{#}", "a b\t-c"] {
                assert!(compile_pattern(format, mode).is_ok(), "{format:?} in {mode:?}");
            }
        }
    }

    #[test]
    fn test_strict_mode_is_anchored() {
        let regex = compile_pattern("#####", MatchMode::Strict).unwrap();
        assert!(regex.is_match("90210"));
        assert!(!regex.is_match("902101"));
        assert!(!regex.is_match(" 90210"));
        assert!(!regex.is_match("90210\n"));
    }

    #[test]
    fn test_relaxed_mode_searches() {
        let regex = compile_pattern("@#@ #@#", MatchMode::Relaxed).unwrap();
        assert!(regex.is_match("Address: K1A 0B1 Canada"));
        assert!(!regex.is_match("K1A-0B1"));
    }

    #[test]
    fn test_capture_mode_names_group() {
        let regex = compile_pattern("##-###", MatchMode::Capture).unwrap();
        let caps = regex.captures("ul. Polna 1, 00-950 Warszawa").unwrap();
        assert_eq!(&caps[CAPTURE_GROUP], "00-950");
    }

    #[test]
    fn test_alternation_stays_inside_strict_anchor() {
        // A literal pipe must not split the anchored expression.
        let format = PostalFormat::new("#|#").unwrap();
        assert!(format.is_match(MatchMode::Strict, "1|2"));
        assert!(!format.is_match(MatchMode::Strict, "1"));
    }

    #[test]
    fn test_postal_format_capture_is_leftmost() {
        let format = PostalFormat::new("#####").unwrap();
        assert_eq!(format.capture("12345 and 67890"), Some("12345"));
        assert_eq!(format.capture("1234"), None);
    }

    #[test]
    fn test_sample_matches_strictly() {
        for pattern in ["@#@ #@#", "KY#-####", "@** #@@", "FIQQ 1ZZ", "#8000"] {
            let format = PostalFormat::new(pattern).unwrap();
            assert!(
                format.is_match(MatchMode::Strict, &format.sample()),
                "sample of {pattern} should match"
            );
        }
        assert_eq!(PostalFormat::new("@#@ #@#").unwrap().sample(), "A0A 0A0");
    }

    #[test]
    fn test_format_equality_with_str() {
        let format = PostalFormat::new("#####-####").unwrap();
        assert_eq!(format, "#####-####");
        assert_eq!(format.to_string(), "#####-####");
    }
}
