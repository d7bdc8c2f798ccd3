//! Placeholder characters used in postal code format patterns.

/// A placeholder in a format pattern, standing for one character of a class.
///
/// | Symbol | Class                          |
/// |--------|--------------------------------|
/// | `#`    | decimal digit                  |
/// | `@`    | ASCII letter, either case      |
/// | `*`    | ASCII letter or digit          |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Digit,
    Letter,
    Alphanumeric,
}

impl Placeholder {
    /// Every placeholder, in symbol order `#`, `@`, `*`.
    pub const ALL: [Placeholder; 3] = [Self::Digit, Self::Letter, Self::Alphanumeric];

    /// Looks up the placeholder for a pattern character.
    ///
    /// Returns `None` for literal characters.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Digit),
            '@' => Some(Self::Letter),
            '*' => Some(Self::Alphanumeric),
            _ => None,
        }
    }

    /// The pattern character for this placeholder.
    pub fn symbol(self) -> char {
        match self {
            Self::Digit => '#',
            Self::Letter => '@',
            Self::Alphanumeric => '*',
        }
    }

    /// Regex character class matching exactly one character of this kind.
    ///
    /// Classes are spelled out as ASCII ranges; `\d` would also accept
    /// non-ASCII digits under the regex crate's Unicode defaults.
    pub fn class(self) -> &'static str {
        match self {
            Self::Digit => "[0-9]",
            Self::Letter => "[a-zA-Z]",
            Self::Alphanumeric => "[a-zA-Z0-9]",
        }
    }

    /// Returns true if `c` belongs to this placeholder's class.
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Letter => c.is_ascii_alphabetic(),
            Self::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }

    /// Canonical character used when rendering a sample postal code.
    pub fn sample(self) -> char {
        match self {
            Self::Digit => '0',
            Self::Letter | Self::Alphanumeric => 'A',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for placeholder in Placeholder::ALL {
            assert_eq!(Placeholder::from_symbol(placeholder.symbol()), Some(placeholder));
        }
        assert_eq!(Placeholder::from_symbol('-'), None);
        assert_eq!(Placeholder::from_symbol('A'), None);
        assert_eq!(Placeholder::from_symbol('0'), None);
    }

    #[test]
    fn test_class_membership() {
        assert!(Placeholder::Digit.matches('7'));
        assert!(!Placeholder::Digit.matches('a'));
        assert!(!Placeholder::Digit.matches('٣')); // Arabic-Indic digit

        assert!(Placeholder::Letter.matches('q'));
        assert!(Placeholder::Letter.matches('Q'));
        assert!(!Placeholder::Letter.matches('1'));
        assert!(!Placeholder::Letter.matches('é'));

        assert!(Placeholder::Alphanumeric.matches('z'));
        assert!(Placeholder::Alphanumeric.matches('9'));
        assert!(!Placeholder::Alphanumeric.matches(' '));
    }

    #[test]
    fn test_samples_belong_to_class() {
        for placeholder in Placeholder::ALL {
            assert!(placeholder.matches(placeholder.sample()));
        }
    }
}
