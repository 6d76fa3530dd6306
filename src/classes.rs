//! Character classes used by the complexity and topology rules.

use std::fmt;

/// Punctuation and symbols counted as special, space included.
const SPECIAL_CHARS: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four character classes of the complexity policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    /// All classes in feedback order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Classifies a single character.
    ///
    /// Returns `None` for anything outside ASCII letters, ASCII digits and
    /// the fixed special set (e.g. `é`, tabs, emoji).
    pub fn of(c: char) -> Option<CharClass> {
        if c.is_ascii_uppercase() {
            Some(CharClass::Upper)
        } else if c.is_ascii_lowercase() {
            Some(CharClass::Lower)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if SPECIAL_CHARS.contains(c) {
            Some(CharClass::Special)
        } else {
            None
        }
    }

    fn index(self) -> usize {
        match self {
            CharClass::Upper => 0,
            CharClass::Lower => 1,
            CharClass::Digit => 2,
            CharClass::Special => 3,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Upper => "upper case character",
            CharClass::Lower => "lower case character",
            CharClass::Digit => "digit",
            CharClass::Special => "special character",
        };
        f.write_str(name)
    }
}

/// Per-class character counts of a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    counts: [usize; 4],
}

impl ClassCounts {
    /// Counts every character of `password` in a single pass.
    pub fn count(password: &str) -> Self {
        let mut counts = [0usize; 4];
        for class in password.chars().filter_map(CharClass::of) {
            counts[class.index()] += 1;
        }
        Self { counts }
    }

    pub fn get(&self, class: CharClass) -> usize {
        self.counts[class.index()]
    }

    /// Number of classes present at least once (0..=4).
    pub fn satisfied(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }

    /// Classes with no occurrence, in feedback order.
    pub fn missing(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |class| self.get(*class) == 0)
    }
}
