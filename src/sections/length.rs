//! Length section - checks password length bounds.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks that the password length lies within `min..=max`.
///
/// Length is counted in UTF-16 code units, leading and trailing spaces
/// included. A character outside the Basic Multilingual Plane counts twice.
///
/// # Returns
/// - A suggestion for each violated bound, lower bound first
/// - Nothing if the password length is within bounds
pub fn length_section(password: &SecretString, min: usize, max: usize) -> SectionResult {
    let len = password.expose_secret().encode_utf16().count();
    let mut suggestions = Vec::new();

    if len < min {
        suggestions.push(format!("Must be at least {} characters long", min));
    }
    if len > max {
        suggestions.push(format!("Can only be at most {} characters long", max));
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        length_section(&SecretString::new(pwd.to_string().into()), 10, 128)
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            check("i\"PSTg,98"),
            vec!["Must be at least 10 characters long".to_string()]
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert!(check("Cm;cF*1f5L").is_empty());
    }

    #[test]
    fn test_length_section_exactly_maximum() {
        assert!(check(&"aB3!".repeat(32)).is_empty());
    }

    #[test]
    fn test_length_section_too_long() {
        assert_eq!(
            check(&"aB3!".repeat(33)[..129]),
            vec!["Can only be at most 128 characters long".to_string()]
        );
    }

    #[test]
    fn test_length_section_counts_spaces() {
        assert!(check(" ZHsyu6uK7").is_empty());
        assert!(check("ZHsyu6uK7 ").is_empty());
    }

    #[test]
    fn test_length_section_counts_code_units_not_bytes() {
        // 9 code units, 18 bytes
        assert_eq!(check("ééééééééé").len(), 1);
    }

    #[test]
    fn test_length_section_astral_char_reaches_minimum() {
        // 9 characters, 10 code units
        assert!(check("Ab1!cDe2\u{1F600}").is_empty());
        assert_eq!(check("Ab1!cDe\u{1F600}").len(), 1);
    }

    #[test]
    fn test_length_section_astral_char_exceeds_maximum() {
        let at_max = format!("{}\u{1F600}", &"aB3!".repeat(32)[..126]);
        assert_eq!(at_max.chars().count(), 127);
        assert!(check(&at_max).is_empty());

        // 128 characters, 129 code units
        let over_max = format!("{}\u{1F600}", &"aB3!".repeat(32)[..127]);
        assert_eq!(over_max.chars().count(), 128);
        assert_eq!(
            check(&over_max),
            vec!["Can only be at most 128 characters long".to_string()]
        );
    }
}
