//! Repeats section - detects runs of identical characters.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Counts how many times each character occurs in the password.
pub fn occurrences(password: &str) -> HashMap<char, usize> {
    let mut occurs = HashMap::new();
    for c in password.chars() {
        *occurs.entry(c).or_insert(0) += 1;
    }
    occurs
}

/// Returns true if `target` appears at least `min_run` times in a row.
fn has_run(chars: &[char], target: char, min_run: usize) -> bool {
    let mut run = 0;
    for &c in chars {
        if c == target {
            run += 1;
            if run >= min_run {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// Rejects passwords with more than `max_consecutive` identical characters
/// in a row.
///
/// Only characters occurring more than `max_consecutive` times overall are
/// scanned for a run.
///
/// # Returns
/// - A single suggestion if any run is too long
/// - Nothing otherwise
pub fn repeats_section(password: &SecretString, max_consecutive: usize) -> SectionResult {
    let pwd = password.expose_secret();
    let min_run = max_consecutive.saturating_add(1);
    let chars: Vec<char> = pwd.chars().collect();

    let repeated = occurrences(pwd)
        .into_iter()
        .filter(|&(_, count)| count >= min_run)
        .any(|(c, _)| has_run(&chars, c, min_run));

    if repeated {
        vec![format!(
            "Cannot have more than {} repeated identical characters in a row",
            max_consecutive
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        repeats_section(&SecretString::new(pwd.to_string().into()), 2)
    }

    #[test]
    fn test_occurrences() {
        let occurs = occurrences("aXa1a");
        assert_eq!(occurs.get(&'a'), Some(&3));
        assert_eq!(occurs.get(&'X'), Some(&1));
        assert_eq!(occurs.get(&'z'), None);
    }

    #[test]
    fn test_repeats_section_run_of_three() {
        assert_eq!(
            check("`$T3$6M5vGmj999.Jr"),
            vec!["Cannot have more than 2 repeated identical characters in a row".to_string()]
        );
    }

    #[test]
    fn test_repeats_section_run_of_two() {
        assert!(check("aa1Bb22!cc").is_empty());
    }

    #[test]
    fn test_repeats_section_scattered_occurrences() {
        assert!(check("a1a2a3a4aB").is_empty());
    }

    #[test]
    fn test_repeats_section_metacharacters_are_literal() {
        assert_eq!(check("Ab1]]]x").len(), 1);
        assert_eq!(check("Ab1\\\\\\x").len(), 1);
        assert_eq!(check("Ab1...x").len(), 1);
        assert_eq!(check("Ab1^^^x").len(), 1);
        assert!(check("Ab1].]x]").is_empty());
    }

    #[test]
    fn test_repeats_section_spaces() {
        assert_eq!(check("Ab1   cD2").len(), 1);
    }

    #[test]
    fn test_repeats_section_single_suggestion_for_many_runs() {
        assert_eq!(check("aaabbbccc1").len(), 1);
    }

    #[test]
    fn test_repeats_section_unbounded_runs() {
        let pwd = SecretString::new("aaaaaaaaaa".to_string().into());
        assert!(repeats_section(&pwd, usize::MAX).is_empty());
    }

    #[test]
    fn test_repeats_section_short_password() {
        assert!(check("").is_empty());
        assert!(check("ab").is_empty());
    }
}
