//! Complexity section - checks how many character classes are present.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::classes::ClassCounts;

/// Checks that at least `min_classes` of the four character classes occur.
///
/// # Returns
/// - One suggestion per missing class, in upper/lower/digit/special order,
///   when fewer than `min_classes` classes are present
/// - No suggestion otherwise, even if some class is missing
pub fn complexity_section(password: &SecretString, min_classes: usize) -> SectionResult {
    let counts = ClassCounts::count(password.expose_secret());
    if counts.satisfied() >= min_classes {
        return Vec::new();
    }

    counts
        .missing()
        .map(|class| format!("Try adding at least 1 {}", class))
        .collect()
}
