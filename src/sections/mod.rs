//! Password rule sections
//!
//! Each section checks one rule family of the policy and returns the
//! remediation suggestions for the rules the password violates.

mod complexity;
mod length;
mod repeats;
mod topology;

use secrecy::{ExposeSecret, SecretString};

pub use complexity::complexity_section;
pub use length::length_section;
pub use repeats::{occurrences, repeats_section};
pub use topology::topology_section;

/// Suggestions produced by a section, empty when the password passes.
pub type SectionResult = Vec<String>;

/// A named rule check that can be added to a [`Policy`](crate::Policy).
///
/// Implementations must be pure: the same password always yields the same
/// suggestions.
pub trait Rule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    fn check(&self, password: &SecretString) -> SectionResult;
}

/// A rule built from a predicate and the suggestion shown when it fails.
///
/// ```rust
/// use hardpass::{CustomRule, Policy};
///
/// let policy = Policy::default().with_rule(CustomRule::new(
///     "no-company-name",
///     "Cannot contain the company name",
///     |pwd: &str| !pwd.to_lowercase().contains("acme"),
/// ));
/// ```
pub struct CustomRule<F> {
    name: String,
    suggestion: String,
    passes: F,
}

impl<F> CustomRule<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(name: impl Into<String>, suggestion: impl Into<String>, passes: F) -> Self {
        Self {
            name: name.into(),
            suggestion: suggestion.into(),
            passes,
        }
    }
}

impl<F> Rule for CustomRule<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, password: &SecretString) -> SectionResult {
        if (self.passes)(password.expose_secret()) {
            Vec::new()
        } else {
            vec![self.suggestion.clone()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_rule_passes() {
        let rule = CustomRule::new("no-acme", "Cannot contain acme", |pwd: &str| {
            !pwd.contains("acme")
        });
        let pwd = SecretString::new("Tr0ub4dor&3".to_string().into());
        assert!(rule.check(&pwd).is_empty());
        assert_eq!(rule.name(), "no-acme");
    }

    #[test]
    fn test_custom_rule_fails_with_suggestion() {
        let rule = CustomRule::new("no-acme", "Cannot contain acme", |pwd: &str| {
            !pwd.contains("acme")
        });
        let pwd = SecretString::new("acme-Rocks-42".to_string().into());
        assert_eq!(rule.check(&pwd), vec!["Cannot contain acme".to_string()]);
    }
}
