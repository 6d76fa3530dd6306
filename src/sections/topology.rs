//! Topology section - rejects passwords with a banned shape.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::topology::BannedTopologies;

/// Checks the password's class layout against the banned topology list.
///
/// # Returns
/// - A single suggestion if the shape is banned
/// - Nothing otherwise
pub fn topology_section(password: &SecretString, banned: &BannedTopologies) -> SectionResult {
    if banned.is_banned(password.expose_secret()) {
        return vec![
            "Cannot use a common password structure such as a capital letter followed by lowercase letters and digits"
                .to_string(),
        ];
    }
    Vec::new()
}
