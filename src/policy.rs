//! Policy configuration.

use std::fmt;
use std::sync::Arc;

use crate::evaluation::FeedbackMode;
use crate::sections::Rule;
use crate::topology::BannedTopologies;

pub const DEFAULT_MIN_LENGTH: usize = 10;
pub const DEFAULT_MAX_LENGTH: usize = 128;
pub const DEFAULT_MAX_CONSECUTIVE: usize = 2;
pub const DEFAULT_MIN_CLASSES: usize = 3;

/// The rule set a password is evaluated against.
///
/// `Policy::default()` enables every built-in rule, including the banned
/// topology check. `Policy::basic()` leaves the topology check out.
#[derive(Clone)]
pub struct Policy {
    pub(crate) min_length: usize,
    pub(crate) max_length: usize,
    pub(crate) max_consecutive: usize,
    pub(crate) min_classes: usize,
    pub(crate) topologies: Option<BannedTopologies>,
    pub(crate) feedback_mode: FeedbackMode,
    pub(crate) rules: Vec<Arc<dyn Rule>>,
}

impl Policy {
    /// Complexity, length and repeated-character rules only.
    pub fn basic() -> Self {
        Self::default().without_topology()
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Longest allowed run of one identical character.
    pub fn max_consecutive(mut self, max_consecutive: usize) -> Self {
        self.max_consecutive = max_consecutive;
        self
    }

    /// How many of the four character classes must be present.
    pub fn min_classes(mut self, min_classes: usize) -> Self {
        self.min_classes = min_classes.min(4);
        self
    }

    pub fn banned_topologies(mut self, topologies: BannedTopologies) -> Self {
        self.topologies = Some(topologies);
        self
    }

    pub fn without_topology(mut self) -> Self {
        self.topologies = None;
        self
    }

    pub fn feedback_mode(mut self, mode: FeedbackMode) -> Self {
        self.feedback_mode = mode;
        self
    }

    /// Appends a rule checked after the built-in ones.
    pub fn with_rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            max_consecutive: DEFAULT_MAX_CONSECUTIVE,
            min_classes: DEFAULT_MIN_CLASSES,
            topologies: Some(BannedTopologies::builtin()),
            feedback_mode: FeedbackMode::default(),
            rules: Vec::new(),
        }
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("max_consecutive", &self.max_consecutive)
            .field("min_classes", &self.min_classes)
            .field("topologies", &self.topologies.as_ref().map(|t| t.len()))
            .field("feedback_mode", &self.feedback_mode)
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
