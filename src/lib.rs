//! Password complexity policy evaluation
//!
//! This library checks a password against a fixed complexity policy and
//! reports every violated rule as a human-readable suggestion:
//!
//! - at least 3 of 4 character classes (upper case, lower case, digit,
//!   special character, space included)
//! - between 10 and 128 characters, nothing trimmed
//! - no more than 2 identical characters in a row
//! - no commonly used password shape (banned topologies)
//!
//! # Features
//!
//! - `async`: Enables sending evaluations over a tokio channel
//! - `tracing`: Enables logging via tracing crate. Password material is
//!   never logged.
//!
//! # Environment Variables
//!
//! - `HARDPASS_TOPOLOGY_PATH`: Custom banned topology file, read by
//!   [`BannedTopologies::from_env`] (default: built-in list)
//!
//! # Example
//!
//! ```rust
//! use hardpass::{evaluate_password, Score};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("i\"PSTg,98".to_string().into());
//! let evaluation = evaluate_password(&password);
//!
//! assert_eq!(evaluation.score, Score::WEAK);
//! assert_eq!(
//!     evaluation.suggestions(),
//!     ["Must be at least 10 characters long".to_string()]
//! );
//! ```

// Internal modules
mod classes;
mod evaluation;
mod evaluator;
mod policy;
mod sections;
mod topology;

// Public API
pub use classes::{CharClass, ClassCounts};
pub use evaluation::{Evaluation, Feedback, FeedbackMode, Score, ScoreOutOfRange, WEAK_WARNING};
pub use evaluator::{evaluate_password, meets_basic_policy};
pub use policy::Policy;
pub use sections::{CustomRule, Rule, SectionResult, occurrences};
pub use topology::{BannedTopologies, InvalidTag, TOPOLOGY_PATH_ENV, Tag, Topology, TopologyError};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
