//! Password policy evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::evaluation::{Evaluation, Feedback, Score, WEAK_WARNING};
use crate::policy::Policy;
use crate::sections::{
    SectionResult, complexity_section, length_section, repeats_section, topology_section,
};

impl Policy {
    /// Evaluates a password against every rule of the policy.
    ///
    /// All rules run; suggestions are reported for every violated rule in
    /// the order complexity, length, repeated characters, topology, then
    /// custom rules in insertion order.
    pub fn evaluate(&self, password: &SecretString) -> Evaluation {
        // Orchestrator: every section runs, no short-circuit on failure
        let mut sections: Vec<(&str, SectionResult)> = vec![
            ("complexity", complexity_section(password, self.min_classes)),
            (
                "length",
                length_section(password, self.min_length, self.max_length),
            ),
            ("repeats", repeats_section(password, self.max_consecutive)),
        ];

        if let Some(topologies) = &self.topologies {
            sections.push(("topology", topology_section(password, topologies)));
        }

        for rule in &self.rules {
            sections.push((rule.name(), rule.check(password)));
        }

        let mut suggestions = Vec::new();
        for (_section_name, section_suggestions) in sections {
            if !section_suggestions.is_empty() {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    rule = _section_name,
                    suggestions = section_suggestions.len(),
                    "password rule failed"
                );
                suggestions.extend(section_suggestions);
            }
        }

        let score = if suggestions.is_empty() {
            Score::STRONG
        } else {
            Score::WEAK
        };

        let feedback = self.feedback_mode.attaches(score).then(|| {
            let warning = if suggestions.is_empty() {
                String::new()
            } else {
                WEAK_WARNING.to_string()
            };
            Feedback {
                warning,
                suggestions,
            }
        });

        Evaluation { score, feedback }
    }
}

/// Evaluates a password against the default policy.
pub fn evaluate_password(password: &SecretString) -> Evaluation {
    Policy::default().evaluate(password)
}

/// Returns true iff the password passes the complexity, length and
/// repeated-character rules.
pub fn meets_basic_policy(password: &SecretString) -> bool {
    Policy::basic().evaluate(password).is_strong()
}

/// Async version that sends the evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    policy: &Policy,
    password: &SecretString,
    tx: mpsc::Sender<Evaluation>,
) {
    let evaluation = policy.evaluate(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
