//! Evaluation result types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Warning attached to the feedback of a weak password.
pub const WEAK_WARNING: &str = "Not complex enough";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Score {0} is outside the 0-4 scale")]
pub struct ScoreOutOfRange(pub u8);

/// Password score on a 0-4 scale. The policy only produces the two ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const WEAK: Score = Score(0);
    pub const STRONG: Score = Score(4);

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Score::STRONG.0 {
            Ok(Score(value))
        } else {
            Err(ScoreOutOfRange(value))
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

/// Remediation feedback for a password.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feedback {
    pub warning: String,
    pub suggestions: Vec<String>,
}

/// Outcome of evaluating one password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

impl Evaluation {
    pub fn is_strong(&self) -> bool {
        self.score == Score::STRONG
    }

    /// Suggestions of the attached feedback, empty when there is none.
    pub fn suggestions(&self) -> &[String] {
        self.feedback
            .as_ref()
            .map(|f| f.suggestions.as_slice())
            .unwrap_or(&[])
    }
}

/// When feedback is attached to an [`Evaluation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackMode {
    /// Only for weak passwords.
    #[default]
    WhenWeak,
    /// Whenever the score is at most the given value.
    AtMost(u8),
    /// Always, with an empty warning and no suggestions for strong passwords.
    Always,
}

impl FeedbackMode {
    pub fn attaches(self, score: Score) -> bool {
        match self {
            FeedbackMode::WhenWeak => score == Score::WEAK,
            FeedbackMode::AtMost(max) => score.value() <= max,
            FeedbackMode::Always => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_weak() {
        let evaluation = Evaluation {
            score: Score::WEAK,
            feedback: Some(Feedback {
                warning: WEAK_WARNING.to_string(),
                suggestions: vec!["Must be at least 10 characters long".to_string()],
            }),
        };
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "score": 0,
                "feedback": {
                    "warning": "Not complex enough",
                    "suggestions": ["Must be at least 10 characters long"]
                }
            })
        );
    }

    #[test]
    fn test_serialize_strong_omits_feedback() {
        let evaluation = Evaluation {
            score: Score::STRONG,
            feedback: None,
        };
        assert_eq!(
            serde_json::to_string(&evaluation).unwrap(),
            r#"{"score":4}"#
        );
    }

    #[test]
    fn test_deserialize_without_feedback() {
        let evaluation: Evaluation = serde_json::from_str(r#"{"score":4}"#).unwrap();
        assert!(evaluation.is_strong());
        assert!(evaluation.suggestions().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_score_above_scale() {
        let result = serde_json::from_str::<Evaluation>(r#"{"score":7}"#);
        assert!(result.is_err());
        assert_eq!(Score::try_from(7), Err(ScoreOutOfRange(7)));
        assert_eq!(Score::try_from(2).map(Score::value), Ok(2));
    }

    #[test]
    fn test_feedback_mode_attaches() {
        assert!(FeedbackMode::WhenWeak.attaches(Score::WEAK));
        assert!(!FeedbackMode::WhenWeak.attaches(Score::STRONG));
        assert!(FeedbackMode::AtMost(2).attaches(Score::WEAK));
        assert!(!FeedbackMode::AtMost(2).attaches(Score::STRONG));
        assert!(FeedbackMode::Always.attaches(Score::STRONG));
    }
}
