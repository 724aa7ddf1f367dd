//! Construction parameters for an [`Interviewer`](super::Interviewer).
//!
//! [`InterviewSettings::default`] gives the stock five-question script with
//! two follow-ups per question on `gpt-4o-mini`. Every session gets its own
//! copy of the question list.

use crate::error::InterviewError;
use crate::openai::{ChatMessage, ChatRequest};

/// The stock interview script.
pub const DEFAULT_QUESTIONS: [&str; 5] = [
    "Tell me about yourself.",
    "Describe a challenging project you worked on and how you handled it.",
    "Tell me about a time you disagreed with a teammate. How did you resolve it?",
    "Give an example of a goal you set for yourself and how you achieved it.",
    "Why are you interested in this role?",
];

/// Said once every prepared question has been asked, and on every call after.
pub const CLOSING_LINE: &str = "Thank you for your time! We'll be in touch.";

pub const DEFAULT_MAX_FOLLOWUPS: i64 = 2;
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Model parameters handed through to the completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl LlmSettings {
    /// Builds a two-message request: `system` instructions, then `user` content.
    pub fn request(&self, system: &str, user: String, max_tokens: u32) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: Some(max_tokens),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterviewSettings {
    pub questions: Vec<String>,
    /// Signed so that configuration sources can express (and be rejected for)
    /// negative values.
    pub max_followups_per_question: i64,
    pub llm: LlmSettings,
}

impl Default for InterviewSettings {
    fn default() -> Self {
        Self {
            questions: DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            max_followups_per_question: DEFAULT_MAX_FOLLOWUPS,
            llm: LlmSettings::default(),
        }
    }
}

impl InterviewSettings {
    /// Checks the settings and returns the follow-up budget as an unsigned
    /// count.
    pub fn validate(&self) -> Result<u32, InterviewError> {
        if self.max_followups_per_question < 0 {
            return Err(InterviewError::InvalidConfiguration(format!(
                "max_followups_per_question must be non-negative, got {}",
                self.max_followups_per_question
            )));
        }
        let budget = u32::try_from(self.max_followups_per_question).map_err(|_| {
            InterviewError::InvalidConfiguration(format!(
                "max_followups_per_question is too large: {}",
                self.max_followups_per_question
            ))
        })?;

        let t = self.llm.temperature;
        if !t.is_finite() || !(0.0..=2.0).contains(&t) {
            return Err(InterviewError::InvalidConfiguration(format!(
                "temperature must be between 0.0 and 2.0, got {t}"
            )));
        }
        if let Some(pos) = self.questions.iter().position(|q| q.trim().is_empty()) {
            return Err(InterviewError::InvalidConfiguration(format!(
                "question {} is blank",
                pos + 1
            )));
        }
        if self.llm.model.trim().is_empty() {
            return Err(InterviewError::InvalidConfiguration(
                "model identifier must not be empty".into(),
            ));
        }

        Ok(budget)
    }
}
