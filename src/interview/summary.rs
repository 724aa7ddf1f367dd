use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::history::{ConversationHistory, Utterance};
use super::state::InterviewState;
use crate::error::InterviewError;

/// Record of a session, produced when the front-end is done with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub questions_total: usize,
    pub questions_asked: usize,
    pub followups_asked: u32,
    pub closed: bool,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_ms: i64,
    pub transcript: Vec<Utterance>,
}

impl SessionSummary {
    pub fn new(
        session_id: &str,
        started_at: DateTime<Utc>,
        state: &InterviewState,
        questions_total: usize,
        history: &ConversationHistory,
    ) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.to_string(),
            questions_total,
            questions_asked: state.question_index,
            followups_asked: state.followups_total,
            closed: state.closed,
            started_at,
            completed_at: now,
            duration_ms: (now - started_at).num_milliseconds(),
            transcript: history.as_slice().to_vec(),
        }
    }

    /// Writes the summary as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), InterviewError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
