use std::fmt;

use serde::{Deserialize, Serialize};

/// Who said a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Interviewer,
    Candidate,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Interviewer => write!(f, "Interviewer"),
            Role::Candidate => write!(f, "Candidate"),
        }
    }
}

/// A single line of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub role: Role,
    pub content: String,
}

/// Append-only record of the interview, owned by the front-end.
///
/// The interviewer only borrows it for the duration of one `advance` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    utterances: Vec<Utterance>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.utterances.push(Utterance {
            role,
            content: content.into(),
        });
    }

    pub fn push_interviewer(&mut self, content: impl Into<String>) {
        self.push(Role::Interviewer, content);
    }

    pub fn push_candidate(&mut self, content: impl Into<String>) {
        self.push(Role::Candidate, content);
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    pub fn as_slice(&self) -> &[Utterance] {
        &self.utterances
    }

    pub fn iter(&self) -> impl Iterator<Item = &Utterance> {
        self.utterances.iter()
    }

    /// The most recent line, if it was said by the candidate.
    pub fn last_candidate(&self) -> Option<&str> {
        self.utterances
            .last()
            .filter(|u| u.role == Role::Candidate)
            .map(|u| u.content.as_str())
    }

    /// The last `n` utterances, oldest first.
    pub fn recent(&self, n: usize) -> &[Utterance] {
        let start = self.utterances.len().saturating_sub(n);
        &self.utterances[start..]
    }
}

impl From<Vec<Utterance>> for ConversationHistory {
    fn from(utterances: Vec<Utterance>) -> Self {
        Self { utterances }
    }
}

/// Renders utterances as `Role: content` lines.
pub fn render_transcript(utterances: &[Utterance]) -> String {
    utterances
        .iter()
        .map(|u| format!("{}: {}", u.role, u.content.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConversationHistory {
        let mut history = ConversationHistory::new();
        history.push_interviewer("Tell me about yourself.");
        history.push_candidate("I am a developer.");
        history.push_interviewer("What do you build?");
        history.push_candidate("Mostly backend services.");
        history.push_interviewer("Which languages?");
        history.push_candidate("Rust and Go.");
        history
    }

    #[test]
    fn recent_returns_tail_oldest_first() {
        let history = sample();
        let recent = history.recent(4);
        assert_eq!(recent.len(), 4);
        assert_eq!(recent[0].content, "What do you build?");
        assert_eq!(recent[3].content, "Rust and Go.");
    }

    #[test]
    fn recent_on_short_history_returns_everything() {
        let mut history = ConversationHistory::new();
        history.push_interviewer("Q1");
        assert_eq!(history.recent(4).len(), 1);
        assert!(ConversationHistory::new().recent(4).is_empty());
    }

    #[test]
    fn last_candidate_requires_candidate_as_last_entry() {
        let mut history = sample();
        assert_eq!(history.last_candidate(), Some("Rust and Go."));
        history.push_interviewer("Thanks.");
        assert_eq!(history.last_candidate(), None);
    }

    #[test]
    fn transcript_labels_roles() {
        let history = sample();
        let text = render_transcript(history.recent(2));
        assert_eq!(text, "Interviewer: Which languages?\nCandidate: Rust and Go.");
    }

    #[test]
    fn serializes_with_lowercase_roles() {
        let mut history = ConversationHistory::new();
        history.push_candidate("hi");
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"[{"role":"candidate","content":"hi"}]"#);
    }
}
