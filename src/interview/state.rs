use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse lifecycle of a session.
///
/// NOT_STARTED → AWAITING_REPLY → ... → CLOSED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    AwaitingReply,
    Closed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NotStarted => write!(f, "NOT_STARTED"),
            Phase::AwaitingReply => write!(f, "AWAITING_REPLY"),
            Phase::Closed => write!(f, "CLOSED"),
        }
    }
}

/// Mutable progress of one interview. Only the interviewer mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewState {
    /// Position of the next prepared question to ask.
    pub question_index: usize,
    /// Follow-ups asked since the last prepared question.
    pub followups_used: u32,
    /// Follow-ups asked over the whole session.
    pub followups_total: u32,
    pub started: bool,
    pub closed: bool,
}

impl InterviewState {
    pub fn phase(&self) -> Phase {
        if self.closed {
            Phase::Closed
        } else if self.started {
            Phase::AwaitingReply
        } else {
            Phase::NotStarted
        }
    }
}

/// One interviewer line, tagged with why it was said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// A prepared question, asked verbatim. `index` is 0-based.
    Question { index: usize, text: String },
    /// A generated follow-up; `attempt` counts from 1 within the current
    /// prepared question.
    FollowUp { attempt: u32, text: String },
    Closing(String),
}

impl Turn {
    pub fn text(&self) -> &str {
        match self {
            Turn::Question { text, .. } | Turn::FollowUp { text, .. } | Turn::Closing(text) => {
                text
            }
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Turn::Question { text, .. } | Turn::FollowUp { text, .. } | Turn::Closing(text) => {
                text
            }
        }
    }

    pub fn is_closing(&self) -> bool {
        matches!(self, Turn::Closing(_))
    }
}
