//! The interview state machine and its two service-backed helpers: the
//! quality judge and the follow-up generator.

pub mod followup;
pub mod history;
mod interviewer;
pub mod judge;
pub mod settings;
pub mod state;
pub mod summary;

pub use history::{ConversationHistory, Role, Utterance};
pub use interviewer::Interviewer;
pub use settings::{CLOSING_LINE, DEFAULT_QUESTIONS, InterviewSettings, LlmSettings};
pub use state::{InterviewState, Phase, Turn};
pub use summary::SessionSummary;
