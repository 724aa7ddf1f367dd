//! Structured job interview simulator.
//!
//! An [`Interviewer`] walks a candidate through a fixed script of prepared
//! questions and, after each answer, may insert a bounded number of follow-up
//! questions generated by an OpenAI-compatible chat-completions service.
//!
//! ```no_run
//! # async fn demo() -> Result<(), interviewer::InterviewError> {
//! use interviewer::{ConversationHistory, InterviewSettings, Interviewer, OpenAiClient};
//!
//! let client = OpenAiClient::new(std::env::var("OPENAI_API_KEY").unwrap_or_default())?;
//! let mut interviewer = Interviewer::new(InterviewSettings::default(), client)?;
//! let mut history = ConversationHistory::new();
//!
//! let first = interviewer.advance(None, &history).await;
//! history.push_interviewer(first);
//! history.push_candidate("I build backend services in Rust.");
//! let next = interviewer.advance(Some("I build backend services in Rust."), &history).await;
//! # let _ = next;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod interview;
pub mod openai;
pub mod ui;

pub use error::InterviewError;
pub use interview::{ConversationHistory, InterviewSettings, Interviewer, Turn};
pub use openai::{CompletionError, CompletionSender, OpenAiClient};
