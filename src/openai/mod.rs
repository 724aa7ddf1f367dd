pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{CompletionSender, OpenAiClient};
pub use error::CompletionError;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Usage};
