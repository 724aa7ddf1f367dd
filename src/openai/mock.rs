//! Scripted [`CompletionSender`] for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::client::CompletionSender;
use super::error::CompletionError;
use super::types::{ChatRequest, ChatResponse, Choice, ResponseMessage};

/// Answers requests from a queue; `None` entries fail the call. An exhausted
/// queue also fails, so an unexpected call shows up as a fallback in tests.
pub(crate) struct MockClient {
    replies: Mutex<VecDeque<Option<String>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockClient {
    pub(crate) fn scripted<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(Into::into)).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn ok(text: &str) -> Self {
        Self::scripted([Some(text)])
    }

    pub(crate) fn failing() -> Self {
        Self::scripted(Vec::<Option<String>>::new())
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionSender for MockClient {
    async fn complete(&self, req: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        self.requests.lock().unwrap().push(req.clone());
        match self.replies.lock().unwrap().pop_front().flatten() {
            Some(text) => Ok(ChatResponse {
                id: "mock".into(),
                model: req.model.clone(),
                choices: vec![Choice {
                    index: 0,
                    message: ResponseMessage {
                        role: "assistant".into(),
                        content: Some(text),
                    },
                    finish_reason: Some("stop".into()),
                }],
                usage: None,
            }),
            None => Err(CompletionError::ApiError {
                status: 500,
                message: "mock error".into(),
            }),
        }
    }
}

/// System instruction of a captured request.
pub(crate) fn system_prompt(req: &ChatRequest) -> &str {
    req.messages
        .iter()
        .find(|m| m.role == "system")
        .map(|m| m.content.as_str())
        .unwrap_or_default()
}

/// User content of a captured request.
pub(crate) fn user_content(req: &ChatRequest) -> &str {
    req.messages
        .iter()
        .rev()
        .find(|m| m.role == "user")
        .map(|m| m.content.as_str())
        .unwrap_or_default()
}
