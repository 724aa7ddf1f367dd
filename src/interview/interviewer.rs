use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::history::ConversationHistory;
use super::settings::{CLOSING_LINE, InterviewSettings, LlmSettings};
use super::state::{InterviewState, Phase, Turn};
use super::summary::SessionSummary;
use super::{followup, judge};
use crate::error::InterviewError;
use crate::openai::CompletionSender;

/// Drives one interview session.
///
/// Each call to [`advance`](Self::advance) moves the session exactly one step:
///
/// - `NotStarted`: ask the first prepared question (or close if there are
///   none).
/// - `AwaitingReply`: ask a generated follow-up if the reply warrants one and
///   the current question's budget allows it; otherwise ask the next prepared
///   question, or close once the last one has been answered.
/// - `Closed`: repeat the closing line.
pub struct Interviewer<C> {
    client: C,
    questions: Vec<String>,
    max_followups_per_question: u32,
    llm: LlmSettings,
    state: InterviewState,
    session_id: String,
    started_at: DateTime<Utc>,
}

impl<C: CompletionSender> Interviewer<C> {
    /// Fails with [`InterviewError::InvalidConfiguration`] if the settings do
    /// not validate.
    pub fn new(settings: InterviewSettings, client: C) -> Result<Self, InterviewError> {
        let max_followups_per_question = settings.validate()?;
        Ok(Self {
            client,
            questions: settings.questions,
            max_followups_per_question,
            llm: settings.llm,
            state: InterviewState::default(),
            session_id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
        })
    }

    /// Produces the next interviewer line. Never fails and never returns an
    /// empty string.
    ///
    /// `history` must end with the candidate's latest reply whenever a reply
    /// is being answered.
    pub async fn advance(
        &mut self,
        latest_reply: Option<&str>,
        history: &ConversationHistory,
    ) -> String {
        self.advance_turn(latest_reply, history).await.into_text()
    }

    /// Like [`advance`](Self::advance) but reports what kind of line it is.
    #[instrument(skip_all, fields(session = %self.session_id, phase = %self.state.phase()))]
    pub async fn advance_turn(
        &mut self,
        latest_reply: Option<&str>,
        history: &ConversationHistory,
    ) -> Turn {
        match self.state.phase() {
            Phase::Closed => return Turn::Closing(CLOSING_LINE.to_string()),
            Phase::NotStarted => {
                self.state.started = true;
                return self.ask_next_or_close();
            }
            Phase::AwaitingReply => {}
        }

        if self.state.question_index >= self.questions.len() {
            return self.close();
        }

        if self.state.followups_used >= self.max_followups_per_question {
            debug!(
                used = self.state.followups_used,
                max = self.max_followups_per_question,
                "follow-up budget exhausted"
            );
            return self.ask_next_or_close();
        }

        let reply = latest_reply
            .or_else(|| history.last_candidate())
            .unwrap_or_default();
        if !judge::needs_followup(&self.client, &self.llm, reply).await {
            debug!("reply is complete, moving on");
            return self.ask_next_or_close();
        }

        match followup::generate(&self.client, &self.llm, history).await {
            Some(text) => {
                self.state.followups_used += 1;
                self.state.followups_total += 1;
                info!(
                    attempt = self.state.followups_used,
                    question = self.state.question_index,
                    "asking follow-up"
                );
                Turn::FollowUp {
                    attempt: self.state.followups_used,
                    text,
                }
            }
            None => self.ask_next_or_close(),
        }
    }

    /// Convenience for front-ends that only keep the transcript: starts the
    /// interview if needed, otherwise answers the last candidate line.
    pub async fn respond(&mut self, history: &ConversationHistory) -> String {
        if self.state.started {
            self.advance(history.last_candidate(), history).await
        } else {
            self.advance(None, history).await
        }
    }

    /// Takes the next prepared question and resets the follow-up budget.
    /// Returns `None` once the script is exhausted.
    pub fn next_prepared_question(&mut self) -> Option<String> {
        let question = self.questions.get(self.state.question_index)?.clone();
        self.state.question_index += 1;
        self.state.followups_used = 0;
        Some(question)
    }

    fn ask_next_or_close(&mut self) -> Turn {
        match self.next_prepared_question() {
            Some(text) => {
                let index = self.state.question_index - 1;
                info!(index, total = self.questions.len(), "asking prepared question");
                Turn::Question { index, text }
            }
            None => self.close(),
        }
    }

    fn close(&mut self) -> Turn {
        self.state.closed = true;
        info!(
            questions = self.state.question_index,
            followups = self.state.followups_total,
            "interview closed"
        );
        Turn::Closing(CLOSING_LINE.to_string())
    }

    pub fn state(&self) -> &InterviewState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_closed(&self) -> bool {
        self.state.closed
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn max_followups_per_question(&self) -> u32 {
        self.max_followups_per_question
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn summary(&self, history: &ConversationHistory) -> SessionSummary {
        SessionSummary::new(
            &self.session_id,
            self.started_at,
            &self.state,
            self.questions.len(),
            history,
        )
    }
}
