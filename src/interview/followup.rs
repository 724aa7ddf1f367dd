//! Generates the text of a follow-up question.

use tracing::{debug, warn};

use super::history::{ConversationHistory, render_transcript};
use super::settings::LlmSettings;
use crate::openai::CompletionSender;

/// How many of the latest utterances the generator sees.
pub const RECENT_UTTERANCES: usize = 4;

/// Used when the generator answers with nothing.
pub const EMPTY_FALLBACK: &str = "Can you give me a specific example?";

/// Used when the generator call fails.
pub const FAILURE_FALLBACK: &str = "Could you elaborate on that with more details?";

const INSTRUCTIONS: &str = "You are a professional job interviewer. \
Read the end of the interview below and ask ONE concise follow-up question (under 25 words) \
about the candidate's last answer. Target whichever of these is weakest in that answer: \
concrete examples, specificity, the candidate's own role and actions, the outcome or impact, \
a clear Situation-Task-Action-Result structure. Respond with the question only.";

const FOLLOWUP_MAX_TOKENS: u32 = 60;

/// Produces a follow-up question from the tail of `history`.
///
/// Returns `None` only when the history is empty; otherwise always returns a
/// non-empty question, falling back to fixed text on an empty answer or a
/// failed call.
pub async fn generate(
    client: &impl CompletionSender,
    llm: &LlmSettings,
    history: &ConversationHistory,
) -> Option<String> {
    let recent = history.recent(RECENT_UTTERANCES);
    if recent.is_empty() {
        debug!("no conversation to follow up on");
        return None;
    }

    let req = llm.request(INSTRUCTIONS, render_transcript(recent), FOLLOWUP_MAX_TOKENS);
    let question = match client.complete(&req).await {
        Ok(response) => {
            let text = clean(response.text());
            if text.is_empty() {
                debug!("generator returned nothing, using fallback");
                EMPTY_FALLBACK.to_string()
            } else {
                text
            }
        }
        Err(e) => {
            warn!(error = %e, "follow-up generation failed, using fallback");
            FAILURE_FALLBACK.to_string()
        }
    };
    Some(question)
}

// Models sometimes wrap the question in quotes.
fn clean(text: &str) -> String {
    text.trim().trim_matches('"').trim().to_string()
}
