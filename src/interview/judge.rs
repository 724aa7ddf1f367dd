//! Decides whether a candidate's answer deserves a follow-up question.
//!
//! Very short answers always do. Anything longer goes to the completion
//! service with a fixed rubric and a YES/NO verdict is read back. If the
//! service fails, the answer is treated as needing a follow-up.

use tracing::{debug, warn};

use super::settings::LlmSettings;
use crate::openai::CompletionSender;

/// Answers shorter than this (after trimming) skip the judge.
pub const MIN_SUBSTANTIVE_CHARS: usize = 20;

const RUBRIC: &str = "You are reviewing a candidate's answer in a job interview. \
Reply YES if the answer needs a follow-up question because it does any of the following: \
lacks concrete examples; is vague; does not describe the candidate's own role or actions; \
omits the outcome or impact; does not follow a Situation-Task-Action-Result structure. \
Otherwise reply NO. Respond with exactly one word: YES or NO.";

const VERDICT_MAX_TOKENS: u32 = 3;

/// Returns `true` when the interviewer should ask a follow-up on `reply`.
pub async fn needs_followup(
    client: &impl CompletionSender,
    llm: &LlmSettings,
    reply: &str,
) -> bool {
    let reply = reply.trim();
    if reply.chars().count() < MIN_SUBSTANTIVE_CHARS {
        debug!(chars = reply.chars().count(), "reply too short, follow-up required");
        return true;
    }

    let req = llm.request(
        RUBRIC,
        format!("Candidate's answer:\n{reply}"),
        VERDICT_MAX_TOKENS,
    );
    match client.complete(&req).await {
        Ok(response) => {
            let verdict = parse_verdict(response.text());
            debug!(verdict, raw = response.text(), "quality judge verdict");
            verdict
        }
        Err(e) => {
            warn!(error = %e, "quality judge failed, asking a follow-up");
            true
        }
    }
}

/// `YES` (any case, surrounding whitespace ignored) is a yes; anything else is
/// a no.
pub fn parse_verdict(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("yes")
}
