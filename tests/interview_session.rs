//! Full sessions against a mock chat-completions server.

use std::time::Duration;

use interviewer::interview::followup::FAILURE_FALLBACK;
use interviewer::interview::{CLOSING_LINE, Phase};
use interviewer::{
    ConversationHistory, InterviewError, InterviewSettings, Interviewer, OpenAiClient, Turn,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DETAILED: &str = "At my last job I owned the payments API and reduced p99 latency by 40%.";

fn completion(text: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "model": "gpt-4o-mini",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": text}}]
    })
}

fn interviewer_for(
    server: &MockServer,
    questions: &[&str],
    max_followups: i64,
) -> Interviewer<OpenAiClient> {
    let client = OpenAiClient::with_base_url(
        "sk-test".into(),
        format!("{}/v1/chat/completions", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();
    let settings = InterviewSettings {
        questions: questions.iter().map(|q| q.to_string()).collect(),
        max_followups_per_question: max_followups,
        ..Default::default()
    };
    Interviewer::new(settings, client).unwrap()
}

async fn answer(
    interviewer: &mut Interviewer<OpenAiClient>,
    history: &mut ConversationHistory,
    reply: &str,
) -> Turn {
    history.push_candidate(reply);
    let turn = interviewer.advance_turn(Some(reply), history).await;
    history.push_interviewer(turn.text());
    turn
}

async fn mount_judge(server: &MockServer, verdict: &str) {
    Mock::given(method("POST"))
        .and(body_string_contains("YES or NO"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(verdict)))
        .mount(server)
        .await;
}

async fn mount_generator(server: &MockServer, question: &str) {
    Mock::given(method("POST"))
        .and(body_string_contains("under 25 words"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(question)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn follows_up_vague_answers_then_moves_on() {
    let server = MockServer::start().await;
    mount_judge(&server, "YES").await;
    mount_generator(&server, "What was the measurable impact?").await;

    let mut interviewer = interviewer_for(&server, &["Q1", "Q2"], 1);
    let mut history = ConversationHistory::new();

    let first = interviewer.advance_turn(None, &history).await;
    assert_eq!(first, Turn::Question { index: 0, text: "Q1".into() });
    history.push_interviewer(first.text());

    let turn = answer(&mut interviewer, &mut history, DETAILED).await;
    assert_eq!(
        turn,
        Turn::FollowUp {
            attempt: 1,
            text: "What was the measurable impact?".into()
        }
    );

    let turn = answer(&mut interviewer, &mut history, DETAILED).await;
    assert_eq!(turn, Turn::Question { index: 1, text: "Q2".into() });

    let turn = answer(&mut interviewer, &mut history, DETAILED).await;
    assert_eq!(turn, Turn::Closing(CLOSING_LINE.into()));
    assert_eq!(interviewer.phase(), Phase::Closed);

    let summary = interviewer.summary(&history);
    assert_eq!(summary.questions_asked, 2);
    assert_eq!(summary.followups_asked, 1);
    assert!(summary.closed);
    assert_eq!(summary.transcript.len(), 7);
}

#[tokio::test]
async fn satisfied_judge_asks_no_followups() {
    let server = MockServer::start().await;
    mount_judge(&server, "no").await;

    let mut interviewer = interviewer_for(&server, &["Q1", "Q2", "Q3"], 2);
    let mut history = ConversationHistory::new();
    let first = interviewer.advance(None, &history).await;
    history.push_interviewer(first);

    for expected in ["Q2", "Q3"] {
        let turn = answer(&mut interviewer, &mut history, DETAILED).await;
        assert_eq!(turn.text(), expected);
    }
    assert_eq!(interviewer.state().followups_total, 0);
}

#[tokio::test]
async fn unavailable_service_degrades_to_fallbacks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let mut interviewer = interviewer_for(&server, &["Q1", "Q2"], 1);
    let mut history = ConversationHistory::new();
    let first = interviewer.advance(None, &history).await;
    history.push_interviewer(first);

    // Judge fails -> follow-up; generator fails -> fixed text.
    let turn = answer(&mut interviewer, &mut history, DETAILED).await;
    assert_eq!(turn.text(), FAILURE_FALLBACK);

    let turn = answer(&mut interviewer, &mut history, DETAILED).await;
    assert_eq!(turn.text(), "Q2");
}

#[tokio::test]
async fn negative_budget_is_rejected_before_any_call() {
    let server = MockServer::start().await;
    let client = OpenAiClient::with_base_url(
        "sk-test".into(),
        server.uri(),
        Duration::from_secs(5),
    )
    .unwrap();
    let settings = InterviewSettings {
        max_followups_per_question: -3,
        ..Default::default()
    };

    let result = Interviewer::new(settings, client);
    assert!(matches!(result, Err(InterviewError::InvalidConfiguration(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}
