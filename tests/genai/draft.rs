use axum::http::StatusCode;
use slow_listen::genai::DraftService;
use slow_listen::{GenAiError, StoryForm, StoryKind};

use crate::support::{error_response, start_mock};

const DRAFT: &str = r#"{
  "title": "The Lighthouse Keeper",
  "type": "STORY",
  "excerpt": "He knew every ship by the sound of its horn.",
  "content": "He knew every ship by the sound of its horn.\n\nOn foggy nights he named them aloud.",
  "author": "Tomas Vidal"
}"#;

#[tokio::test]
async fn draft_fills_the_form() {
    let (mock, client) = start_mock().await;
    mock.reply_text(DRAFT);

    let draft = client.draft_story("foghorns").await.unwrap();
    assert_eq!(draft.kind, StoryKind::Story);
    assert_eq!(draft.author, "Tomas Vidal");

    let mut form = StoryForm::new("12");
    form.apply_draft(draft);
    assert_eq!(form.title, "The Lighthouse Keeper");

    let request = &mock.requests()[0];
    assert_eq!(request.call, "gemini-2.5-flash:generateContent");
    let config = &request.body["generationConfig"];
    assert_eq!(config["responseMimeType"], "application/json");
    assert_eq!(config["responseSchema"]["properties"]["type"]["enum"][1], "QUOTE");
    let prompt = request.body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("\"foghorns\""));
}

#[tokio::test]
async fn malformed_draft_is_an_error() {
    let (mock, client) = start_mock().await;
    mock.reply_text("Once upon a time...");
    let err = client.draft_story("tides").await.unwrap_err();
    assert!(matches!(err, GenAiError::MalformedResponse(_)));
}

#[tokio::test]
async fn empty_answer_is_an_error() {
    let (_mock, client) = start_mock().await;
    let err = client.draft_story("tides").await.unwrap_err();
    assert!(matches!(err, GenAiError::EmptyResponse));
}

#[tokio::test]
async fn service_errors_keep_their_status() {
    let (mock, client) = start_mock().await;
    mock.reply(
        StatusCode::TOO_MANY_REQUESTS,
        error_response(429, "Resource has been exhausted", "RESOURCE_EXHAUSTED"),
    );
    match client.draft_story("tides").await.unwrap_err() {
        GenAiError::Service { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Resource has been exhausted");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
