use axum::http::StatusCode;
use serde_json::json;
use slow_listen::genai::{ImageService, ImageSize, ImageStudio, StaticCredential};
use slow_listen::{GenAiError, StudioError};

use crate::support::{error_response, start_mock};

fn image_response(data: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": "Here is your lake." },
                    { "inlineData": { "mimeType": "image/png", "data": data } }
                ]
            }
        }]
    })
}

#[tokio::test]
async fn inline_data_becomes_data_uri() {
    let (mock, client) = start_mock().await;
    mock.reply(StatusCode::OK, image_response("iVBORw0KGgo="));

    let uri = client
        .generate_image("a calm lake at dawn", ImageSize::TwoK)
        .await
        .unwrap();
    assert_eq!(uri.as_deref(), Some("data:image/png;base64,iVBORw0KGgo="));

    let request = &mock.requests()[0];
    assert_eq!(request.call, "gemini-3-pro-image-preview:generateContent");
    let image_config = &request.body["generationConfig"]["imageConfig"];
    assert_eq!(image_config["imageSize"], "2K");
    assert_eq!(image_config["aspectRatio"], "1:1");
}

#[tokio::test]
async fn text_only_answer_has_no_image() {
    let (mock, client) = start_mock().await;
    mock.reply_text("I would rather describe it.");
    let uri = client.generate_image("fog", ImageSize::OneK).await.unwrap();
    assert!(uri.is_none());
}

#[tokio::test]
async fn entity_not_found_is_reported() {
    let (mock, client) = start_mock().await;
    mock.reply(
        StatusCode::NOT_FOUND,
        error_response(404, "Requested entity was not found.", "NOT_FOUND"),
    );
    let err = client.generate_image("fog", ImageSize::OneK).await.unwrap_err();
    assert!(matches!(err, GenAiError::EntityNotFound));
}

#[tokio::test]
async fn studio_drops_expired_key() {
    let (mock, client) = start_mock().await;
    mock.reply(StatusCode::OK, image_response("AAAA"));
    mock.reply(
        StatusCode::NOT_FOUND,
        error_response(404, "Requested entity was not found.", "NOT_FOUND"),
    );

    let mut studio = ImageStudio::new(StaticCredential::new(Some("test-key")), client);
    assert!(studio.check().await);

    let image = studio.generate("a heron", ImageSize::FourK).await.unwrap();
    assert_eq!(image, Some("data:image/png;base64,AAAA"));

    let err = studio.generate("a heron", ImageSize::FourK).await.unwrap_err();
    assert_eq!(err, StudioError::SessionExpired);
    assert!(!studio.has_key());
    assert_eq!(studio.image(), Some("data:image/png;base64,AAAA"));
    assert_eq!(
        err.to_string(),
        "API Key session expired or invalid. Please reconnect."
    );
}
