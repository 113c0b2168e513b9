//! AI-drafted stories for the authoring dialog.

use std::future::Future;

use serde_json::{json, Value};

use crate::authoring::StoryDraft;
use crate::error::GenAiError;

use super::client::GeminiClient;
use super::wire::{Content, GenerateContentRequest, GenerationConfig};

pub trait DraftService: Send + Sync {
    /// Draft a story or quote about `topic`.
    fn draft_story(
        &self,
        topic: &str,
    ) -> impl Future<Output = Result<StoryDraft, GenAiError>> + Send;
}

/// Prompt sent to the drafting model.
pub fn draft_prompt(topic: &str) -> String {
    format!(
        "Write a short, atmospheric, and literary story or quote for an exhibition called 'Slow and Listen'.\n\
         The topic is: \"{topic}\".\n\n\
         If the topic feels like a short wisdom, make it a QUOTE type. If it feels like a narrative, make it a STORY type.\n\
         The tone should be warm, observant, and calm.\n\n\
         Return JSON only."
    )
}

/// Response schema the drafting model must follow.
pub fn draft_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "type": { "type": "STRING", "enum": ["STORY", "QUOTE"] },
            "excerpt": {
                "type": "STRING",
                "description": "A one sentence summary or the quote itself"
            },
            "content": {
                "type": "STRING",
                "description": "The full story text. If type is QUOTE, this can be an elaboration."
            },
            "author": {
                "type": "STRING",
                "description": "A fictional name fitting the story"
            }
        },
        "required": ["title", "type", "excerpt", "content", "author"]
    })
}

/// Parse the model's JSON text into a draft.
pub fn parse_draft(text: &str) -> Result<StoryDraft, GenAiError> {
    serde_json::from_str(text.trim()).map_err(|e| GenAiError::MalformedResponse(e.to_string()))
}

impl DraftService for GeminiClient {
    async fn draft_story(&self, topic: &str) -> Result<StoryDraft, GenAiError> {
        let result = request_draft(self, topic).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, topic, "story draft failed");
        }
        result
    }
}

async fn request_draft(client: &GeminiClient, topic: &str) -> Result<StoryDraft, GenAiError> {
    let request = GenerateContentRequest {
        contents: vec![Content::text(None, draft_prompt(topic))],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(draft_schema()),
            image_config: None,
        }),
    };

    let response = client
        .generate_content(&client.config().draft_model, &request)
        .await?;
    let text = response.text().ok_or(GenAiError::EmptyResponse)?;
    parse_draft(&text)
}
