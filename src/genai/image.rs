//! Exhibition image generation.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenAiError;

use super::client::GeminiClient;
use super::wire::{Content, GenerateContentRequest, GenerationConfig, ImageConfig};

/// Square images suit the site's card layout.
const ASPECT_RATIO: &str = "1:1";

/// Output resolution of a generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub const ALL: [ImageSize; 3] = [ImageSize::OneK, ImageSize::TwoK, ImageSize::FourK];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageSize::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown image size: {s}"))
    }
}

pub trait ImageService: Send + Sync {
    /// Generate an image for `prompt`. `Ok(None)` when the service answered
    /// without an image; [`GenAiError::EntityNotFound`] when the credential is
    /// no longer valid.
    fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
    ) -> impl Future<Output = Result<Option<String>, GenAiError>> + Send;
}

impl ImageService for GeminiClient {
    async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
    ) -> Result<Option<String>, GenAiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(None, prompt)],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    image_size: size.as_str().to_string(),
                    aspect_ratio: ASPECT_RATIO.to_string(),
                }),
                ..GenerationConfig::default()
            }),
        };

        let response = self
            .generate_content(&self.config().image_model, &request)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %size, "image generation failed");
                e
            })?;

        Ok(response
            .inline_data()
            .map(|data| format!("data:image/png;base64,{}", data.data)))
    }
}
