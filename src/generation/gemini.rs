use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::api_types::{ApiError, GenerateContentRequest, GenerateContentResponse};
use super::{ContentGenerator, GenerationError};
use crate::config::GeminiConfig;
use crate::storage::ImageStore;

/// Process-wide client for the Gemini `generateContent` API.
///
/// Built once at startup and shared through `AppState`; the underlying
/// `reqwest::Client` pools connections across requests.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
    images: Arc<dyn ImageStore>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig, images: Arc<dyn ImageStore>) -> anyhow::Result<Self> {
        let client = Client::builder().build()?;
        info!(
            text_model = %config.text_model,
            image_model = %config.image_model,
            "gemini client initialized"
        );
        Ok(Self {
            client,
            config,
            images,
        })
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            model
        );
        debug!(%model, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiError>(&error_text) {
                Ok(api_error) => {
                    debug!(status = ?api_error.error.status, "provider error body");
                    api_error.error.message
                }
                Err(_) if error_text.is_empty() => status.to_string(),
                Err(_) => error_text,
            };
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GenerationError::Decode(e.to_string()))
    }

    async fn try_generate_image(&self, prompt: &str) -> anyhow::Result<Option<String>> {
        let request = GenerateContentRequest::user_prompt(prompt).with_image_output();
        let response = self
            .generate_content(&self.config.image_model, &request)
            .await?;

        let Some(inline) = response.first_inline_data() else {
            let finish_reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref());
            info!(?finish_reason, "image model returned no inline image");
            return Ok(None);
        };

        let bytes = base64::engine::general_purpose::STANDARD.decode(&inline.data)?;
        let url = self
            .images
            .put_image(Bytes::from(bytes), &inline.mime_type)
            .await?;
        Ok(Some(url))
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateContentRequest::user_prompt(prompt);
        let response = self
            .generate_content(&self.config.text_model, &request)
            .await?;

        match response.text() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(GenerationError::EmptyResponse),
        }
    }

    async fn generate_image(&self, prompt: &str) -> Option<String> {
        match self.try_generate_image(prompt).await {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "image generation failed; continuing without image");
                None
            }
        }
    }
}
