//! Calls to the generative model provider.

mod api_types;
mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Failed to generate marketing content: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to generate marketing content: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to generate marketing content: invalid provider response: {0}")]
    Decode(String),

    #[error("Failed to generate marketing content: Empty response from AI model")]
    EmptyResponse,
}

/// Text and image generation as consumed by the request handlers.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Returns the generated text; empty or whitespace-only output is an error.
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Returns the public URL of the stored image, or `None` when the provider
    /// produced no usable image. Never fails.
    async fn generate_image(&self, prompt: &str) -> Option<String>;
}
