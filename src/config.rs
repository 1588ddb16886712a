use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_url: String,
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImagesConfig {
    /// Directory generated images are written to (created on first write).
    pub dir: PathBuf,
    /// Public URL prefix the directory is served under.
    pub url_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub auth: AuthConfig,
    pub gemini: GeminiConfig,
    pub images: ImagesConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;
        let auth = AuthConfig {
            secret: std::env::var("AUTH_JWT_SECRET").context("AUTH_JWT_SECRET not set")?,
            issuer: std::env::var("AUTH_JWT_ISSUER").unwrap_or_else(|_| "contentforge".into()),
            audience: std::env::var("AUTH_JWT_AUDIENCE")
                .unwrap_or_else(|_| "contentforge-users".into()),
        };
        let gemini = GeminiConfig {
            api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into()),
            api_key: std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .context("GEMINI_API_KEY (or API_KEY) not set")?,
            text_model: std::env::var("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-preview-05-20".into()),
            image_model: std::env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash-preview-image-generation".into()),
        };
        let images = ImagesConfig {
            dir: std::env::var("GENERATED_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public/generated-images")),
            url_prefix: normalize_url_prefix(
                &std::env::var("GENERATED_IMAGES_URL_PREFIX").unwrap_or_default(),
            ),
        };
        Ok(Self {
            database_url,
            auth,
            gemini,
            images,
        })
    }
}

const DEFAULT_IMAGES_URL_PREFIX: &str = "/generated-images";

/// Leading slash, no trailing slash. Empty or root falls back to the default,
/// since nesting at `/` would shadow the API.
fn normalize_url_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        DEFAULT_IMAGES_URL_PREFIX.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
