use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// A persisted generation request and its result. Never updated after insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    pub id: i32,
    pub user_id: Option<String>,
    pub language: String,
    pub content_type: String,
    pub tone: String,
    pub content_idea: String,
    pub generated_content: Option<String>,
    pub include_image: bool,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContentRequest {
    pub user_id: String,
    pub language: String,
    pub content_type: String,
    pub tone: String,
    pub content_idea: String,
    pub generated_content: String,
    pub include_image: bool,
    pub image_url: Option<String>,
}
