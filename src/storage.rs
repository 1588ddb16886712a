use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

/// Write-once storage for generated images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persists `body` and returns the public URL it is served under.
    async fn put_image(&self, body: Bytes, content_type: &str) -> anyhow::Result<String>;
}

/// Stores images in a local directory that is served statically.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    dir: PathBuf,
    url_prefix: String,
}

impl LocalImageStore {
    pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn put_image(&self, body: Bytes, content_type: &str) -> anyhow::Result<String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create images dir {}", self.dir.display()))?;

        let filename = image_filename(content_type);
        let path = self.dir.join(&filename);
        tokio::fs::write(&path, &body)
            .await
            .with_context(|| format!("write image {}", path.display()))?;

        info!(path = %path.display(), bytes = body.len(), "marketing image saved");
        Ok(format!("{}/{}", self.url_prefix, filename))
    }
}

// Millisecond timestamp plus a random suffix; the timestamp alone collides
// when two requests finish in the same tick.
fn image_filename(content_type: &str) -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let suffix = Uuid::new_v4().simple().to_string();
    let ext = ext_from_mime(content_type).unwrap_or("png");
    format!("marketing-image-{}-{}.{}", millis, &suffix[..8], ext)
}

fn ext_from_mime(ct: &str) -> Option<&'static str> {
    match ct {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}
