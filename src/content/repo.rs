use sqlx::PgPool;

use crate::content::repo_types::{ContentRequest, NewContentRequest};

impl ContentRequest {
    pub async fn create(db: &PgPool, req: &NewContentRequest) -> anyhow::Result<ContentRequest> {
        let row = sqlx::query_as::<_, ContentRequest>(
            r#"
            INSERT INTO content_requests
                (user_id, language, content_type, tone, content_idea,
                 generated_content, include_image, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, language, content_type, tone, content_idea,
                      generated_content, include_image, image_url, created_at
            "#,
        )
        .bind(&req.user_id)
        .bind(&req.language)
        .bind(&req.content_type)
        .bind(&req.tone)
        .bind(&req.content_idea)
        .bind(&req.generated_content)
        .bind(req.include_image)
        .bind(&req.image_url)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Newest first; `id` breaks ties between rows created in the same tick.
    pub async fn list_by_user(db: &PgPool, user_id: &str) -> anyhow::Result<Vec<ContentRequest>> {
        let rows = sqlx::query_as::<_, ContentRequest>(
            r#"
            SELECT id, user_id, language, content_type, tone, content_idea,
                   generated_content, include_image, image_url, created_at
            FROM content_requests
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
