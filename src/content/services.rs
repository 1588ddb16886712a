use tracing::{info, warn};

use crate::auth::repo_types::UpsertUser;
use crate::content::dto::{GenerateContentRequest, GenerateContentResponse};
use crate::content::prompts::{compose_image_prompt, compose_text_prompt};
use crate::content::repo_types::NewContentRequest;
use crate::db::Repository;
use crate::error::AppError;
use crate::generation::ContentGenerator;

/// Records the caller on first sight so the request row has an owner.
/// Must run before any model call.
async fn ensure_user(repo: &dyn Repository, user: &UpsertUser) -> Result<(), AppError> {
    let existing = repo
        .get_user(&user.id)
        .await
        .map_err(|e| AppError::persistence("Failed to fetch user", e))?;
    if existing.is_none() {
        repo.upsert_user(user)
            .await
            .map_err(|e| AppError::persistence("Failed to save user", e))?;
        info!(user_id = %user.id, "user recorded on first request");
    }
    Ok(())
}

/// Text first, then the optional image, then a single insert.
///
/// A text failure aborts before anything is stored. A missing image only
/// leaves `image_url` empty.
pub async fn generate_content(
    generator: &dyn ContentGenerator,
    repo: &dyn Repository,
    user: &UpsertUser,
    req: GenerateContentRequest,
) -> Result<GenerateContentResponse, AppError> {
    ensure_user(repo, user).await?;
    let user_id = user.id.as_str();

    let text_prompt = compose_text_prompt(
        &req.language,
        &req.content_type,
        &req.tone,
        &req.content_idea,
    );
    let content = generator.generate_text(&text_prompt).await?;

    let image_url = if req.include_image {
        let image_prompt = compose_image_prompt(&req.content_type, &req.tone, &req.content_idea);
        let url = generator.generate_image(&image_prompt).await;
        if url.is_none() {
            warn!(%user_id, "image requested but none was generated");
        }
        url
    } else {
        None
    };

    let row = repo
        .create_content_request(&NewContentRequest {
            user_id: user_id.to_string(),
            language: req.language,
            content_type: req.content_type,
            tone: req.tone,
            content_idea: req.content_idea,
            generated_content: content.clone(),
            include_image: req.include_image,
            image_url: image_url.clone(),
        })
        .await
        .map_err(|e| AppError::persistence("Failed to save generated content", e))?;

    info!(
        %user_id,
        request_id = row.id,
        content_type = %row.content_type,
        has_image = image_url.is_some(),
        "content generated"
    );

    Ok(GenerateContentResponse { content, image_url })
}
