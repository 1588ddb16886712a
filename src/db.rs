use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::auth::repo_types::{UpsertUser, User};
use crate::content::repo_types::{ContentRequest, NewContentRequest};

/// Narrow persistence interface used by the handlers.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn get_user(&self, id: &str) -> anyhow::Result<Option<User>>;
    async fn upsert_user(&self, user: &UpsertUser) -> anyhow::Result<User>;
    async fn create_content_request(&self, req: &NewContentRequest)
        -> anyhow::Result<ContentRequest>;
    async fn list_content_requests_by_user(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Vec<ContentRequest>>;
}

#[derive(Clone)]
pub struct PgRepository {
    db: PgPool,
}

impl PgRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .context("connect to database")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        Ok(Self::new(db))
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn get_user(&self, id: &str) -> anyhow::Result<Option<User>> {
        User::find_by_id(&self.db, id).await
    }

    async fn upsert_user(&self, user: &UpsertUser) -> anyhow::Result<User> {
        User::upsert(&self.db, user).await
    }

    async fn create_content_request(
        &self,
        req: &NewContentRequest,
    ) -> anyhow::Result<ContentRequest> {
        ContentRequest::create(&self.db, req).await
    }

    async fn list_content_requests_by_user(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Vec<ContentRequest>> {
        ContentRequest::list_by_user(&self.db, user_id).await
    }
}
