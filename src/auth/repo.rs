use crate::auth::repo_types::{UpsertUser, User};
use sqlx::PgPool;

impl User {
    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, first_name, last_name, profile_image_url, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert the user, or overwrite its profile fields and refresh `updated_at`.
    pub async fn upsert(db: &PgPool, user: &UpsertUser) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, first_name, last_name, profile_image_url)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
               SET email = EXCLUDED.email,
                   first_name = EXCLUDED.first_name,
                   last_name = EXCLUDED.last_name,
                   profile_image_url = EXCLUDED.profile_image_url,
                   updated_at = now()
            RETURNING id, email, first_name, last_name, profile_image_url, created_at, updated_at
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.profile_image_url)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
