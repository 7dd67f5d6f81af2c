// src/store/followers.rs

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;

use super::{FollowerStore, run_query};

pub struct PgFollowerStore {
    pool: PgPool,
    timeout: Duration,
}

impl PgFollowerStore {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl FollowerStore for PgFollowerStore {
    async fn follow(&self, followed_id: i64, follower_id: i64) -> Result<(), AppError> {
        run_query(
            self.timeout,
            sqlx::query("INSERT INTO followers (user_id, follower_id) VALUES ($1, $2)")
                .bind(followed_id)
                .bind(follower_id)
                .execute(&self.pool),
        )
        .await
        .map_err(|e| match e {
            // Primary key on (user_id, follower_id): the edge already exists.
            AppError::Conflict(_) => {
                AppError::Conflict("Already following this user".to_string())
            }
            other => other,
        })?;

        Ok(())
    }

    async fn unfollow(&self, followed_id: i64, follower_id: i64) -> Result<(), AppError> {
        // Idempotent: deleting a missing edge affects zero rows and succeeds.
        run_query(
            self.timeout,
            sqlx::query("DELETE FROM followers WHERE user_id = $1 AND follower_id = $2")
                .bind(followed_id)
                .bind(follower_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(())
    }
}
