// src/store/comments.rs

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::comment::{Comment, CommentResponse};

use super::{CommentStore, run_query};

pub struct PgCommentStore {
    pool: PgPool,
    timeout: Duration,
}

impl PgCommentStore {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl CommentStore for PgCommentStore {
    async fn get_by_post_id(&self, post_id: i64) -> Result<Vec<CommentResponse>, AppError> {
        run_query(
            self.timeout,
            sqlx::query_as::<_, CommentResponse>(
                "SELECT c.id, c.post_id, c.user_id, u.username, c.content, c.created_at
                 FROM comments c
                 JOIN users u ON u.id = c.user_id
                 WHERE c.post_id = $1
                 ORDER BY c.created_at DESC",
            )
            .bind(post_id)
            .fetch_all(&self.pool),
        )
        .await
    }

    async fn create(&self, post_id: i64, user_id: i64, content: &str) -> Result<Comment, AppError> {
        run_query(
            self.timeout,
            sqlx::query_as::<_, Comment>(
                "INSERT INTO comments (post_id, user_id, content)
                 VALUES ($1, $2, $3)
                 RETURNING id, post_id, user_id, content, created_at",
            )
            .bind(post_id)
            .bind(user_id)
            .bind(content)
            .fetch_one(&self.pool),
        )
        .await
    }
}
