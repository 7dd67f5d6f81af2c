// src/store/posts.rs

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::post::{FeedRecord, Post};

use super::pagination::PaginationQuery;
use super::{NewPost, PostStore, PostUpdate, run_query};

const POST_COLUMNS: &str = "id, user_id, title, content, tags, version, created_at, updated_at";

pub struct PgPostStore {
    pool: PgPool,
    timeout: Duration,
}

impl PgPostStore {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let sql = format!(
            "INSERT INTO posts (user_id, title, content, tags)
             VALUES ($1, $2, $3, $4)
             RETURNING {POST_COLUMNS}"
        );

        run_query(
            self.timeout,
            sqlx::query_as::<_, Post>(&sql)
                .bind(new_post.user_id)
                .bind(&new_post.title)
                .bind(&new_post.content)
                .bind(&new_post.tags)
                .fetch_one(&self.pool),
        )
        .await
    }

    async fn get_by_id(&self, post_id: i64) -> Result<Post, AppError> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");

        run_query(
            self.timeout,
            sqlx::query_as::<_, Post>(&sql)
                .bind(post_id)
                .fetch_optional(&self.pool),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    async fn delete_by_id(&self, post_id: i64) -> Result<(), AppError> {
        let result = run_query(
            self.timeout,
            sqlx::query("DELETE FROM posts WHERE id = $1")
                .bind(post_id)
                .execute(&self.pool),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        Ok(())
    }

    /// Optimistic-concurrency update: the WHERE clause matches both id and
    /// the version the caller read. A concurrent writer that got there first
    /// bumped the version, so this statement touches no row and the stale
    /// write is rejected.
    async fn update_by_id(&self, post_id: i64, update: PostUpdate) -> Result<Post, AppError> {
        let sql = format!(
            "UPDATE posts
             SET title = $1, content = $2, version = version + 1, updated_at = NOW()
             WHERE id = $3 AND version = $4
             RETURNING {POST_COLUMNS}"
        );

        run_query(
            self.timeout,
            sqlx::query_as::<_, Post>(&sql)
                .bind(&update.title)
                .bind(&update.content)
                .bind(post_id)
                .bind(update.version)
                .fetch_optional(&self.pool),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found or version is stale".to_string()))
    }

    /// The feed aggregation. Single statement:
    /// - eligible authors = the viewer plus everyone the viewer follows
    ///   (subquery on the followers edge table),
    /// - comment counts come from one grouped LEFT JOIN, so zero-comment
    ///   posts stay in the result and there is no per-post query,
    /// - ORDER BY direction is drawn from the SortDirection enum, never from
    ///   caller text. Ties on created_at break on id for determinism.
    async fn get_user_feed(
        &self,
        viewer_id: i64,
        page: &PaginationQuery,
    ) -> Result<Vec<FeedRecord>, AppError> {
        let order = page.sort.as_sql();
        let sql = format!(
            "SELECT p.id, p.user_id, p.title, p.content, p.tags, p.version,
                    p.created_at, p.updated_at,
                    u.username,
                    COUNT(c.id) AS comments_count
             FROM posts p
             JOIN users u ON u.id = p.user_id
             LEFT JOIN comments c ON c.post_id = p.id
             WHERE p.user_id = $1
                OR p.user_id IN (SELECT f.user_id FROM followers f WHERE f.follower_id = $1)
             GROUP BY p.id, u.username
             ORDER BY p.created_at {order}, p.id {order}
             LIMIT $2 OFFSET $3"
        );

        run_query(
            self.timeout,
            sqlx::query_as::<_, FeedRecord>(&sql)
                .bind(viewer_id)
                .bind(page.limit)
                .bind(page.offset)
                .fetch_all(&self.pool),
        )
        .await
    }
}
