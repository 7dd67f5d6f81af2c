// src/store/mod.rs
//
// Storage layer: one trait per entity with a Postgres implementation each.
// Handlers depend on the traits, so tests can substitute in-memory fakes.

pub mod comments;
pub mod followers;
pub mod pagination;
pub mod posts;
pub mod users;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::comment::{Comment, CommentResponse};
use crate::models::post::{FeedRecord, Post};
use crate::models::user::User;
use pagination::PaginationQuery;

pub use comments::PgCommentStore;
pub use followers::PgFollowerStore;
pub use posts::PgPostStore;
pub use users::PgUserStore;

/// Fields of a post to be inserted.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Fields of a post update. `version` is the version the caller read;
/// a mismatch with the stored row rejects the write.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    pub version: i32,
}

/// Fields of a user to be inserted. `password` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;
    async fn get_by_id(&self, post_id: i64) -> Result<Post, AppError>;
    async fn delete_by_id(&self, post_id: i64) -> Result<(), AppError>;
    async fn update_by_id(&self, post_id: i64, update: PostUpdate) -> Result<Post, AppError>;

    /// The feed aggregation: posts authored by the viewer or anyone the
    /// viewer follows, with author username and comment count, ordered and
    /// paginated per the (already validated) pagination parameters.
    async fn get_user_feed(
        &self,
        viewer_id: i64,
        page: &PaginationQuery,
    ) -> Result<Vec<FeedRecord>, AppError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;
    async fn get_by_id(&self, user_id: i64) -> Result<User, AppError>;
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn get_by_post_id(&self, post_id: i64) -> Result<Vec<CommentResponse>, AppError>;
    async fn create(&self, post_id: i64, user_id: i64, content: &str) -> Result<Comment, AppError>;
}

#[async_trait]
pub trait FollowerStore: Send + Sync {
    /// Records the directed edge "follower_id follows followed_id".
    /// A duplicate edge is a Conflict.
    async fn follow(&self, followed_id: i64, follower_id: i64) -> Result<(), AppError>;

    /// Removes the edge if present. Removing a missing edge is not an error.
    async fn unfollow(&self, followed_id: i64, follower_id: i64) -> Result<(), AppError>;
}

/// Bundle of storage handles injected into the router state.
#[derive(Clone)]
pub struct Storage {
    pub posts: Arc<dyn PostStore>,
    pub users: Arc<dyn UserStore>,
    pub comments: Arc<dyn CommentStore>,
    pub followers: Arc<dyn FollowerStore>,
}

impl Storage {
    /// Wires every store to the same Postgres pool. `query_timeout` bounds
    /// each individual storage call.
    pub fn postgres(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            posts: Arc::new(PgPostStore::new(pool.clone(), query_timeout)),
            users: Arc::new(PgUserStore::new(pool.clone(), query_timeout)),
            comments: Arc::new(PgCommentStore::new(pool.clone(), query_timeout)),
            followers: Arc::new(PgFollowerStore::new(pool, query_timeout)),
        }
    }
}

/// Runs a single sqlx future under the configured timeout.
/// An elapsed timeout surfaces as a Storage error, not a panic.
pub(crate) async fn run_query<T, F>(limit: Duration, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(AppError::from),
        Err(_) => Err(AppError::Storage(format!(
            "query exceeded the {}s timeout",
            limit.as_secs()
        ))),
    }
}
