use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'posts' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,

    /// Free-form tag set; order is not meaningful.
    pub tags: Vec<String>,

    /// Optimistic-concurrency counter. Incremented on every successful
    /// update; updates must present the version they read.
    pub version: i32,

    // Using chrono for proper time handling
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Derived, read-only projection returned by the feed query.
/// Never persisted: a post, its author's username and the comment count.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct FeedRecord {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub version: i32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Author display name, joined from users.
    pub username: String,

    /// Aggregated comment volume; 0 (not null) for posts with no comments.
    pub comments_count: i64,
}

/// DTO for creating a new post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Title length must be between 1 and 100 chars"
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 10000,
        message = "Content length must be between 1 and 10000 chars"
    ))]
    pub content: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for updating a post. The version must match the stored row or the
/// write is rejected (lost-update prevention).
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Title length must be between 1 and 100 chars"
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 10000,
        message = "Content length must be between 1 and 10000 chars"
    ))]
    pub content: String,

    pub version: i32,
}
