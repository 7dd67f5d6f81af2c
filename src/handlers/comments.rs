use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{error::AppError, models::comment::CreateCommentRequest, store::Storage};

use super::CURRENT_USER_ID;

/// List all comments for a post, newest first, with author usernames.
pub async fn list_comments(
    State(storage): State<Storage>,
    Path(post_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    // 404 for a missing post rather than an empty list.
    storage.posts.get_by_id(post_id).await?;

    let comments = storage.comments.get_by_post_id(post_id).await?;

    Ok(Json(comments))
}

/// Create a new comment on a post.
pub async fn create_comment(
    State(storage): State<Storage>,
    Path(post_id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    storage.posts.get_by_id(post_id).await?;

    let comment = storage
        .comments
        .create(post_id, CURRENT_USER_ID, &payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}
