use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::post::{CreatePostRequest, UpdatePostRequest},
    store::{NewPost, PostUpdate, Storage},
};

use super::CURRENT_USER_ID;

/// Create a new post.
pub async fn create_post(
    State(storage): State<Storage>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let post = storage
        .posts
        .create(NewPost {
            user_id: CURRENT_USER_ID,
            title: payload.title,
            content: payload.content,
            tags: payload.tags,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Get a single post by ID.
pub async fn get_post(
    State(storage): State<Storage>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let post = storage.posts.get_by_id(id).await?;

    Ok(Json(post))
}

/// Update a post's title and content.
/// The payload carries the version the client read; a stale version is
/// rejected so a concurrent update is never silently overwritten.
pub async fn update_post(
    State(storage): State<Storage>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let post = storage
        .posts
        .update_by_id(
            id,
            PostUpdate {
                title: payload.title,
                content: payload.content,
                version: payload.version,
            },
        )
        .await?;

    Ok(Json(post))
}

/// Delete a post.
pub async fn delete_post(
    State(storage): State<Storage>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    storage.posts.delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
