use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{CreateUserRequest, FollowRequest},
    store::{NewUser, Storage},
    utils::hash::hash_password,
};

/// Registers a new user.
///
/// Hashes the password using Argon2 before storing it.
/// Returns 201 Created and the user object (excluding password).
pub async fn create_user(
    State(storage): State<Storage>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let hashed_password = hash_password(&payload.password)?;

    let user = storage
        .users
        .create(NewUser {
            username: payload.username,
            email: payload.email,
            password: hashed_password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a single user by ID.
pub async fn get_user(
    State(storage): State<Storage>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = storage.users.get_by_id(id).await?;

    Ok(Json(user))
}

/// Follow the user identified by the path.
/// The target is resolved first so a missing user is a 404 before the edge
/// table is touched; a duplicate edge is a 409.
pub async fn follow_user(
    State(storage): State<Storage>,
    Path(id): Path<i64>,
    // TODO: take the follower from the session once auth is added
    Json(payload): Json<FollowRequest>,
) -> Result<impl IntoResponse, AppError> {
    let followed = storage.users.get_by_id(id).await?;

    storage.followers.follow(followed.id, payload.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Unfollow the user identified by the path. Idempotent: unfollowing a user
/// who was never followed still succeeds.
pub async fn unfollow_user(
    State(storage): State<Storage>,
    Path(id): Path<i64>,
    Json(payload): Json<FollowRequest>,
) -> Result<impl IntoResponse, AppError> {
    let unfollowed = storage.users.get_by_id(id).await?;

    storage
        .followers
        .unfollow(unfollowed.id, payload.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
