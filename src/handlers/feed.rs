use std::collections::HashMap;

use axum::{Json, extract::Query, extract::State, response::IntoResponse};

use crate::{error::AppError, store::Storage, store::pagination::PaginationQuery};

use super::CURRENT_USER_ID;

/// Get the aggregated feed for the current user: own posts plus posts of
/// every followed user, with comment counts, ordered and paginated.
pub async fn get_user_feed(
    State(storage): State<Storage>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    // Parse and validate before anything touches the query layer.
    let page = PaginationQuery::parse(&raw)?;
    page.validate_bounds()?;

    let feed = storage.posts.get_user_feed(CURRENT_USER_ID, &page).await?;

    Ok(Json(feed))
}
