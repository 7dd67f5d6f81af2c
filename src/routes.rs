// src/routes.rs

use axum::{
    Json, Router,
    http::Method,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{comments, feed, posts, users},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the user, feed and post sub-routers under /v1.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (storage handles + config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let user_routes = Router::new()
        .route("/", post(users::create_user))
        .route("/feed", get(feed::get_user_feed))
        .route("/{id}", get(users::get_user))
        .route("/{id}/follow", put(users::follow_user))
        .route("/{id}/unfollow", put(users::unfollow_user));

    let post_routes = Router::new()
        .route("/", post(posts::create_post))
        .route(
            "/{id}",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        );

    Router::new()
        .route("/v1/health", get(health))
        .nest("/v1/users", user_routes)
        .nest("/v1/posts", post_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
