// src/store/users.rs

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::user::User;

use super::{NewUser, UserStore, run_query};

pub struct PgUserStore {
    pool: PgPool,
    timeout: Duration,
}

impl PgUserStore {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        run_query(
            self.timeout,
            sqlx::query_as::<_, User>(
                "INSERT INTO users (username, email, password)
                 VALUES ($1, $2, $3)
                 RETURNING id, username, email, password, created_at",
            )
            .bind(&new_user.username)
            .bind(&new_user.email)
            .bind(&new_user.password)
            .fetch_one(&self.pool),
        )
        .await
        .map_err(|e| match e {
            AppError::Conflict(_) => AppError::Conflict(format!(
                "Username '{}' or email already exists",
                new_user.username
            )),
            other => other,
        })
    }

    async fn get_by_id(&self, user_id: i64) -> Result<User, AppError> {
        run_query(
            self.timeout,
            sqlx::query_as::<_, User>(
                "SELECT id, username, email, password, created_at FROM users WHERE id = $1",
            )
            .bind(user_id)
            .fetch_optional(&self.pool),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
