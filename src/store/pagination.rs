// src/store/pagination.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Closed enumeration of feed sort directions. Only values of this enum ever
/// reach the ORDER BY clause, so caller text can never leak into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// SQL fragment for this direction, selected by enum value.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    fn parse(raw: &str) -> Result<Self, AppError> {
        match raw {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(AppError::BadRequest(format!(
                "sort must be 'asc' or 'desc', got '{}'",
                other
            ))),
        }
    }
}

/// Validated paging/sort parameters for the feed query.
/// Request-scoped; never persisted.
#[derive(Debug, Clone, Validate)]
pub struct PaginationQuery {
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    pub limit: i64,

    #[validate(range(min = 0, message = "offset must not be negative"))]
    pub offset: i64,

    pub sort: SortDirection,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
            sort: SortDirection::Desc,
        }
    }
}

impl PaginationQuery {
    /// Parses raw string query parameters, applying defaults for absent
    /// fields. A malformed numeric field is a client error, never a silent
    /// fallback to the default.
    pub fn parse(raw: &HashMap<String, String>) -> Result<Self, AppError> {
        let mut page = Self::default();

        if let Some(limit) = raw.get("limit") {
            page.limit = limit
                .parse()
                .map_err(|_| AppError::BadRequest(format!("limit is not an integer: '{}'", limit)))?;
        }

        if let Some(offset) = raw.get("offset") {
            page.offset = offset.parse().map_err(|_| {
                AppError::BadRequest(format!("offset is not an integer: '{}'", offset))
            })?;
        }

        if let Some(sort) = raw.get("sort") {
            if !sort.is_empty() {
                page.sort = SortDirection::parse(sort)?;
            }
        }

        Ok(page)
    }

    /// Range validation, always run before the query layer sees the values.
    pub fn validate_bounds(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}
