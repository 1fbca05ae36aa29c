use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Kinds of record a lookup can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Exercise,
    Routine,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::User => "User",
            Entity::Exercise => "Exercise",
            Entity::Routine => "Routine",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{entity} not found")]
    NotFound { entity: Entity },
    /// Raised when a request names a specific record, e.g. one exercise of a routine.
    #[error("{entity} {id} not found")]
    NotFoundById { entity: Entity, id: String },
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(entity: Entity) -> Self {
        Self::NotFound { entity }
    }

    pub fn not_found_by_id(entity: Entity, id: impl Into<String>) -> Self {
        Self::NotFoundById {
            entity,
            id: id.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } | ApiError::NotFoundById { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = match &self {
            ApiError::NotFound { .. } | ApiError::NotFoundById { .. } => "not_found",
            ApiError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                "internal_error"
            }
        };

        let body = Json(json!({
            "error": code,
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
