use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::repo::StoreError;

/// `{"message": "..."}` body shared by every non-list response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Endpoint a storage failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Registration,
    Verification,
    RecordHistory,
    GetHistory,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Registration => "during registration",
            Operation::Verification => "during verification",
            Operation::RecordHistory => "while recording game history",
            Operation::GetHistory => "while getting game history",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Username and password are required")]
    Validation,
    #[error("Username already exists")]
    DuplicateUser,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Database error occurred {op}")]
    Storage {
        op: Operation,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    pub fn storage(op: Operation) -> impl FnOnce(StoreError) -> Self {
        move |source| ServiceError::Storage { op, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation => StatusCode::BAD_REQUEST,
            ServiceError::DuplicateUser => StatusCode::CONFLICT,
            ServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ServiceError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ServiceError::Storage { op, source } => {
                error!(operation = ?op, error = %source, "storage failure");
            }
            other => warn!(%status, reason = %other, "request rejected"),
        }
        // Display never includes the source, so driver detail stays in the logs.
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
