//! Error kinds surfaced by the checklist stores.

use axum::http::StatusCode;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChecklistError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
}

impl ChecklistError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChecklistError::Validation(_) => StatusCode::BAD_REQUEST,
            ChecklistError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

pub type ChecklistResult<T> = Result<T, ChecklistError>;
