use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True when the caller sent bad input and retrying unchanged won't help.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::MissingFields(_) | AppError::InvalidBody(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::MissingFields(_) => ErrorCode::MissingFields,
            AppError::InvalidBody(_) => ErrorCode::InvalidBody,
            AppError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    MissingFields,
    InvalidBody,
    StoreUnavailable,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingFields => "MISSING_FIELDS",
            ErrorCode::InvalidBody => "INVALID_BODY",
            ErrorCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
