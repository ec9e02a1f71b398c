use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Requested day does not parse as a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A vendor with orders in range has no commission rate for that range
    #[error("No commission rate for vendor {vendor}")]
    MissingCommissionRate { vendor: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// CSV parsing errors while bootstrapping the store
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem errors while bootstrapping the store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingCommissionRate { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Csv(_) => StatusCode::BAD_REQUEST,
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_date(input: impl Into<String>) -> Self {
        AppError::InvalidDate(input.into())
    }

    pub fn missing_rate(vendor_id: Option<i64>) -> Self {
        let vendor = match vendor_id {
            Some(id) => id.to_string(),
            None => "<none>".to_string(),
        };
        AppError::MissingCommissionRate { vendor }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// True when the error is the caller's fault (bad date) rather than a fault of the store
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, AppError::InvalidDate(_))
    }
}
