// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    #[error("Engine reference {0} does not resolve to a document")]
    DanglingReference(String),

    #[error("{code}: {message}")]
    IdentityProvider { code: String, message: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not signed in")]
    Unauthorized,

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl AppError {
    /// Status code and short title shown for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::MongoDB(_) => (StatusCode::BAD_GATEWAY, "Database error"),
            AppError::DanglingReference(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Broken engine reference")
            }
            AppError::IdentityProvider { .. } => (StatusCode::BAD_GATEWAY, "Identity provider error"),
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "Validation failed"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized access"),
            AppError::ConfigurationError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error")
            }
            AppError::Session(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Session error"),
            AppError::Template(_) | AppError::Render(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error")
            }
        }
    }
}

// Plain-text fallback for when the error page itself cannot be rendered
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status();
        tracing::error!("❌ {} ({}): {}", error_message, status, self);
        (status, format!("{}: {}", error_message, self)).into_response()
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::IdentityProvider {
            code: "auth/network-request-failed".to_string(),
            message: err.to_string(),
        }
    }
}

// Helper conversion functions
impl AppError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::ConfigurationError(msg.into())
    }

    pub fn identity(code: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::IdentityProvider {
            code: code.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
