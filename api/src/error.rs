//! Unified error types for the LoanPlan API
//!
//! This module defines error types for each layer:
//! - `CalculationError`: Amortization engine and quote failures
//! - `DomainError`: Core business logic and plan store errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while turning loan parameters into a payment figure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Non-positive principal, negative rate or non-positive term
    #[error("Unsupported loan parameters: {0}")]
    InvalidInput(String),

    #[error("Monthly payment is not a finite positive number")]
    NonFinitePayment,

    /// The caller-side payment check failed, nothing was computed
    #[error("Cannot calculate a payment schedule for these inputs")]
    CannotCalculate,
}

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    /// No plan store is configured or reachable
    #[error("Plan storage unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Calculation(#[from] CalculationError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Unavailable(msg)) => {
                tracing::warn!("Plan storage unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Plan storage unavailable",
                    None,
                )
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Calculation(e) => {
                tracing::debug!(error = %e, "Calculation rejected");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Calculation failed",
                    Some(
                        "The loan could not be calculated. Please check the values and try again."
                            .to_string(),
                    ),
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
