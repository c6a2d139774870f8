//! Validation errors for form submissions.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Reasons a submission is rejected before guidance is requested.
///
/// The `Display` text is shown to the user verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter valid numbers for all fields.")]
    InvalidNumber,

    #[error("Please select a gender.")]
    MissingGender,

    #[error("Please enter an age between 10 and 19.")]
    AgeOutOfRange,

    #[error("Height and weight must be positive numbers.")]
    NonPositiveMeasurement,

    #[error("Please enter a realistic height and weight.")]
    ImplausibleMeasurement,
}

impl FormError {
    pub fn status(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON rendering of a rejection: `{"error": "<message>"}` with 422.
impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for form validation.
pub type FormResult<T> = Result<T, FormError>;
