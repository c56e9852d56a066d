//! Input Validation Module
//!
//! This module is the request schema validator for the Person API: every
//! declared parameter source (JSON body, query string, form field) runs
//! through it before a handler sees the data.
//!
//! # Overview
//!
//! 1. **Extractors** - `ValidatedJson<T>`, `ValidatedForm<T>` and
//!    `ValidatedQuery<T>`, drop-in replacements for the axum extractors
//! 2. **Validators** - reusable checks for bounded strings, bounded
//!    integers and email-shaped fields
//! 3. **Sanitizers** - whitespace/control-character cleanup applied before
//!    validation
//!
//! # Usage
//!
//! ```ignore
//! use crate::validation::ValidatedJson;
//!
//! // Person implements Validatable in `requests`, so the extractor
//! // sanitizes and validates before the handler body runs.
//! pub async fn create_person(
//!     ValidatedJson(person): ValidatedJson<Person>,
//! ) -> impl IntoResponse {
//!     // person is sanitized and validated
//! }
//! ```
//!
//! # Validation Error Response
//!
//! When validation fails, a 422 Unprocessable Entity is returned:
//!
//! ```json
//! {
//!   "error": "ValidationError",
//!   "message": "Validation failed for 2 fields",
//!   "errors": [
//!     {"field": "age", "message": "must be greater than 0"},
//!     {"field": "first_name", "message": "must be at most 50 characters"}
//!   ],
//!   "code": 422,
//!   "timestamp": "2026-08-04T10:30:00Z",
//!   "correlation_id": "uuid-here"
//! }
//! ```

pub mod extractors;
pub mod requests;
pub mod sanitizers;
pub mod validators;

// Re-export commonly used items
pub use extractors::{
    FieldError, Validatable, ValidatedForm, ValidatedJson, ValidatedQuery, ValidationBuilder,
    ValidationError,
};
pub use sanitizers::{normalize_whitespace, remove_control_chars, sanitize_name, trim, trim_optional};
pub use validators::{
    validate_email, validate_int_range, validate_length, validate_min_length, validate_positive,
    validate_required,
};
