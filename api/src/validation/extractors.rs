//! Custom Axum extractors for validated input
//!
//! `ValidatedJson<T>`, `ValidatedForm<T>` and `ValidatedQuery<T>` are
//! drop-in replacements for `Json<T>`, `Form<T>` and `Query<T>` that
//! sanitize and validate the decoded value before the handler runs.

use axum::{
    async_trait,
    extract::{
        rejection::{FormRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::{request::Parts, StatusCode},
    Form, Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A field-level validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation error response body
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub message: String,
    pub errors: Vec<FieldError>,
    pub code: u16,
    pub timestamp: String,
    pub correlation_id: String,
}

impl ValidationErrorResponse {
    pub fn new(errors: Vec<FieldError>) -> Self {
        let error_summary = if errors.len() == 1 {
            format!("Validation failed for field '{}'", errors[0].field)
        } else {
            format!("Validation failed for {} fields", errors.len())
        };

        Self {
            error: "ValidationError".to_string(),
            message: error_summary,
            errors,
            code: StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            correlation_id: Uuid::new_v4().to_string(),
        }
    }
}

/// Validation error that converts to an HTTP response
#[derive(Debug)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }
}

impl axum::response::IntoResponse for ValidationError {
    fn into_response(self) -> axum::response::Response {
        let response = ValidationErrorResponse::new(self.errors);
        (StatusCode::UNPROCESSABLE_ENTITY, Json(response)).into_response()
    }
}

/// Trait for types that can be validated and sanitized
///
/// Implement this trait for request types to enable automatic validation
/// when using the `Validated*` extractors.
pub trait Validatable: Sized {
    /// Sanitize the data in-place (trim whitespace, drop control chars)
    fn sanitize(&mut self);

    /// Validate the data and return any field errors
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// JSON body extractor that validates and sanitizes input
///
/// Use this instead of `Json<T>` to automatically:
/// 1. Parse JSON from the request body
/// 2. Sanitize string fields
/// 3. Validate fields against the declared constraints
/// 4. Return a detailed 422 error for validation failures
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validatable + Send,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(mut data) = Json::<T>::from_request(req, state).await.map_err(|err| {
            // Convert JSON parsing errors to validation errors
            let message = match err {
                axum::extract::rejection::JsonRejection::JsonDataError(e) => {
                    format!("Invalid JSON data: {}", e.body_text())
                }
                axum::extract::rejection::JsonRejection::JsonSyntaxError(e) => {
                    format!("JSON syntax error: {}", e.body_text())
                }
                axum::extract::rejection::JsonRejection::MissingJsonContentType(_) => {
                    "Content-Type must be application/json".to_string()
                }
                axum::extract::rejection::JsonRejection::BytesRejection(_) => {
                    "Failed to read request body".to_string()
                }
                _ => "Invalid JSON payload".to_string(),
            };
            ValidationError::single("body", message)
        })?;

        data.sanitize();
        data.validate().map_err(ValidationError::new)?;

        Ok(ValidatedJson(data))
    }
}

/// URL-encoded form extractor that validates and sanitizes input
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validatable + Send,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(mut data) = Form::<T>::from_request(req, state)
            .await
            .map_err(map_form_rejection)?;

        data.sanitize();
        data.validate().map_err(ValidationError::new)?;

        Ok(ValidatedForm(data))
    }
}

/// Query string extractor that validates and sanitizes input
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validatable + Send,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(mut data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(map_query_rejection)?;

        data.sanitize();
        data.validate().map_err(ValidationError::new)?;

        Ok(ValidatedQuery(data))
    }
}

fn map_form_rejection(err: FormRejection) -> ValidationError {
    let message = match err {
        FormRejection::InvalidFormContentType(_) => {
            "Content-Type must be application/x-www-form-urlencoded".to_string()
        }
        FormRejection::FailedToDeserializeForm(e) => {
            format!("Invalid form data: {}", e.body_text())
        }
        FormRejection::FailedToDeserializeFormBody(e) => {
            format!("Invalid form data: {}", e.body_text())
        }
        FormRejection::BytesRejection(_) => "Failed to read request body".to_string(),
        _ => "Invalid form payload".to_string(),
    };
    ValidationError::single("body", message)
}

fn map_query_rejection(err: QueryRejection) -> ValidationError {
    ValidationError::single(
        "query",
        format!("Invalid query parameters: {}", err.body_text()),
    )
}

// Implement Deref for ergonomic access
impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::Deref for ValidatedForm<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Builder for accumulating validation errors
#[derive(Debug, Default)]
pub struct ValidationBuilder {
    errors: Vec<FieldError>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self { errors: vec![] }
    }

    /// Add an error if the result is Err
    pub fn check<F>(&mut self, field: &str, validator: F) -> &mut Self
    where
        F: FnOnce() -> Result<(), String>,
    {
        if let Err(message) = validator() {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    /// Add an error directly
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.errors.push(FieldError::new(field, message));
        self
    }

    /// Finish building and return Result
    pub fn build(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error() {
        let error = FieldError::new("age", "must be greater than 0");
        assert_eq!(error.field, "age");
        assert_eq!(error.message, "must be greater than 0");
    }

    #[test]
    fn test_validation_builder() {
        let mut builder = ValidationBuilder::new();

        builder
            .check("first_name", || Err("is required".to_string()))
            .check("last_name", || Ok(()))
            .add_error("age", "must be greater than 0");

        assert!(builder.has_errors());

        let errors = builder.build().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "first_name");
        assert_eq!(errors[1].field, "age");
    }

    #[test]
    fn test_validation_error_response() {
        let errors = vec![
            FieldError::new("age", "must be at most 115"),
            FieldError::new("password", "must be at least 8 characters"),
        ];

        let response = ValidationErrorResponse::new(errors);

        assert_eq!(response.error, "ValidationError");
        assert_eq!(response.code, 422);
        assert_eq!(response.errors.len(), 2);
        assert!(response.message.contains("2 fields"));
    }

    #[test]
    fn test_single_error_response() {
        let errors = vec![FieldError::new("email", "must be a valid email address")];
        let response = ValidationErrorResponse::new(errors);

        assert!(response.message.contains("field 'email'"));
    }
}
