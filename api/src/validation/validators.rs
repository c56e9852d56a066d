//! Field validators for input validation
//!
//! Reusable validation functions for the field types the Person API
//! declares: bounded strings, bounded integers and email-shaped fields.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Syntactic email shape: local part, '@', domain with a dotted TLD
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
}

/// Validate that a string is not empty after trimming
pub fn validate_required(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field_name));
    }
    Ok(())
}

/// Validate string length within bounds (counted in chars, not bytes)
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        return Err(format!("must be at least {} characters", min));
    }
    if len > max {
        return Err(format!("must be at most {} characters", max));
    }
    Ok(())
}

/// Validate a minimum string length with no upper bound
pub fn validate_min_length(value: &str, min: usize) -> Result<(), String> {
    if value.chars().count() < min {
        return Err(format!("must be at least {} characters", min));
    }
    Ok(())
}

/// Validate an integer against an exclusive lower and inclusive upper bound
pub fn validate_int_range(value: i64, gt: i64, le: i64) -> Result<(), String> {
    if value <= gt {
        return Err(format!("must be greater than {}", gt));
    }
    if value > le {
        return Err(format!("must be at most {}", le));
    }
    Ok(())
}

/// Validate that an integer is strictly positive
pub fn validate_positive(value: i64) -> Result<(), String> {
    if value <= 0 {
        return Err("must be greater than 0".to_string());
    }
    Ok(())
}

/// Validate email shape
pub fn validate_email(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("email is required".to_string());
    }

    if !EMAIL_REGEX.is_match(trimmed) {
        return Err("must be a valid email address".to_string());
    }

    Ok(())
}
