//! Validation implementations for API request types
//!
//! This module implements the `Validatable` trait for every request shape
//! the routes declare, binding each field to its constraints.

use shared::models::{ContactForm, Location, LoginForm, Person, PersonDetailQuery, UpdatePersonRequest};

use super::extractors::{FieldError, Validatable, ValidationBuilder};
use super::sanitizers::{sanitize_name, trim, trim_optional};
use super::validators::{
    validate_email, validate_int_range, validate_length, validate_min_length, validate_required,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants for validation rules
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum length for person names
const MIN_NAME_LENGTH: usize = 1;
/// Maximum length for person names
const MAX_NAME_LENGTH: usize = 50;
/// Maximum length for a city
const MAX_CITY_LENGTH: usize = 58;
/// Maximum length for a state
const MAX_STATE_LENGTH: usize = 50;
/// Maximum length for a country
const MAX_COUNTRY_LENGTH: usize = 21;
/// Exclusive lower bound for age
const MIN_AGE_EXCLUSIVE: i64 = 0;
/// Inclusive upper bound for age
const MAX_AGE: i64 = 115;
/// Minimum length for a person password
const MIN_PASSWORD_LENGTH: usize = 8;
/// Maximum length for a login username
const MAX_USERNAME_LENGTH: usize = 20;
/// Maximum length for contact first/last names
const MAX_CONTACT_NAME_LENGTH: usize = 20;
/// Minimum length for a contact message
const MIN_MESSAGE_LENGTH: usize = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Person validation
// ─────────────────────────────────────────────────────────────────────────────

impl Validatable for Person {
    fn sanitize(&mut self) {
        self.base.first_name = sanitize_name(&self.base.first_name);
        self.base.last_name = sanitize_name(&self.base.last_name);
        // Passwords are kept verbatim; whitespace may be intentional.
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        builder.check("first_name", || {
            if self.base.first_name.is_empty() {
                return Err("first_name is required".to_string());
            }
            validate_length(&self.base.first_name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)
        });

        builder.check("last_name", || {
            if self.base.last_name.is_empty() {
                return Err("last_name is required".to_string());
            }
            validate_length(&self.base.last_name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)
        });

        builder.check("age", || {
            validate_int_range(self.base.age, MIN_AGE_EXCLUSIVE, MAX_AGE)
        });

        // hair_color and is_married are optional; serde already rejects
        // values outside the enum.

        builder.check("password", || {
            validate_min_length(&self.password, MIN_PASSWORD_LENGTH)
        });

        builder.build()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Location validation
// ─────────────────────────────────────────────────────────────────────────────

impl Validatable for Location {
    fn sanitize(&mut self) {
        self.city = sanitize_name(&self.city);
        self.state = sanitize_name(&self.state);
        self.country = sanitize_name(&self.country);
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        builder.check("city", || {
            if self.city.is_empty() {
                return Err("city is required".to_string());
            }
            validate_length(&self.city, 1, MAX_CITY_LENGTH)
        });

        builder.check("state", || {
            if self.state.is_empty() {
                return Err("state is required".to_string());
            }
            validate_length(&self.state, 1, MAX_STATE_LENGTH)
        });

        builder.check("country", || {
            if self.country.is_empty() {
                return Err("country is required".to_string());
            }
            validate_length(&self.country, 1, MAX_COUNTRY_LENGTH)
        });

        builder.build()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UpdatePersonRequest validation (person + location, errors prefixed)
// ─────────────────────────────────────────────────────────────────────────────

impl Validatable for UpdatePersonRequest {
    fn sanitize(&mut self) {
        self.person.sanitize();
        self.location.sanitize();
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Err(person_errors) = self.person.validate() {
            errors.extend(
                person_errors
                    .into_iter()
                    .map(|e| FieldError::new(format!("person.{}", e.field), e.message)),
            );
        }

        if let Err(location_errors) = self.location.validate() {
            errors.extend(
                location_errors
                    .into_iter()
                    .map(|e| FieldError::new(format!("location.{}", e.field), e.message)),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PersonDetailQuery validation
// ─────────────────────────────────────────────────────────────────────────────

impl Validatable for PersonDetailQuery {
    fn sanitize(&mut self) {
        trim_optional(&mut self.name);
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        // name is optional; bounded only when present. age carries no range
        // on this route, requiredness is enforced by deserialization.
        if let Some(ref name) = self.name {
            builder.check("name", || {
                validate_length(name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)
            });
        }

        builder.build()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LoginForm validation
// ─────────────────────────────────────────────────────────────────────────────

impl Validatable for LoginForm {
    fn sanitize(&mut self) {
        self.username = trim(&self.username);
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        builder.check("username", || {
            if self.username.is_empty() {
                return Err("username is required".to_string());
            }
            validate_length(&self.username, 1, MAX_USERNAME_LENGTH)
        });

        builder.check("password", || {
            validate_required(&self.password, "password")
        });

        builder.build()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ContactForm validation
// ─────────────────────────────────────────────────────────────────────────────

impl Validatable for ContactForm {
    fn sanitize(&mut self) {
        self.first_name = sanitize_name(&self.first_name);
        self.last_name = sanitize_name(&self.last_name);
        self.email = trim(&self.email);
        self.message = trim(&self.message);
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        builder.check("first_name", || {
            if self.first_name.is_empty() {
                return Err("first_name is required".to_string());
            }
            validate_length(&self.first_name, 1, MAX_CONTACT_NAME_LENGTH)
        });

        builder.check("last_name", || {
            if self.last_name.is_empty() {
                return Err("last_name is required".to_string());
            }
            validate_length(&self.last_name, 1, MAX_CONTACT_NAME_LENGTH)
        });

        builder.check("email", || validate_email(&self.email));

        builder.check("message", || {
            validate_min_length(&self.message, MIN_MESSAGE_LENGTH)
        });

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{HairColor, PersonBase};

    fn valid_person() -> Person {
        Person {
            base: PersonBase {
                first_name: "Juan".to_string(),
                last_name: "Di Pasquo".to_string(),
                age: 21,
                hair_color: Some(HairColor::Brown),
                is_married: Some(false),
            },
            password: "super-secret".to_string(),
        }
    }

    fn valid_location() -> Location {
        Location {
            city: "La Plata".to_string(),
            state: "Buenos Aires".to_string(),
            country: "Argentina".to_string(),
        }
    }

    #[test]
    fn test_person_valid() {
        assert!(valid_person().validate().is_ok());
    }

    #[test]
    fn test_person_age_bounds() {
        let mut person = valid_person();
        person.base.age = 115;
        assert!(person.validate().is_ok());

        person.base.age = 0;
        let errors = person.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "age"));

        person.base.age = 116;
        let errors = person.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "age"));

        person.base.age = -3;
        let errors = person.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "age"));
    }

    #[test]
    fn test_person_short_password() {
        let mut person = valid_person();
        person.password = "1234567".to_string();

        let errors = person.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "password"));
    }

    #[test]
    fn test_person_empty_first_name() {
        let mut person = valid_person();
        person.base.first_name = "".to_string();

        let errors = person.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "first_name"));
    }

    #[test]
    fn test_person_name_too_long() {
        let mut person = valid_person();
        person.base.last_name = "x".repeat(51);

        let errors = person.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "last_name"));
    }

    #[test]
    fn test_person_sanitization_trims_names() {
        let mut person = valid_person();
        person.base.first_name = "  Juan  ".to_string();
        person.password = "  spaced-pass  ".to_string();

        person.sanitize();

        assert_eq!(person.base.first_name, "Juan");
        // password left verbatim
        assert_eq!(person.password, "  spaced-pass  ");
    }

    #[test]
    fn test_location_bounds() {
        assert!(valid_location().validate().is_ok());

        let mut location = valid_location();
        location.city = "x".repeat(59);
        let errors = location.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "city"));

        let mut location = valid_location();
        location.country = "x".repeat(22);
        let errors = location.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "country"));

        let mut location = valid_location();
        location.state = "".to_string();
        let errors = location.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "state"));
    }

    #[test]
    fn test_update_request_prefixes_fields() {
        let mut person = valid_person();
        person.base.age = 0;
        let mut location = valid_location();
        location.city = "".to_string();

        let request = UpdatePersonRequest { person, location };
        let errors = request.validate().unwrap_err();

        assert!(errors.iter().any(|e| e.field == "person.age"));
        assert!(errors.iter().any(|e| e.field == "location.city"));
    }

    #[test]
    fn test_detail_query_name_bounds() {
        let query = PersonDetailQuery {
            name: Some("Rocio".to_string()),
            age: 25,
        };
        assert!(query.validate().is_ok());

        let query = PersonDetailQuery {
            name: Some("x".repeat(51)),
            age: 25,
        };
        let errors = query.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "name"));

        let query = PersonDetailQuery {
            name: None,
            age: 25,
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_detail_query_blank_name_becomes_none() {
        let mut query = PersonDetailQuery {
            name: Some("   ".to_string()),
            age: 25,
        };
        query.sanitize();
        assert_eq!(query.name, None);
    }

    #[test]
    fn test_login_form() {
        let form = LoginForm {
            username: "Miguel2021".to_string(),
            password: "changeme123".to_string(),
        };
        assert!(form.validate().is_ok());

        let form = LoginForm {
            username: "x".repeat(21),
            password: "changeme123".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "username"));

        let form = LoginForm {
            username: "Miguel2021".to_string(),
            password: "".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "password"));
    }

    #[test]
    fn test_contact_form() {
        let form = ContactForm {
            first_name: "Miguel".to_string(),
            last_name: "Lopez".to_string(),
            email: "miguel@example.com".to_string(),
            message: "I would like to know more about the API.".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_contact_form_invalid_email() {
        let form = ContactForm {
            first_name: "Miguel".to_string(),
            last_name: "Lopez".to_string(),
            email: "not-an-email".to_string(),
            message: "I would like to know more about the API.".to_string(),
        };

        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "email"));
    }

    #[test]
    fn test_contact_form_short_message() {
        let form = ContactForm {
            first_name: "Miguel".to_string(),
            last_name: "Lopez".to_string(),
            email: "miguel@example.com".to_string(),
            message: "too short".to_string(),
        };

        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "message"));
    }
}
