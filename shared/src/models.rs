use serde::{Deserialize, Serialize};

/// Hair colors a person record may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    Black,
    Blonde,
    Brown,
    Red,
    White,
}

impl std::fmt::Display for HairColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HairColor::Black => write!(f, "black"),
            HairColor::Blonde => write!(f, "blonde"),
            HairColor::Brown => write!(f, "brown"),
            HairColor::Red => write!(f, "red"),
            HairColor::White => write!(f, "white"),
        }
    }
}

/// Where a person lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Fields shared by every person representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonBase {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    #[serde(default)]
    pub hair_color: Option<HairColor>,
    #[serde(default)]
    pub is_married: Option<bool>,
}

/// Inbound person payload. The only shape that carries a password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    #[serde(flatten)]
    pub base: PersonBase,
    pub password: String,
}

/// Outbound person projection. Never carries a password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonOut {
    #[serde(flatten)]
    pub base: PersonBase,
}

impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        Self { base: person.base }
    }
}

/// Message returned on every successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login Successful";

/// Login response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOut {
    pub username: String,
    pub message: String,
}

impl LoginOut {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Body of PUT /person/:person_id — a person together with their location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePersonRequest {
    pub person: Person,
    pub location: Location,
}

/// Query parameters of GET /person/detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDetailQuery {
    #[serde(default)]
    pub name: Option<String>,
    pub age: i64,
}

/// Form fields of POST /login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Form fields of POST /contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_person() -> Person {
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

    #[test]
    fn test_person_out_drops_password() {
        let out = PersonOut::from(sample_person());
        let value = serde_json::to_value(&out).unwrap();

        let object = value.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert_eq!(object["first_name"], "Juan");
        assert_eq!(object["age"], 21);
    }

    #[test]
    fn test_person_deserializes_flat_payload() {
        let person: Person = serde_json::from_str(
            r#"{
                "first_name": "Juan",
                "last_name": "Di Pasquo",
                "age": 21,
                "hair_color": "brown",
                "password": "super-secret"
            }"#,
        )
        .unwrap();

        assert_eq!(person.base.first_name, "Juan");
        assert_eq!(person.base.hair_color, Some(HairColor::Brown));
        assert_eq!(person.base.is_married, None);
        assert_eq!(person.password, "super-secret");
    }

    #[test]
    fn test_hair_color_rejects_unknown_variant() {
        let result = serde_json::from_str::<HairColor>("\"purple\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_hair_color_round_trips_lowercase() {
        for (color, literal) in [
            (HairColor::Black, "\"black\""),
            (HairColor::Blonde, "\"blonde\""),
            (HairColor::Brown, "\"brown\""),
            (HairColor::Red, "\"red\""),
            (HairColor::White, "\"white\""),
        ] {
            assert_eq!(serde_json::to_string(&color).unwrap(), literal);
            assert_eq!(color.to_string(), literal.trim_matches('"'));
        }
    }

    #[test]
    fn test_login_out_defaults_message() {
        let out = LoginOut::new("Miguel2021");
        assert_eq!(out.username, "Miguel2021");
        assert_eq!(out.message, "Login Successful");
    }
}
