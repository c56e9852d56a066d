use axum::{
    extract::{rejection::PathRejection, Multipart, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use shared::{
    directory, ContactForm, LoginForm, LoginOut, Person, PersonDetailQuery, PersonOut,
    UpdatePersonRequest,
};

use crate::{
    error::ApiError,
    state::AppState,
    validation::{
        validators::validate_positive, ValidatedForm, ValidatedJson, ValidatedQuery,
        ValidationError,
    },
};

fn map_path_rejection(err: PathRejection) -> ValidationError {
    ValidationError::single(
        "person_id",
        format!("Invalid path parameter: {}", err.body_text()),
    )
}

/// Serialize a record and take its fields as a JSON object.
fn json_fields<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Home of the app; returns a fixed greeting to confirm the service responds.
pub async fn home() -> Json<Value> {
    Json(json!({"Hello": "World"}))
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let uptime = state.started_at.elapsed().as_secs();
    tracing::info!(uptime_secs = uptime, "health check passed");

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": "0.1.0",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "uptime_secs": uptime
        })),
    )
}

/// Create a person and echo it back projected to `PersonOut`.
///
/// The inbound payload carries a password; the response never does.
pub async fn create_person(
    ValidatedJson(person): ValidatedJson<Person>,
) -> (StatusCode, Json<PersonOut>) {
    tracing::info!(first_name = %person.base.first_name, "person created");
    (StatusCode::CREATED, Json(PersonOut::from(person)))
}

/// Show person details from query parameters as a `{name: age}` mapping.
///
/// An absent name keys the reply with the literal `"null"`.
pub async fn show_person_detail(
    ValidatedQuery(params): ValidatedQuery<PersonDetailQuery>,
) -> Json<Value> {
    let key = params.name.unwrap_or_else(|| "null".to_string());

    let mut body = Map::new();
    body.insert(key, json!(params.age));
    Json(Value::Object(body))
}

/// Validate that a person id exists in the membership set.
pub async fn show_person_by_id(person_id: Result<Path<i64>, PathRejection>) -> Response {
    let Path(person_id) = match person_id {
        Ok(path) => path,
        Err(err) => return map_path_rejection(err).into_response(),
    };

    if let Err(message) = validate_positive(person_id) {
        return ValidationError::single("person_id", message).into_response();
    }

    if let Err(err) = directory::find_person(person_id) {
        tracing::warn!(person_id, "person lookup failed");
        return ApiError::not_found("PersonNotFound", err.to_string()).into_response();
    }

    let mut body = Map::new();
    body.insert(person_id.to_string(), json!("It exists!"));
    (StatusCode::ACCEPTED, Json(Value::Object(body))).into_response()
}

/// Update a person: merge the person fields (password stripped) with the
/// location fields into a single object.
pub async fn update_person(
    person_id: Result<Path<i64>, PathRejection>,
    ValidatedJson(request): ValidatedJson<UpdatePersonRequest>,
) -> Response {
    let Path(person_id) = match person_id {
        Ok(path) => path,
        Err(err) => return map_path_rejection(err).into_response(),
    };

    if let Err(message) = validate_positive(person_id) {
        return ValidationError::single("person_id", message).into_response();
    }

    let UpdatePersonRequest { person, location } = request;
    tracing::info!(person_id, "person updated");

    let mut merged = json_fields(&PersonOut::from(person));
    merged.extend(json_fields(&location));

    (StatusCode::CREATED, Json(Value::Object(merged))).into_response()
}

/// Log a person in and reply with the fixed success message.
pub async fn login(ValidatedForm(form): ValidatedForm<LoginForm>) -> Json<LoginOut> {
    tracing::info!(username = %form.username, "login accepted");
    Json(LoginOut::new(form.username))
}

/// Receive a contact message and echo the caller's user agent.
///
/// The `ads` cookie is an optional input with no effect on the reply.
pub async fn contact(
    headers: HeaderMap,
    ValidatedForm(form): ValidatedForm<ContactForm>,
) -> Json<Option<String>> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    if let Some(ads) = cookie_value(&headers, "ads") {
        tracing::debug!(ads = %ads, "ads cookie received");
    }

    tracing::info!(email = %form.email, "contact message received");
    Json(user_agent)
}

/// Receive one uploaded image and report its name, format and size.
pub async fn post_image(mut multipart: Multipart) -> Result<Json<Value>, ValidationError> {
    while let Some(field) = multipart.next_field().await.map_err(|err| {
        ValidationError::single(
            "image",
            format!("Invalid multipart payload: {}", err.body_text()),
        )
    })? {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(|err| {
            ValidationError::single("image", format!("Failed to read file: {}", err.body_text()))
        })?;

        let size_kb = (data.len() as f64 / 1024.0 * 100.0).round() / 100.0;
        tracing::info!(size_bytes = data.len(), "image received");

        return Ok(Json(json!({
            "Filename": filename,
            "Format": content_type,
            "Size(kb)": size_kb,
        })));
    }

    Err(ValidationError::single("image", "image file is required"))
}

pub async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Route not found"})))
}

/// Read a single cookie from the Cookie header, if present.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
