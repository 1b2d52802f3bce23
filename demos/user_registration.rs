//! User Registration
//!
//! This example validates a registration request the way a web handler
//! would, and maps the outcome to a response body.
//!
//! Key concepts:
//! - Reusable declarations with the `Validate` trait
//! - Collect-all reporting: every invalid field in one error
//! - Mapping `ValidatorError` to a JSON error response
//!
//! Run with: RUST_LOG=fieldcheck=debug cargo run --example user_registration

use chrono::{DateTime, Utc};
use fieldcheck::{
    rules, FieldErrorMessages, Validate, ValidatorConfig, ValidatorError, ValidatorFactory,
};
use serde::Serialize;

struct UserRegistration {
    name: String,
    email: String,
    password: String,
    age: u32,
}

impl Validate for UserRegistration {
    fn validate(&self, factory: &ValidatorFactory) -> Result<(), ValidatorError> {
        factory
            .create(self)
            .field("name", |dto| dto.name.clone())
            .add(rules::not_blank("Name must not be blank."))
            .add(rules::length_min(3, "Name must have at least 3 characters."))
            .end()?
            .field("email", |dto| dto.email.clone())
            .add(rules::not_blank("E-mail must not be blank."))
            .add(rules::email("E-mail format is invalid."))
            .end()?
            .field("password", |dto| dto.password.clone())
            .add(rules::not_blank("Password must not be blank."))
            .add(rules::length_min(8, "Password must have at least 8 characters."))
            .end()?
            .field("age", |dto| dto.age)
            .add(rules::min(18, "Minimum age is 18."))
            .end()?
            .finalize()?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationErrorResponse {
    status: u16,
    timestamp: DateTime<Utc>,
    message: String,
    field_errors: Vec<FieldErrorMessages>,
}

#[derive(Serialize)]
struct ServerErrorResponse {
    status: u16,
    timestamp: DateTime<Utc>,
    message: String,
}

fn respond(result: Result<(), ValidatorError>) -> String {
    let body = match result {
        Ok(()) => return r#"{"status":201}"#.to_string(),
        Err(ValidatorError::Invalid(error)) => serde_json::to_value(ValidationErrorResponse {
            status: 400,
            timestamp: Utc::now(),
            message: error.message().to_string(),
            field_errors: error.into_field_errors(),
        }),
        Err(other) => serde_json::to_value(ServerErrorResponse {
            status: 500,
            timestamp: Utc::now(),
            message: other.to_string(),
        }),
    };

    match body.and_then(|value| serde_json::to_string_pretty(&value)) {
        Ok(json) => json,
        Err(error) => format!(r#"{{"status":500,"message":"{error}"}}"#),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldcheck=info".into()),
        )
        .init();

    println!("=== User Registration Example ===\n");

    let factory = ValidatorFactory::new(ValidatorConfig::default());

    println!("Example 1: Valid request");
    let valid = UserRegistration {
        name: "John".into(),
        email: "john.doe@example.com".into(),
        password: "correct horse battery".into(),
        age: 30,
    };
    println!("{}\n", respond(valid.validate(&factory)));

    println!("Example 2: Every invalid field reported at once");
    let invalid = UserRegistration {
        name: "Jo".into(),
        email: "john@".into(),
        password: " ".into(),
        age: 16,
    };
    println!("{}\n", respond(invalid.validate(&factory)));

    println!("=== Example Complete ===");
}
