#![allow(dead_code)]

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_MESSAGE_CHARS: usize = 10;

/// Local part may not start with a dot or contain `..`; those two rules are
/// checked outside the pattern.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl ValidationError {
    pub fn field(self) -> Field {
        match self {
            ValidationError::NameRequired => Field::Name,
            ValidationError::InvalidEmail => Field::Email,
            ValidationError::MessageTooShort => Field::Message,
        }
    }
}

/// Raw form input as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactFormValues {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFormValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// At most one error per field; fields are validated independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ValidationError> {
        [self.name, self.email, self.message].into_iter().flatten()
    }

    fn record(&mut self, error: ValidationError) {
        match error.field() {
            Field::Name => self.name = Some(error),
            Field::Email => self.email = Some(error),
            Field::Message => self.message = Some(error),
        }
    }
}

/// A submission that passed every rule. Only constructed by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_REGEX.is_match(email)
}

/// Checks every field and either returns a submission or all field errors.
pub fn validate(values: &ContactFormValues) -> Result<ContactSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    if values.name.is_empty() {
        errors.record(ValidationError::NameRequired);
    }
    if !is_valid_email(&values.email) {
        errors.record(ValidationError::InvalidEmail);
    }
    // Counts chars, not UTF-16 units, so astral characters weigh one each.
    if values.message.chars().count() < MIN_MESSAGE_CHARS {
        errors.record(ValidationError::MessageTooShort);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        name: values.name.clone(),
        email: values.email.clone(),
        message: values.message.clone(),
    })
}
