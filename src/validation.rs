//! Form Validation
//!
//! Schemas for the login, sign-up and todo forms, checked with `validator`.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::clock::parse_date_input;
use crate::models::{Credentials, Registration, TodoDraft};
use crate::query::{start_of_day, DayOffset};

const INVALID_EMAIL: &str = "Invalid email address";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

pub type FieldErrors = Vec<FieldError>;

/// First message recorded for `field`
pub fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
    errors.iter().find(|e| e.field == field).map(|e| e.message.clone())
}

fn field_errors(errors: ValidationErrors) -> FieldErrors {
    let mut flat = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        for err in errs.iter() {
            flat.push(FieldError {
                field: field.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            });
        }
    }
    flat
}

fn rejected(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Domain must end in an alphabetic label of two or more letters
fn email_has_tld(email: &str) -> Result<(), ValidationError> {
    let tld = email
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .map(|(_, tld)| tld);
    match tld {
        Some(tld) if tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()) => Ok(()),
        _ => Err(rejected("email", INVALID_EMAIL)),
    }
}

fn due_date_given(due_date: &str) -> Result<(), ValidationError> {
    match parse_date_input(due_date) {
        Some(_) => Ok(()),
        None => Err(rejected("due_date", "Due date is required")),
    }
}

#[derive(Debug, Validate)]
struct LoginForm {
    #[validate(email(message = "Invalid email address"), custom(function = "email_has_tld"))]
    email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    password: String,
}

#[derive(Debug, Validate)]
struct SignUpForm {
    #[validate(length(min = 2, message = "Username must be at least 2 characters."))]
    username: String,
    #[validate(email(message = "Invalid email address"), custom(function = "email_has_tld"))]
    email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    password: String,
    #[validate(
        length(min = 6, message = "Confirm Password is required"),
        must_match(other = "password", message = "Passwords do not match")
    )]
    confirm_password: String,
}

#[derive(Debug, Validate)]
struct TodoForm {
    #[validate(length(min = 1, message = "Title is required"))]
    title: String,
    #[validate(custom(function = "due_date_given"))]
    due_date: String,
}

pub fn validate_login(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let form = LoginForm {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    form.validate().map_err(field_errors)?;
    Ok(Credentials {
        email: form.email,
        password: form.password,
    })
}

pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Registration, FieldErrors> {
    let form = SignUpForm {
        username: username.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    };
    form.validate().map_err(field_errors)?;
    Ok(Registration {
        username: form.username,
        email: form.email,
        password: form.password,
    })
}

/// `due` is a date input value (`YYYY-MM-DD`), due at local midnight in `zone`
pub fn validate_todo(
    title: &str,
    description: &str,
    due: &str,
    zone: &impl DayOffset,
) -> Result<TodoDraft, FieldErrors> {
    let form = TodoForm {
        title: title.trim().to_string(),
        due_date: due.trim().to_string(),
    };
    form.validate().map_err(field_errors)?;
    let due_date = parse_date_input(&form.due_date)
        .and_then(|day| start_of_day(day, zone))
        .ok_or_else(|| {
            vec![FieldError {
                field: "due_date".to_string(),
                message: "Due date is required".to_string(),
            }]
        })?;
    Ok(TodoDraft {
        title: form.title,
        due_date,
        description: description.trim().to_string(),
    })
}
