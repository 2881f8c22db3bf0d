//! Service Layer Pattern
//!
//! A generic validation routine returns a payload-less `Outcome`; the service lifts it
//! into a `TypedOutcome<User>` without re-deriving any status logic.

use outcome_rail::{FieldError, Outcome, Status, TypedOutcome};

#[derive(Debug, Clone)]
struct User {
    id: u32,
    email: String,
}

fn validate_email(email: &str) -> Outcome {
    let mut errors = Vec::new();
    if email.is_empty() {
        errors.push(FieldError::new("email", "must not be empty"));
    } else if !email.contains('@') {
        errors.push(FieldError::new("email", "must contain '@'"));
    }
    match Outcome::invalid_many(errors) {
        Ok(invalid) => invalid,
        Err(_) => Outcome::success(),
    }
}

fn register(id: u32, email: &str) -> TypedOutcome<User> {
    let checked = validate_email(email);
    if checked.status() == Status::Success {
        return TypedOutcome::success(User { id, email: email.to_string() });
    }
    TypedOutcome::from_outcome(checked).unwrap_or_else(|err| TypedOutcome::error(err.to_string()))
}

fn main() {
    for email in ["ada@example.com", "", "grace"] {
        let outcome = register(1, email);
        match outcome.value() {
            Some(user) => println!("registered #{} <{}>", user.id, user.email),
            None => println!("{}", outcome.outcome()),
        }
    }
    // Output:
    // registered #1 <ada@example.com>
    // Invalid: email: must not be empty
    // Invalid: email: must contain '@'
}
