//! Transport Mapping Pattern
//!
//! A transport layer maps every `Status` to a response code. The match is exhaustive,
//! so adding a status to the taxonomy breaks this build until it is mapped.

use outcome_rail::{Outcome, Status, TypedOutcome};

fn status_code(status: Status) -> u16 {
    match status {
        Status::Success => 200,
        Status::NoContent | Status::Deleted => 204,
        Status::Invalid | Status::TokenInvalid => 400,
        Status::AuthPasswordFailed | Status::AuthTwoFactorFailed => 401,
        Status::AuthLocked | Status::AuthUnverified => 403,
        Status::NotFound => 404,
        Status::Modified => 409,
        Status::Error => 500,
    }
}

fn body(outcome: &Outcome) -> String {
    if outcome.is_failure() {
        outcome.to_string()
    } else {
        String::new()
    }
}

fn respond<T: std::fmt::Debug>(outcome: TypedOutcome<T>) -> (u16, String) {
    let code = status_code(outcome.status());
    match outcome.into_parts() {
        (_, Some(value)) => (code, format!("{value:?}")),
        (outcome, None) => (code, body(&outcome)),
    }
}

fn main() {
    let responses = [
        respond(TypedOutcome::success(vec!["ada", "grace"])),
        respond(TypedOutcome::<Vec<&str>>::invalid("page", "must be positive")),
        respond(TypedOutcome::<Vec<&str>>::auth_two_factor_failed("code expired")),
        respond(TypedOutcome::<Vec<&str>>::deleted("user-42")),
    ];

    for (code, body) in responses {
        println!("{code} {body}");
    }
    // Output:
    // 200 ["ada", "grace"]
    // 400 Invalid: page: must be positive
    // 401 AuthTwoFactorFailed: code expired
    // 204
}
