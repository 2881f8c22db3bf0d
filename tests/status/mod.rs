use std::collections::HashSet;

use outcome_rail::{Diagnostics, OutcomeError, Status};

#[test]
fn all_lists_every_status_once() {
    let unique: HashSet<Status> = Status::ALL.iter().copied().collect();
    assert_eq!(unique.len(), 12);
    assert_eq!(Status::ALL[0], Status::Success);
    assert_eq!(Status::ALL[11], Status::AuthPasswordFailed);
}

#[test]
fn names_round_trip_through_from_str() {
    for status in Status::ALL {
        assert_eq!(status.as_str().parse::<Status>(), Ok(status));
        assert_eq!(status.to_string(), status.as_str());
    }
}

#[test]
fn unknown_name_is_rejected() {
    let err = "Tk_Invalid".parse::<Status>().unwrap_err();
    assert_eq!(err, OutcomeError::UnknownStatus("Tk_Invalid".to_string()));
    assert_eq!(err.to_string(), "unknown outcome status 'Tk_Invalid'");
}

#[test]
fn diagnostics_partition_the_taxonomy() {
    let none: Vec<_> = Status::ALL
        .into_iter()
        .filter(|s| s.diagnostics() == Diagnostics::None)
        .collect();
    assert_eq!(none, vec![Status::Success, Status::NotFound, Status::NoContent]);

    let fields: Vec<_> = Status::ALL
        .into_iter()
        .filter(|s| s.diagnostics() == Diagnostics::FieldErrors)
        .collect();
    assert_eq!(
        fields,
        vec![Status::Invalid, Status::Deleted, Status::Modified, Status::TokenInvalid]
    );

    let messages: Vec<_> = Status::ALL
        .into_iter()
        .filter(|s| s.diagnostics() == Diagnostics::Messages)
        .collect();
    assert_eq!(
        messages,
        vec![
            Status::Error,
            Status::AuthLocked,
            Status::AuthUnverified,
            Status::AuthTwoFactorFailed,
            Status::AuthPasswordFailed,
        ]
    );
}

#[test]
fn only_success_is_success() {
    let successes: Vec<_> = Status::ALL.into_iter().filter(|s| s.is_success()).collect();
    assert_eq!(successes, vec![Status::Success]);
}

#[test]
fn non_failures_are_success_no_content_and_deleted() {
    let non_failures: Vec<_> = Status::ALL.into_iter().filter(|s| !s.is_failure()).collect();
    assert_eq!(non_failures, vec![Status::Success, Status::Deleted, Status::NoContent]);
}

#[test]
fn auth_failures_are_the_four_credential_statuses() {
    let auth: Vec<_> = Status::ALL.into_iter().filter(|s| s.is_auth_failure()).collect();
    assert_eq!(auth.len(), 4);
    assert!(auth.iter().all(|s| s.as_str().starts_with("Auth")));
    assert!(auth.iter().all(|s| s.diagnostics() == Diagnostics::Messages));
}
