use outcome_rail::{FieldError, Outcome, OutcomeError, Status};

#[test]
fn success_and_not_found_carry_no_errors() {
    for (outcome, status) in [
        (Outcome::success(), Status::Success),
        (Outcome::not_found(), Status::NotFound),
        (Outcome::no_content(), Status::NoContent),
    ] {
        assert_eq!(outcome.status(), status);
        assert!(outcome.field_errors().is_empty());
        assert!(outcome.errors().is_empty());
    }
}

#[test]
fn invalid_single_pair() {
    let outcome = Outcome::invalid("email", "must not be empty");

    assert_eq!(outcome.status(), Status::Invalid);
    assert_eq!(outcome.field_errors(), &[FieldError::new("email", "must not be empty")]);
    assert!(outcome.errors().is_empty());
}

#[test]
fn invalid_many_preserves_order() {
    let errors = vec![
        FieldError::new("name", "too short"),
        FieldError::new("age", "must be positive"),
        FieldError::new("email", "malformed"),
    ];
    let outcome = Outcome::invalid_many(errors.clone()).unwrap();

    assert_eq!(outcome.status(), Status::Invalid);
    assert_eq!(outcome.field_errors(), errors.as_slice());
    assert!(outcome.errors().is_empty());
}

#[test]
fn invalid_many_accepts_pairs() {
    let outcome = Outcome::invalid_many([("a", "x"), ("b", "y")]).unwrap();
    let ids: Vec<_> = outcome.field_errors().iter().map(FieldError::id).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn invalid_token_single_and_many() {
    let single = Outcome::invalid_token("token", "expired");
    assert_eq!(single.status(), Status::TokenInvalid);
    assert_eq!(single.field_errors()[0], FieldError::new("token", "expired"));

    let many = Outcome::invalid_token_many([("token", "expired"), ("scope", "missing")]).unwrap();
    assert_eq!(many.status(), Status::TokenInvalid);
    assert_eq!(many.field_errors().len(), 2);
    assert!(many.errors().is_empty());
}

#[test]
fn error_single_message() {
    let outcome = Outcome::error("db timeout");

    assert_eq!(outcome.status(), Status::Error);
    assert_eq!(outcome.errors(), &["db timeout".to_string()]);
    assert!(outcome.field_errors().is_empty());
}

#[test]
fn error_many_preserves_order() {
    let outcome = Outcome::error_many(["first", "second", "third"]).unwrap();
    assert_eq!(outcome.errors(), &["first", "second", "third"]);
    assert!(outcome.field_errors().is_empty());
}

#[test]
fn deleted_synthesizes_one_field_error() {
    let outcome = Outcome::deleted("user-42");

    assert_eq!(outcome.status(), Status::Deleted);
    assert_eq!(
        outcome.field_errors(),
        &[FieldError::new(
            "user-42",
            "Entity with Id 'user-42' has been deleted from the backing store"
        )]
    );
    assert!(outcome.errors().is_empty());
    assert!(!outcome.is_failure());
}

#[test]
fn deleted_message_mentions_arbitrary_keys() {
    for key in ["", "42", "a b c", "Ωmega"] {
        let outcome = Outcome::deleted(key);
        assert_eq!(outcome.field_errors().len(), 1);
        assert_eq!(outcome.field_errors()[0].id(), key);
        assert!(outcome.field_errors()[0].message().contains(&format!("'{key}'")));
    }
}

#[test]
fn modified_carries_field_errors() {
    let outcome = Outcome::modified([FieldError::new("version", "stale: expected 3, found 4")]).unwrap();
    assert_eq!(outcome.status(), Status::Modified);
    assert_eq!(outcome.field_errors()[0].id(), "version");
    assert!(outcome.errors().is_empty());
}

#[test]
fn auth_factories_carry_one_message() {
    let cases = [
        (Outcome::auth_locked("locked"), Status::AuthLocked),
        (Outcome::auth_unverified("unverified"), Status::AuthUnverified),
        (Outcome::auth_two_factor_failed("bad code"), Status::AuthTwoFactorFailed),
        (Outcome::auth_password_failed("bad password"), Status::AuthPasswordFailed),
    ];

    for (outcome, status) in cases {
        assert_eq!(outcome.status(), status);
        assert_eq!(outcome.errors().len(), 1);
        assert!(outcome.field_errors().is_empty());
        assert!(outcome.status().is_auth_failure());
    }
}

#[test]
fn empty_collections_are_rejected() {
    let none: Vec<FieldError> = Vec::new();
    assert_eq!(
        Outcome::invalid_many(none.clone()),
        Err(OutcomeError::EmptyFieldErrors { status: Status::Invalid })
    );
    assert_eq!(
        Outcome::invalid_token_many(none.clone()),
        Err(OutcomeError::EmptyFieldErrors { status: Status::TokenInvalid })
    );
    assert_eq!(
        Outcome::modified(none),
        Err(OutcomeError::EmptyFieldErrors { status: Status::Modified })
    );
    assert_eq!(
        Outcome::error_many(Vec::<String>::new()),
        Err(OutcomeError::EmptyMessages { status: Status::Error })
    );
}

#[test]
fn rejection_messages_name_the_status() {
    let err = Outcome::modified(Vec::<FieldError>::new()).unwrap_err();
    assert_eq!(err.to_string(), "Modified outcome requires at least one field error");

    let err = Outcome::error_many(Vec::<&str>::new()).unwrap_err();
    assert_eq!(err.to_string(), "Error outcome requires at least one error message");
}
