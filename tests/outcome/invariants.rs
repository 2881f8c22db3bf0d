use outcome_rail::{Diagnostics, Outcome, Status};

fn one_of_each() -> Vec<Outcome> {
    vec![
        Outcome::success(),
        Outcome::not_found(),
        Outcome::invalid("email", "must not be empty"),
        Outcome::error("db timeout"),
        Outcome::deleted("user-42"),
        Outcome::modified([("version", "stale")]).unwrap(),
        Outcome::invalid_token("token", "expired"),
        Outcome::no_content(),
        Outcome::auth_locked("locked"),
        Outcome::auth_unverified("unverified"),
        Outcome::auth_two_factor_failed("bad code"),
        Outcome::auth_password_failed("bad password"),
    ]
}

#[test]
fn every_status_is_reachable_from_a_factory() {
    let statuses: Vec<_> = one_of_each().iter().map(Outcome::status).collect();
    assert_eq!(statuses, Status::ALL.to_vec());
}

#[test]
fn collections_match_status_diagnostics() {
    for outcome in one_of_each() {
        let (fields, messages) = (outcome.field_errors(), outcome.errors());
        match outcome.status().diagnostics() {
            Diagnostics::None => assert!(fields.is_empty() && messages.is_empty()),
            Diagnostics::FieldErrors => assert!(!fields.is_empty() && messages.is_empty()),
            Diagnostics::Messages => assert!(fields.is_empty() && !messages.is_empty()),
        }
    }
}

#[test]
fn accessors_are_stable_across_reads() {
    for outcome in one_of_each() {
        let first = (outcome.status(), outcome.field_errors().to_vec(), outcome.errors().to_vec());
        for _ in 0..3 {
            assert_eq!(outcome.status(), first.0);
            assert_eq!(outcome.field_errors(), first.1.as_slice());
            assert_eq!(outcome.errors(), first.2.as_slice());
        }
    }
}

#[test]
fn clones_compare_equal() {
    for outcome in one_of_each() {
        assert_eq!(outcome.clone(), outcome);
    }
}

#[test]
fn display_lists_errors_after_status() {
    assert_eq!(Outcome::success().to_string(), "Success");
    assert_eq!(
        Outcome::invalid_many([("name", "too short"), ("age", "must be positive")])
            .unwrap()
            .to_string(),
        "Invalid: name: too short, age: must be positive"
    );
    assert_eq!(
        Outcome::error_many(["db timeout", "retry budget exhausted"]).unwrap().to_string(),
        "Error: db timeout; retry budget exhausted"
    );
}

#[test]
fn into_parts_returns_collections_in_order() {
    let (status, fields, messages) = Outcome::invalid_token_many([("a", "1"), ("b", "2")])
        .unwrap()
        .into_parts();
    assert_eq!(status, Status::TokenInvalid);
    assert_eq!(fields.iter().map(|f| f.id()).collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(messages.is_empty());
}

#[test]
fn outcomes_are_shareable_across_threads() {
    let outcome = std::sync::Arc::new(Outcome::error("db timeout"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let outcome = std::sync::Arc::clone(&outcome);
            std::thread::spawn(move || outcome.errors()[0].clone())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "db timeout");
    }
}
