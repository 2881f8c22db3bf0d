//! Example: Structured Responses with Serde
//!
//! Serializes outcomes into JSON response bodies and reads them back. Deserialization
//! re-checks the status rules, so a malformed document is rejected instead of producing
//! an inconsistent outcome.

use outcome_rail::{Outcome, TypedOutcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Account {
    id: u32,
    owner: String,
}

fn main() {
    let found = TypedOutcome::success(Account { id: 7, owner: "ada".to_string() });
    let locked = TypedOutcome::<Account>::auth_locked("too many failed attempts");

    for outcome in [&found, &locked] {
        match serde_json::to_string_pretty(outcome) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to serialize outcome: {e}"),
        }
    }

    let forged = r#"{"status":"Invalid","fieldErrors":[],"errors":[]}"#;
    match serde_json::from_str::<Outcome>(forged) {
        Ok(outcome) => println!("accepted: {outcome}"),
        Err(e) => println!("rejected: {e}"),
    }
}
