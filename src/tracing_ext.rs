//! Tracing integration for outcome-rail.
//!
//! Emits one structured event per outcome at a level derived from its status, so a
//! service can log what happened at the point it hands the outcome upward.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tracing"] }
//! ```

use crate::outcome::Outcome;
use crate::status::Status;
use crate::typed_outcome::TypedOutcome;

/// Extension trait that records an outcome as a tracing event and passes it through.
///
/// | Status | Level |
/// |--------|-------|
/// | `Success`, `NoContent`, `Deleted` | `DEBUG` |
/// | `NotFound`, `Invalid`, `Modified`, `TokenInvalid`, `Auth*` | `WARN` |
/// | `Error` | `ERROR` |
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::TraceOutcome;
///
/// fn delete_user(id: &str) -> Outcome {
///     store.remove(id).trace_outcome("delete_user")
/// }
/// ```
pub trait TraceOutcome: Sized {
    /// Records this outcome under `operation` and returns it unchanged.
    #[must_use]
    fn trace_outcome(self, operation: &str) -> Self;
}

impl TraceOutcome for Outcome {
    fn trace_outcome(self, operation: &str) -> Self {
        record(&self, operation);
        self
    }
}

impl<T> TraceOutcome for TypedOutcome<T> {
    fn trace_outcome(self, operation: &str) -> Self {
        record(self.outcome(), operation);
        self
    }
}

fn record(outcome: &Outcome, operation: &str) {
    let status = outcome.status();
    let field_errors = outcome.field_errors().len();
    let errors = outcome.errors().len();

    match status {
        Status::Success | Status::NoContent | Status::Deleted => {
            tracing::debug!(operation, status = %status, field_errors, errors, "operation outcome");
        },
        Status::NotFound
        | Status::Invalid
        | Status::Modified
        | Status::TokenInvalid
        | Status::AuthLocked
        | Status::AuthUnverified
        | Status::AuthTwoFactorFailed
        | Status::AuthPasswordFailed => {
            tracing::warn!(
                operation,
                status = %status,
                field_errors,
                errors,
                detail = %outcome,
                "operation outcome"
            );
        },
        Status::Error => {
            tracing::error!(
                operation,
                status = %status,
                field_errors,
                errors,
                detail = %outcome,
                "operation outcome"
            );
        },
    }
}
