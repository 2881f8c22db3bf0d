//! Construction-time failures.
//!
//! Outcomes are the error channel of their callers, so they have none of their own at
//! runtime. The only way to get an [`OutcomeError`] is to ask for an outcome whose
//! status and error collections disagree: an `Invalid` with no field errors, a lifted
//! `Success` with no payload, or a deserialized document that breaks the same rules.
use alloc::string::String;

use crate::status::Status;

/// Rejected attempt to build an inconsistent outcome.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    /// A field-error status was requested with no field errors.
    #[error("{status} outcome requires at least one field error")]
    EmptyFieldErrors { status: Status },

    /// A message-carrying status was requested with no messages.
    #[error("{status} outcome requires at least one error message")]
    EmptyMessages { status: Status },

    /// A `Success` outcome has no payload to carry into a typed outcome.
    #[error("cannot lift a Success outcome without a value")]
    SuccessWithoutValue,

    /// The payload is present on a non-`Success` status, or absent on `Success`.
    #[error("value presence does not match {status} outcome")]
    ValueMismatch { status: Status },

    /// The error collections do not match what the status carries.
    #[error("error collections do not match {status} outcome")]
    UnexpectedDiagnostics { status: Status },

    #[error("unknown outcome status '{0}'")]
    UnknownStatus(String),
}

impl OutcomeError {
    /// Reports the rejection before it is handed back to the caller.
    #[inline]
    pub(crate) fn rejected(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %self, "rejected outcome construction");
        self
    }
}
