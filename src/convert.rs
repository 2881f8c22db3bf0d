//! Bridges between outcomes and `core::result::Result`.
//!
//! Outcomes are for reporting; `Result` is for control flow with `?`. These adapters let a
//! service convert in either direction at its boundary without re-deriving status logic.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::result_to_outcome;
//! use outcome_rail::{Status, TypedOutcome};
//!
//! let parsed = result_to_outcome("42".parse::<u32>());
//! assert_eq!(parsed.value(), Some(&42));
//!
//! let failed = result_to_outcome("x".parse::<u32>());
//! assert_eq!(failed.status(), Status::Error);
//!
//! let back: Result<Option<u32>, _> = TypedOutcome::success(7).into_result();
//! assert_eq!(back, Ok(Some(7)));
//! ```
use alloc::string::ToString;
use core::fmt::Display;

use crate::outcome::Outcome;
use crate::status::Status;
use crate::typed_outcome::TypedOutcome;

impl Outcome {
    /// Splits on [`Status::is_failure`].
    ///
    /// Non-failures (`Success`, `NoContent`, `Deleted`) become `Ok(status)`, everything
    /// else is handed back untouched in `Err`.
    ///
    /// # Errors
    ///
    /// Returns the outcome itself when it reports a failure.
    #[inline]
    pub fn into_result(self) -> Result<Status, Outcome> {
        if self.is_failure() {
            Err(self)
        } else {
            Ok(self.status())
        }
    }
}

impl<T> TypedOutcome<T> {
    /// Splits on [`Status::is_failure`], yielding the payload on the `Ok` side.
    ///
    /// `Success` becomes `Ok(Some(value))`; `NoContent` and `Deleted` become `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns the payload-less outcome when it reports a failure.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, Outcome> {
        if self.is_failure() {
            return Err(self.into_outcome());
        }
        Ok(self.into_value())
    }
}

/// Wraps a `Result`, turning the error side into a single-message `Error` outcome.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<(), _>("db timeout"));
/// assert_eq!(outcome.errors(), &["db timeout".to_string()]);
/// ```
#[inline]
pub fn result_to_outcome<T, E: Display>(result: Result<T, E>) -> TypedOutcome<T> {
    match result {
        Ok(value) => TypedOutcome::success(value),
        Err(error) => TypedOutcome::error(error.to_string()),
    }
}

/// Converts a typed outcome into a `Result`, see [`TypedOutcome::into_result`].
///
/// # Errors
///
/// Returns the payload-less outcome when it reports a failure.
#[inline]
pub fn outcome_to_result<T>(outcome: TypedOutcome<T>) -> Result<Option<T>, Outcome> {
    outcome.into_result()
}
