//! Payload-less outcome for operations that only pass, fail or invalidate.
//!
//! An [`Outcome`] can only be obtained through its named factories, each of which fixes
//! the status and the error collection it populates. Factories that take a single error
//! are infallible; the `_many` forms and [`Outcome::modified`] reject an empty input with
//! an [`OutcomeError`] instead of producing an outcome that claims failure without saying why.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{FieldError, Outcome, Status};
//!
//! let invalid = Outcome::invalid("email", "must not be empty");
//! assert_eq!(invalid.status(), Status::Invalid);
//! assert_eq!(invalid.field_errors(), &[FieldError::new("email", "must not be empty")]);
//! assert!(invalid.errors().is_empty());
//!
//! assert!(Outcome::error_many(Vec::<String>::new()).is_err());
//! ```
use alloc::format;
use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::error::OutcomeError;
use crate::field_error::FieldError;
use crate::status::{Diagnostics, Status};
use crate::ErrorVec;

/// Status-tagged result of an operation that returns no data.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "crate::serde_support::OutcomeRepr")
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Outcome {
    status: Status,
    field_errors: ErrorVec<FieldError>,
    errors: ErrorVec<String>,
}

impl Outcome {
    #[inline]
    fn bare(status: Status) -> Self {
        Self { status, field_errors: ErrorVec::new(), errors: ErrorVec::new() }
    }

    #[inline]
    fn field_error(status: Status, error: FieldError) -> Self {
        Self { status, field_errors: smallvec![error], errors: ErrorVec::new() }
    }

    #[inline]
    fn message(status: Status, message: String) -> Self {
        Self { status, field_errors: ErrorVec::new(), errors: smallvec![message] }
    }

    fn field_errors_from<I>(status: Status, errors: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator,
        I::Item: Into<FieldError>,
    {
        let field_errors: ErrorVec<FieldError> = errors.into_iter().map(Into::into).collect();
        if field_errors.is_empty() {
            return Err(OutcomeError::EmptyFieldErrors { status }.rejected());
        }
        Ok(Self { status, field_errors, errors: ErrorVec::new() })
    }

    /// Builds an outcome from raw parts after checking them against the status.
    #[cfg(feature = "serde")]
    pub(crate) fn from_parts(
        status: Status,
        field_errors: ErrorVec<FieldError>,
        errors: ErrorVec<String>,
    ) -> Result<Self, OutcomeError> {
        let consistent = match status.diagnostics() {
            Diagnostics::None => field_errors.is_empty() && errors.is_empty(),
            Diagnostics::FieldErrors => !field_errors.is_empty() && errors.is_empty(),
            Diagnostics::Messages => field_errors.is_empty() && !errors.is_empty(),
        } && match status {
            Status::Deleted => match field_errors.as_slice() {
                [only] => only.message() == deleted_message(only.id()),
                _ => false,
            },
            _ if status.is_auth_failure() => errors.len() == 1,
            _ => true,
        };
        if !consistent {
            return Err(OutcomeError::UnexpectedDiagnostics { status }.rejected());
        }
        Ok(Self { status, field_errors, errors })
    }

    /// The operation completed.
    #[inline]
    pub fn success() -> Self {
        Self::bare(Status::Success)
    }

    /// The entity the operation addressed could not be located.
    #[inline]
    pub fn not_found() -> Self {
        Self::bare(Status::NotFound)
    }

    /// The operation completed and legitimately has nothing to return.
    #[inline]
    pub fn no_content() -> Self {
        Self::bare(Status::NoContent)
    }

    /// Rejects a single field.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status};
    ///
    /// let outcome = Outcome::invalid("email", "must not be empty");
    /// assert_eq!(outcome.status(), Status::Invalid);
    /// assert_eq!(outcome.field_errors()[0].id(), "email");
    /// ```
    #[inline]
    pub fn invalid<I, M>(id: I, message: M) -> Self
    where
        I: Into<String>,
        M: Into<String>,
    {
        Self::field_error(Status::Invalid, FieldError::new(id, message))
    }

    /// Rejects several fields at once, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::EmptyFieldErrors`] if `errors` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::invalid_many([("name", "too short"), ("age", "must be positive")])?;
    /// assert_eq!(outcome.field_errors().len(), 2);
    /// # Ok::<(), outcome_rail::OutcomeError>(())
    /// ```
    pub fn invalid_many<I>(errors: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator,
        I::Item: Into<FieldError>,
    {
        Self::field_errors_from(Status::Invalid, errors)
    }

    /// Rejects a token, naming the offending field.
    #[inline]
    pub fn invalid_token<I, M>(id: I, message: M) -> Self
    where
        I: Into<String>,
        M: Into<String>,
    {
        Self::field_error(Status::TokenInvalid, FieldError::new(id, message))
    }

    /// # Errors
    ///
    /// Returns [`OutcomeError::EmptyFieldErrors`] if `errors` yields nothing.
    pub fn invalid_token_many<I>(errors: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator,
        I::Item: Into<FieldError>,
    {
        Self::field_errors_from(Status::TokenInvalid, errors)
    }

    /// Reports a general failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status};
    ///
    /// let outcome = Outcome::error("db timeout");
    /// assert_eq!(outcome.status(), Status::Error);
    /// assert_eq!(outcome.errors(), &["db timeout".to_string()]);
    /// ```
    #[inline]
    pub fn error<M: Into<String>>(message: M) -> Self {
        Self::message(Status::Error, message.into())
    }

    /// Reports a general failure with several messages, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::EmptyMessages`] if `messages` yields nothing.
    pub fn error_many<I>(messages: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let errors: ErrorVec<String> = messages.into_iter().map(Into::into).collect();
        if errors.is_empty() {
            return Err(OutcomeError::EmptyMessages { status: Status::Error }.rejected());
        }
        Ok(Self { status: Status::Error, field_errors: ErrorVec::new(), errors })
    }

    /// Records that the entity with `key` has been removed from the backing store.
    ///
    /// The outcome carries one informational field error whose id is `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::deleted("user-42");
    /// assert_eq!(
    ///     outcome.field_errors()[0].message(),
    ///     "Entity with Id 'user-42' has been deleted from the backing store"
    /// );
    /// ```
    pub fn deleted<K: Into<String>>(key: K) -> Self {
        let key = key.into();
        let message = deleted_message(&key);
        Self::field_error(Status::Deleted, FieldError::new(key, message))
    }

    /// Reports a concurrent modification conflict on the listed fields.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::EmptyFieldErrors`] if `errors` yields nothing.
    pub fn modified<I>(errors: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator,
        I::Item: Into<FieldError>,
    {
        Self::field_errors_from(Status::Modified, errors)
    }

    /// The account is locked.
    #[inline]
    pub fn auth_locked<M: Into<String>>(message: M) -> Self {
        Self::message(Status::AuthLocked, message.into())
    }

    /// The account has not been verified yet.
    #[inline]
    pub fn auth_unverified<M: Into<String>>(message: M) -> Self {
        Self::message(Status::AuthUnverified, message.into())
    }

    /// The second authentication factor was rejected.
    #[inline]
    pub fn auth_two_factor_failed<M: Into<String>>(message: M) -> Self {
        Self::message(Status::AuthTwoFactorFailed, message.into())
    }

    /// The password was rejected.
    #[inline]
    pub fn auth_password_failed<M: Into<String>>(message: M) -> Self {
        Self::message(Status::AuthPasswordFailed, message.into())
    }

    #[must_use]
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Field-level errors, in the order they were supplied.
    #[must_use]
    #[inline]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// General error messages, in the order they were supplied.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// See [`Status::is_failure`].
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.status.is_failure()
    }

    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (Status, ErrorVec<FieldError>, ErrorVec<String>) {
        (self.status, self.field_errors, self.errors)
    }
}

/// Informational text recorded against the key of a deleted entity.
fn deleted_message(key: &str) -> String {
    format!("Entity with Id '{key}' has been deleted from the backing store")
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status.as_str())?;
        match self.status.diagnostics() {
            Diagnostics::None => Ok(()),
            Diagnostics::FieldErrors => {
                for (i, err) in self.field_errors.iter().enumerate() {
                    f.write_str(if i == 0 { ": " } else { ", " })?;
                    write!(f, "{err}")?;
                }
                Ok(())
            },
            Diagnostics::Messages => {
                for (i, msg) in self.errors.iter().enumerate() {
                    f.write_str(if i == 0 { ": " } else { "; " })?;
                    f.write_str(msg)?;
                }
                Ok(())
            },
        }
    }
}
