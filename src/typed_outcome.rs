//! Outcome that carries a payload when, and only when, it is a success.
//!
//! [`TypedOutcome<T>`] wraps an [`Outcome`] and adds an optional value. All status and
//! error bookkeeping is delegated to the wrapped outcome, so the two types cannot drift
//! apart: every failure factory here is the matching [`Outcome`] factory plus an empty
//! payload slot.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, Status, TypedOutcome};
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     name: String,
//! }
//!
//! let found = TypedOutcome::success(User { name: "ada".into() });
//! assert_eq!(found.value().map(|u| u.name.as_str()), Some("ada"));
//!
//! // A validation layer hands back a plain outcome; the service layer lifts it.
//! let checked = Outcome::invalid("name", "must not be empty");
//! let lifted: TypedOutcome<User> = TypedOutcome::from_outcome(checked)?;
//! assert_eq!(lifted.status(), Status::Invalid);
//! assert!(lifted.value().is_none());
//! # Ok::<(), outcome_rail::OutcomeError>(())
//! ```
use alloc::string::String;

use crate::error::OutcomeError;
use crate::field_error::FieldError;
use crate::outcome::Outcome;
use crate::status::Status;

/// Status-tagged result of an operation that returns data of type `T`.
///
/// `value` is present if and only if the status is [`Status::Success`]. Absence is an
/// explicit `None`, never a default `T`, so `TypedOutcome::success(0)` and
/// `TypedOutcome::no_content()` stay distinguishable.
#[must_use]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(
        try_from = "crate::serde_support::TypedOutcomeRepr<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypedOutcome<T> {
    outcome: Outcome,
    value: Option<T>,
}

impl<T> TypedOutcome<T> {
    #[inline]
    fn without_value(outcome: Outcome) -> Self {
        Self { outcome, value: None }
    }

    /// Builds a typed outcome from parts that have already been checked against each other.
    #[cfg(feature = "serde")]
    #[inline]
    pub(crate) fn from_checked(outcome: Outcome, value: Option<T>) -> Self {
        Self { outcome, value }
    }

    /// The operation completed and produced `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Status, TypedOutcome};
    ///
    /// let outcome = TypedOutcome::success(42);
    /// assert_eq!(outcome.status(), Status::Success);
    /// assert_eq!(outcome.value(), Some(&42));
    /// assert!(outcome.errors().is_empty());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self { outcome: Outcome::success(), value: Some(value) }
    }

    #[inline]
    pub fn not_found() -> Self {
        Self::without_value(Outcome::not_found())
    }

    /// The operation succeeded without data to return.
    ///
    /// Prefer this over a `Success` with nothing in it: consumers treat a `Success`
    /// without a value as a broken contract.
    #[inline]
    pub fn no_content() -> Self {
        Self::without_value(Outcome::no_content())
    }

    /// See [`Outcome::invalid`].
    #[inline]
    pub fn invalid<I, M>(id: I, message: M) -> Self
    where
        I: Into<String>,
        M: Into<String>,
    {
        Self::without_value(Outcome::invalid(id, message))
    }

    /// See [`Outcome::invalid_many`].
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::EmptyFieldErrors`] if `errors` yields nothing.
    pub fn invalid_many<I>(errors: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator,
        I::Item: Into<FieldError>,
    {
        Outcome::invalid_many(errors).map(Self::without_value)
    }

    #[inline]
    pub fn invalid_token<I, M>(id: I, message: M) -> Self
    where
        I: Into<String>,
        M: Into<String>,
    {
        Self::without_value(Outcome::invalid_token(id, message))
    }

    /// # Errors
    ///
    /// Returns [`OutcomeError::EmptyFieldErrors`] if `errors` yields nothing.
    pub fn invalid_token_many<I>(errors: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator,
        I::Item: Into<FieldError>,
    {
        Outcome::invalid_token_many(errors).map(Self::without_value)
    }

    #[inline]
    pub fn error<M: Into<String>>(message: M) -> Self {
        Self::without_value(Outcome::error(message))
    }

    /// # Errors
    ///
    /// Returns [`OutcomeError::EmptyMessages`] if `messages` yields nothing.
    pub fn error_many<I>(messages: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Outcome::error_many(messages).map(Self::without_value)
    }

    /// See [`Outcome::deleted`].
    #[inline]
    pub fn deleted<K: Into<String>>(key: K) -> Self {
        Self::without_value(Outcome::deleted(key))
    }

    /// # Errors
    ///
    /// Returns [`OutcomeError::EmptyFieldErrors`] if `errors` yields nothing.
    pub fn modified<I>(errors: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator,
        I::Item: Into<FieldError>,
    {
        Outcome::modified(errors).map(Self::without_value)
    }

    #[inline]
    pub fn auth_locked<M: Into<String>>(message: M) -> Self {
        Self::without_value(Outcome::auth_locked(message))
    }

    #[inline]
    pub fn auth_unverified<M: Into<String>>(message: M) -> Self {
        Self::without_value(Outcome::auth_unverified(message))
    }

    #[inline]
    pub fn auth_two_factor_failed<M: Into<String>>(message: M) -> Self {
        Self::without_value(Outcome::auth_two_factor_failed(message))
    }

    #[inline]
    pub fn auth_password_failed<M: Into<String>>(message: M) -> Self {
        Self::without_value(Outcome::auth_password_failed(message))
    }

    /// Lifts a payload-less outcome, copying its status and both error collections.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::SuccessWithoutValue`] if `outcome` is a `Success`: there is
    /// no payload to carry over. Use [`TypedOutcome::success`] instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeError, TypedOutcome};
    ///
    /// let lifted = TypedOutcome::<u32>::from_outcome(Outcome::error("db timeout"))?;
    /// assert_eq!(lifted.errors(), &["db timeout".to_string()]);
    ///
    /// let rejected = TypedOutcome::<u32>::from_outcome(Outcome::success());
    /// assert_eq!(rejected, Err(OutcomeError::SuccessWithoutValue));
    /// # Ok::<(), OutcomeError>(())
    /// ```
    pub fn from_outcome(outcome: Outcome) -> Result<Self, OutcomeError> {
        if outcome.is_success() {
            return Err(OutcomeError::SuccessWithoutValue.rejected());
        }
        Ok(Self::without_value(outcome))
    }

    /// Re-types a payload-less outcome, keeping its status and errors.
    ///
    /// This is how a failure from an inner call is handed up through an outer call that
    /// returns a different payload type. A `Success` is handed back unchanged in `Err`,
    /// since its value cannot become a `U`; use [`TypedOutcome::map`] for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Status, TypedOutcome};
    ///
    /// let inner: TypedOutcome<u64> = TypedOutcome::not_found();
    /// let outer: TypedOutcome<String> = inner.retype().unwrap();
    /// assert_eq!(outer.status(), Status::NotFound);
    ///
    /// assert!(TypedOutcome::success(7_u64).retype::<String>().is_err());
    /// ```
    pub fn retype<U>(self) -> Result<TypedOutcome<U>, Self> {
        match self.value {
            Some(value) => Err(Self::success(value)),
            None => Ok(TypedOutcome::without_value(self.outcome)),
        }
    }

    /// Transforms the payload, keeping status and errors.
    #[inline]
    pub fn map<U, F>(self, f: F) -> TypedOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        TypedOutcome { outcome: self.outcome, value: self.value.map(f) }
    }

    #[must_use]
    #[inline]
    pub fn status(&self) -> Status {
        self.outcome.status()
    }

    #[must_use]
    #[inline]
    pub fn field_errors(&self) -> &[FieldError] {
        self.outcome.field_errors()
    }

    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[String] {
        self.outcome.errors()
    }

    /// The payload; `Some` only for [`Status::Success`].
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.outcome.is_failure()
    }

    /// The payload-less view of this outcome.
    #[inline]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Drops the payload, if any.
    #[inline]
    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }

    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (Outcome, Option<T>) {
        (self.outcome, self.value)
    }
}

impl<T> TryFrom<Outcome> for TypedOutcome<T> {
    type Error = OutcomeError;

    #[inline]
    fn try_from(outcome: Outcome) -> Result<Self, Self::Error> {
        Self::from_outcome(outcome)
    }
}

impl<T> From<TypedOutcome<T>> for Outcome {
    #[inline]
    fn from(outcome: TypedOutcome<T>) -> Self {
        outcome.into_outcome()
    }
}
