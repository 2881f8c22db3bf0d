//! Closed status taxonomy shared by [`Outcome`](crate::Outcome) and
//! [`TypedOutcome`](crate::TypedOutcome).
//!
//! Every status is terminal: an outcome is built once, already carrying its final
//! status, and is never re-tagged. The enum is deliberately not `#[non_exhaustive]`,
//! so adding a status breaks every downstream `match` until it is mapped.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Diagnostics, Status};
//!
//! assert_eq!(Status::Invalid.diagnostics(), Diagnostics::FieldErrors);
//! assert_eq!("TokenInvalid".parse::<Status>(), Ok(Status::TokenInvalid));
//! assert!(Status::AuthLocked.is_auth_failure());
//! ```
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::OutcomeError;

/// Terminal classification of an operation's result.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Success,
    NotFound,
    Invalid,
    Error,
    Deleted,
    Modified,
    TokenInvalid,
    NoContent,
    AuthLocked,
    AuthUnverified,
    AuthTwoFactorFailed,
    AuthPasswordFailed,
}

/// Which error collection a status populates.
///
/// A status never populates both collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Diagnostics {
    /// Both `field_errors` and `errors` are empty.
    None,
    /// `field_errors` is non-empty, `errors` is empty.
    FieldErrors,
    /// `errors` is non-empty, `field_errors` is empty.
    Messages,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Status; 12] = [
        Status::Success,
        Status::NotFound,
        Status::Invalid,
        Status::Error,
        Status::Deleted,
        Status::Modified,
        Status::TokenInvalid,
        Status::NoContent,
        Status::AuthLocked,
        Status::AuthUnverified,
        Status::AuthTwoFactorFailed,
        Status::AuthPasswordFailed,
    ];

    /// Returns the variant name.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// assert_eq!(Status::AuthTwoFactorFailed.as_str(), "AuthTwoFactorFailed");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::NotFound => "NotFound",
            Status::Invalid => "Invalid",
            Status::Error => "Error",
            Status::Deleted => "Deleted",
            Status::Modified => "Modified",
            Status::TokenInvalid => "TokenInvalid",
            Status::NoContent => "NoContent",
            Status::AuthLocked => "AuthLocked",
            Status::AuthUnverified => "AuthUnverified",
            Status::AuthTwoFactorFailed => "AuthTwoFactorFailed",
            Status::AuthPasswordFailed => "AuthPasswordFailed",
        }
    }

    /// Returns which error collection this status carries.
    ///
    /// `Deleted` carries a single informational field error naming the deleted key.
    #[must_use]
    pub const fn diagnostics(self) -> Diagnostics {
        match self {
            Status::Success | Status::NoContent | Status::NotFound => Diagnostics::None,
            Status::Invalid | Status::Modified | Status::TokenInvalid | Status::Deleted => {
                Diagnostics::FieldErrors
            },
            Status::Error
            | Status::AuthLocked
            | Status::AuthUnverified
            | Status::AuthTwoFactorFailed
            | Status::AuthPasswordFailed => Diagnostics::Messages,
        }
    }

    /// Returns `true` only for [`Status::Success`], the one status that carries a payload.
    #[must_use]
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` when the operation did not complete as requested.
    ///
    /// `Success`, `NoContent` and `Deleted` are the non-failure statuses.
    #[must_use]
    #[inline]
    pub const fn is_failure(self) -> bool {
        !matches!(self, Status::Success | Status::NoContent | Status::Deleted)
    }

    /// Returns `true` for the four credential-check failures.
    #[must_use]
    #[inline]
    pub const fn is_auth_failure(self) -> bool {
        matches!(
            self,
            Status::AuthLocked
                | Status::AuthUnverified
                | Status::AuthTwoFactorFailed
                | Status::AuthPasswordFailed
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = OutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OutcomeError::UnknownStatus(s.into()))
    }
}
