//! Status-tagged outcomes for service and data-access layers.
//!
//! An outcome reports what happened to an operation without unwinding: a closed
//! [`Status`], zero or more [`FieldError`]s, zero or more general messages and, for
//! [`TypedOutcome<T>`], a payload that exists only on success. Callers branch on the
//! status instead of catching errors.
//!
//! Outcomes are built exclusively through named factories that fix which error collection
//! a status populates, so an inconsistent combination such as a `Success` carrying
//! validation errors cannot be observed.
//!
//! # Examples
//!
//! ## Payload-less outcomes
//!
//! ```
//! use outcome_rail::{Outcome, Status};
//!
//! let deleted = Outcome::deleted("user-42");
//! assert_eq!(deleted.status(), Status::Deleted);
//! assert_eq!(deleted.field_errors()[0].id(), "user-42");
//!
//! let failed = Outcome::error_many(["db timeout", "retry budget exhausted"])?;
//! assert_eq!(failed.errors().len(), 2);
//! # Ok::<(), outcome_rail::OutcomeError>(())
//! ```
//!
//! ## Typed outcomes
//!
//! ```
//! use outcome_rail::{Status, TypedOutcome};
//!
//! fn find_name(id: u32) -> TypedOutcome<String> {
//!     match id {
//!         0 => TypedOutcome::invalid("id", "must be positive"),
//!         1 => TypedOutcome::success("ada".to_string()),
//!         _ => TypedOutcome::not_found(),
//!     }
//! }
//!
//! assert_eq!(find_name(1).value().map(String::as_str), Some("ada"));
//! assert_eq!(find_name(9).status(), Status::NotFound);
//! ```
//!
//! ## Exhaustive dispatch
//!
//! ```
//! use outcome_rail::Status;
//!
//! fn http_code(status: Status) -> u16 {
//!     match status {
//!         Status::Success => 200,
//!         Status::NoContent | Status::Deleted => 204,
//!         Status::Invalid | Status::TokenInvalid => 400,
//!         Status::AuthPasswordFailed | Status::AuthTwoFactorFailed => 401,
//!         Status::AuthLocked | Status::AuthUnverified => 403,
//!         Status::NotFound => 404,
//!         Status::Modified => 409,
//!         Status::Error => 500,
//!     }
//! }
//!
//! assert_eq!(http_code(Status::Modified), 409);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use smallvec::SmallVec;

/// Bridges between outcomes and `Result`
pub mod convert;
/// Construction-time errors
pub mod error;
/// Field-level validation errors
pub mod field_error;
/// Payload-less outcomes
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Status taxonomy
pub mod status;
/// Payload-carrying outcomes
pub mod typed_outcome;

/// Validated serde representations (requires `serde` feature)
#[cfg(feature = "serde")]
pub mod serde_support;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use error::OutcomeError;
pub use field_error::FieldError;
pub use outcome::Outcome;
pub use status::{Diagnostics, Status};
pub use typed_outcome::TypedOutcome;

/// SmallVec-backed collection holding an outcome's errors.
///
/// Uses inline storage for one element, which covers the single-error factories
/// without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
