//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn remove(key: &str) -> Outcome {
//!     if key.is_empty() {
//!         return Outcome::invalid("key", "must not be empty");
//!     }
//!     Outcome::deleted(key)
//! }
//!
//! assert_eq!(remove("").status(), Status::Invalid);
//! ```

pub use crate::convert::result_to_outcome;
pub use crate::{FieldError, Outcome, OutcomeError, Status, TypedOutcome};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TraceOutcome;
