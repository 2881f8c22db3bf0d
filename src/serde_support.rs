//! Wire shapes for outcomes.
//!
//! Serialization writes `status`, `fieldErrors`, `errors` and, for typed outcomes, `value`
//! (omitted when absent). Deserialization reads into the plain representations below and
//! then re-checks them, so an outcome from JSON obeys the same status rules as one built
//! by a factory.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, TypedOutcome};
//!
//! let json = serde_json::to_string(&Outcome::error("db timeout")).unwrap();
//! assert_eq!(json, r#"{"status":"Error","fieldErrors":[],"errors":["db timeout"]}"#);
//!
//! let bad = r#"{"status":"Invalid","fieldErrors":[],"errors":[]}"#;
//! assert!(serde_json::from_str::<Outcome>(bad).is_err());
//!
//! let typed: TypedOutcome<u32> =
//!     serde_json::from_str(r#"{"status":"Success","value":3}"#).unwrap();
//! assert_eq!(typed.value(), Some(&3));
//! ```
use alloc::string::String;
use alloc::vec::Vec;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::OutcomeError;
use crate::field_error::FieldError;
use crate::outcome::Outcome;
use crate::status::Status;
use crate::typed_outcome::TypedOutcome;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct OutcomeRepr {
    status: Status,
    #[serde(default)]
    field_errors: Vec<FieldError>,
    #[serde(default)]
    errors: Vec<String>,
}

impl TryFrom<OutcomeRepr> for Outcome {
    type Error = OutcomeError;

    fn try_from(repr: OutcomeRepr) -> Result<Self, Self::Error> {
        Outcome::from_parts(
            repr.status,
            repr.field_errors.into_iter().collect(),
            repr.errors.into_iter().collect(),
        )
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct TypedOutcomeRepr<T> {
    status: Status,
    #[serde(default)]
    field_errors: Vec<FieldError>,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default = "Option::default")]
    value: Option<T>,
}

impl<T> TryFrom<TypedOutcomeRepr<T>> for TypedOutcome<T> {
    type Error = OutcomeError;

    fn try_from(repr: TypedOutcomeRepr<T>) -> Result<Self, Self::Error> {
        if repr.status.is_success() != repr.value.is_some() {
            return Err(OutcomeError::ValueMismatch { status: repr.status }.rejected());
        }
        let outcome = Outcome::try_from(OutcomeRepr {
            status: repr.status,
            field_errors: repr.field_errors,
            errors: repr.errors,
        })?;
        Ok(TypedOutcome::from_checked(outcome, repr.value))
    }
}

impl<T: Serialize> Serialize for TypedOutcome<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.value().is_some() { 4 } else { 3 };
        let mut state = serializer.serialize_struct("TypedOutcome", len)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("fieldErrors", self.field_errors())?;
        state.serialize_field("errors", self.errors())?;
        match self.value() {
            Some(value) => state.serialize_field("value", value)?,
            None => state.skip_field("value")?,
        }
        state.end()
    }
}
