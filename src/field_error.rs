use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validation failure tied to one field or parameter.
///
/// # Examples
///
/// ```
/// use outcome_rail::FieldError;
///
/// let err = FieldError::new("email", "must not be empty");
/// assert_eq!(err.id(), "email");
/// assert_eq!(err.to_string(), "email: must not be empty");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldError {
    id: String,
    message: String,
}

impl FieldError {
    /// Creates a field error for `id` with a human-readable `message`.
    #[inline]
    pub fn new<I, M>(id: I, message: M) -> Self
    where
        I: Into<String>,
        M: Into<String>,
    {
        Self { id: id.into(), message: message.into() }
    }

    /// Id or name of the field this error relates to.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Details of what is wrong with the field.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn into_parts(self) -> (String, String) {
        (self.id, self.message)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}

impl<I, M> From<(I, M)> for FieldError
where
    I: Into<String>,
    M: Into<String>,
{
    #[inline]
    fn from((id, message): (I, M)) -> Self {
        Self::new(id, message)
    }
}
