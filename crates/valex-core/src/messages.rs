//! Default message templates
//!
//! The resolver falls back to these templates whenever a payload carries no
//! `message` override. The table is an external collaborator: the embedding
//! application constructs it (or deserializes it from configuration) and
//! hands it to [`MessageResolver::new`](crate::MessageResolver::new). It is
//! immutable for the resolver's lifetime.
//!
//! Serde field names match the configuration wire keys (`minLength`,
//! `noEmpty`, `unknownError`, ...), so a JSON configuration document
//! round-trips unchanged.

use serde::{Deserialize, Serialize};

use crate::kind::ErrorKind;

/// The default message table, one template per closed error kind plus the
/// unknown-error fallback.
///
/// The templates for the parameterized kinds (`min_length`, `max_length`,
/// `min_number`, `max_number`) contain a `{0}` placeholder for the rule
/// parameter. `unknown_error` carries no placeholders; it is returned
/// unformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultMessages {
    pub required: String,
    pub email: String,
    pub min_length: String,
    pub max_length: String,
    pub min_number: String,
    pub max_number: String,
    pub pattern: String,
    pub no_empty: String,
    pub unknown_error: String,
}

impl Default for DefaultMessages {
    fn default() -> Self {
        Self {
            required: "This field is required.".to_string(),
            email: "Please enter a valid email address.".to_string(),
            min_length: "Minimum length is {0}.".to_string(),
            max_length: "Maximum length is {0}.".to_string(),
            min_number: "Value must be at least {0}.".to_string(),
            max_number: "Value must be at most {0}.".to_string(),
            pattern: "The value does not match the required pattern.".to_string(),
            no_empty: "Empty values are not allowed.".to_string(),
            unknown_error: "Invalid value.".to_string(),
        }
    }
}

impl DefaultMessages {
    /// The default template for a kind.
    ///
    /// [`ErrorKind::Unknown`] maps to the unknown-error fallback.
    pub fn template_for(&self, kind: ErrorKind) -> &str {
        match kind {
            ErrorKind::Required => &self.required,
            ErrorKind::Email => &self.email,
            ErrorKind::MinLength => &self.min_length,
            ErrorKind::MaxLength => &self.max_length,
            ErrorKind::MinNumber => &self.min_number,
            ErrorKind::MaxNumber => &self.max_number,
            ErrorKind::Pattern => &self.pattern,
            ErrorKind::NoEmpty => &self.no_empty,
            ErrorKind::Unknown => &self.unknown_error,
        }
    }
}
