//! Error types for message resolution

use thiserror::Error;

/// Errors that can occur while resolving a validation message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// The payload was JSON null. The caller contract requires a non-null
    /// payload (an empty object is fine); null fails loudly instead of being
    /// silently defaulted.
    #[error("Null payload for error kind '{kind}': callers must pass a non-null payload")]
    NullPayload { kind: String },
}
