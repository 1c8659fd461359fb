//! # valex-core
//!
//! Validation error message resolution.
//!
//! This crate provides:
//! - A [`MessageResolver`] mapping a failed rule's tag and payload to the
//!   final user-facing string
//! - A positional placeholder formatter for `{0}`, `{1}`, ... template tokens
//! - A [`DefaultMessages`] table with stock English templates, replaceable
//!   through configuration
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use valex_core::{DefaultMessages, MessageResolver};
//!
//! let resolver = MessageResolver::new(DefaultMessages::default());
//!
//! // Defaults apply when the payload carries no override.
//! let message = resolver.resolve("required", &json!({})).unwrap();
//! assert_eq!(message, "This field is required.");
//!
//! // Rule parameters fill the template placeholders.
//! let message = resolver
//!     .resolve("minlength", &json!({"requiredLength": 3}))
//!     .unwrap();
//! assert_eq!(message, "Minimum length is 3.");
//!
//! // A payload override wins over the default table.
//! let message = resolver
//!     .resolve("maxlength", &json!({"message": "Keep it under {0}!", "requiredLength": 8}))
//!     .unwrap();
//! assert_eq!(message, "Keep it under 8!");
//! ```

pub mod error;
pub mod format;
pub mod kind;
pub mod messages;
pub mod resolver;

// Re-exports for convenience
pub use error::*;
pub use format::*;
pub use kind::*;
pub use messages::*;
pub use resolver::*;
