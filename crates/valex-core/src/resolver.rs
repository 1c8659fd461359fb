//! Message resolution
//!
//! Maps a (kind, payload) pair to the final user-facing string: the payload's
//! own `message` override when present, otherwise the configured default for
//! the kind, with positional placeholders filled in for the parameterized
//! kinds.

use serde_json::{Map, Value};

use crate::error::MessageError;
use crate::format::format_template;
use crate::kind::ErrorKind;
use crate::messages::DefaultMessages;

/// Payload field carrying the caller-supplied message override.
const MESSAGE_FIELD: &str = "message";
/// Rule parameter for the length kinds.
const REQUIRED_LENGTH_FIELD: &str = "requiredLength";
/// Rule parameter for the numeric range kinds.
const REQUIRED_RANGE_FIELD: &str = "requiredRange";

/// Resolves user-facing messages for validation failures.
///
/// The resolver holds nothing but the injected default table; `resolve` is a
/// pure function of its inputs, so one resolver can be shared across threads
/// without coordination.
#[derive(Debug, Clone)]
pub struct MessageResolver {
    defaults: DefaultMessages,
}

impl MessageResolver {
    /// Create a resolver over the given default table.
    pub fn new(defaults: DefaultMessages) -> Self {
        Self { defaults }
    }

    /// Resolve the message for a failed validation rule.
    ///
    /// `kind` is the rule's wire tag and `payload` the record produced by
    /// rule evaluation. The payload may be any non-null JSON value; only
    /// objects carry fields, so primitive payloads resolve to the defaults.
    /// For tags outside the closed set, a `message` override is formatted
    /// against every other payload field in insertion order; without an
    /// override the unknown-error default is returned unformatted.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::NullPayload`] when `payload` is JSON null.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use valex_core::{DefaultMessages, MessageResolver};
    ///
    /// let resolver = MessageResolver::new(DefaultMessages::default());
    /// let message = resolver.resolve("minNumber", &json!({"requiredRange": 18}))?;
    /// assert_eq!(message, "Value must be at least 18.");
    /// # Ok::<(), valex_core::MessageError>(())
    /// ```
    pub fn resolve(&self, kind: &str, payload: &Value) -> Result<String, MessageError> {
        if payload.is_null() {
            return Err(MessageError::NullPayload {
                kind: kind.to_string(),
            });
        }

        let fields = payload.as_object();
        // Only a string override counts; non-string message fields are
        // treated as absent.
        let override_message = fields
            .and_then(|map| map.get(MESSAGE_FIELD))
            .and_then(Value::as_str);

        let parsed = ErrorKind::parse(kind);
        let resolved = match parsed {
            ErrorKind::Required | ErrorKind::Email | ErrorKind::Pattern | ErrorKind::NoEmpty => {
                override_message
                    .unwrap_or_else(|| self.defaults.template_for(parsed))
                    .to_string()
            }
            ErrorKind::MinLength | ErrorKind::MaxLength => {
                self.resolve_parameterized(parsed, override_message, fields, REQUIRED_LENGTH_FIELD)
            }
            ErrorKind::MinNumber | ErrorKind::MaxNumber => {
                self.resolve_parameterized(parsed, override_message, fields, REQUIRED_RANGE_FIELD)
            }
            ErrorKind::Unknown => match override_message {
                Some(template) => format_template(template, &placeholder_values(fields)),
                None => self.defaults.unknown_error.clone(),
            },
        };

        Ok(resolved)
    }

    /// Template-plus-one-parameter path shared by the length and range kinds.
    fn resolve_parameterized(
        &self,
        kind: ErrorKind,
        override_message: Option<&str>,
        fields: Option<&Map<String, Value>>,
        param_field: &str,
    ) -> String {
        let template = override_message.unwrap_or_else(|| self.defaults.template_for(kind));
        // A missing parameter still substitutes; it renders as `null`.
        let null = Value::Null;
        let param = fields
            .and_then(|map| map.get(param_field))
            .unwrap_or(&null);
        format_template(template, &[param])
    }
}

/// Every payload field except the message override, in insertion order.
fn placeholder_values(fields: Option<&Map<String, Value>>) -> Vec<&Value> {
    fields
        .map(|map| {
            map.iter()
                .filter(|(key, _)| key.as_str() != MESSAGE_FIELD)
                .map(|(_, value)| value)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolver() -> MessageResolver {
        MessageResolver::new(DefaultMessages::default())
    }

    #[test]
    fn test_null_payload_fails() {
        let result = resolver().resolve("required", &Value::Null);
        assert!(matches!(
            result,
            Err(MessageError::NullPayload { kind }) if kind == "required"
        ));
    }

    #[test]
    fn test_plain_kind_default() {
        let message = resolver().resolve("required", &json!({})).unwrap();
        assert_eq!(message, DefaultMessages::default().required);
    }

    #[test]
    fn test_plain_kind_override_is_not_formatted() {
        let message = resolver()
            .resolve("pattern", &json!({"message": "Literal {0} stays"}))
            .unwrap();
        assert_eq!(message, "Literal {0} stays");
    }

    #[test]
    fn test_parameterized_kind_formats_default() {
        let message = resolver()
            .resolve("maxlength", &json!({"requiredLength": 8}))
            .unwrap();
        assert_eq!(message, "Maximum length is 8.");
    }

    #[test]
    fn test_missing_parameter_renders_null() {
        let message = resolver().resolve("minlength", &json!({})).unwrap();
        assert_eq!(message, "Minimum length is null.");
    }

    #[test]
    fn test_non_string_override_is_ignored() {
        let message = resolver()
            .resolve("required", &json!({"message": 42}))
            .unwrap();
        assert_eq!(message, DefaultMessages::default().required);
    }

    #[test]
    fn test_unknown_kind_collects_fields_in_insertion_order() {
        let payload = json!({"message": "{0}-{1}", "a": "x", "b": "y"});
        let message = resolver().resolve("custom", &payload).unwrap();
        assert_eq!(message, "x-y");
    }

    #[test]
    fn test_unknown_kind_without_override_uses_fallback() {
        let message = resolver().resolve("custom", &json!({})).unwrap();
        assert_eq!(message, DefaultMessages::default().unknown_error);
    }
}
