//! Positional placeholder formatting
//!
//! Message templates carry `{0}`, `{1}`, ... tokens that are substituted with
//! the ordered values accompanying a validation failure.

use serde_json::Value;

/// Substitute ordered values into the `{N}` tokens of a template.
///
/// # Rules
///
/// - Every occurrence of `{i}` is replaced with the display text of the
///   value at position `i` (replacement is global per index)
/// - Passes run in ascending index order; a pass never re-scans its own
///   inserted text, so substitution cannot recurse, but text inserted for
///   index `i` is visible to the passes for higher indices
/// - Tokens with an index beyond the supplied values are left unchanged
/// - With no values the template comes back unchanged
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use valex_core::format_template;
///
/// let limit = json!(3);
/// let formatted = format_template("Minimum length is {0}.", &[&limit]);
/// assert_eq!(formatted, "Minimum length is 3.");
/// ```
pub fn format_template(template: &str, values: &[&Value]) -> String {
    let mut text = template.to_string();

    for (index, value) in values.iter().enumerate() {
        let token = format!("{{{index}}}");
        if text.contains(&token) {
            text = text.replace(&token, &display_text(value));
        }
    }

    text
}

/// The display text of a payload value.
///
/// Strings render unquoted; everything else uses its compact JSON form
/// (`null`, `true`, `42`, `[1,2]`). Absent rule parameters reach the
/// formatter as `Value::Null` and therefore render as the literal `null`.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_placeholder() {
        let value = json!(18);
        assert_eq!(format_template("Must be at least {0}.", &[&value]), "Must be at least 18.");
    }

    #[test]
    fn test_string_values_render_unquoted() {
        let value = json!("name");
        assert_eq!(format_template("Field {0} is invalid.", &[&value]), "Field name is invalid.");
    }

    #[test]
    fn test_null_renders_as_literal() {
        assert_eq!(format_template("Got {0}.", &[&Value::Null]), "Got null.");
    }

    #[test]
    fn test_bool_and_number_render_in_json_form() {
        let flag = json!(true);
        let count = json!(2.5);
        assert_eq!(format_template("{0}/{1}", &[&flag, &count]), "true/2.5");
    }

    #[test]
    fn test_composite_values_render_as_compact_json() {
        let list = json!([1, 2]);
        let object = json!({"a": 1});
        assert_eq!(format_template("{0} {1}", &[&list, &object]), "[1,2] {\"a\":1}");
    }

    #[test]
    fn test_no_values_returns_template_unchanged() {
        assert_eq!(format_template("Hello {0}", &[]), "Hello {0}");
    }
}
