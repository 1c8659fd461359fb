//! Validation error kinds
//!
//! A failed validation rule is identified by a string tag (e.g. "required",
//! "minlength"). The closed set of tags this crate knows how to resolve is
//! modeled as an enum; any other tag lands in the [`ErrorKind::Unknown`]
//! bucket and resolves against the unknown-error template.

use std::fmt::{Display, Formatter};

/// A validation error tag.
///
/// Parsing is total: tags outside the closed set map to [`ErrorKind::Unknown`]
/// instead of failing, so resolution can always proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required control has no value.
    Required,
    /// The value is not a valid email address.
    Email,
    /// The value is shorter than the rule's minimum length.
    MinLength,
    /// The value is longer than the rule's maximum length.
    MaxLength,
    /// The number is below the rule's minimum.
    MinNumber,
    /// The number is above the rule's maximum.
    MaxNumber,
    /// The value does not match the rule's pattern.
    Pattern,
    /// The value is empty or whitespace-only.
    NoEmpty,
    /// Any tag outside the closed set.
    Unknown,
}

impl ErrorKind {
    /// Parse a wire tag into a kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use valex_core::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::parse("minlength"), ErrorKind::MinLength);
    /// assert_eq!(ErrorKind::parse("captcha"), ErrorKind::Unknown);
    /// ```
    pub fn parse(tag: &str) -> Self {
        match tag {
            "required" => Self::Required,
            "email" => Self::Email,
            "minlength" => Self::MinLength,
            "maxlength" => Self::MaxLength,
            "minNumber" => Self::MinNumber,
            "maxNumber" => Self::MaxNumber,
            "pattern" => Self::Pattern,
            "noEmpty" => Self::NoEmpty,
            _ => Self::Unknown,
        }
    }

    /// The wire tag for this kind, or `None` for the unknown bucket.
    pub fn as_tag(&self) -> Option<&'static str> {
        match self {
            Self::Required => Some("required"),
            Self::Email => Some("email"),
            Self::MinLength => Some("minlength"),
            Self::MaxLength => Some("maxlength"),
            Self::MinNumber => Some("minNumber"),
            Self::MaxNumber => Some("maxNumber"),
            Self::Pattern => Some("pattern"),
            Self::NoEmpty => Some("noEmpty"),
            Self::Unknown => None,
        }
    }
}

impl From<&str> for ErrorKind {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag().unwrap_or("unknown"))
    }
}
