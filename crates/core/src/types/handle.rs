//! Product handle type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Handle`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HandleError {
    /// The input string is empty.
    #[error("handle cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("handle must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside the handle alphabet.
    #[error("handle may only contain lowercase letters, digits, and hyphens (found {found:?})")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
}

/// A URL-safe product handle (slug).
///
/// Handles identify products in storefront URLs and GraphQL lookups. The
/// commerce backend restricts them to lowercase ASCII letters, digits, and
/// hyphens; validating here means handles from configuration can be spliced
/// into GraphQL documents (as quoted strings and as field aliases) without
/// further escaping.
///
/// ## Examples
///
/// ```
/// use rootwear_core::Handle;
///
/// let handle = Handle::parse("hello-world-embroidered-tech-t-shirt").unwrap();
/// assert_eq!(handle.as_str(), "hello-world-embroidered-tech-t-shirt");
///
/// assert!(Handle::parse("").is_err());
/// assert!(Handle::parse("Uppercase-Handle").is_err());
/// assert!(Handle::parse("spaces not allowed").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    /// Maximum length of a handle.
    pub const MAX_LENGTH: usize = 255;

    /// Parse a `Handle` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 255 characters,
    /// or contains anything but lowercase ASCII letters, digits, and hyphens.
    pub fn parse(s: &str) -> Result<Self, HandleError> {
        if s.is_empty() {
            return Err(HandleError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(HandleError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(found) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(HandleError::InvalidCharacter { found });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Handle` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Handle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_handles() {
        assert!(Handle::parse("hack-hoodie").is_ok());
        assert!(Handle::parse("terminal-tee-2").is_ok());
        assert!(Handle::parse("hello-world-embroidered-tech-t-shirt").is_ok());
        assert!(Handle::parse("a").is_ok());
        assert!(Handle::parse("404").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Handle::parse(""), Err(HandleError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(256);
        assert!(matches!(
            Handle::parse(&long),
            Err(HandleError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_uppercase() {
        assert!(matches!(
            Handle::parse("Hack-Hoodie"),
            Err(HandleError::InvalidCharacter { found: 'H' })
        ));
    }

    #[test]
    fn test_parse_rejects_spaces_and_punctuation() {
        assert!(matches!(
            Handle::parse("hack hoodie"),
            Err(HandleError::InvalidCharacter { found: ' ' })
        ));
        assert!(matches!(
            Handle::parse("hack_hoodie"),
            Err(HandleError::InvalidCharacter { found: '_' })
        ));
        assert!(matches!(
            Handle::parse("hoodie\"injection"),
            Err(HandleError::InvalidCharacter { found: '"' })
        ));
    }

    #[test]
    fn test_display_and_from_str() {
        let handle: Handle = "shell-cap".parse().unwrap();
        assert_eq!(format!("{handle}"), "shell-cap");
        assert_eq!(handle.as_str(), "shell-cap");
    }

    #[test]
    fn test_serde_roundtrip() {
        let handle = Handle::parse("hack-hoodie").unwrap();
        let json = serde_json::to_string(&handle).unwrap();
        assert_eq!(json, "\"hack-hoodie\"");

        let parsed: Handle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, handle);
    }
}
