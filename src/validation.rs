//! Identity string validation for configured and command-line usernames and
//! hostnames.
//!
//! The interpreter's `set-username` / `set-hostname` commands accept any
//! single token. Values coming from configuration or CLI flags are checked
//! here first since they can contain whitespace or control characters.

use crate::terminal::IdentityField;

/// Longest accepted username or hostname, in characters.
pub const MAX_IDENTITY_LEN: usize = 32;

/// Identity validation errors with helpful messages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("{field} cannot be empty")]
    Empty { field: IdentityField },

    #[error("{field} is too long (maximum {max} characters)")]
    TooLong { field: IdentityField, max: usize },

    #[error("{field} cannot contain whitespace")]
    Whitespace { field: IdentityField },

    #[error("{field} contains invalid characters: {chars}")]
    InvalidCharacters { field: IdentityField, chars: String },
}

/// Validate a username or hostname. Accepted values are exactly what a
/// `set-username <value>` line could have produced.
pub fn validate_identity(field: IdentityField, value: &str) -> Result<(), IdentityError> {
    if value.is_empty() {
        return Err(IdentityError::Empty { field });
    }
    if value.chars().count() > MAX_IDENTITY_LEN {
        return Err(IdentityError::TooLong {
            field,
            max: MAX_IDENTITY_LEN,
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(IdentityError::Whitespace { field });
    }
    if value.chars().any(char::is_control) {
        let chars = value
            .chars()
            .filter(|c| c.is_control())
            .map(|c| format!("\\u{{{:04x}}}", c as u32))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(IdentityError::InvalidCharacters { field, chars });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identities() {
        for value in ["player", "alice", "x", "node-7.local", "ünïcode"] {
            assert!(
                validate_identity(IdentityField::Username, value).is_ok(),
                "Should accept '{}'",
                value
            );
        }
    }

    #[test]
    fn test_invalid_identities() {
        assert_eq!(
            validate_identity(IdentityField::Hostname, ""),
            Err(IdentityError::Empty {
                field: IdentityField::Hostname
            })
        );
        assert!(matches!(
            validate_identity(IdentityField::Username, "two words"),
            Err(IdentityError::Whitespace { .. })
        ));
        assert!(matches!(
            validate_identity(IdentityField::Username, &"a".repeat(MAX_IDENTITY_LEN + 1)),
            Err(IdentityError::TooLong { max: MAX_IDENTITY_LEN, .. })
        ));
        assert!(matches!(
            validate_identity(IdentityField::Username, "bell\u{7}"),
            Err(IdentityError::InvalidCharacters { .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = validate_identity(IdentityField::Hostname, "a b").unwrap_err();
        assert_eq!(err.to_string(), "Hostname cannot contain whitespace");
    }
}
