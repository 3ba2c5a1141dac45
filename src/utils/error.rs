//! Error handling for mathnote
//!
//! Malformed notation never produces an error: the rewriter always returns
//! some string. The only failures are configuration mistakes (an unknown
//! profile, a rule pattern that does not compile) and I/O at the edges.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A profile name that is not registered was requested
    UnknownProfile { name: String, known: Vec<String> },
    /// A rewrite rule pattern failed to compile
    InvalidRule { rule: String, message: String },
    /// Invalid option value (delimiter names and the like)
    InvalidInput { message: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::UnknownProfile { name, known } => {
                if known.is_empty() {
                    write!(f, "Unknown profile '{}'", name)
                } else {
                    write!(
                        f,
                        "Unknown profile '{}' (available: {})",
                        name,
                        known.join(", ")
                    )
                }
            }
            ConversionError::InvalidRule { rule, message } => {
                write!(f, "Invalid rule '{}': {}", rule, message)
            }
            ConversionError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            ConversionError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        ConversionError::InternalError {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn unknown_profile<I, S>(name: impl Into<String>, known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConversionError::UnknownProfile {
            name: name.into(),
            known: known.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invalid_rule(rule: impl Into<String>, message: impl Into<String>) -> Self {
        ConversionError::InvalidRule {
            rule: rule.into(),
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ConversionError::InternalError {
            message: message.into(),
        }
    }

    /// Whether this error signals a setup mistake rather than bad I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ConversionError::UnknownProfile { .. } | ConversionError::InvalidRule { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_profile_display() {
        let err = ConversionError::unknown_profile("mathml", ["latex", "unicode"]);
        let msg = err.to_string();
        assert!(msg.contains("mathml"));
        assert!(msg.contains("latex, unicode"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unknown_profile_without_known_names() {
        let err = ConversionError::unknown_profile("x", Vec::<String>::new());
        assert_eq!(err.to_string(), "Unknown profile 'x'");
    }

    #[test]
    fn test_invalid_rule() {
        let err = ConversionError::invalid_rule("fractions", "unclosed group");
        let msg = err.to_string();
        assert!(msg.contains("fractions"));
        assert!(msg.contains("unclosed group"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: ConversionError = io.into();
        assert!(err.to_string().starts_with("IO error"));
        assert!(!err.is_configuration());
    }
}
