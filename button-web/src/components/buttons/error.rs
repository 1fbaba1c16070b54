use std::error::Error;
use std::fmt;

/// Raised when a button configuration token does not parse. Both kinds are
/// fatal to config construction; there is no default substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonError {
    InvalidSize(String),
    InvalidType(String),
}

impl fmt::Display for ButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonError::InvalidSize(token) => {
                write!(f, "invalid size: {}", token)
            }
            ButtonError::InvalidType(token) => {
                write!(f, "invalid type: {}", token)
            }
        }
    }
}

impl Error for ButtonError {}
