use thiserror::Error;

use crate::representation::Representation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnumError {
    #[error("Overflow: {value} does not fit the {representation} representation of {enumeration}")]
    Overflow {
        enumeration: &'static str,
        representation: Representation,
        value: String,
    },
    #[error("Invalid {enumeration}: {message}")]
    Invalid {
        enumeration: &'static str,
        message: String,
    },
    #[error("Invalid format: '{0}' (expected one of g, G, d, D, x, X)")]
    InvalidFormat(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl DnumError {
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

pub type Result<T> = std::result::Result<T, DnumError>;

// Helper conversions
impl From<config::ConfigError> for DnumError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
