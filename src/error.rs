use std::fmt;

/// Result type alias for properties operations
pub type ParseResult<T> = Result<T, PropertiesError>;

/// Errors that can occur while loading, querying, or persisting properties
#[derive(Debug, Clone)]
pub enum PropertiesError {
    /// The source path does not exist
    SourceNotFound { path: String },

    /// File I/O error other than a missing source
    Io { path: String, message: String },

    /// Key not found in the store
    KeyNotFound { key: String },

    /// Invalid number format
    InvalidNumber { value: String, reason: String },

    /// Invalid boolean format
    InvalidBool { value: String },

    /// JSON import/export error
    Json { message: String },

    /// Custom error with message
    Custom { message: String },
}

impl PropertiesError {
    /// Create a missing-source error
    pub fn source_not_found(path: impl Into<String>) -> Self {
        PropertiesError::SourceNotFound { path: path.into() }
    }

    /// Create an I/O error
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        PropertiesError::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a key not found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        PropertiesError::KeyNotFound { key: key.into() }
    }

    /// Create an invalid number error
    pub fn invalid_number(value: impl Into<String>, reason: impl Into<String>) -> Self {
        PropertiesError::InvalidNumber {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid boolean error
    pub fn invalid_bool(value: impl Into<String>) -> Self {
        PropertiesError::InvalidBool {
            value: value.into(),
        }
    }

    /// Create a JSON error
    pub fn json(message: impl Into<String>) -> Self {
        PropertiesError::Json {
            message: message.into(),
        }
    }

    /// Create a custom error
    pub fn custom(message: impl Into<String>) -> Self {
        PropertiesError::Custom {
            message: message.into(),
        }
    }
}

impl fmt::Display for PropertiesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertiesError::SourceNotFound { path } => {
                write!(f, "Source '{}' not found", path)
            }
            PropertiesError::Io { path, message } => {
                write!(f, "I/O error for '{}': {}", path, message)
            }
            PropertiesError::KeyNotFound { key } => {
                write!(f, "Property key '{}' not found", key)
            }
            PropertiesError::InvalidNumber { value, reason } => {
                write!(f, "Invalid number '{}': {}", value, reason)
            }
            PropertiesError::InvalidBool { value } => {
                write!(f, "Invalid boolean '{}'", value)
            }
            PropertiesError::Json { message } => {
                write!(f, "JSON error: {}", message)
            }
            PropertiesError::Custom { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for PropertiesError {}

impl From<std::io::Error> for PropertiesError {
    fn from(err: std::io::Error) -> Self {
        PropertiesError::Custom {
            message: err.to_string(),
        }
    }
}
