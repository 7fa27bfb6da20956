use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LeadError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::InputError {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LeadError::HttpError(_) => ErrorSeverity::Medium,
            LeadError::CsvError(_)
            | LeadError::SerializationError(_)
            | LeadError::InputError { .. } => ErrorSeverity::High,
            LeadError::ConfigError { .. }
            | LeadError::ConfigValidationError { .. }
            | LeadError::InvalidConfigValueError { .. }
            | LeadError::MissingConfigError { .. } => ErrorSeverity::High,
            LeadError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LeadError::HttpError(_) => {
                "Check TLS support and the configured user agent, then retry".to_string()
            }
            LeadError::CsvError(_) => {
                "Make sure the input CSV has a header row with 'name' and 'domain' columns"
                    .to_string()
            }
            LeadError::SerializationError(_) => {
                "Make sure the input JSON is an array of {\"name\", \"domain\"} objects".to_string()
            }
            LeadError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            LeadError::InputError { .. } => "Use a .csv or .json input file".to_string(),
            LeadError::ConfigError { .. } | LeadError::ConfigValidationError { .. } => {
                "Check the configuration file syntax".to_string()
            }
            LeadError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            LeadError::MissingConfigError { field } => format!("Provide a value for '{}'", field),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LeadError::IoError(e) => format!("File access failed: {}", e),
            LeadError::CsvError(_) | LeadError::SerializationError(_) => {
                format!("Could not read leads: {}", self)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LeadError>;
