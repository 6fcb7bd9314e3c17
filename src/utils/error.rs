use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid contact record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    /// Carries a fixed constraint message, rendered verbatim.
    #[error("{message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AddressBookError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Input,
            Self::InvalidConfigValueError { .. } | Self::TomlError(_) => {
                ErrorCategory::Configuration
            }
            Self::CsvError(_) | Self::InvalidRecord { .. } | Self::SerializationError(_) => {
                ErrorCategory::Data
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { message } => message.trim_end().to_string(),
            Self::IoError(e) => format!("Could not access a file: {}", e),
            Self::InvalidRecord { line, reason } => {
                format!("Contact on line {} is invalid: {}", line, reason.trim_end())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the value you entered against the expected format",
            ErrorCategory::Configuration => "Review the command-line flags and the TOML config file",
            ErrorCategory::Data => "Fix the offending row in the contacts file and try again",
            ErrorCategory::System => "Make sure the contacts file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
