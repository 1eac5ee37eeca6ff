use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Fortune list is empty")]
    EmptyFortuneList,
}

impl HelloError {
    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            HelloError::IoError(e) => format!("Could not read file: {}", e),
            HelloError::SerializationError(e) => format!("Could not render output: {}", e),
            HelloError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            HelloError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
            HelloError::EmptyFortuneList => "The fortune list has no entries".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HelloError::IoError(_) => "Check that the fortune file exists and is readable",
            HelloError::SerializationError(_) => "Retry with --format text",
            HelloError::ConfigValidationError { .. } => {
                "Make sure the file is valid TOML with a `fortunes = [...]` array"
            }
            HelloError::InvalidConfigValueError { .. } => {
                "Remove blank entries from the fortune list"
            }
            HelloError::EmptyFortuneList => "Add at least one entry to `fortunes`",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            HelloError::SerializationError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, HelloError>;
