use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Integer overflow: {a} + {b} does not fit in i32")]
    Overflow { a: i32, b: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::Overflow { .. } => ErrorSeverity::Medium,
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 程序結束碼，依嚴重程度對應
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::Overflow { a, b } => {
                format!("{} + {} is out of range (overflow policy: checked)", a, b)
            }
            CalcError::IoError(e) => format!("Could not write output: {}", e),
            CalcError::SerializationError(e) => format!("Could not render JSON: {}", e),
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::Overflow { .. } => "Use --overflow wrapping or --overflow saturating",
            CalcError::IoError(_) | CalcError::SerializationError(_) => {
                "Check that standard output is writable"
            }
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Check the config file path and its values"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
