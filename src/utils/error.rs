use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReduceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Integer overflow combining x={acc}, y={value}")]
    Overflow { acc: i64, value: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Arithmetic,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReduceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReduceError::ConfigError { .. }
            | ReduceError::ConfigValidationError { .. }
            | ReduceError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ReduceError::Overflow { .. } => ErrorCategory::Arithmetic,
            ReduceError::IoError(_) | ReduceError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 標準輸出被關閉 (例如 `| head`) 不算真正失敗
            ReduceError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            ReduceError::IoError(_) | ReduceError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
            ReduceError::Overflow { .. } => ErrorSeverity::Medium,
            ReduceError::ConfigError { .. }
            | ReduceError::ConfigValidationError { .. }
            | ReduceError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ReduceError::IoError(_) => {
                "Check that stdout is writable and the config file is readable".to_string()
            }
            ReduceError::SerializationError(_) => {
                "Retry with --format text to bypass JSON output".to_string()
            }
            ReduceError::ConfigError { .. } | ReduceError::ConfigValidationError { .. } => {
                "Check the TOML syntax and that the [fold] section exists".to_string()
            }
            ReduceError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            ReduceError::Overflow { .. } => {
                "Use smaller numbers or a smaller --initial value".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReduceError::IoError(e) => format!("Could not read or write data: {}", e),
            ReduceError::SerializationError(e) => format!("Could not encode the report: {}", e),
            ReduceError::ConfigError { message } => format!("Invalid configuration: {}", message),
            ReduceError::ConfigValidationError { field, message } => {
                format!("Invalid configuration in '{}': {}", field, message)
            }
            ReduceError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' = '{}' is not allowed: {}", field, value, reason),
            ReduceError::Overflow { acc, value } => format!(
                "The running total overflowed while adding {} to {}",
                value, acc
            ),
        }
    }

    /// Whether the error should be reported to the user and fail the run.
    pub fn is_failure(&self) -> bool {
        self.severity() > ErrorSeverity::Low
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReduceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_is_arithmetic_medium() {
        let err = ReduceError::Overflow {
            acc: i64::MAX,
            value: 1,
        };
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("x=9223372036854775807, y=1"));
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = ReduceError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "unsupported".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("output.format"));
    }

    #[test]
    fn test_broken_pipe_is_not_a_failure() {
        let err = ReduceError::IoError(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(!err.is_failure());
        assert_eq!(err.exit_code(), 0);

        let err = ReduceError::IoError(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.is_failure());
        assert_eq!(err.exit_code(), 3);
    }
}
