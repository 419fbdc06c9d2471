use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog is full: at most {capacity} devices")]
    CatalogFull { capacity: usize },

    #[error("Input stream closed")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::InputClosed => ErrorSeverity::Low,
            CatalogError::CatalogFull { .. } => ErrorSeverity::Medium,
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CatalogError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Short message shown on stderr to the person at the console.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Ошибка ввода-вывода: {}", e),
            CatalogError::ConfigValidationError { field, message } => {
                format!("Ошибка конфигурации ({}): {}", field, message)
            }
            CatalogError::InvalidConfigValueError { field, value, reason } => {
                format!("Недопустимое значение '{}' для {}: {}", value, field, reason)
            }
            CatalogError::CatalogFull { capacity } => {
                format!("Достигнут предел в {} устройств", capacity)
            }
            CatalogError::InputClosed => "Ввод завершён".to_string(),
        }
    }

    /// The underlying cause without the variant prefix; IO errors give the raw OS message.
    pub fn reason(&self) -> String {
        match self {
            CatalogError::IoError(e) => e.to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check that the output directory exists and is writable",
            CatalogError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            CatalogError::InvalidConfigValueError { .. } => {
                "Fix the reported value on the command line or in the configuration file"
            }
            CatalogError::CatalogFull { .. } => "Raise --max-devices to collect more devices",
            CatalogError::InputClosed => "No action needed",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
