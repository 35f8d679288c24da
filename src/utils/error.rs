use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Content file error in '{field}': {message}")]
    ContentParseError { field: String, message: String },

    #[error("Missing required value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Content,
    Configuration,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ZipError(_) | SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::ContentParseError { .. } => ErrorCategory::Content,
            SiteError::MissingConfigError { .. } | SiteError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SiteError::SerializationError(_)
            | SiteError::TomlSerializeError(_)
            | SiteError::RenderError { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Content => ErrorSeverity::High,
            ErrorCategory::Io => match self {
                SiteError::IoError(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                    ErrorSeverity::Medium
                }
                _ => ErrorSeverity::Critical,
            },
            ErrorCategory::Rendering => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::IoError(_) | SiteError::ZipError(_) => {
                "Check that the output directory is writable and has free space"
            }
            SiteError::ContentParseError { .. } => {
                "Fix the content file syntax, or run --export-content to get a valid template"
            }
            SiteError::MissingConfigError { .. } => "Add the missing value to the content file",
            SiteError::InvalidConfigValueError { .. } => {
                "Correct the value; links must be absolute http(s) or mailto URLs"
            }
            SiteError::SerializationError(_)
            | SiteError::TomlSerializeError(_)
            | SiteError::RenderError { .. } => "Re-run with --verbose and report the failure",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::IoError(e) => format!("Could not read or write a file: {}", e),
            SiteError::ZipError(e) => format!("Could not build the site archive: {}", e),
            SiteError::ContentParseError { field, message } => {
                format!("The content file could not be parsed ({}): {}", field, message)
            }
            SiteError::MissingConfigError { field } => {
                format!("The content is missing '{}'", field)
            }
            SiteError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' has an invalid value '{}': {}", field, value, reason),
            other => format!("Site generation failed: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
