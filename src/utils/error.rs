use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickemError {
    #[error("Request to upstream failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request cancelled before a response was received")]
    Cancelled,

    #[error("Request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Upstream returned status {status} for {url}")]
    Upstream { status: u16, url: String },

    #[error("Unable to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unhandled paginated result: total {total} >= limit {limit}")]
    UnsupportedPagination { total: u32, limit: u32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Upstream,
    Decode,
    Validation,
    Pagination,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PickemError {
    pub fn validation(message: impl Into<String>) -> Self {
        PickemError::Validation {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PickemError::Transport(_) | PickemError::Cancelled | PickemError::TimedOut(_) => {
                ErrorCategory::Transport
            }
            PickemError::Upstream { .. } => ErrorCategory::Upstream,
            PickemError::Decode(_) => ErrorCategory::Decode,
            PickemError::Validation { .. } => ErrorCategory::Validation,
            PickemError::UnsupportedPagination { .. } => ErrorCategory::Pagination,
            PickemError::ConfigError { .. }
            | PickemError::InvalidConfigValueError { .. }
            | PickemError::MissingConfigError { .. }
            | PickemError::Toml(_) => ErrorCategory::Configuration,
        }
    }

    /// `Medium` marks transient failures a caller may retry.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Upstream => match self {
                PickemError::Upstream { status, .. } if *status >= 500 => ErrorSeverity::Medium,
                _ => ErrorSeverity::High,
            },
            ErrorCategory::Decode | ErrorCategory::Validation | ErrorCategory::Pagination => {
                ErrorSeverity::High
            }
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PickemError::Transport(_) => "Could not reach the race data service".to_string(),
            PickemError::Cancelled => "The request was cancelled".to_string(),
            PickemError::TimedOut(limit) => {
                format!("The race data service did not answer within {}s", limit.as_secs())
            }
            PickemError::Upstream { status, .. } => {
                format!("The race data service answered with status {}", status)
            }
            PickemError::Decode(_) => {
                "The race data service sent a response in an unexpected format".to_string()
            }
            PickemError::Validation { message } => format!("Race data failed validation: {}", message),
            PickemError::UnsupportedPagination { .. } => {
                "The race schedule spans more than one page, which is not supported".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Transport => "Check network connectivity and try again",
            ErrorCategory::Upstream => "Check the season and race number, then try again later",
            ErrorCategory::Decode => "The upstream API format may have changed; inspect the raw response",
            ErrorCategory::Validation => "The upstream data is incomplete or inconsistent; try again once results are final",
            ErrorCategory::Pagination => "Request a narrower schedule or add pagination support",
            ErrorCategory::Configuration => "Fix the configuration file or environment variables",
        }
    }
}

pub type Result<T> = std::result::Result<T, PickemError>;
