use thiserror::Error;

use crate::errors::domain::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Protocol error: {detail}")]
    Protocol {
        detail: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn protocol(detail: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Protocol {
            detail: detail.into(),
            source,
        }
    }

    /// Stable error code for the wire `Error` message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(err) => err.code(),
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Protocol { .. } => "BAD_REQUEST",
            AppError::Io(_) => "IO_ERROR",
        }
    }
}
