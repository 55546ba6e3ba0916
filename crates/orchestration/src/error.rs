//! Command errors

use orchestration_core::ClientError;
use thiserror::Error;

/// Why a resource type command failed
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Template type invalid: {0}")]
    InvalidTemplateType(String),

    #[error("Malformed parameter({0}). Use the key=value format.")]
    MalformedFilter(String),

    #[error("Resource type not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Remote(#[from] ClientError),
}

impl CommandError {
    /// Bad local input, rejected before contacting the service
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CommandError::InvalidTemplateType(_) | CommandError::MalformedFilter(_)
        )
    }

    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        if self.is_invalid_argument() {
            2
        } else {
            1
        }
    }
}
