use crate::constants::{HTTP_INTERNAL_SERVER_ERROR, STATUS_INTERNAL};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WhiskError {
    #[error("No bearer token configured, set WHISK_BEARER_TOKEN")]
    MissingToken,

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Whisk API error {code} ({status}): {message}")]
    Api {
        code: i64,
        message: String,
        status: String,
    },

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Response contained no generated images")]
    EmptyResponse,
}

impl WhiskError {
    /// True when the remote side reported an internal server error.
    pub fn is_internal(&self) -> bool {
        match self {
            WhiskError::Api { code, status, .. } => {
                *code == HTTP_INTERNAL_SERVER_ERROR || status == STATUS_INTERNAL
            }
            _ => false,
        }
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            WhiskError::Api { code, .. } => Some(*code),
            WhiskError::UnexpectedStatus { status, .. } => Some(i64::from(*status)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WhiskError>;
