use std::io;

use key_protect_structs::StructsError;
use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

pub(crate) mod result;

#[derive(Error, Debug)]
pub enum KeyProtectClientError {
    #[error("{0}")]
    Default(String),

    /// Raised before any I/O when an operation is called without all of its
    /// required parameters.
    #[error("Missing required parameters: {0}")]
    MissingParameters(String),

    /// The service answered with a non success status. `body` is the raw
    /// response body, as sent by the service.
    #[error("REST Request Failed: {message}")]
    RequestFailed {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Unsupported authentication type: {0}")]
    UnsupportedAuthentication(String),

    #[error(transparent)]
    StructsError(#[from] StructsError),

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),

    #[error(transparent)]
    InvalidHeaderName(#[from] InvalidHeaderName),

    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),

    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
}

impl KeyProtectClientError {
    /// HTTP status of a failed service call.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw body of a failed service call.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Construct a client error from a string.
#[macro_export]
macro_rules! key_protect_client_error {
    ($msg:literal) => {
        $crate::KeyProtectClientError::Default(::core::format_args!($msg).to_string())
    };
    ($err:expr $(,)?) => ({
        $crate::KeyProtectClientError::Default($err.to_string())
    });
    ($fmt:expr, $($arg:tt)*) => {
        $crate::KeyProtectClientError::Default(::core::format_args!($fmt, $($arg)*).to_string())
    };
}

/// Return early with an error if a condition is not satisfied.
#[macro_export]
macro_rules! key_protect_client_bail {
    ($msg:literal) => {
        return ::core::result::Result::Err($crate::key_protect_client_error!($msg))
    };
    ($err:expr $(,)?) => {
        return ::core::result::Result::Err($err)
    };
    ($fmt:expr, $($arg:tt)*) => {
        return ::core::result::Result::Err($crate::key_protect_client_error!($fmt, $($arg)*))
    };
}
