use thiserror::Error;

pub(crate) mod result;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum StructsError {
    #[error("{0}")]
    Default(String),

    #[error("Invalid key state: {0}")]
    InvalidKeyState(u8),

    #[error("Base64 decoding error: {0}")]
    Base64(String),
}

impl From<base64::DecodeError> for StructsError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64(err.to_string())
    }
}

/// Construct a structs error from a string.
#[macro_export]
macro_rules! structs_error {
    ($msg:literal) => {
        $crate::StructsError::Default(::core::format_args!($msg).to_string())
    };
    ($err:expr $(,)?) => ({
        $crate::StructsError::Default($err.to_string())
    });
    ($fmt:expr, $($arg:tt)*) => {
        $crate::StructsError::Default(::core::format_args!($fmt, $($arg)*).to_string())
    };
}

/// Return early with an error if a condition is not satisfied.
#[macro_export]
macro_rules! structs_bail {
    ($msg:literal) => {
        return ::core::result::Result::Err($crate::structs_error!($msg))
    };
    ($err:expr $(,)?) => {
        return ::core::result::Result::Err($err)
    };
    ($fmt:expr, $($arg:tt)*) => {
        return ::core::result::Result::Err($crate::structs_error!($fmt, $($arg)*))
    };
}
