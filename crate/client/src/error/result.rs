use std::fmt::Display;

use super::KeyProtectClientError;

pub type KeyProtectClientResult<R> = Result<R, KeyProtectClientError>;

pub trait KeyProtectResultHelper<T> {
    /// Add a context to the error message
    /// # Errors
    /// It returns the error with the context added
    fn context(self, context: &str) -> KeyProtectClientResult<T>;

    /// Add a context to the error message
    /// # Errors
    /// It returns the error with the context added
    fn with_context<D, O>(self, op: O) -> KeyProtectClientResult<T>
    where
        D: Display + Send + Sync + 'static,
        O: FnOnce() -> D;
}

impl<T, E> KeyProtectResultHelper<T> for Result<T, E>
where
    E: std::error::Error,
{
    fn context(self, context: &str) -> KeyProtectClientResult<T> {
        self.map_err(|e| KeyProtectClientError::Default(format!("{context}: {e}")))
    }

    fn with_context<D, O>(self, op: O) -> KeyProtectClientResult<T>
    where
        D: Display + Send + Sync + 'static,
        O: FnOnce() -> D,
    {
        self.map_err(|e| KeyProtectClientError::Default(format!("{}: {e}", op())))
    }
}

impl<T> KeyProtectResultHelper<T> for Option<T> {
    fn context(self, context: &str) -> KeyProtectClientResult<T> {
        self.ok_or_else(|| KeyProtectClientError::Default(context.to_owned()))
    }

    fn with_context<D, O>(self, op: O) -> KeyProtectClientResult<T>
    where
        D: Display + Send + Sync + 'static,
        O: FnOnce() -> D,
    {
        self.ok_or_else(|| KeyProtectClientError::Default(format!("{}", op())))
    }
}
