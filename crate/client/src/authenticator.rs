use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::KeyProtectClientResult;

/// Adds credentials to an outgoing request.
///
/// Token acquisition and refresh happen outside of this crate: an
/// implementation is only asked to decorate the headers of each request.
pub trait Authenticator: Send + Sync {
    /// # Errors
    /// Return an error if the credentials cannot be turned into headers
    fn authenticate(&self, headers: &mut HeaderMap) -> KeyProtectClientResult<()>;

    fn authentication_type(&self) -> &'static str;
}

/// Leaves requests untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

impl Authenticator for NoAuthAuthenticator {
    fn authenticate(&self, _headers: &mut HeaderMap) -> KeyProtectClientResult<()> {
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        "noauth"
    }
}

/// Sends a fixed `Authorization: Bearer <token>` header.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    bearer_token: String,
}

impl BearerTokenAuthenticator {
    #[must_use]
    pub fn new(bearer_token: &str) -> Self {
        Self {
            bearer_token: bearer_token.to_owned(),
        }
    }

    /// Replace the token, e.g. after the caller refreshed it.
    pub fn set_bearer_token(&mut self, bearer_token: &str) {
        bearer_token.clone_into(&mut self.bearer_token);
    }
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("bearer_token", &"****")
            .finish()
    }
}

impl Authenticator for BearerTokenAuthenticator {
    fn authenticate(&self, headers: &mut HeaderMap) -> KeyProtectClientResult<()> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.bearer_token))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        "bearerToken"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use reqwest::header::{AUTHORIZATION, HeaderMap};

    use super::{Authenticator, BearerTokenAuthenticator, NoAuthAuthenticator};

    #[test]
    fn test_authenticators() {
        let mut headers = HeaderMap::new();
        NoAuthAuthenticator.authenticate(&mut headers).unwrap();
        assert!(headers.is_empty());

        let mut authenticator = BearerTokenAuthenticator::new("first");
        authenticator.set_bearer_token("second");
        authenticator.authenticate(&mut headers).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer second");
        assert!(!format!("{authenticator:?}").contains("second"));

        assert!(
            BearerTokenAuthenticator::new("bad\ntoken")
                .authenticate(&mut headers)
                .is_err()
        );
    }
}
