use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    KeyProtectClientError, KeyProtectClientResult,
    authenticator::{Authenticator, BearerTokenAuthenticator, NoAuthAuthenticator},
    error::result::KeyProtectResultHelper,
};

pub const KEY_PROTECT_CLIENT_CONF_ENV: &str = "KEY_PROTECT_CLIENT_CONF";
pub(crate) const KEY_PROTECT_CLIENT_CONF_DEFAULT_SYSTEM_PATH: &str = "/etc/ibm/key_protect.toml";
pub(crate) const KEY_PROTECT_CLIENT_CONF_PATH: &str = ".ibm/key_protect.toml";

/// Name under which the service reads its external configuration.
pub const DEFAULT_SERVICE_NAME: &str = "ibm_key_protect_api";
pub const DEFAULT_SERVICE_URL: &str = "https://us-south.kms.cloud.ibm.com";

/// How requests are authenticated.
#[derive(Serialize, Deserialize, Eq, PartialEq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    #[default]
    NoAuth,
    BearerToken,
}

impl FromStr for AuthType {
    type Err = KeyProtectClientError;

    fn from_str(s: &str) -> KeyProtectClientResult<Self> {
        match s.to_lowercase().as_str() {
            "noauth" => Ok(Self::NoAuth),
            "bearertoken" => Ok(Self::BearerToken),
            _ => Err(KeyProtectClientError::UnsupportedAuthentication(s.to_owned())),
        }
    }
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_owned()
}

/// Configuration of a Key Protect REST client.
///
/// It is read from a TOML file:
///
/// ```toml
/// service_url = "https://us-south.kms.cloud.ibm.com"
/// auth_type = "bearertoken"
/// bearer_token = "eyJraWQ..."
/// accept_invalid_certs = false
/// timeout_secs = 30
///
/// [default_headers]
/// X-Custom = "value"
/// ```
///
/// The path to the file is given explicitly, or through the
/// `KEY_PROTECT_CLIENT_CONF` environment variable. Otherwise
/// `~/.ibm/key_protect.toml` is used, then `/etc/ibm/key_protect.toml`. If no
/// file exists, a default one is created in the user's home.
#[derive(Serialize, Deserialize, Eq, PartialEq, Debug, Clone)]
pub struct KeyProtectClientConfig {
    pub service_url: String,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default)]
    pub auth_type: AuthType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    #[serde(default)]
    pub accept_invalid_certs: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Sent with every request, overridden by any header an operation sets.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_headers: BTreeMap<String, String>,
}

impl Default for KeyProtectClientConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_owned(),
            service_name: default_service_name(),
            auth_type: AuthType::NoAuth,
            bearer_token: None,
            accept_invalid_certs: false,
            timeout_secs: None,
            default_headers: BTreeMap::new(),
        }
    }
}

impl KeyProtectClientConfig {
    /// Configuration of a client talking to `service_url` without
    /// authentication.
    #[must_use]
    pub fn with_service_url(service_url: &str) -> Self {
        Self {
            service_url: service_url.to_owned(),
            ..Self::default()
        }
    }

    /// Resolve the path of the configuration file
    ///
    /// # Errors
    /// Return an error if the home directory cannot be determined
    pub fn location(conf: Option<PathBuf>) -> KeyProtectClientResult<PathBuf> {
        if let Some(conf) = conf {
            return Ok(conf);
        }
        if let Ok(conf) = env::var(KEY_PROTECT_CLIENT_CONF_ENV) {
            return Ok(PathBuf::from(conf));
        }
        let user_conf = default_conf_path()?;
        if user_conf.exists() {
            return Ok(user_conf);
        }
        let system_conf = PathBuf::from(KEY_PROTECT_CLIENT_CONF_DEFAULT_SYSTEM_PATH);
        if system_conf.exists() {
            return Ok(system_conf);
        }
        Ok(user_conf)
    }

    /// Load the configuration from the given path
    ///
    /// A default configuration is written when the file does not exist.
    ///
    /// # Errors
    /// Return an error if the configuration file cannot be read or if the
    /// configuration is invalid
    pub fn load(conf_path: Option<PathBuf>) -> KeyProtectClientResult<Self> {
        let conf_path = Self::location(conf_path)?;
        if !conf_path.exists() {
            debug!("Creating a default configuration at: {conf_path:?}");
            let conf = Self::default();
            conf.save(Some(conf_path))?;
            return Ok(conf);
        }
        debug!("Loading configuration from: {conf_path:?}");
        Self::from_toml(&conf_path)
    }

    /// Save the configuration to the given path
    ///
    /// # Errors
    /// Return an error if the configuration cannot be serialized or written
    pub fn save(&self, conf_path: Option<PathBuf>) -> KeyProtectClientResult<()> {
        let conf_path = Self::location(conf_path)?;
        if let Some(parent) = conf_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&conf_path, toml::to_string(self)?)
            .with_context(|| format!("Unable to write the configuration to {conf_path:?}"))?;
        debug!("Saved configuration to: {conf_path:?}");
        Ok(())
    }

    fn from_toml(path: &Path) -> KeyProtectClientResult<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Unable to read the configuration at {path:?}"))?;
        Ok(toml::from_str(&content)?)
    }

    /// Build a configuration from the environment of `service_name`:
    /// `<SERVICE_NAME>_URL`, `<SERVICE_NAME>_AUTH_TYPE`,
    /// `<SERVICE_NAME>_BEARER_TOKEN` and `<SERVICE_NAME>_DISABLE_SSL`.
    ///
    /// # Errors
    /// Return an error if the authentication type is not supported
    pub fn from_environment(service_name: &str) -> KeyProtectClientResult<Self> {
        let prefix = service_name.to_uppercase().replace('-', "_");
        let var = |suffix: &str| env::var(format!("{prefix}_{suffix}")).ok();

        let bearer_token = var("BEARER_TOKEN");
        let auth_type = match var("AUTH_TYPE") {
            Some(auth_type) => auth_type.parse()?,
            None if bearer_token.is_some() => AuthType::BearerToken,
            None => AuthType::NoAuth,
        };
        Ok(Self {
            service_url: var("URL").unwrap_or_else(|| DEFAULT_SERVICE_URL.to_owned()),
            service_name: service_name.to_owned(),
            auth_type,
            bearer_token,
            accept_invalid_certs: var("DISABLE_SSL").is_some_and(|v| v.eq_ignore_ascii_case("true")),
            ..Self::default()
        })
    }

    /// The authenticator described by this configuration.
    ///
    /// # Errors
    /// Return an error if a bearer token is expected but missing
    pub fn authenticator(&self) -> KeyProtectClientResult<Arc<dyn Authenticator>> {
        Ok(match self.auth_type {
            AuthType::NoAuth => Arc::new(NoAuthAuthenticator),
            AuthType::BearerToken => Arc::new(BearerTokenAuthenticator::new(
                self.bearer_token
                    .as_deref()
                    .context("A bearer token is required by the bearertoken authentication")?,
            )),
        })
    }
}

fn default_conf_path() -> KeyProtectClientResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(KEY_PROTECT_CLIENT_CONF_PATH))
        .context("Unable to determine the home directory")
}
