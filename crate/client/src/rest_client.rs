use std::sync::Arc;

use reqwest::{
    Method,
    header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::{
    DEFAULT_SERVICE_NAME, KeyProtectClientConfig, KeyProtectClientResult,
    authenticator::Authenticator,
    request::{DetailedResponse, RequestDescriptor, ResponseType, SDK_ANALYTICS, TransportResponse},
    transport::{ReqwestTransport, Transport},
};

const SDK_USER_AGENT: &str = concat!("key-protect-rust-sdk/", env!("CARGO_PKG_VERSION"));
const SERVICE_VERSION: &str = "v2";

/// Client of the Key Protect v2 REST API.
///
/// The client only holds immutable configuration: every call builds its own
/// [`RequestDescriptor`], so a client can be shared between tasks.
#[derive(Clone)]
pub struct KeyProtectRestClient {
    pub config: KeyProtectClientConfig,
    service_url: String,
    default_headers: HeaderMap,
    transport: Arc<dyn Transport>,
    authenticator: Arc<dyn Authenticator>,
}

impl KeyProtectRestClient {
    /// Initialize a Key Protect REST client over HTTP, authenticated as
    /// described by the configuration.
    ///
    /// # Errors
    /// Return an error if the configuration is invalid or if the HTTP client
    /// cannot be instantiated.
    pub fn new(config: KeyProtectClientConfig) -> KeyProtectClientResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        let authenticator = config.authenticator()?;
        Self::with_transport(config, transport, authenticator)
    }

    /// Initialize a client with the given transport and authenticator.
    ///
    /// # Errors
    /// Return an error if a default header of the configuration is invalid.
    pub fn with_transport(
        config: KeyProtectClientConfig,
        transport: Arc<dyn Transport>,
        authenticator: Arc<dyn Authenticator>,
    ) -> KeyProtectClientResult<Self> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            default_headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }
        Ok(Self {
            service_url: config.service_url.trim_end_matches('/').to_owned(),
            config,
            default_headers,
            transport,
            authenticator,
        })
    }

    /// Initialize a client from the `IBM_KEY_PROTECT_API_*` environment
    /// variables.
    ///
    /// # Errors
    /// Return an error if the environment describes an unsupported
    /// configuration.
    pub fn from_environment() -> KeyProtectClientResult<Self> {
        Self::new(KeyProtectClientConfig::from_environment(
            DEFAULT_SERVICE_NAME,
        )?)
    }

    #[must_use]
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Point the client to another service URL. Requests already built keep
    /// the URL they were built with.
    pub fn set_service_url(&mut self, service_url: &str) {
        self.service_url = service_url.trim_end_matches('/').to_owned();
    }

    #[must_use]
    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    /// A descriptor carrying the client default headers and the SDK headers
    /// of `operation_id`.
    pub(crate) fn request(
        &self,
        method: Method,
        url: &'static str,
        operation_id: &str,
    ) -> KeyProtectClientResult<RequestDescriptor> {
        let mut request = RequestDescriptor::new(&self.service_url, method, url);
        request.headers.clone_from(&self.default_headers);
        request
            .headers
            .insert(USER_AGENT, HeaderValue::from_static(SDK_USER_AGENT));
        request.headers.insert(
            SDK_ANALYTICS,
            HeaderValue::from_str(&format!(
                "service_name={DEFAULT_SERVICE_NAME};service_version={SERVICE_VERSION};operation_id={operation_id}"
            ))?,
        );
        Ok(request)
    }

    async fn execute(
        &self,
        mut request: RequestDescriptor,
        response_type: ResponseType,
    ) -> KeyProtectClientResult<TransportResponse> {
        request.response_type = response_type;
        self.authenticator.authenticate(&mut request.headers)?;
        trace!("{}: {}{}", request.method, request.service_url, request.url);
        self.transport.send(request).await
    }

    /// Execute a call whose response, if any, is a JSON document.
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> KeyProtectClientResult<DetailedResponse<T>> {
        let response = self.execute(request, ResponseType::Json).await?;
        let result = if response.body.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&response.body)?)
        };
        Ok(DetailedResponse::new(result, response))
    }

    /// Execute a call that returns no content.
    pub(crate) async fn execute_empty(
        &self,
        request: RequestDescriptor,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        let response = self.execute(request, ResponseType::Empty).await?;
        Ok(DetailedResponse::new(None, response))
    }

    /// Execute a call whose response body is handed back untouched.
    pub(crate) async fn execute_bytes(
        &self,
        request: RequestDescriptor,
    ) -> KeyProtectClientResult<DetailedResponse<Vec<u8>>> {
        let mut response = self.execute(request, ResponseType::Bytes).await?;
        let body = std::mem::take(&mut response.body);
        let result = (!body.is_empty()).then_some(body);
        Ok(DetailedResponse::new(result, response))
    }
}
