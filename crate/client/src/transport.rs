use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{trace, warn};

use crate::{
    KeyProtectClientConfig, KeyProtectClientError, KeyProtectClientResult,
    request::{RequestDescriptor, ResponseType, TransportResponse},
};

/// Executes a [`RequestDescriptor`] against the service.
///
/// Non success statuses must be reported as
/// [`KeyProtectClientError::RequestFailed`] carrying the unmodified body.
/// Implementations do not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestDescriptor) -> KeyProtectClientResult<TransportResponse>;
}

/// [`Transport`] over a `reqwest` HTTP client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// # Errors
    /// Return an error if the underlying HTTP client cannot be built
    pub fn new(config: &KeyProtectClientConfig) -> KeyProtectClientResult<Self> {
        let mut builder = Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> KeyProtectClientResult<TransportResponse> {
        let url = request.resolve_url()?;
        trace!("{}: {url}", request.method);

        let mut builder = self
            .client
            .request(request.method.clone(), url.clone())
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} {url} failed with status {status}", request.method);
            return Err(handle_error(request.url, response).await);
        }
        let headers = response.headers().clone();
        // the body of a no content operation is discarded unread
        let body = match request.response_type {
            ResponseType::Empty => Vec::new(),
            ResponseType::Json | ResponseType::Bytes => response.bytes().await?.to_vec(),
        };
        Ok(TransportResponse {
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            headers,
            body,
        })
    }
}

/// Some errors are returned by proxies or gateways with an empty body. In that
/// case, make the error clearer for the caller; otherwise keep the service
/// body as is.
pub async fn handle_error(endpoint: &str, response: Response) -> KeyProtectClientError {
    trace!("Error response received on {endpoint}: Response: {response:?}");
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return e.into(),
    };
    let message = format!(
        "{}: {}",
        endpoint,
        if body.is_empty() {
            match status {
                StatusCode::NOT_FOUND => "Key Protect endpoint does not exist".to_owned(),
                StatusCode::UNAUTHORIZED => "Bad authorization token".to_owned(),
                _ => status.to_string(),
            }
        } else {
            body.clone()
        }
    );
    KeyProtectClientError::RequestFailed {
        status: status.as_u16(),
        message,
        body,
    }
}
