use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{
    StatusCode,
    header::{HeaderMap, HeaderValue},
};

use crate::{
    KeyProtectClientConfig, KeyProtectClientResult, KeyProtectRestClient, NoAuthAuthenticator,
    RequestDescriptor, Transport, TransportResponse,
};

/// Records every descriptor it is handed and answers with a canned response.
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<RequestDescriptor>>,
    response: TransportResponse,
}

impl RecordingTransport {
    pub(crate) fn new(status: StatusCode, body: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: TransportResponse {
                status,
                status_text: status.canonical_reason().unwrap_or_default().to_owned(),
                headers: HeaderMap::new(),
                body: body.as_bytes().to_vec(),
            },
        }
    }

    pub(crate) fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.response
            .headers
            .insert(name, HeaderValue::from_static(value));
        self
    }

    #[allow(clippy::unwrap_used)]
    pub(crate) fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request sent so far.
    #[allow(clippy::unwrap_used)]
    pub(crate) fn last_request(&self) -> RequestDescriptor {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    #[allow(clippy::unwrap_used)]
    async fn send(&self, request: RequestDescriptor) -> KeyProtectClientResult<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

/// A client on the default service URL, sending through `transport`.
#[allow(clippy::unwrap_used)]
pub(crate) fn recording_client(
    transport: RecordingTransport,
) -> (KeyProtectRestClient, Arc<RecordingTransport>) {
    let transport = Arc::new(transport);
    let client = KeyProtectRestClient::with_transport(
        KeyProtectClientConfig::default(),
        transport.clone(),
        Arc::new(NoAuthAuthenticator),
    )
    .unwrap();
    (client, transport)
}
