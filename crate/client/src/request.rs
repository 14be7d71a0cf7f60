use std::collections::BTreeMap;

use key_protect_structs::Prefer;
use reqwest::{
    Method, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::Serialize;
use url::Url;

use crate::{KeyProtectClientResult, key_protect_client_error};

pub const BLUEMIX_INSTANCE: &str = "bluemix-instance";
pub const CORRELATION_ID: &str = "correlation-id";
pub const X_KMS_KEY_RING: &str = "x-kms-key-ring";
pub const PREFER: &str = "prefer";
pub const SDK_ANALYTICS: &str = "x-ibmcloud-sdk-analytics";

/// Expected shape of a successful response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Json,
    Empty,
    Bytes,
}

/// A fully described service call, handed to a [`Transport`](crate::Transport).
///
/// Path parameters are kept verbatim and only percent-encoded when the final
/// URL is resolved.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub service_url: String,
    pub method: Method,
    /// URL template relative to the service URL, e.g. `/api/v2/keys/{id}`.
    pub url: &'static str,
    pub path: BTreeMap<&'static str, String>,
    pub query: Vec<(&'static str, String)>,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub response_type: ResponseType,
}

impl RequestDescriptor {
    #[must_use]
    pub fn new(service_url: &str, method: Method, url: &'static str) -> Self {
        Self {
            service_url: service_url.to_owned(),
            method,
            url,
            path: BTreeMap::new(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            response_type: ResponseType::Json,
        }
    }

    pub(crate) fn path_param(&mut self, name: &'static str, value: String) {
        self.path.insert(name, value);
    }

    /// Only set values make it to the query string.
    pub(crate) fn query_param<V: ToString>(&mut self, name: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.query.push((name, value.to_string()));
        }
    }

    /// Comma separated list parameter, omitted when unset.
    pub(crate) fn query_list<V: ToString>(&mut self, name: &'static str, values: Option<Vec<V>>) {
        if let Some(values) = values {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.query.push((name, joined));
        }
    }

    pub(crate) fn accept(&mut self, media_type: &'static str) {
        self.headers
            .insert(ACCEPT, HeaderValue::from_static(media_type));
    }

    pub(crate) fn content_type(&mut self, media_type: &'static str) {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(media_type));
    }

    /// Set `name` when `value` is given.
    pub(crate) fn header(
        &mut self,
        name: &'static str,
        value: Option<&str>,
    ) -> KeyProtectClientResult<()> {
        if let Some(value) = value {
            self.headers.insert(name, HeaderValue::from_str(value)?);
        }
        Ok(())
    }

    /// Tenant and tracing headers shared by every operation.
    pub(crate) fn instance_headers(
        &mut self,
        bluemix_instance: &str,
        correlation_id: Option<&str>,
        key_ring: Option<&str>,
    ) -> KeyProtectClientResult<()> {
        self.header(BLUEMIX_INSTANCE, Some(bluemix_instance))?;
        self.header(CORRELATION_ID, correlation_id)?;
        self.header(X_KMS_KEY_RING, key_ring)
    }

    pub(crate) fn prefer(&mut self, prefer: Option<Prefer>) {
        if let Some(prefer) = prefer {
            self.headers
                .insert(PREFER, HeaderValue::from_static(prefer.as_str()));
        }
    }

    /// Caller headers come last and replace any header set before.
    pub(crate) fn merge_headers(&mut self, headers: HeaderMap) {
        let mut current: Option<HeaderName> = None;
        for (name, value) in headers {
            if let Some(name) = name {
                self.headers.insert(name.clone(), value);
                current = Some(name);
            } else if let Some(name) = &current {
                self.headers.append(name, value);
            }
        }
    }

    pub(crate) fn json_body<B: Serialize>(&mut self, body: &B) -> KeyProtectClientResult<()> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(())
    }

    /// The absolute URL of the call: service URL, template with substituted
    /// and percent-encoded path parameters, then the query string.
    ///
    /// # Errors
    /// Return an error if the service URL is invalid or a path parameter of
    /// the template is missing
    pub fn resolve_url(&self) -> KeyProtectClientResult<Url> {
        let mut url = Url::parse(&self.service_url)?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                key_protect_client_error!("Invalid service URL: {}", self.service_url)
            })?;
            segments.pop_if_empty();
            for segment in self.url.trim_start_matches('/').split('/') {
                match segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                {
                    Some(name) => {
                        let value = self.path.get(name).ok_or_else(|| {
                            key_protect_client_error!(
                                "Missing path parameter {name} for {}",
                                self.url
                            )
                        })?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// The query value set for `name`, if any.
    #[must_use]
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw answer of a transport.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub status_text: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Result of an operation: the decoded body, when there is one, plus the
/// HTTP status and headers.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub result: Option<T>,
    pub status: StatusCode,
    pub status_text: String,
    pub headers: HeaderMap,
}

impl<T> DetailedResponse<T> {
    pub(crate) fn new(result: Option<T>, response: TransportResponse) -> Self {
        Self {
            result,
            status: response.status,
            status_text: response.status_text,
            headers: response.headers,
        }
    }
}
