use key_protect_structs::{Collection, KeyAliasResource, KeyRing, media_types::APPLICATION_JSON};
use reqwest::{Method, header::HeaderMap};
use tracing::instrument;

use crate::{DetailedResponse, KeyProtectClientResult, KeyProtectRestClient};

/// Parameters of the alias operations. `alias` must be unique within the
/// instance.
#[derive(Debug, Clone, Default)]
pub struct KeyAliasParams {
    pub id: Option<String>,
    pub alias: Option<String>,
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

pub type CreateKeyAliasParams = KeyAliasParams;
pub type DeleteKeyAliasParams = KeyAliasParams;

#[derive(Debug, Clone, Default)]
pub struct ListKeyRingsParams {
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct KeyRingParams {
    pub key_ring_id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub headers: HeaderMap,
}

pub type CreateKeyRingParams = KeyRingParams;
pub type DeleteKeyRingParams = KeyRingParams;

impl KeyProtectRestClient {
    /// Bind an alias to a key.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id, alias = ?params.alias), err)]
    pub async fn create_key_alias(
        &self,
        params: CreateKeyAliasParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<KeyAliasResource>>> {
        required_params!(params {
            id,
            alias,
            bluemix_instance
        });
        let mut request = self.request(
            Method::POST,
            "/api/v2/keys/{id}/aliases/{alias}",
            "createKeyAlias",
        )?;
        request.path_param("id", id);
        request.path_param("alias", alias);
        request.accept(APPLICATION_JSON);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id, alias = ?params.alias), err)]
    pub async fn delete_key_alias(
        &self,
        params: DeleteKeyAliasParams,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        required_params!(params {
            id,
            alias,
            bluemix_instance
        });
        let mut request = self.request(
            Method::DELETE,
            "/api/v2/keys/{id}/aliases/{alias}",
            "deleteKeyAlias",
        )?;
        request.path_param("id", id);
        request.path_param("alias", alias);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.merge_headers(params.headers);
        self.execute_empty(request).await
    }

    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, err)]
    pub async fn list_key_rings(
        &self,
        params: ListKeyRingsParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<KeyRing>>> {
        required_params!(params { bluemix_instance });
        let mut request = self.request(Method::GET, "/api/v2/key_rings", "listKeyRings")?;
        request.accept(APPLICATION_JSON);
        request.instance_headers(&bluemix_instance, params.correlation_id.as_deref(), None)?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(key_ring_id = ?params.key_ring_id), err)]
    pub async fn create_key_ring(
        &self,
        params: CreateKeyRingParams,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        self.key_ring_action(params, Method::POST, "createKeyRing")
            .await
    }

    /// Delete a key ring. The service refuses it while the ring holds keys.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(key_ring_id = ?params.key_ring_id), err)]
    pub async fn delete_key_ring(
        &self,
        params: DeleteKeyRingParams,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        self.key_ring_action(params, Method::DELETE, "deleteKeyRing")
            .await
    }

    async fn key_ring_action(
        &self,
        params: KeyRingParams,
        method: Method,
        operation_id: &str,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        required_params!(params {
            key_ring_id,
            bluemix_instance
        });
        let mut request = self.request(method, "/api/v2/key_rings/{key-ring-id}", operation_id)?;
        request.path_param("key-ring-id", key_ring_id);
        request.instance_headers(&bluemix_instance, params.correlation_id.as_deref(), None)?;
        request.merge_headers(params.headers);
        self.execute_empty(request).await
    }
}
