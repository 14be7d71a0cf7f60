use key_protect_structs::{
    Collection, CreateKeyResource, Key, KeyPatchBody, KeyRestoreBody, KeyState, KeyVersion,
    Prefer,
    media_types::{APPLICATION_JSON, KEY_ACTION_RESTORE_MEDIA_TYPE, KEY_MEDIA_TYPE},
};
use reqwest::{Method, header::HeaderMap};
use tracing::instrument;

use crate::{DetailedResponse, KeyProtectClientResult, KeyProtectRestClient};

/// Parameters of [`KeyProtectRestClient::create_key`].
#[derive(Debug, Clone, Default)]
pub struct CreateKeyParams {
    /// The Key Protect instance.
    pub bluemix_instance: Option<String>,
    /// The key collection to create; usually built with
    /// [`CreateKeyResource::into_collection`].
    pub body: Option<Collection<CreateKeyResource>>,
    pub correlation_id: Option<String>,
    pub prefer: Option<Prefer>,
    /// Key ring to create the key in. Keys created without it land in the
    /// `default` ring.
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct GetKeysParams {
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    /// Number of keys to retrieve, 200 by default on the service side.
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub state: Option<Vec<KeyState>>,
    pub extractable: Option<bool>,
    pub headers: HeaderMap,
}

/// Parameters of [`KeyProtectRestClient::get_key_collection_metadata`]. The
/// number of keys is returned in the `Key-Total` response header.
#[derive(Debug, Clone, Default)]
pub struct GetKeyCollectionMetadataParams {
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub state: Option<Vec<KeyState>>,
    pub extractable: Option<bool>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct GetKeyParams {
    /// The key ID or one of its aliases.
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct PatchKeyParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub key_patch_body: Option<KeyPatchBody>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteKeyParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub prefer: Option<Prefer>,
    /// Delete the key even if it protects registered resources.
    pub force: Option<bool>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct GetKeyMetadataParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct PurgeKeyParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub prefer: Option<Prefer>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct RestoreKeyParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    /// New key material, required to restore an imported key.
    pub key_restore_body: Option<KeyRestoreBody>,
    pub correlation_id: Option<String>,
    pub prefer: Option<Prefer>,
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct GetKeyVersionsParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub headers: HeaderMap,
}

impl KeyProtectRestClient {
    /// Create a root or a standard key, generated by the service or imported.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, err)]
    pub async fn create_key(
        &self,
        params: CreateKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<Key>>> {
        required_params!(params { bluemix_instance, body });
        let mut request = self.request(Method::POST, "/api/v2/keys", "createKey")?;
        request.accept(APPLICATION_JSON);
        request.content_type(KEY_MEDIA_TYPE);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.prefer(params.prefer);
        request.json_body(&body)?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// List the keys of an instance. Payloads are never returned.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, err)]
    pub async fn get_keys(
        &self,
        params: GetKeysParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<Key>>> {
        required_params!(params { bluemix_instance });
        let mut request = self.request(Method::GET, "/api/v2/keys", "getKeys")?;
        request.query_param("limit", params.limit);
        request.query_param("offset", params.offset);
        request.query_list("state", params.state.map(states_to_codes));
        request.query_param("extractable", params.extractable);
        request.accept(APPLICATION_JSON);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// `HEAD /keys`: only the response headers are of interest.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, err)]
    pub async fn get_key_collection_metadata(
        &self,
        params: GetKeyCollectionMetadataParams,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        required_params!(params { bluemix_instance });
        let mut request =
            self.request(Method::HEAD, "/api/v2/keys", "getKeyCollectionMetadata")?;
        request.query_list("state", params.state.map(states_to_codes));
        request.query_param("extractable", params.extractable);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.merge_headers(params.headers);
        self.execute_empty(request).await
    }

    /// Retrieve a key, with its payload for a standard key.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn get_key(
        &self,
        params: GetKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<Key>>> {
        required_params!(params { id, bluemix_instance });
        let mut request = self.request(Method::GET, "/api/v2/keys/{id}", "getKey")?;
        request.path_param("id", id);
        request.accept(APPLICATION_JSON);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// Update a key; currently only moves it to another key ring.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn patch_key(
        &self,
        params: PatchKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<Key>>> {
        required_params!(params { id, bluemix_instance });
        let mut request = self.request(Method::PATCH, "/api/v2/keys/{id}", "patchKey")?;
        request.path_param("id", id);
        request.accept(APPLICATION_JSON);
        request.content_type(KEY_MEDIA_TYPE);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        if let Some(body) = &params.key_patch_body {
            request.json_body(body)?;
        }
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// Destroy a key. The key moves to the `Destroyed` state and can be
    /// restored for 30 days.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn delete_key(
        &self,
        params: DeleteKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<Key>>> {
        required_params!(params { id, bluemix_instance });
        let mut request = self.request(Method::DELETE, "/api/v2/keys/{id}", "deleteKey")?;
        request.path_param("id", id);
        request.query_param("force", params.force);
        request.accept(APPLICATION_JSON);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.prefer(params.prefer);
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// Retrieve the metadata of a key, never its payload.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn get_key_metadata(
        &self,
        params: GetKeyMetadataParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<Key>>> {
        required_params!(params { id, bluemix_instance });
        let mut request =
            self.request(Method::GET, "/api/v2/keys/{id}/metadata", "getKeyMetadata")?;
        request.path_param("id", id);
        request.accept(APPLICATION_JSON);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// Permanently remove a destroyed key. The service refuses it during the
    /// first four hours after deletion.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn purge_key(
        &self,
        params: PurgeKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<Key>>> {
        required_params!(params { id, bluemix_instance });
        let mut request =
            self.request(Method::DELETE, "/api/v2/keys/{id}/purge", "purgeKey")?;
        request.path_param("id", id);
        request.accept(APPLICATION_JSON);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.prefer(params.prefer);
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// Restore a destroyed key. The raw response body is returned.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn restore_key(
        &self,
        params: RestoreKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<Vec<u8>>> {
        required_params!(params { id, bluemix_instance });
        let mut request =
            self.request(Method::POST, "/api/v2/keys/{id}/restore", "restoreKey")?;
        request.path_param("id", id);
        request.accept(KEY_MEDIA_TYPE);
        request.content_type(KEY_ACTION_RESTORE_MEDIA_TYPE);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.prefer(params.prefer);
        if let Some(body) = &params.key_restore_body {
            request.json_body(body)?;
        }
        request.merge_headers(params.headers);
        self.execute_bytes(request).await
    }

    /// List the versions of a key, most recent first.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn get_key_versions(
        &self,
        params: GetKeyVersionsParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<KeyVersion>>> {
        required_params!(params { id, bluemix_instance });
        let mut request =
            self.request(Method::GET, "/api/v2/keys/{id}/versions", "getKeyVersions")?;
        request.path_param("id", id);
        request.query_param("limit", params.limit);
        request.query_param("offset", params.offset);
        request.accept(APPLICATION_JSON);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }
}

fn states_to_codes(states: Vec<KeyState>) -> Vec<u8> {
    states.into_iter().map(u8::from).collect()
}
