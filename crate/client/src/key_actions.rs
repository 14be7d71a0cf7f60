use key_protect_structs::{
    Collection, Key, KeyActionRewrapBody, KeyActionRotateBody, KeyActionUnwrapBody,
    KeyActionWrapBody, Prefer, RewrapKeyResponse, UnwrapKeyResponse, WrapKeyResponse,
    media_types::{
        APPLICATION_JSON, KEY_ACTION_REWRAP_MEDIA_TYPE, KEY_ACTION_ROTATE_MEDIA_TYPE,
        KEY_ACTION_UNWRAP_MEDIA_TYPE, KEY_ACTION_WRAP_MEDIA_TYPE,
    },
};
use reqwest::{Method, header::HeaderMap};
use tracing::instrument;

use crate::{DetailedResponse, KeyProtectClientResult, KeyProtectRestClient};

#[derive(Debug, Clone, Default)]
pub struct WrapKeyParams {
    /// The root key ID or alias.
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    /// Without a body, or without plaintext in it, the service generates a
    /// new data encryption key.
    pub key_action_wrap_body: Option<KeyActionWrapBody>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct UnwrapKeyParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub key_action_unwrap_body: Option<KeyActionUnwrapBody>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct RewrapKeyParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub key_action_rewrap_body: Option<KeyActionRewrapBody>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct RotateKeyParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    /// New key material, required to rotate an imported root key.
    pub key_action_rotate_body: Option<KeyActionRotateBody>,
    pub correlation_id: Option<String>,
    pub prefer: Option<Prefer>,
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

/// Parameters shared by the key actions without a body.
#[derive(Debug, Clone, Default)]
pub struct KeyActionParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

pub type SetKeyForDeletionParams = KeyActionParams;
pub type UnsetKeyForDeletionParams = KeyActionParams;
pub type EnableKeyParams = KeyActionParams;
pub type DisableKeyParams = KeyActionParams;
pub type SyncAssociatedResourcesParams = KeyActionParams;

impl KeyProtectRestClient {
    /// Wrap a data encryption key with a root key.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn wrap_key(
        &self,
        params: WrapKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<WrapKeyResponse>> {
        required_params!(params { id, bluemix_instance });
        let mut request =
            self.request(Method::POST, "/api/v2/keys/{id}/actions/wrap", "wrapKey")?;
        request.path_param("id", id);
        request.accept(APPLICATION_JSON);
        request.content_type(KEY_ACTION_WRAP_MEDIA_TYPE);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        if let Some(body) = &params.key_action_wrap_body {
            request.json_body(body)?;
        }
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// Unwrap a wrapped data encryption key.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn unwrap_key(
        &self,
        params: UnwrapKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<UnwrapKeyResponse>> {
        required_params!(params {
            id,
            bluemix_instance,
            key_action_unwrap_body
        });
        let mut request =
            self.request(Method::POST, "/api/v2/keys/{id}/actions/unwrap", "unwrapKey")?;
        request.path_param("id", id);
        request.accept(APPLICATION_JSON);
        request.content_type(KEY_ACTION_UNWRAP_MEDIA_TYPE);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.json_body(&key_action_unwrap_body)?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// Unwrap and rewrap a data encryption key with the latest version of the
    /// root key.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn rewrap_key(
        &self,
        params: RewrapKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<RewrapKeyResponse>> {
        required_params!(params {
            id,
            bluemix_instance,
            key_action_rewrap_body
        });
        let mut request =
            self.request(Method::POST, "/api/v2/keys/{id}/actions/rewrap", "rewrapKey")?;
        request.path_param("id", id);
        request.accept(APPLICATION_JSON);
        request.content_type(KEY_ACTION_REWRAP_MEDIA_TYPE);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.json_body(&key_action_rewrap_body)?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// Create a new version of a root key. With
    /// `Prefer: return=representation` the rotated key is returned.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn rotate_key(
        &self,
        params: RotateKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<Key>>> {
        required_params!(params { id, bluemix_instance });
        let mut request =
            self.request(Method::POST, "/api/v2/keys/{id}/actions/rotate", "rotateKey")?;
        request.path_param("id", id);
        request.content_type(KEY_ACTION_ROTATE_MEDIA_TYPE);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.prefer(params.prefer);
        if let Some(body) = &params.key_action_rotate_body {
            request.json_body(body)?;
        }
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// First authorization of a dual authorization deletion.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn set_key_for_deletion(
        &self,
        params: SetKeyForDeletionParams,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        self.key_action(
            params,
            "/api/v2/keys/{id}/actions/setKeyForDeletion",
            "setKeyForDeletion",
        )
        .await
    }

    /// Cancel a pending dual authorization deletion.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn unset_key_for_deletion(
        &self,
        params: UnsetKeyForDeletionParams,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        self.key_action(
            params,
            "/api/v2/keys/{id}/actions/unsetKeyForDeletion",
            "unsetKeyForDeletion",
        )
        .await
    }

    /// Move a suspended key back to the active state.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn enable_key(
        &self,
        params: EnableKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        self.key_action(params, "/api/v2/keys/{id}/actions/enable", "enableKey")
            .await
    }

    /// Suspend an active key; it can no longer wrap or unwrap.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn disable_key(
        &self,
        params: DisableKeyParams,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        self.key_action(params, "/api/v2/keys/{id}/actions/disable", "disableKey")
            .await
    }

    /// Ask the service to notify the resources protected by a key of its
    /// current state.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn sync_associated_resources(
        &self,
        params: SyncAssociatedResourcesParams,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        self.key_action(
            params,
            "/api/v2/keys/{id}/actions/sync",
            "syncAssociatedResources",
        )
        .await
    }

    async fn key_action(
        &self,
        params: KeyActionParams,
        url: &'static str,
        operation_id: &str,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        required_params!(params { id, bluemix_instance });
        let mut request = self.request(Method::POST, url, operation_id)?;
        request.path_param("id", id);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.merge_headers(params.headers);
        self.execute_empty(request).await
    }
}
