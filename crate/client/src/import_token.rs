use key_protect_structs::{
    GetImportToken, ImportToken, ImportTokenCreateBody, media_types::APPLICATION_JSON,
};
use reqwest::{Method, header::HeaderMap};
use tracing::instrument;

use crate::{DetailedResponse, KeyProtectClientResult, KeyProtectRestClient};

/// Parameters of [`KeyProtectRestClient::post_import_token`].
#[derive(Debug, Clone, Default)]
pub struct PostImportTokenParams {
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    /// Validity of the token in seconds.
    pub expiration: Option<u64>,
    pub max_allowed_retrievals: Option<u32>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct GetImportTokenParams {
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub headers: HeaderMap,
}

impl KeyProtectRestClient {
    /// Create an import token used to encrypt key material before importing
    /// it.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, err)]
    pub async fn post_import_token(
        &self,
        params: PostImportTokenParams,
    ) -> KeyProtectClientResult<DetailedResponse<ImportToken>> {
        required_params!(params { bluemix_instance });
        let mut request = self.request(Method::POST, "/api/v2/import_token", "postImportToken")?;
        request.accept(APPLICATION_JSON);
        request.content_type(APPLICATION_JSON);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.json_body(&ImportTokenCreateBody {
            expiration: params.expiration,
            max_allowed_retrievals: params.max_allowed_retrievals,
        })?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// Retrieve the import token: its public key and nonce.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, err)]
    pub async fn get_import_token(
        &self,
        params: GetImportTokenParams,
    ) -> KeyProtectClientResult<DetailedResponse<GetImportToken>> {
        required_params!(params { bluemix_instance });
        let mut request = self.request(Method::GET, "/api/v2/import_token", "getImportToken")?;
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
