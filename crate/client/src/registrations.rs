use key_protect_structs::{Collection, RegistrationResource, media_types::APPLICATION_JSON};
use reqwest::{Method, header::HeaderMap};
use tracing::instrument;

use crate::{DetailedResponse, KeyProtectClientResult, KeyProtectRestClient, RequestDescriptor};

#[derive(Debug, Clone, Default)]
pub struct GetRegistrationsParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// URL encoded CRN filter, `*` wildcards allowed.
    pub url_encoded_resource_crn_query: Option<String>,
    pub prevent_key_deletion: Option<bool>,
    /// Ask for `totalCount` in the collection metadata.
    pub total_count: Option<bool>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct GetRegistrationsAllKeysParams {
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    pub url_encoded_resource_crn_query: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub prevent_key_deletion: Option<bool>,
    pub total_count: Option<bool>,
    pub headers: HeaderMap,
}

impl KeyProtectRestClient {
    /// List the cloud resources protected by a key.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn get_registrations(
        &self,
        params: GetRegistrationsParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<RegistrationResource>>> {
        required_params!(params { id, bluemix_instance });
        let mut request = self.request(
            Method::GET,
            "/api/v2/keys/{id}/registrations",
            "getRegistrations",
        )?;
        request.path_param("id", id);
        request.query_param("limit", params.limit);
        request.query_param("offset", params.offset);
        registration_filters(
            &mut request,
            params.url_encoded_resource_crn_query,
            params.prevent_key_deletion,
            params.total_count,
        );
        request.accept(APPLICATION_JSON);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// List the registrations of every key of an instance.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, err)]
    pub async fn get_registrations_all_keys(
        &self,
        params: GetRegistrationsAllKeysParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<RegistrationResource>>> {
        required_params!(params { bluemix_instance });
        let mut request = self.request(
            Method::GET,
            "/api/v2/keys/registrations",
            "getRegistrationsAllKeys",
        )?;
        request.query_param("limit", params.limit);
        request.query_param("offset", params.offset);
        registration_filters(
            &mut request,
            params.url_encoded_resource_crn_query,
            params.prevent_key_deletion,
            params.total_count,
        );
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

fn registration_filters(
    request: &mut RequestDescriptor,
    crn_query: Option<String>,
    prevent_key_deletion: Option<bool>,
    total_count: Option<bool>,
) {
    request.query_param("urlEncodedResourceCRNQuery", crn_query);
    request.query_param("preventKeyDeletion", prevent_key_deletion);
    request.query_param("totalCount", total_count);
}
