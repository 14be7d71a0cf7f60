use key_protect_structs::{
    AllowedIpPortResource, Collection, InstancePolicy, InstancePolicyResource, InstancePolicyType,
    KeyPolicyResource, KeyPolicyType, SetKeyPolicies, instance_policies_collection,
    media_types::APPLICATION_JSON,
};
use reqwest::{Method, header::HeaderMap};
use tracing::instrument;

use crate::{DetailedResponse, KeyProtectClientResult, KeyProtectRestClient};

#[derive(Debug, Clone, Default)]
pub struct PutPolicyParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub set_key_policies: Option<SetKeyPolicies>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    /// The policy to set, when a single one is sent.
    pub policy: Option<KeyPolicyType>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct GetPolicyParams {
    pub id: Option<String>,
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub x_kms_key_ring: Option<String>,
    /// Only retrieve this policy.
    pub policy: Option<KeyPolicyType>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct PutInstancePolicyParams {
    pub bluemix_instance: Option<String>,
    /// One or several instance policies, sent in a single collection.
    pub set_instance_policies: Option<Vec<InstancePolicy>>,
    pub correlation_id: Option<String>,
    pub policy: Option<InstancePolicyType>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct GetInstancePolicyParams {
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub policy: Option<InstancePolicyType>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, Default)]
pub struct GetAllowedIpPortParams {
    pub bluemix_instance: Option<String>,
    pub correlation_id: Option<String>,
    pub headers: HeaderMap,
}

impl KeyProtectRestClient {
    /// Set the rotation and/or dual authorization deletion policies of a key.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn put_policy(
        &self,
        params: PutPolicyParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<KeyPolicyResource>>> {
        required_params!(params {
            id,
            bluemix_instance,
            set_key_policies
        });
        let mut request = self.request(Method::PUT, "/api/v2/keys/{id}/policies", "putPolicy")?;
        request.path_param("id", id);
        request.query_param("policy", params.policy);
        request.accept(APPLICATION_JSON);
        request.content_type(APPLICATION_JSON);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.json_body(&set_key_policies.into_collection())?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, fields(id = ?params.id), err)]
    pub async fn get_policy(
        &self,
        params: GetPolicyParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<KeyPolicyResource>>> {
        required_params!(params { id, bluemix_instance });
        let mut request = self.request(Method::GET, "/api/v2/keys/{id}/policies", "getPolicy")?;
        request.path_param("id", id);
        request.query_param("policy", params.policy);
        request.accept(APPLICATION_JSON);
        request.instance_headers(
            &bluemix_instance,
            params.correlation_id.as_deref(),
            params.x_kms_key_ring.as_deref(),
        )?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// Set instance wide policies.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, err)]
    pub async fn put_instance_policy(
        &self,
        params: PutInstancePolicyParams,
    ) -> KeyProtectClientResult<DetailedResponse<()>> {
        required_params!(params {
            bluemix_instance,
            set_instance_policies
        });
        let mut request =
            self.request(Method::PUT, "/api/v2/instance/policies", "putInstancePolicy")?;
        request.query_param("policy", params.policy);
        request.content_type(APPLICATION_JSON);
        request.instance_headers(&bluemix_instance, params.correlation_id.as_deref(), None)?;
        request.json_body(&instance_policies_collection(set_instance_policies))?;
        request.merge_headers(params.headers);
        self.execute_empty(request).await
    }

    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, err)]
    pub async fn get_instance_policy(
        &self,
        params: GetInstancePolicyParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<InstancePolicyResource>>> {
        required_params!(params { bluemix_instance });
        let mut request =
            self.request(Method::GET, "/api/v2/instance/policies", "getInstancePolicy")?;
        request.query_param("policy", params.policy);
        request.accept(APPLICATION_JSON);
        request.instance_headers(&bluemix_instance, params.correlation_id.as_deref(), None)?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }

    /// Retrieve the private endpoint port to use with an allowed IP policy.
    ///
    /// # Errors
    /// Return an error if a required parameter is missing or the service call
    /// fails.
    #[instrument(skip_all, err)]
    pub async fn get_allowed_ip_port(
        &self,
        params: GetAllowedIpPortParams,
    ) -> KeyProtectClientResult<DetailedResponse<Collection<AllowedIpPortResource>>> {
        required_params!(params { bluemix_instance });
        let mut request = self.request(
            Method::GET,
            "/api/v2/instance/allowed_ip_port",
            "getAllowedIpPort",
        )?;
        request.accept(APPLICATION_JSON);
        request.instance_headers(&bluemix_instance, params.correlation_id.as_deref(), None)?;
        request.merge_headers(params.headers);
        self.execute_json(request).await
    }
}
