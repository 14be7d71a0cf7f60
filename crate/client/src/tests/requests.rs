use std::sync::Arc;

use key_protect_structs::{
    AllowedIpAttributes, AllowedIpPolicyData, CreateKeyResource, InstancePolicy,
    InstancePolicyType, KeyActionWrapBody, KeyPolicyType, KeyState, Prefer, RotationPolicy,
    SetKeyPolicies,
    media_types::{
        APPLICATION_JSON, KEY_ACTION_RESTORE_MEDIA_TYPE, KEY_ACTION_ROTATE_MEDIA_TYPE,
        KEY_ACTION_WRAP_MEDIA_TYPE, KEY_MEDIA_TYPE,
    },
};
use reqwest::{
    Method, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::{Value, json};

use super::recording_transport::{RecordingTransport, recording_client};
use crate::{
    BearerTokenAuthenticator, CreateKeyParams, CreateKeyRingParams, DeleteKeyAliasParams,
    DeleteKeyParams, GetAllowedIpPortParams, GetImportTokenParams, GetInstancePolicyParams,
    GetKeyCollectionMetadataParams, GetKeyParams, GetKeysParams, GetPolicyParams,
    GetRegistrationsAllKeysParams, GetRegistrationsParams, KeyProtectClientConfig,
    KeyProtectClientResult, KeyProtectRestClient, PostImportTokenParams, PutInstancePolicyParams,
    PutPolicyParams, RequestDescriptor, ResponseType, RestoreKeyParams, RotateKeyParams,
    SetKeyForDeletionParams, SyncAssociatedResourcesParams, UnsetKeyForDeletionParams,
    WrapKeyParams,
};

const INSTANCE: &str = "a7a1f2e0-0000-4000-8000-000000000001";

#[allow(clippy::unwrap_used)]
fn header<'a>(request: &'a RequestDescriptor, name: &str) -> Option<&'a str> {
    request.headers.get(name).map(|v| v.to_str().unwrap())
}

fn check_url_and_method(
    request: &RequestDescriptor,
    method: &Method,
    url: &str,
) -> KeyProtectClientResult<()> {
    assert_eq!(&request.method, method);
    assert_eq!(request.resolve_url()?.as_str(), url);
    Ok(())
}

#[allow(clippy::unwrap_used)]
fn body_json(request: &RequestDescriptor) -> Value {
    serde_json::from_slice(request.body.as_deref().unwrap()).unwrap()
}

#[tokio::test]
async fn test_wrap_key_request() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(
        StatusCode::OK,
        r#"{"ciphertext":"ZXlKaGJHY2lPaUprYVhJaUxDSmxibU1p","keyVersion":{"id":"K1"}}"#,
    ));

    let response = client
        .wrap_key(WrapKeyParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            key_action_wrap_body: Some(KeyActionWrapBody::from_plaintext(b"plaintext")),
            ..WrapKeyParams::default()
        })
        .await?;

    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(
        request.resolve_url()?.as_str(),
        "https://us-south.kms.cloud.ibm.com/api/v2/keys/K1/actions/wrap"
    );
    assert_eq!(header(&request, "bluemix-instance"), Some(INSTANCE));
    assert_eq!(
        header(&request, CONTENT_TYPE.as_str()),
        Some(KEY_ACTION_WRAP_MEDIA_TYPE)
    );
    assert_eq!(header(&request, ACCEPT.as_str()), Some(APPLICATION_JSON));
    assert!(header(&request, "correlation-id").is_none());
    assert!(header(&request, "x-kms-key-ring").is_none());
    assert_eq!(body_json(&request), json!({"plaintext": "cGxhaW50ZXh0"}));
    assert_eq!(request.response_type, ResponseType::Json);

    // SDK headers
    assert!(
        header(&request, USER_AGENT.as_str()).is_some_and(|ua| ua.starts_with("key-protect-rust-sdk/"))
    );
    assert_eq!(
        header(&request, "x-ibmcloud-sdk-analytics"),
        Some("service_name=ibm_key_protect_api;service_version=v2;operation_id=wrapKey")
    );

    assert_eq!(response.status, StatusCode::OK);
    let result = response.result.unwrap_or_else(|| panic!("a wrap result is expected"));
    assert_eq!(result.ciphertext, "ZXlKaGJHY2lPaUprYVhJaUxDSmxibU1p");
    assert_eq!(
        result.key_version.and_then(|v| v.id).as_deref(),
        Some("K1")
    );
    Ok(())
}

#[tokio::test]
async fn test_create_key_request() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::CREATED, ""));

    let response = client
        .create_key(CreateKeyParams {
            bluemix_instance: Some(INSTANCE.to_owned()),
            body: Some(
                CreateKeyResource::root_key("my-root-key")
                    .with_description("wraps the volumes")
                    .into_collection(),
            ),
            correlation_id: Some("corr-1".to_owned()),
            prefer: Some(Prefer::ReturnMinimal),
            x_kms_key_ring: Some("ring-1".to_owned()),
            ..CreateKeyParams::default()
        })
        .await?;
    assert!(response.result.is_none());

    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.resolve_url()?.path(), "/api/v2/keys");
    assert_eq!(header(&request, CONTENT_TYPE.as_str()), Some(KEY_MEDIA_TYPE));
    assert_eq!(header(&request, "correlation-id"), Some("corr-1"));
    assert_eq!(header(&request, "x-kms-key-ring"), Some("ring-1"));
    assert_eq!(header(&request, "prefer"), Some("return=minimal"));
    assert_eq!(
        body_json(&request),
        json!({
            "metadata": {
                "collectionType": KEY_MEDIA_TYPE,
                "collectionTotal": 1
            },
            "resources": [{
                "type": KEY_MEDIA_TYPE,
                "name": "my-root-key",
                "description": "wraps the volumes",
                "extractable": false
            }]
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_get_keys_query() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(
        StatusCode::OK,
        r#"{"metadata":{"collectionType":"application/vnd.ibm.kms.key+json","collectionTotal":1},
            "resources":[{"id":"K1","name":"n","state":1,"extractable":false}]}"#,
    ));

    let response = client
        .get_keys(GetKeysParams {
            bluemix_instance: Some(INSTANCE.to_owned()),
            limit: Some(10),
            offset: Some(5),
            state: Some(vec![KeyState::Active, KeyState::Destroyed]),
            extractable: Some(false),
            ..GetKeysParams::default()
        })
        .await?;

    let request = transport.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.query_value("limit"), Some("10"));
    assert_eq!(request.query_value("offset"), Some("5"));
    assert_eq!(request.query_value("state"), Some("1,5"));
    assert_eq!(request.query_value("extractable"), Some("false"));
    assert_eq!(
        request.resolve_url()?.query(),
        Some("limit=10&offset=5&state=1%2C5&extractable=false")
    );

    let keys = response.result.unwrap_or_default();
    assert_eq!(keys.len(), 1);
    let key = keys.into_first().unwrap_or_default();
    assert_eq!(key.state, Some(KeyState::Active));
    assert!(key.is_root_key());
    Ok(())
}

#[tokio::test]
async fn test_key_collection_metadata() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(
        RecordingTransport::new(StatusCode::OK, "").with_header("key-total", "42"),
    );
    let response = client
        .get_key_collection_metadata(GetKeyCollectionMetadataParams {
            bluemix_instance: Some(INSTANCE.to_owned()),
            state: Some(vec![KeyState::Suspended]),
            ..GetKeyCollectionMetadataParams::default()
        })
        .await?;
    let request = transport.last_request();
    assert_eq!(request.method, Method::HEAD);
    assert_eq!(request.response_type, ResponseType::Empty);
    assert!(request.headers.get(ACCEPT).is_none());
    assert_eq!(request.query_value("state"), Some("2"));
    assert_eq!(
        response.headers.get("key-total"),
        Some(&HeaderValue::from_static("42"))
    );
    Ok(())
}

#[tokio::test]
async fn test_delete_key_request() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::NO_CONTENT, ""));
    let response = client
        .delete_key(DeleteKeyParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            force: Some(true),
            prefer: Some(Prefer::ReturnRepresentation),
            ..DeleteKeyParams::default()
        })
        .await?;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.result.is_none());

    let request = transport.last_request();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(
        request.resolve_url()?.as_str(),
        "https://us-south.kms.cloud.ibm.com/api/v2/keys/K1?force=true"
    );
    assert_eq!(header(&request, "prefer"), Some("return=representation"));
    assert!(request.body.is_none());
    Ok(())
}

#[tokio::test]
async fn test_restore_key_returns_raw_body() -> KeyProtectClientResult<()> {
    let raw = r#"{"metadata":{"collectionType":"application/vnd.ibm.kms.key+json","collectionTotal":1},"resources":[{"id":"K1"}]}"#;
    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::CREATED, raw));
    let response = client
        .restore_key(RestoreKeyParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            ..RestoreKeyParams::default()
        })
        .await?;
    assert_eq!(response.result.as_deref(), Some(raw.as_bytes()));

    let request = transport.last_request();
    assert_eq!(request.resolve_url()?.path(), "/api/v2/keys/K1/restore");
    assert_eq!(request.response_type, ResponseType::Bytes);
    assert_eq!(header(&request, ACCEPT.as_str()), Some(KEY_MEDIA_TYPE));
    assert_eq!(
        header(&request, CONTENT_TYPE.as_str()),
        Some(KEY_ACTION_RESTORE_MEDIA_TYPE)
    );
    Ok(())
}

#[tokio::test]
async fn test_rotate_key_request() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::NO_CONTENT, ""));
    let response = client
        .rotate_key(RotateKeyParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            ..RotateKeyParams::default()
        })
        .await?;
    assert!(response.result.is_none());
    let request = transport.last_request();
    assert_eq!(
        request.resolve_url()?.path(),
        "/api/v2/keys/K1/actions/rotate"
    );
    assert!(request.headers.get(ACCEPT).is_none());
    assert_eq!(
        header(&request, CONTENT_TYPE.as_str()),
        Some(KEY_ACTION_ROTATE_MEDIA_TYPE)
    );
    assert!(request.body.is_none());
    Ok(())
}

#[tokio::test]
async fn test_path_parameters_are_encoded_on_custom_service_url() -> KeyProtectClientResult<()> {
    let (mut client, transport) = recording_client(RecordingTransport::new(StatusCode::OK, ""));
    assert_eq!(client.service_url(), "https://us-south.kms.cloud.ibm.com");
    client.set_service_url("http://localhost:8080/");
    assert_eq!(client.service_url(), "http://localhost:8080");

    client
        .get_key(GetKeyParams {
            id: Some("my alias/1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            ..GetKeyParams::default()
        })
        .await?;
    let request = transport.last_request();
    assert_eq!(request.path.get("id").map(String::as_str), Some("my alias/1"));
    assert_eq!(
        request.resolve_url()?.as_str(),
        "http://localhost:8080/api/v2/keys/my%20alias%2F1"
    );
    Ok(())
}

#[tokio::test]
async fn test_header_precedence() -> KeyProtectClientResult<()> {
    let transport = Arc::new(RecordingTransport::new(StatusCode::OK, ""));
    let mut config = KeyProtectClientConfig::default();
    config
        .default_headers
        .insert("x-default".to_owned(), "from-config".to_owned());
    config
        .default_headers
        .insert("accept".to_owned(), "text/csv".to_owned());
    let client = KeyProtectRestClient::with_transport(
        config,
        transport.clone(),
        Arc::new(BearerTokenAuthenticator::new("token-1")),
    )?;
    assert_eq!(client.authenticator().authentication_type(), "bearerToken");

    let mut headers = HeaderMap::new();
    headers.insert("bluemix-instance", HeaderValue::from_static("overridden"));
    headers.insert("x-custom", HeaderValue::from_static("custom"));
    client
        .get_key(GetKeyParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            x_kms_key_ring: Some("ring-1".to_owned()),
            headers,
            ..GetKeyParams::default()
        })
        .await?;

    let request = transport.last_request();
    // the operation wins over the configuration
    assert_eq!(header(&request, ACCEPT.as_str()), Some(APPLICATION_JSON));
    assert_eq!(header(&request, "x-default"), Some("from-config"));
    // the caller wins over the operation
    assert_eq!(header(&request, "bluemix-instance"), Some("overridden"));
    assert_eq!(header(&request, "x-custom"), Some("custom"));
    assert_eq!(header(&request, "x-kms-key-ring"), Some("ring-1"));
    assert_eq!(header(&request, AUTHORIZATION.as_str()), Some("Bearer token-1"));

    // the caller also wins over the media types of a body carrying operation
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/xml"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    client
        .wrap_key(WrapKeyParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            key_action_wrap_body: Some(KeyActionWrapBody::from_plaintext(b"plaintext")),
            headers,
            ..WrapKeyParams::default()
        })
        .await?;
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    let request = &requests[1];
    assert_eq!(header(request, ACCEPT.as_str()), Some("application/xml"));
    assert_eq!(header(request, CONTENT_TYPE.as_str()), Some(APPLICATION_JSON));
    assert_eq!(header(request, "x-default"), Some("from-config"));
    assert_eq!(body_json(request), json!({"plaintext": "cGxhaW50ZXh0"}));
    Ok(())
}

#[tokio::test]
async fn test_policy_requests() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::OK, ""));
    client
        .put_policy(PutPolicyParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            set_key_policies: Some(SetKeyPolicies::Rotation(RotationPolicy {
                interval_month: 3,
            })),
            policy: Some(KeyPolicyType::Rotation),
            ..PutPolicyParams::default()
        })
        .await?;
    let request = transport.last_request();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(
        request.resolve_url()?.as_str(),
        "https://us-south.kms.cloud.ibm.com/api/v2/keys/K1/policies?policy=rotation"
    );
    assert_eq!(
        body_json(&request),
        json!({
            "metadata": {
                "collectionType": "application/vnd.ibm.kms.policy+json",
                "collectionTotal": 1
            },
            "resources": [{
                "type": "application/vnd.ibm.kms.policy+json",
                "rotation": { "interval_month": 3 }
            }]
        })
    );

    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::NO_CONTENT, ""));
    client
        .put_instance_policy(PutInstancePolicyParams {
            bluemix_instance: Some(INSTANCE.to_owned()),
            set_instance_policies: Some(vec![InstancePolicy::AllowedIp(AllowedIpPolicyData {
                enabled: true,
                attributes: Some(AllowedIpAttributes {
                    allowed_ip: vec!["192.0.2.0/24".to_owned()],
                }),
            })]),
            ..PutInstancePolicyParams::default()
        })
        .await?;
    let request = transport.last_request();
    assert_eq!(request.resolve_url()?.path(), "/api/v2/instance/policies");
    assert!(request.headers.get(ACCEPT).is_none());
    assert_eq!(header(&request, CONTENT_TYPE.as_str()), Some(APPLICATION_JSON));
    assert_eq!(
        body_json(&request)["resources"][0]["policy_type"],
        json!("allowedIP")
    );
    Ok(())
}

#[tokio::test]
async fn test_registrations_query() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(
        StatusCode::OK,
        r#"{"metadata":{"collectionType":"application/vnd.ibm.kms.registration+json","collectionTotal":0,"totalCount":0},"resources":[]}"#,
    ));
    let response = client
        .get_registrations(GetRegistrationsParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            url_encoded_resource_crn_query: Some("crn:v1:bluemix:*".to_owned()),
            prevent_key_deletion: Some(true),
            total_count: Some(true),
            ..GetRegistrationsParams::default()
        })
        .await?;
    let request = transport.last_request();
    assert_eq!(
        request.resolve_url()?.path(),
        "/api/v2/keys/K1/registrations"
    );
    assert_eq!(
        request.query_value("urlEncodedResourceCRNQuery"),
        Some("crn:v1:bluemix:*")
    );
    assert_eq!(request.query_value("preventKeyDeletion"), Some("true"));
    assert_eq!(request.query_value("totalCount"), Some("true"));
    assert!(request.query_value("limit").is_none());

    let registrations = response.result.unwrap_or_default();
    assert!(registrations.is_empty());
    assert_eq!(
        registrations.metadata.and_then(|m| m.total_count),
        Some(0)
    );
    Ok(())
}

#[tokio::test]
async fn test_import_token_and_key_ring_requests() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(
        StatusCode::OK,
        r#"{"expiration":600,"maxAllowedRetrievals":1,"remainingRetrievals":1}"#,
    ));
    let response = client
        .post_import_token(PostImportTokenParams {
            bluemix_instance: Some(INSTANCE.to_owned()),
            expiration: Some(600),
            max_allowed_retrievals: Some(1),
            ..PostImportTokenParams::default()
        })
        .await?;
    let request = transport.last_request();
    assert_eq!(
        body_json(&request),
        json!({"expiration": 600, "maxAllowedRetrievals": 1})
    );
    assert_eq!(
        response.result.and_then(|t| t.remaining_retrievals),
        Some(1)
    );

    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::CREATED, ""));
    client
        .create_key_ring(CreateKeyRingParams {
            key_ring_id: Some("ring-1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            ..CreateKeyRingParams::default()
        })
        .await?;
    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, "/api/v2/key_rings/{key-ring-id}");
    assert_eq!(request.resolve_url()?.path(), "/api/v2/key_rings/ring-1");
    assert!(request.headers.get(ACCEPT).is_none());
    assert!(request.body.is_none());
    assert_eq!(
        header(&request, "x-ibmcloud-sdk-analytics"),
        Some("service_name=ibm_key_protect_api;service_version=v2;operation_id=createKeyRing")
    );
    Ok(())
}

#[tokio::test]
async fn test_delete_key_alias_request() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::NO_CONTENT, ""));
    let response = client
        .delete_key_alias(DeleteKeyAliasParams {
            id: Some("K1".to_owned()),
            alias: Some("a1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            correlation_id: Some("corr-1".to_owned()),
            ..DeleteKeyAliasParams::default()
        })
        .await?;
    assert!(response.result.is_none());

    let request = transport.last_request();
    check_url_and_method(
        &request,
        &Method::DELETE,
        "https://us-south.kms.cloud.ibm.com/api/v2/keys/K1/aliases/a1",
    )?;
    assert_eq!(request.url, "/api/v2/keys/{id}/aliases/{alias}");
    assert_eq!(request.response_type, ResponseType::Empty);
    assert_eq!(header(&request, "bluemix-instance"), Some(INSTANCE));
    assert_eq!(header(&request, "correlation-id"), Some("corr-1"));
    assert!(request.headers.get(ACCEPT).is_none());
    assert!(request.body.is_none());
    Ok(())
}

#[tokio::test]
async fn test_get_import_token_request() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(
        StatusCode::OK,
        r#"{"nonce":"bm9uY2U=","payload":"cGF5bG9hZA==","creationDate":"2024-01-01T00:00:00Z"}"#,
    ));
    let response = client
        .get_import_token(GetImportTokenParams {
            bluemix_instance: Some(INSTANCE.to_owned()),
            ..GetImportTokenParams::default()
        })
        .await?;
    let token = response.result.unwrap_or_default();
    assert_eq!(token.nonce.as_deref(), Some("bm9uY2U="));
    assert_eq!(
        token.token.creation_date.as_deref(),
        Some("2024-01-01T00:00:00Z")
    );

    let request = transport.last_request();
    check_url_and_method(
        &request,
        &Method::GET,
        "https://us-south.kms.cloud.ibm.com/api/v2/import_token",
    )?;
    assert_eq!(header(&request, ACCEPT.as_str()), Some(APPLICATION_JSON));
    assert_eq!(header(&request, "bluemix-instance"), Some(INSTANCE));
    assert_eq!(
        header(&request, "x-ibmcloud-sdk-analytics"),
        Some("service_name=ibm_key_protect_api;service_version=v2;operation_id=getImportToken")
    );
    assert!(request.body.is_none());
    Ok(())
}

#[tokio::test]
async fn test_dual_authorization_and_sync_actions() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::NO_CONTENT, ""));

    client
        .set_key_for_deletion(SetKeyForDeletionParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            x_kms_key_ring: Some("ring-1".to_owned()),
            ..SetKeyForDeletionParams::default()
        })
        .await?;
    client
        .unset_key_for_deletion(UnsetKeyForDeletionParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            ..UnsetKeyForDeletionParams::default()
        })
        .await?;
    client
        .sync_associated_resources(SyncAssociatedResourcesParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            ..SyncAssociatedResourcesParams::default()
        })
        .await?;

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    let expected = [
        ("setKeyForDeletion", "setKeyForDeletion"),
        ("unsetKeyForDeletion", "unsetKeyForDeletion"),
        ("sync", "syncAssociatedResources"),
    ];
    for (request, (action, operation_id)) in requests.iter().zip(expected) {
        check_url_and_method(
            request,
            &Method::POST,
            &format!("https://us-south.kms.cloud.ibm.com/api/v2/keys/K1/actions/{action}"),
        )?;
        assert_eq!(request.response_type, ResponseType::Empty);
        assert_eq!(header(request, "bluemix-instance"), Some(INSTANCE));
        assert!(request.headers.get(ACCEPT).is_none());
        assert!(request.body.is_none());
        assert_eq!(
            header(request, "x-ibmcloud-sdk-analytics").map(ToOwned::to_owned),
            Some(format!(
                "service_name=ibm_key_protect_api;service_version=v2;operation_id={operation_id}"
            ))
        );
    }
    assert_eq!(header(&requests[0], "x-kms-key-ring"), Some("ring-1"));
    assert!(header(&requests[1], "x-kms-key-ring").is_none());
    Ok(())
}

#[tokio::test]
async fn test_get_policy_requests() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::OK, ""));
    client
        .get_policy(GetPolicyParams {
            id: Some("K1".to_owned()),
            bluemix_instance: Some(INSTANCE.to_owned()),
            policy: Some(KeyPolicyType::DualAuthDelete),
            ..GetPolicyParams::default()
        })
        .await?;
    let request = transport.last_request();
    check_url_and_method(
        &request,
        &Method::GET,
        "https://us-south.kms.cloud.ibm.com/api/v2/keys/K1/policies?policy=dualAuthDelete",
    )?;
    assert_eq!(header(&request, ACCEPT.as_str()), Some(APPLICATION_JSON));
    assert!(request.body.is_none());

    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::OK, ""));
    client
        .get_instance_policy(GetInstancePolicyParams {
            bluemix_instance: Some(INSTANCE.to_owned()),
            policy: Some(InstancePolicyType::AllowedIp),
            ..GetInstancePolicyParams::default()
        })
        .await?;
    let request = transport.last_request();
    check_url_and_method(
        &request,
        &Method::GET,
        "https://us-south.kms.cloud.ibm.com/api/v2/instance/policies?policy=allowedIP",
    )?;
    assert_eq!(header(&request, ACCEPT.as_str()), Some(APPLICATION_JSON));
    assert_eq!(header(&request, "bluemix-instance"), Some(INSTANCE));

    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::OK, ""));
    client
        .get_allowed_ip_port(GetAllowedIpPortParams {
            bluemix_instance: Some(INSTANCE.to_owned()),
            ..GetAllowedIpPortParams::default()
        })
        .await?;
    let request = transport.last_request();
    check_url_and_method(
        &request,
        &Method::GET,
        "https://us-south.kms.cloud.ibm.com/api/v2/instance/allowed_ip_port",
    )?;
    assert_eq!(header(&request, ACCEPT.as_str()), Some(APPLICATION_JSON));
    assert!(request.query.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_get_registrations_all_keys_request() -> KeyProtectClientResult<()> {
    let (client, transport) = recording_client(RecordingTransport::new(StatusCode::OK, ""));
    client
        .get_registrations_all_keys(GetRegistrationsAllKeysParams {
            bluemix_instance: Some(INSTANCE.to_owned()),
            limit: Some(20),
            offset: Some(40),
            prevent_key_deletion: Some(false),
            ..GetRegistrationsAllKeysParams::default()
        })
        .await?;
    let request = transport.last_request();
    check_url_and_method(
        &request,
        &Method::GET,
        "https://us-south.kms.cloud.ibm.com/api/v2/keys/registrations?limit=20&offset=40&preventKeyDeletion=false",
    )?;
    assert_eq!(header(&request, ACCEPT.as_str()), Some(APPLICATION_JSON));
    assert!(request.query_value("totalCount").is_none());
    assert!(request.query_value("urlEncodedResourceCRNQuery").is_none());
    Ok(())
}
