use actix_web::{
    HttpRequest, HttpResponse,
    http::{StatusCode, header},
    web::{self, Bytes, Data},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use key_protect_structs::{
    Collection, CreateKeyResource, DualAuthKeyMetadata, Key, KeyActionRewrapBody,
    KeyActionUnwrapBody, KeyActionWrapBody, KeyAliasResource, KeyMaterialBody, KeyPatchBody,
    KeyRing, KeyState, KeyVersion, RewrapKeyResponse, UnwrapKeyResponse, WrapKeyResponse,
    media_types::{ALIAS_MEDIA_TYPE, APPLICATION_JSON, KEY_MEDIA_TYPE, KEY_RING_MEDIA_TYPE},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{info, trace};
use uuid::Uuid;

use crate::{
    error::{KResult, KmsServerError},
    store::{DEFAULT_KEY_RING, KmsStore, ServerState, StoredKey},
};

const KEY_VERSION_MEDIA_TYPE: &str = "application/vnd.ibm.kms.key.version+json";
const MAX_ALIASES: usize = 5;

pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v2/keys")
            .route(web::post().to(create_keys))
            .route(web::get().to(list_keys))
            .route(web::head().to(key_collection_metadata)),
    )
    .service(
        web::resource("/api/v2/keys/{id}")
            .route(web::get().to(get_key))
            .route(web::patch().to(patch_key))
            .route(web::delete().to(delete_key)),
    )
    .service(web::resource("/api/v2/keys/{id}/metadata").route(web::get().to(get_key_metadata)))
    .service(web::resource("/api/v2/keys/{id}/purge").route(web::delete().to(purge_key)))
    .service(web::resource("/api/v2/keys/{id}/restore").route(web::post().to(restore_key)))
    .service(web::resource("/api/v2/keys/{id}/versions").route(web::get().to(get_key_versions)))
    .service(
        web::resource("/api/v2/keys/{id}/actions/{action}").route(web::post().to(key_action)),
    )
    .service(
        web::resource("/api/v2/keys/{id}/aliases/{alias}")
            .route(web::post().to(create_key_alias))
            .route(web::delete().to(delete_key_alias)),
    )
    .service(web::resource("/api/v2/key_rings").route(web::get().to(list_key_rings)))
    .service(
        web::resource("/api/v2/key_rings/{key_ring_id}")
            .route(web::post().to(create_key_ring))
            .route(web::delete().to(delete_key_ring)),
    );
}

pub(crate) async fn not_found(req: HttpRequest) -> KResult<HttpResponse> {
    Err(KmsServerError::NotFound(format!(
        "{} {} is not served by the test server",
        req.method(),
        req.path()
    )))
}

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Check the bearer token, when one is expected, and return the instance the
/// request targets.
fn authorize(req: &HttpRequest, state: &ServerState) -> KResult<String> {
    if let Some(token) = state.bearer_token() {
        let expected = format!("Bearer {token}");
        if header_value(req, header::AUTHORIZATION.as_str()) != Some(expected.as_str()) {
            return Err(KmsServerError::Unauthorized);
        }
    }
    let instance = header_value(req, "bluemix-instance")
        .ok_or_else(|| KmsServerError::BadRequest("missing bluemix-instance header".to_owned()))?;
    info!("{instance}: {} {}", req.method(), req.path());
    Ok(instance.to_owned())
}

fn prefer(req: &HttpRequest) -> Option<&str> {
    header_value(req, "prefer")
}

fn json_response<T: Serialize>(
    status: StatusCode,
    content_type: &str,
    content: &T,
) -> KResult<HttpResponse> {
    Ok(HttpResponse::build(status)
        .insert_header((header::CONTENT_TYPE, content_type.to_owned()))
        .body(serde_json::to_vec(content)?))
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> KResult<Option<T>> {
    if body.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(body)?))
}

fn random_material() -> Vec<u8> {
    let mut material = Uuid::new_v4().as_bytes().to_vec();
    material.extend_from_slice(Uuid::new_v4().as_bytes());
    material
}

fn invalid_state(id: &str, state: Option<KeyState>) -> KmsServerError {
    KmsServerError::Conflict {
        code: "KEY_ACTION_INVALID_STATE_ERR",
        message: format!(
            "key {id} is in state {}",
            state.map_or_else(|| "unknown".to_owned(), |s| s.to_string())
        ),
    }
}

/// Key as listed: never with its payload.
fn listed(stored: &StoredKey) -> Key {
    Key {
        payload: None,
        ..stored.key.clone()
    }
}

async fn create_keys(
    req: HttpRequest,
    state: Data<ServerState>,
    body: Bytes,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let key_ring = header_value(&req, "x-kms-key-ring")
        .unwrap_or(DEFAULT_KEY_RING)
        .to_owned();
    let request: Collection<CreateKeyResource> = parse_body(&body)?
        .ok_or_else(|| KmsServerError::BadRequest("a key collection is expected".to_owned()))?;

    let mut store = state.store()?;
    if !store.key_ring_exists(&instance, &key_ring) {
        return Err(KmsServerError::NotFound(format!(
            "key ring {key_ring} does not exist"
        )));
    }
    let mut created = Vec::with_capacity(request.len());
    for resource in request.resources {
        for alias in resource.aliases.iter().flatten() {
            if store.alias_owner(&instance, alias).is_some() {
                return Err(KmsServerError::Conflict {
                    code: "DUPLICATE_ALIAS_ERR",
                    message: format!("alias {alias} is already in use"),
                });
            }
        }
        let imported = resource.payload.is_some();
        let material = match &resource.payload {
            Some(payload) => STANDARD.decode(payload)?,
            None => random_material(),
        };
        let id = Uuid::new_v4().to_string();
        let version = KeyVersion {
            id: Some(id.clone()),
            creation_date: None,
        };
        let key = Key {
            key_type: Some(KEY_MEDIA_TYPE.to_owned()),
            id: Some(id.clone()),
            name: Some(resource.name),
            aliases: resource.aliases,
            description: resource.description,
            tags: resource.tags,
            state: Some(KeyState::Active),
            expiration_date: resource.expiration_date,
            extractable: Some(resource.extractable),
            crn: Some(format!(
                "crn:v1:bluemix:public:kms:local:a/test:{instance}:key:{id}"
            )),
            imported: Some(imported),
            algorithm_type: Some("AES".to_owned()),
            key_version: Some(version.clone()),
            dual_auth_delete: Some(DualAuthKeyMetadata::default()),
            deleted: Some(false),
            ..Key::default()
        };
        trace!("created key {id} in ring {key_ring}");
        store.keys.push(StoredKey {
            instance: instance.clone(),
            key_ring: key_ring.clone(),
            key: key.clone(),
            versions: vec![version],
            material,
        });
        created.push(key);
    }

    if prefer(&req) == Some("return=minimal") {
        return Ok(HttpResponse::Created().finish());
    }
    json_response(
        StatusCode::CREATED,
        APPLICATION_JSON,
        &Collection::new(KEY_MEDIA_TYPE, created),
    )
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct ListKeysQuery {
    limit: Option<usize>,
    offset: Option<usize>,
    state: Option<String>,
    extractable: Option<bool>,
}

fn filtered_keys<'a>(
    store: &'a KmsStore,
    req: &HttpRequest,
    instance: &str,
    query: &ListKeysQuery,
) -> KResult<Vec<&'a StoredKey>> {
    let states = match &query.state {
        Some(codes) => codes
            .split(',')
            .map(|code| {
                let code = code
                    .trim()
                    .parse::<u8>()
                    .map_err(|e| KmsServerError::BadRequest(format!("invalid state: {e}")))?;
                Ok(KeyState::try_from(code)?)
            })
            .collect::<KResult<Vec<_>>>()?,
        None => vec![
            KeyState::PreActivation,
            KeyState::Active,
            KeyState::Suspended,
            KeyState::Deactivated,
        ],
    };
    let key_ring = header_value(req, "x-kms-key-ring");
    Ok(store
        .keys
        .iter()
        .filter(|k| k.instance == instance)
        .filter(|k| key_ring.is_none_or(|ring| k.key_ring == ring))
        .filter(|k| k.key.state.is_some_and(|s| states.contains(&s)))
        .filter(|k| {
            query
                .extractable
                .is_none_or(|extractable| k.key.extractable == Some(extractable))
        })
        .collect())
}

async fn list_keys(
    req: HttpRequest,
    state: Data<ServerState>,
    query: web::Query<ListKeysQuery>,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let store = state.store()?;
    let keys = filtered_keys(&store, &req, &instance, &query)?
        .into_iter()
        .skip(query.offset.unwrap_or(0))
        .take(query.limit.unwrap_or(200))
        .map(listed)
        .collect();
    json_response(
        StatusCode::OK,
        APPLICATION_JSON,
        &Collection::new(KEY_MEDIA_TYPE, keys),
    )
}

async fn key_collection_metadata(
    req: HttpRequest,
    state: Data<ServerState>,
    query: web::Query<ListKeysQuery>,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let store = state.store()?;
    let total = filtered_keys(&store, &req, &instance, &query)?.len();
    Ok(HttpResponse::Ok()
        .insert_header(("key-total", total.to_string()))
        .finish())
}

async fn get_key(
    req: HttpRequest,
    state: Data<ServerState>,
    id: web::Path<String>,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let store = state.store()?;
    let stored = store.key(&instance, &id)?;
    let mut key = listed(stored);
    if key.extractable == Some(true) && key.state == Some(KeyState::Active) {
        key.payload = Some(STANDARD.encode(&stored.material));
    }
    json_response(
        StatusCode::OK,
        APPLICATION_JSON,
        &Collection::new(KEY_MEDIA_TYPE, vec![key]),
    )
}

async fn get_key_metadata(
    req: HttpRequest,
    state: Data<ServerState>,
    id: web::Path<String>,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let store = state.store()?;
    let key = listed(store.key(&instance, &id)?);
    json_response(
        StatusCode::OK,
        APPLICATION_JSON,
        &Collection::new(KEY_MEDIA_TYPE, vec![key]),
    )
}

async fn patch_key(
    req: HttpRequest,
    state: Data<ServerState>,
    id: web::Path<String>,
    body: Bytes,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let patch: KeyPatchBody = parse_body(&body)?.unwrap_or_default();
    let mut store = state.store()?;
    if let Some(key_ring) = &patch.key_ring_id {
        if !store.key_ring_exists(&instance, key_ring) {
            return Err(KmsServerError::NotFound(format!(
                "key ring {key_ring} does not exist"
            )));
        }
    }
    let stored = store.key_mut(&instance, &id)?;
    if let Some(key_ring) = patch.key_ring_id {
        stored.key_ring = key_ring;
    }
    json_response(
        StatusCode::OK,
        APPLICATION_JSON,
        &Collection::new(KEY_MEDIA_TYPE, vec![listed(stored)]),
    )
}

async fn delete_key(
    req: HttpRequest,
    state: Data<ServerState>,
    id: web::Path<String>,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let mut store = state.store()?;
    let stored = store.key_mut(&instance, &id)?;
    if stored.key.state == Some(KeyState::Destroyed) {
        return Err(invalid_state(&id, stored.key.state));
    }
    stored.key.state = Some(KeyState::Destroyed);
    stored.key.deleted = Some(true);
    stored.key.restore_allowed = Some(true);
    stored.key.purge_allowed = Some(false);

    if prefer(&req) == Some("return=representation") {
        return json_response(
            StatusCode::OK,
            APPLICATION_JSON,
            &Collection::new(KEY_MEDIA_TYPE, vec![listed(stored)]),
        );
    }
    Ok(HttpResponse::NoContent().finish())
}

/// Keys can only be purged four hours after their deletion; the test server
/// never lets that much time pass.
async fn purge_key(
    req: HttpRequest,
    state: Data<ServerState>,
    id: web::Path<String>,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let store = state.store()?;
    let stored = store.key(&instance, &id)?;
    if stored.key.state != Some(KeyState::Destroyed) {
        return Err(invalid_state(&id, stored.key.state));
    }
    Err(KmsServerError::Rejected {
        code: "REQ_TOO_EARLY_ERR",
        message: format!("key {id} can only be purged 4 hours after its deletion"),
    })
}

async fn restore_key(
    req: HttpRequest,
    state: Data<ServerState>,
    id: web::Path<String>,
    body: Bytes,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let material: Option<KeyMaterialBody> = parse_body(&body)?;
    let mut store = state.store()?;
    let stored = store.key_mut(&instance, &id)?;
    if stored.key.state != Some(KeyState::Destroyed) {
        return Err(invalid_state(&id, stored.key.state));
    }
    match material.and_then(|m| m.payload) {
        Some(payload) => stored.material = STANDARD.decode(payload)?,
        None if stored.key.imported == Some(true) => {
            return Err(KmsServerError::BadRequest(
                "an imported key must be restored with its payload".to_owned(),
            ));
        }
        None => {}
    }
    stored.key.state = Some(KeyState::Active);
    stored.key.deleted = Some(false);
    stored.key.restore_allowed = None;
    stored.key.purge_allowed = None;
    json_response(
        StatusCode::CREATED,
        KEY_MEDIA_TYPE,
        &Collection::new(KEY_MEDIA_TYPE, vec![listed(stored)]),
    )
}

async fn get_key_versions(
    req: HttpRequest,
    state: Data<ServerState>,
    id: web::Path<String>,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let store = state.store()?;
    let versions = store
        .key(&instance, &id)?
        .versions
        .iter()
        .rev()
        .cloned()
        .collect();
    json_response(
        StatusCode::OK,
        APPLICATION_JSON,
        &Collection::new(KEY_VERSION_MEDIA_TYPE, versions),
    )
}

/// Ciphertexts are not encrypted: they name the key and the version that
/// produced them, followed by the base64 plaintext.
fn seal(key_id: &str, version: &KeyVersion, plaintext: &str) -> String {
    STANDARD.encode(format!(
        "{key_id}:{}:{plaintext}",
        version.id.as_deref().unwrap_or_default()
    ))
}

/// Return the version and the base64 plaintext of a ciphertext of `key_id`.
fn open(key_id: &str, ciphertext: &str) -> KResult<(KeyVersion, String)> {
    let decoded = String::from_utf8(STANDARD.decode(ciphertext)?)
        .map_err(|e| KmsServerError::BadRequest(format!("invalid ciphertext: {e}")))?;
    let mut parts = decoded.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(id), Some(version), Some(plaintext)) if id == key_id => Ok((
            KeyVersion {
                id: Some(version.to_owned()),
                creation_date: None,
            },
            plaintext.to_owned(),
        )),
        _ => Err(KmsServerError::Rejected {
            code: "UNPROCESSABLE_CIPHERTEXT_ERR",
            message: "the ciphertext was not wrapped by this key".to_owned(),
        }),
    }
}

fn wrapping_key<'a>(store: &'a mut KmsStore, instance: &str, id: &str) -> KResult<&'a mut StoredKey> {
    let stored = store.key_mut(instance, id)?;
    if stored.key.extractable != Some(false) {
        return Err(KmsServerError::Rejected {
            code: "KEY_ROOT_REQ_ERR",
            message: format!("key {id} is not a root key"),
        });
    }
    if stored.key.state != Some(KeyState::Active) {
        return Err(invalid_state(id, stored.key.state));
    }
    Ok(stored)
}

async fn key_action(
    req: HttpRequest,
    state: Data<ServerState>,
    path: web::Path<(String, String)>,
    body: Bytes,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let (id, action) = path.into_inner();
    let mut store = state.store()?;
    match action.as_str() {
        "wrap" => {
            let wrap: KeyActionWrapBody = parse_body(&body)?.unwrap_or_default();
            let stored = wrapping_key(&mut store, &instance, &id)?;
            let (plaintext, generated) = match wrap.plaintext {
                Some(plaintext) => (plaintext, false),
                None => (STANDARD.encode(random_material()), true),
            };
            let version = stored.latest_version().unwrap_or_default();
            let response = WrapKeyResponse {
                ciphertext: seal(stored.id(), &version, &plaintext),
                plaintext: generated.then_some(plaintext),
                key_version: Some(version),
            };
            json_response(StatusCode::OK, APPLICATION_JSON, &response)
        }
        "unwrap" => {
            let unwrap: KeyActionUnwrapBody = parse_body(&body)?.ok_or_else(|| {
                KmsServerError::BadRequest("a ciphertext is expected".to_owned())
            })?;
            let stored = wrapping_key(&mut store, &instance, &id)?;
            let (version, plaintext) = open(stored.id(), &unwrap.ciphertext)?;
            let latest = stored.latest_version().unwrap_or_default();
            let rewrapped = (version.id != latest.id)
                .then(|| (seal(stored.id(), &latest, &plaintext), latest));
            let (ciphertext, rewrapped_key_version) = rewrapped.unzip();
            let response = UnwrapKeyResponse {
                plaintext,
                ciphertext,
                key_version: Some(version),
                rewrapped_key_version,
            };
            json_response(StatusCode::OK, APPLICATION_JSON, &response)
        }
        "rewrap" => {
            let rewrap: KeyActionRewrapBody = parse_body(&body)?.ok_or_else(|| {
                KmsServerError::BadRequest("a ciphertext is expected".to_owned())
            })?;
            let stored = wrapping_key(&mut store, &instance, &id)?;
            let (version, plaintext) = open(stored.id(), &rewrap.ciphertext)?;
            let latest = stored.latest_version().unwrap_or_default();
            let response = RewrapKeyResponse {
                ciphertext: seal(stored.id(), &latest, &plaintext),
                key_version: Some(version),
                rewrapped_key_version: Some(latest),
            };
            json_response(StatusCode::OK, APPLICATION_JSON, &response)
        }
        "rotate" => {
            let material: Option<KeyMaterialBody> = parse_body(&body)?;
            let stored = wrapping_key(&mut store, &instance, &id)?;
            match material.and_then(|m| m.payload) {
                Some(payload) => stored.material = STANDARD.decode(payload)?,
                None if stored.key.imported == Some(true) => {
                    return Err(KmsServerError::BadRequest(
                        "an imported key must be rotated with a new payload".to_owned(),
                    ));
                }
                None => stored.material = random_material(),
            }
            stored.add_version();
            if prefer(&req) == Some("return=representation") {
                return json_response(
                    StatusCode::OK,
                    APPLICATION_JSON,
                    &Collection::new(KEY_MEDIA_TYPE, vec![listed(stored)]),
                );
            }
            Ok(HttpResponse::NoContent().finish())
        }
        "enable" => {
            let stored = store.key_mut(&instance, &id)?;
            if stored.key.state != Some(KeyState::Suspended) {
                return Err(invalid_state(&id, stored.key.state));
            }
            stored.key.state = Some(KeyState::Active);
            Ok(HttpResponse::NoContent().finish())
        }
        "disable" => {
            let stored = store.key_mut(&instance, &id)?;
            if stored.key.state != Some(KeyState::Active) {
                return Err(invalid_state(&id, stored.key.state));
            }
            stored.key.state = Some(KeyState::Suspended);
            Ok(HttpResponse::NoContent().finish())
        }
        "setKeyForDeletion" | "unsetKeyForDeletion" => {
            let stored = store.key_mut(&instance, &id)?;
            let dual_auth = stored.key.dual_auth_delete.get_or_insert_default();
            dual_auth.key_set_for_deletion = Some(action == "setKeyForDeletion");
            Ok(HttpResponse::NoContent().finish())
        }
        "sync" => {
            store.key(&instance, &id)?;
            Ok(HttpResponse::NoContent().finish())
        }
        _ => Err(KmsServerError::NotFound(format!(
            "unknown key action {action}"
        ))),
    }
}

async fn create_key_alias(
    req: HttpRequest,
    state: Data<ServerState>,
    path: web::Path<(String, String)>,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let (id, alias) = path.into_inner();
    let mut store = state.store()?;
    let key_id = store.key(&instance, &id)?.id().to_owned();
    let owner = store
        .alias_owner(&instance, &alias)
        .map(ToOwned::to_owned);
    let status = match owner {
        Some(owner) if owner == key_id => StatusCode::OK,
        Some(_) => {
            return Err(KmsServerError::Conflict {
                code: "DUPLICATE_ALIAS_ERR",
                message: format!("alias {alias} is already in use"),
            });
        }
        None => {
            let stored = store.key_mut(&instance, &key_id)?;
            let aliases = stored.key.aliases.get_or_insert_default();
            if aliases.len() >= MAX_ALIASES {
                return Err(KmsServerError::Rejected {
                    code: "KEY_ALIAS_QUOTA_ERR",
                    message: format!("key {key_id} already has {MAX_ALIASES} aliases"),
                });
            }
            aliases.push(alias.clone());
            StatusCode::CREATED
        }
    };
    json_response(
        status,
        APPLICATION_JSON,
        &Collection::new(
            ALIAS_MEDIA_TYPE,
            vec![KeyAliasResource {
                key_id: Some(key_id),
                alias: Some(alias),
                ..KeyAliasResource::default()
            }],
        ),
    )
}

async fn delete_key_alias(
    req: HttpRequest,
    state: Data<ServerState>,
    path: web::Path<(String, String)>,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let (id, alias) = path.into_inner();
    let mut store = state.store()?;
    let stored = store.key_mut(&instance, &id)?;
    let aliases = stored.key.aliases.get_or_insert_default();
    let before = aliases.len();
    aliases.retain(|a| *a != alias);
    if aliases.len() == before {
        return Err(KmsServerError::NotFound(format!(
            "alias {alias} does not exist"
        )));
    }
    Ok(HttpResponse::NoContent().finish())
}

async fn list_key_rings(req: HttpRequest, state: Data<ServerState>) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let rings = state
        .store()?
        .key_rings(&instance)
        .into_iter()
        .map(|id| KeyRing {
            id: Some(id),
            ..KeyRing::default()
        })
        .collect();
    json_response(
        StatusCode::OK,
        APPLICATION_JSON,
        &Collection::new(KEY_RING_MEDIA_TYPE, rings),
    )
}

async fn create_key_ring(
    req: HttpRequest,
    state: Data<ServerState>,
    key_ring_id: web::Path<String>,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    if !state.store()?.add_key_ring(&instance, &key_ring_id) {
        return Err(KmsServerError::Conflict {
            code: "KEY_RING_EXISTS_ERR",
            message: format!("key ring {key_ring_id} already exists"),
        });
    }
    Ok(HttpResponse::Created().finish())
}

async fn delete_key_ring(
    req: HttpRequest,
    state: Data<ServerState>,
    key_ring_id: web::Path<String>,
) -> KResult<HttpResponse> {
    let instance = authorize(&req, &state)?;
    let mut store = state.store()?;
    if !store.key_ring_is_empty(&instance, &key_ring_id) {
        return Err(KmsServerError::Conflict {
            code: "KEY_RING_NOT_EMPTY_ERR",
            message: format!("key ring {key_ring_id} still holds keys"),
        });
    }
    if !store.remove_key_ring(&instance, &key_ring_id) {
        return Err(KmsServerError::NotFound(format!(
            "key ring {key_ring_id} does not exist"
        )));
    }
    Ok(HttpResponse::NoContent().finish())
}
