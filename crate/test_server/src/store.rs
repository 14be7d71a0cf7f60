use std::{
    collections::BTreeSet,
    sync::{Mutex, MutexGuard},
};

use actix_web::HttpRequest;
use key_protect_structs::{Key, KeyVersion};
use uuid::Uuid;

use crate::error::{KResult, KmsServerError};

pub(crate) const DEFAULT_KEY_RING: &str = "default";

/// A request as received by the test server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    fn from_http(req: &HttpRequest) -> Self {
        Self {
            method: req.method().to_string(),
            path: req.path().to_owned(),
            query: req.query_string().to_owned(),
            headers: req
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_owned(),
                        String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    )
                })
                .collect(),
        }
    }

    /// First value of header `name`; names are lowercase.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub(crate) struct StoredKey {
    pub(crate) instance: String,
    pub(crate) key_ring: String,
    pub(crate) key: Key,
    /// Oldest first.
    pub(crate) versions: Vec<KeyVersion>,
    pub(crate) material: Vec<u8>,
}

impl StoredKey {
    pub(crate) fn id(&self) -> &str {
        self.key.id.as_deref().unwrap_or_default()
    }

    pub(crate) fn has_alias(&self, alias: &str) -> bool {
        self.key
            .aliases
            .as_ref()
            .is_some_and(|aliases| aliases.iter().any(|a| a == alias))
    }

    pub(crate) fn latest_version(&self) -> Option<KeyVersion> {
        self.versions.last().cloned()
    }

    pub(crate) fn add_version(&mut self) -> KeyVersion {
        let version = KeyVersion {
            id: Some(Uuid::new_v4().to_string()),
            creation_date: None,
        };
        self.versions.push(version.clone());
        self.key.key_version = Some(version.clone());
        version
    }
}

#[derive(Default)]
pub(crate) struct KmsStore {
    pub(crate) keys: Vec<StoredKey>,
    key_rings: BTreeSet<(String, String)>,
}

impl KmsStore {
    /// Index of the key of `instance` whose ID or one of the aliases is
    /// `id_or_alias`.
    pub(crate) fn key_index(&self, instance: &str, id_or_alias: &str) -> KResult<usize> {
        self.keys
            .iter()
            .position(|k| {
                k.instance == instance && (k.id() == id_or_alias || k.has_alias(id_or_alias))
            })
            .ok_or_else(|| KmsServerError::NotFound(format!("key {id_or_alias} does not exist")))
    }

    pub(crate) fn key_mut(&mut self, instance: &str, id_or_alias: &str) -> KResult<&mut StoredKey> {
        let index = self.key_index(instance, id_or_alias)?;
        self.keys
            .get_mut(index)
            .ok_or_else(|| KmsServerError::ServerError("key index out of bounds".to_owned()))
    }

    pub(crate) fn key(&self, instance: &str, id_or_alias: &str) -> KResult<&StoredKey> {
        let index = self.key_index(instance, id_or_alias)?;
        self.keys
            .get(index)
            .ok_or_else(|| KmsServerError::ServerError("key index out of bounds".to_owned()))
    }

    pub(crate) fn alias_owner(&self, instance: &str, alias: &str) -> Option<&str> {
        self.keys
            .iter()
            .find(|k| k.instance == instance && k.has_alias(alias))
            .map(StoredKey::id)
    }

    pub(crate) fn key_ring_exists(&self, instance: &str, key_ring: &str) -> bool {
        key_ring == DEFAULT_KEY_RING
            || self
                .key_rings
                .contains(&(instance.to_owned(), key_ring.to_owned()))
    }

    pub(crate) fn key_rings(&self, instance: &str) -> Vec<String> {
        let mut rings = vec![DEFAULT_KEY_RING.to_owned()];
        rings.extend(
            self.key_rings
                .iter()
                .filter(|(i, _)| i == instance)
                .map(|(_, ring)| ring.clone()),
        );
        rings
    }

    /// Return `false` if the ring already exists.
    pub(crate) fn add_key_ring(&mut self, instance: &str, key_ring: &str) -> bool {
        !self.key_ring_exists(instance, key_ring)
            && self
                .key_rings
                .insert((instance.to_owned(), key_ring.to_owned()))
    }

    pub(crate) fn remove_key_ring(&mut self, instance: &str, key_ring: &str) -> bool {
        self.key_rings
            .remove(&(instance.to_owned(), key_ring.to_owned()))
    }

    pub(crate) fn key_ring_is_empty(&self, instance: &str, key_ring: &str) -> bool {
        !self
            .keys
            .iter()
            .any(|k| k.instance == instance && k.key_ring == key_ring)
    }
}

/// Shared state of the test server.
pub struct ServerState {
    store: Mutex<KmsStore>,
    requests: Mutex<Vec<RecordedRequest>>,
    bearer_token: Option<String>,
}

impl ServerState {
    pub(crate) fn new(bearer_token: Option<String>) -> Self {
        Self {
            store: Mutex::new(KmsStore::default()),
            requests: Mutex::new(Vec::new()),
            bearer_token,
        }
    }

    pub(crate) fn store(&self) -> KResult<MutexGuard<'_, KmsStore>> {
        self.store
            .lock()
            .map_err(|e| KmsServerError::ServerError(format!("poisoned store: {e}")))
    }

    pub(crate) fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    pub(crate) fn record(&self, req: &HttpRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest::from_http(req));
        }
    }

    /// The requests received for the Key Protect instance `instance`, in
    /// arrival order.
    #[must_use]
    pub fn requests_for_instance(&self, instance: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| {
                requests
                    .iter()
                    .filter(|r| r.header("bluemix-instance") == Some(instance))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
