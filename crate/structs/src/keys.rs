use std::{fmt::Display, str::FromStr};

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::{
    Collection, StructsError, error::result::StructsResult, media_types::KEY_MEDIA_TYPE,
    structs_bail,
};

/// Lifecycle state of a key, as coded by the service (NIST SP 800-57).
/// Value 4 is not assigned.
#[repr(u8)]
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
#[serde(try_from = "u8", into = "u8")]
pub enum KeyState {
    PreActivation = 0,
    Active = 1,
    Suspended = 2,
    Deactivated = 3,
    Destroyed = 5,
}

#[allow(clippy::as_conversions)]
impl From<KeyState> for u8 {
    fn from(state: KeyState) -> Self {
        state as Self
    }
}

impl TryFrom<u8> for KeyState {
    type Error = StructsError;

    fn try_from(value: u8) -> StructsResult<Self> {
        match value {
            0 => Ok(Self::PreActivation),
            1 => Ok(Self::Active),
            2 => Ok(Self::Suspended),
            3 => Ok(Self::Deactivated),
            5 => Ok(Self::Destroyed),
            _ => Err(StructsError::InvalidKeyState(value)),
        }
    }
}

impl FromStr for KeyState {
    type Err = StructsError;

    fn from_str(s: &str) -> StructsResult<Self> {
        match s {
            "pre-activation" => Ok(Self::PreActivation),
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            "deactivated" => Ok(Self::Deactivated),
            "destroyed" => Ok(Self::Destroyed),
            _ => structs_bail!("Invalid key state: {}", s),
        }
    }
}

impl Display for KeyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PreActivation => "pre-activation",
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Deactivated => "deactivated",
            Self::Destroyed => "destroyed",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeyVersion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Dual authorization state attached to a key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DualAuthKeyMetadata {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_set_for_deletion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_expiration: Option<String>,
}

/// A key as returned by the service.
///
/// The same representation serves the full metadata view and the view with
/// payload: `payload` is only present for standard (extractable) keys
/// retrieved with `GET /keys/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<KeyState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extractable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_metadata: Option<AlgorithmMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_bit_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonactive_state_reason: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_rotate_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_version: Option<KeyVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual_auth_delete: Option<DualAuthKeyMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore_expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore_allowed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purge_allowed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purge_allowed_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purge_scheduled_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl Key {
    /// Root keys are never extractable.
    #[must_use]
    pub fn is_root_key(&self) -> bool {
        self.extractable == Some(false)
    }

    /// Decode the base64 payload of a standard key, if any.
    ///
    /// # Errors
    /// Return an error if the payload is not valid base64.
    pub fn decode_payload(&self) -> StructsResult<Option<Vec<u8>>> {
        self.payload
            .as_deref()
            .map(|p| STANDARD.decode(p).map_err(StructsError::from))
            .transpose()
    }
}

/// A key resource in a `POST /keys` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateKeyResource {
    #[serde(rename = "type")]
    pub key_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    pub extractable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_nonce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<String>,
}

impl CreateKeyResource {
    fn new(name: &str, extractable: bool) -> Self {
        Self {
            key_type: KEY_MEDIA_TYPE.to_owned(),
            name: name.to_owned(),
            description: None,
            aliases: None,
            tags: None,
            expiration_date: None,
            extractable,
            payload: None,
            encrypted_nonce: None,
            iv: None,
            encryption_algorithm: None,
        }
    }

    /// A non extractable key, used to wrap other keys.
    #[must_use]
    pub fn root_key(name: &str) -> Self {
        Self::new(name, false)
    }

    /// An extractable key whose payload can be retrieved.
    #[must_use]
    pub fn standard_key(name: &str) -> Self {
        Self::new(name, true)
    }

    /// Import `payload` as the key material instead of letting the service
    /// generate it.
    #[must_use]
    pub fn with_payload(mut self, payload: &[u8]) -> Self {
        self.payload = Some(STANDARD.encode(payload));
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Wrap this resource in the collection expected by `POST /keys`.
    #[must_use]
    pub fn into_collection(self) -> Collection<Self> {
        Collection::new(KEY_MEDIA_TYPE, vec![self])
    }
}

/// Body of `PATCH /keys/{id}`: move a key to another key ring.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPatchBody {
    #[serde(rename = "keyRingID", default, skip_serializing_if = "Option::is_none")]
    pub key_ring_id: Option<String>,
}
