use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::{KeyVersion, StructsError, error::result::StructsResult};

/// Body of `POST /keys/{id}/actions/wrap`.
///
/// Without `plaintext`, the service generates a fresh data encryption key and
/// returns it alongside its ciphertext.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyActionWrapBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aad: Option<Vec<String>>,
}

impl KeyActionWrapBody {
    #[must_use]
    pub fn from_plaintext(plaintext: &[u8]) -> Self {
        Self {
            plaintext: Some(STANDARD.encode(plaintext)),
            aad: None,
        }
    }

    #[must_use]
    pub fn with_aad(mut self, aad: Vec<String>) -> Self {
        self.aad = Some(aad);
        self
    }
}

/// Body of `POST /keys/{id}/actions/unwrap`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyActionUnwrapBody {
    pub ciphertext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aad: Option<Vec<String>>,
}

impl KeyActionUnwrapBody {
    #[must_use]
    pub fn new(ciphertext: &str) -> Self {
        Self {
            ciphertext: ciphertext.to_owned(),
            aad: None,
        }
    }
}

/// Body of `POST /keys/{id}/actions/rewrap`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyActionRewrapBody {
    pub ciphertext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aad: Option<Vec<String>>,
}

impl KeyActionRewrapBody {
    #[must_use]
    pub fn new(ciphertext: &str) -> Self {
        Self {
            ciphertext: ciphertext.to_owned(),
            aad: None,
        }
    }
}

/// Optional new key material for a rotation or a restore.
/// An imported key must be rotated or restored with a new payload,
/// optionally encrypted with an import token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeyMaterialBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_nonce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<String>,
}

impl KeyMaterialBody {
    #[must_use]
    pub fn from_payload(payload: &[u8]) -> Self {
        Self {
            payload: Some(STANDARD.encode(payload)),
            ..Self::default()
        }
    }
}

pub type KeyActionRotateBody = KeyMaterialBody;
pub type KeyRestoreBody = KeyMaterialBody;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WrapKeyResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintext: Option<String>,
    pub ciphertext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_version: Option<KeyVersion>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnwrapKeyResponse {
    pub plaintext: String,
    /// Set when the ciphertext was wrapped with an older key version and the
    /// service rewrapped it with the latest one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciphertext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_version: Option<KeyVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrapped_key_version: Option<KeyVersion>,
}

impl UnwrapKeyResponse {
    /// # Errors
    /// Return an error if the plaintext is not valid base64.
    pub fn decode_plaintext(&self) -> StructsResult<Vec<u8>> {
        STANDARD.decode(&self.plaintext).map_err(StructsError::from)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RewrapKeyResponse {
    pub ciphertext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_version: Option<KeyVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrapped_key_version: Option<KeyVersion>,
}
