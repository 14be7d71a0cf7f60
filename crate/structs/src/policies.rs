use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Collection, StructsError, error::result::StructsResult, media_types::POLICY_MEDIA_TYPE,
    structs_bail,
};

/// Value of the `policy` query parameter of the key policy endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicyType {
    #[serde(rename = "rotation")]
    Rotation,
    #[serde(rename = "dualAuthDelete")]
    DualAuthDelete,
}

impl KeyPolicyType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rotation => "rotation",
            Self::DualAuthDelete => "dualAuthDelete",
        }
    }
}

impl FromStr for KeyPolicyType {
    type Err = StructsError;

    fn from_str(s: &str) -> StructsResult<Self> {
        match s {
            "rotation" => Ok(Self::Rotation),
            "dualAuthDelete" => Ok(Self::DualAuthDelete),
            _ => structs_bail!("Invalid key policy type: {}", s),
        }
    }
}

impl Display for KeyPolicyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotation interval, from 1 to 12 months.
    pub interval_month: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualAuthDeletePolicy {
    pub enabled: bool,
}

/// A single policy attached to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    Rotation(RotationPolicy),
    DualAuthDelete(DualAuthDeletePolicy),
}

impl KeyPolicy {
    #[must_use]
    pub const fn policy_type(&self) -> KeyPolicyType {
        match self {
            Self::Rotation(_) => KeyPolicyType::Rotation,
            Self::DualAuthDelete(_) => KeyPolicyType::DualAuthDelete,
        }
    }
}

/// Policies to set on a key with `PUT /keys/{id}/policies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKeyPolicies {
    Rotation(RotationPolicy),
    DualAuthDelete(DualAuthDeletePolicy),
    Multiple {
        rotation: RotationPolicy,
        dual_auth_delete: DualAuthDeletePolicy,
    },
}

impl SetKeyPolicies {
    /// The `policy` query value matching a single-policy request.
    #[must_use]
    pub const fn policy_type(&self) -> Option<KeyPolicyType> {
        match self {
            Self::Rotation(_) => Some(KeyPolicyType::Rotation),
            Self::DualAuthDelete(_) => Some(KeyPolicyType::DualAuthDelete),
            Self::Multiple { .. } => None,
        }
    }

    /// Build the request collection.
    #[must_use]
    pub fn into_collection(self) -> Collection<KeyPolicySetting> {
        let (rotation, dual_auth_delete) = match self {
            Self::Rotation(r) => (Some(r), None),
            Self::DualAuthDelete(d) => (None, Some(d)),
            Self::Multiple {
                rotation,
                dual_auth_delete,
            } => (Some(rotation), Some(dual_auth_delete)),
        };
        Collection::new(
            POLICY_MEDIA_TYPE,
            vec![KeyPolicySetting {
                resource_type: POLICY_MEDIA_TYPE.to_owned(),
                rotation,
                dual_auth_delete,
            }],
        )
    }
}

/// A resource of a `PUT /keys/{id}/policies` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyPolicySetting {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual_auth_delete: Option<DualAuthDeletePolicy>,
}

/// A key policy as returned by the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeyPolicyResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual_auth_delete: Option<DualAuthDeletePolicy>,
}

impl KeyPolicyResource {
    /// The policies carried by this resource, rotation first.
    #[must_use]
    pub fn policies(&self) -> Vec<KeyPolicy> {
        let mut policies = Vec::with_capacity(2);
        if let Some(rotation) = self.rotation {
            policies.push(KeyPolicy::Rotation(rotation));
        }
        if let Some(dual_auth_delete) = self.dual_auth_delete {
            policies.push(KeyPolicy::DualAuthDelete(dual_auth_delete));
        }
        policies
    }
}
