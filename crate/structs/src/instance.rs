use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Collection, StructsError, error::result::StructsResult, media_types::POLICY_MEDIA_TYPE,
    structs_bail,
};

/// Value of the `policy` query parameter of the instance policy endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstancePolicyType {
    #[serde(rename = "allowedNetwork")]
    AllowedNetwork,
    #[serde(rename = "dualAuthDelete")]
    DualAuthDelete,
    #[serde(rename = "allowedIP")]
    AllowedIp,
    #[serde(rename = "keyCreateImportAccess")]
    KeyCreateImportAccess,
    #[serde(rename = "metrics")]
    Metrics,
}

impl InstancePolicyType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AllowedNetwork => "allowedNetwork",
            Self::DualAuthDelete => "dualAuthDelete",
            Self::AllowedIp => "allowedIP",
            Self::KeyCreateImportAccess => "keyCreateImportAccess",
            Self::Metrics => "metrics",
        }
    }
}

impl FromStr for InstancePolicyType {
    type Err = StructsError;

    fn from_str(s: &str) -> StructsResult<Self> {
        match s {
            "allowedNetwork" => Ok(Self::AllowedNetwork),
            "dualAuthDelete" => Ok(Self::DualAuthDelete),
            "allowedIP" => Ok(Self::AllowedIp),
            "keyCreateImportAccess" => Ok(Self::KeyCreateImportAccess),
            "metrics" => Ok(Self::Metrics),
            _ => structs_bail!("Invalid instance policy type: {}", s),
        }
    }
}

impl Display for InstancePolicyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledPolicyData {
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllowedNetworkAttributes {
    /// `public-and-private` or `private-only`.
    pub allowed_network: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllowedNetworkPolicyData {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AllowedNetworkAttributes>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllowedIpAttributes {
    /// IPv4 or IPv6 CIDR blocks.
    pub allowed_ip: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllowedIpPolicyData {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AllowedIpAttributes>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyCreateImportAccessAttributes {
    #[serde(default)]
    pub create_root_key: bool,
    #[serde(default)]
    pub create_standard_key: bool,
    #[serde(default)]
    pub import_root_key: bool,
    #[serde(default)]
    pub import_standard_key: bool,
    #[serde(default)]
    pub enforce_token: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCreateImportAccessPolicyData {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<KeyCreateImportAccessAttributes>,
}

/// An instance policy, keyed on the wire by `policy_type` with its settings
/// under `policy_data`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "policy_type", content = "policy_data")]
pub enum InstancePolicy {
    #[serde(rename = "allowedNetwork")]
    AllowedNetwork(AllowedNetworkPolicyData),
    #[serde(rename = "dualAuthDelete")]
    DualAuthDelete(EnabledPolicyData),
    #[serde(rename = "allowedIP")]
    AllowedIp(AllowedIpPolicyData),
    #[serde(rename = "keyCreateImportAccess")]
    KeyCreateImportAccess(KeyCreateImportAccessPolicyData),
    #[serde(rename = "metrics")]
    Metrics(EnabledPolicyData),
}

impl InstancePolicy {
    #[must_use]
    pub const fn policy_type(&self) -> InstancePolicyType {
        match self {
            Self::AllowedNetwork(_) => InstancePolicyType::AllowedNetwork,
            Self::DualAuthDelete(_) => InstancePolicyType::DualAuthDelete,
            Self::AllowedIp(_) => InstancePolicyType::AllowedIp,
            Self::KeyCreateImportAccess(_) => InstancePolicyType::KeyCreateImportAccess,
            Self::Metrics(_) => InstancePolicyType::Metrics,
        }
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        match self {
            Self::AllowedNetwork(d) => d.enabled,
            Self::AllowedIp(d) => d.enabled,
            Self::KeyCreateImportAccess(d) => d.enabled,
            Self::DualAuthDelete(d) | Self::Metrics(d) => d.enabled,
        }
    }
}

/// Build the body of `PUT /instance/policies`: one resource per policy.
#[must_use]
pub fn instance_policies_collection(policies: Vec<InstancePolicy>) -> Collection<InstancePolicy> {
    Collection::new(POLICY_MEDIA_TYPE, policies)
}

/// An instance policy as returned by the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstancePolicyResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(flatten)]
    pub policy: InstancePolicy,
}

/// Port to use when the instance only accepts traffic from allowed IPs over
/// the private endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowedIpPortResource {
    pub private_endpoint_port: u16,
}
