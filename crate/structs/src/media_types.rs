use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{StructsError, error::result::StructsResult, structs_bail};

pub const APPLICATION_JSON: &str = "application/json";

/// Media type of key resources and key collections.
pub const KEY_MEDIA_TYPE: &str = "application/vnd.ibm.kms.key+json";
pub const KEY_ACTION_WRAP_MEDIA_TYPE: &str = "application/vnd.ibm.kms.key_action_wrap+json";
pub const KEY_ACTION_UNWRAP_MEDIA_TYPE: &str = "application/vnd.ibm.kms.key_action_unwrap+json";
pub const KEY_ACTION_REWRAP_MEDIA_TYPE: &str = "application/vnd.ibm.kms.key_action_rewrap+json";
pub const KEY_ACTION_ROTATE_MEDIA_TYPE: &str = "application/vnd.ibm.kms.key_action_rotate+json";
pub const KEY_ACTION_RESTORE_MEDIA_TYPE: &str =
    "application/vnd.ibm.kms.key_action_restore+json";

/// Collection type shared by key policies and instance policies.
pub const POLICY_MEDIA_TYPE: &str = "application/vnd.ibm.kms.policy+json";
pub const KEY_RING_MEDIA_TYPE: &str = "application/vnd.ibm.kms.key_ring+json";
pub const ALIAS_MEDIA_TYPE: &str = "application/vnd.ibm.kms.alias+json";
pub const REGISTRATION_MEDIA_TYPE: &str = "application/vnd.ibm.kms.registration+json";
pub const ALLOWED_IP_METADATA_MEDIA_TYPE: &str = "application/vnd.ibm.kms.allowed_ip_metadata+json";

/// Value of the `Prefer` request header, which controls how verbose the
/// service response is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefer {
    #[serde(rename = "return=minimal")]
    ReturnMinimal,
    #[serde(rename = "return=representation")]
    ReturnRepresentation,
}

impl Prefer {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReturnMinimal => "return=minimal",
            Self::ReturnRepresentation => "return=representation",
        }
    }
}

impl FromStr for Prefer {
    type Err = StructsError;

    fn from_str(s: &str) -> StructsResult<Self> {
        match s {
            "return=minimal" => Ok(Self::ReturnMinimal),
            "return=representation" => Ok(Self::ReturnRepresentation),
            _ => structs_bail!("Invalid Prefer header value: {}", s),
        }
    }
}

impl Display for Prefer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
