mod collection;
mod error;
mod import_token;
mod instance;
mod key_actions;
mod key_rings;
mod keys;
pub mod media_types;
mod policies;
mod registrations;

pub use collection::{Collection, CollectionMetadata};
pub use error::{StructsError, result::StructsResult};
pub use import_token::{GetImportToken, ImportToken, ImportTokenCreateBody};
pub use instance::{
    AllowedIpAttributes, AllowedIpPolicyData, AllowedIpPortResource, AllowedNetworkAttributes,
    AllowedNetworkPolicyData, EnabledPolicyData, InstancePolicy, InstancePolicyResource,
    InstancePolicyType, KeyCreateImportAccessAttributes, KeyCreateImportAccessPolicyData,
    instance_policies_collection,
};
pub use key_actions::{
    KeyActionRewrapBody, KeyActionRotateBody, KeyActionUnwrapBody, KeyActionWrapBody,
    KeyMaterialBody, KeyRestoreBody, RewrapKeyResponse, UnwrapKeyResponse, WrapKeyResponse,
};
pub use key_rings::{KeyAliasResource, KeyRing};
pub use keys::{
    AlgorithmMetadata, CreateKeyResource, DualAuthKeyMetadata, Key, KeyPatchBody, KeyState,
    KeyVersion,
};
pub use media_types::Prefer;
pub use policies::{
    DualAuthDeletePolicy, KeyPolicy, KeyPolicyResource, KeyPolicySetting, KeyPolicyType,
    RotationPolicy, SetKeyPolicies,
};
pub use registrations::RegistrationResource;
