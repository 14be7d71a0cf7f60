/// Check the required fields of an operation parameter struct and bind each
/// of them, unwrapped, to a local of the same name.
///
/// All the missing fields are reported at once, in declaration order.
macro_rules! required_params {
    ($params:ident { $($field:ident),+ $(,)? }) => {
        let missing = [$((stringify!($field), $params.$field.is_none())),+]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect::<Vec<_>>();
        let ($(Some($field),)+) = ($($params.$field,)+) else {
            return Err($crate::KeyProtectClientError::MissingParameters(
                missing.join(", "),
            ));
        };
    };
}

pub use authenticator::{Authenticator, BearerTokenAuthenticator, NoAuthAuthenticator};
pub use config::{
    AuthType, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL, KEY_PROTECT_CLIENT_CONF_ENV,
    KeyProtectClientConfig,
};
pub use error::{
    KeyProtectClientError,
    result::{KeyProtectClientResult, KeyProtectResultHelper},
};
pub use import_token::{GetImportTokenParams, PostImportTokenParams};
pub use key_actions::{
    DisableKeyParams, EnableKeyParams, KeyActionParams, RewrapKeyParams, RotateKeyParams,
    SetKeyForDeletionParams, SyncAssociatedResourcesParams, UnsetKeyForDeletionParams,
    UnwrapKeyParams, WrapKeyParams,
};
pub use key_rings::{
    CreateKeyAliasParams, CreateKeyRingParams, DeleteKeyAliasParams, DeleteKeyRingParams,
    KeyAliasParams, KeyRingParams, ListKeyRingsParams,
};
pub use keys::{
    CreateKeyParams, DeleteKeyParams, GetKeyCollectionMetadataParams, GetKeyMetadataParams,
    GetKeyParams, GetKeyVersionsParams, GetKeysParams, PatchKeyParams, PurgeKeyParams,
    RestoreKeyParams,
};
pub use policies::{
    GetAllowedIpPortParams, GetInstancePolicyParams, GetPolicyParams, PutInstancePolicyParams,
    PutPolicyParams,
};
pub use registrations::{GetRegistrationsAllKeysParams, GetRegistrationsParams};
pub use request::{DetailedResponse, RequestDescriptor, ResponseType, TransportResponse};
pub use rest_client::KeyProtectRestClient;
pub use transport::{ReqwestTransport, Transport, handle_error};

mod authenticator;
mod config;
mod error;
mod import_token;
mod key_actions;
mod key_rings;
mod keys;
mod policies;
mod registrations;
pub mod request;
mod rest_client;
mod transport;

#[cfg(test)]
mod tests;

pub mod reexport {
    pub use key_protect_structs;
    pub use reqwest;
}
