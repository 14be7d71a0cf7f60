pub use error::KmsServerError;
pub use store::{RecordedRequest, ServerState};
pub use test_server::{
    TEST_BEARER_TOKEN, TestsContext, start_default_test_kms_server,
    start_test_kms_server_with_auth, start_test_server_with_options,
};

mod error;
mod routes;
mod store;
mod test_server;
