use std::{
    io,
    net::SocketAddr,
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};

use actix_server::ServerHandle;
use actix_web::{
    App, HttpServer,
    dev::Service,
    web::{self, Data},
};
use tokio::sync::OnceCell;
use tracing::{info, trace};

use crate::{routes, store::ServerState};

/// In order to run most tests in parallel,
/// we share a single test server between them.
/// Each test isolates itself by using its own `bluemix-instance`.
pub(crate) static ONCE: OnceCell<TestsContext> = OnceCell::const_new();
pub(crate) static ONCE_SERVER_WITH_AUTH: OnceCell<TestsContext> = OnceCell::const_new();

/// Bearer token expected by [`start_test_kms_server_with_auth`].
pub const TEST_BEARER_TOKEN: &str = "test-bearer-token";

/// Start the shared test server, without authentication.
pub async fn start_default_test_kms_server() -> &'static TestsContext {
    trace!("Starting default test server");
    ONCE.get_or_try_init(|| async { start_test_server_with_options(None) })
        .await
        .unwrap_or_else(|e| panic!("failed starting the test server: {e}"))
}

/// Start the shared test server that expects [`TEST_BEARER_TOKEN`].
pub async fn start_test_kms_server_with_auth() -> &'static TestsContext {
    trace!("Starting test server with bearer token authentication");
    ONCE_SERVER_WITH_AUTH
        .get_or_try_init(|| async {
            start_test_server_with_options(Some(TEST_BEARER_TOKEN.to_owned()))
        })
        .await
        .unwrap_or_else(|e| panic!("failed starting the test server: {e}"))
}

pub struct TestsContext {
    /// `http://127.0.0.1:<port>`
    pub server_url: String,
    pub server_handle: ServerHandle,
    pub thread_handle: JoinHandle<io::Result<()>>,
    pub state: Data<ServerState>,
}

impl TestsContext {
    pub async fn stop_server(self) -> io::Result<()> {
        self.server_handle.stop(false).await;
        self.thread_handle
            .join()
            .map_err(|_e| io::Error::other("failed joining the server thread"))?
    }
}

/// Start a test server on a free local port, in its own thread.
pub fn start_test_server_with_options(bearer_token: Option<String>) -> io::Result<TestsContext> {
    cosmian_logger::log_init(None);
    let state = Data::new(ServerState::new(bearer_token));
    let (tx, rx) = mpsc::channel::<(ServerHandle, SocketAddr)>();

    let server_state = state.clone();
    let thread_handle =
        thread::spawn(move || actix_web::rt::System::new().block_on(run(server_state, tx)));

    trace!("Waiting for test server to start...");
    let (server_handle, addr) = rx
        .recv_timeout(Duration::from_secs(25))
        .map_err(|e| io::Error::other(format!("can't get test server handle: {e}")))?;
    let server_url = format!("http://{addr}");
    info!("Key Protect test server listening at URL: {server_url}");

    Ok(TestsContext {
        server_url,
        server_handle,
        thread_handle,
        state,
    })
}

async fn run(
    state: Data<ServerState>,
    tx: mpsc::Sender<(ServerHandle, SocketAddr)>,
) -> io::Result<()> {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap_fn(|req, srv| {
                if let Some(state) = req.app_data::<Data<ServerState>>() {
                    state.record(req.request());
                }
                srv.call(req)
            })
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| io::Error::other("the test server is not bound"))?;
    let server = server.run();
    tx.send((server.handle(), addr))
        .map_err(|e| io::Error::other(e.to_string()))?;
    server.await
}
