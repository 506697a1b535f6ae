//! Test utilities for infomark-client
//!
//! [`TestServer`] serves an axum router standing in for an InfoMark server
//! on an ephemeral loopback port and builds a client configured for it.

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::{ClientConfig, ClientConfigBuilder, InfomarkClient, Result};

/// Request timeout of test clients, so a hung handler fails the test
const TEST_REQUEST_TIMEOUT_MS: u64 = 5_000;
const TEST_CONNECT_TIMEOUT_MS: u64 = 2_000;

/// Background `axum::serve` task and its shutdown trigger
struct ServeTask {
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<io::Result<()>>,
}

/// Mock InfoMark server bound to `127.0.0.1`
///
/// Dropping the server aborts the serve task; [`TestServer::shutdown`] stops
/// it gracefully and reports serve errors.
pub struct TestServer {
    addr: SocketAddr,
    config: ClientConfig,
    client: InfomarkClient,
    task: Option<ServeTask>,
}

impl TestServer {
    /// Serve `router` with a plain HTTP client using test timeouts
    ///
    /// ```ignore
    /// use axum::{routing::get, Router};
    /// use infomark_client::testing::TestServer;
    ///
    /// let router = Router::new().route("/api/v1/ping", get(|| async { "pong" }));
    /// let server = TestServer::start(router).await?;
    /// assert_eq!(server.client().common().ping().await?, "pong");
    /// ```
    pub async fn start<S>(router: axum::Router<S>) -> Result<Self>
    where
        S: Clone + Send + Sync + 'static,
        axum::Router<S>: Into<axum::Router>,
    {
        Self::start_with(router, |builder| builder).await
    }

    /// Serve `router`, letting the caller adjust the client configuration.
    ///
    /// The builder arrives pointed at the bound address with SSL off and the
    /// test timeouts set.
    pub async fn start_with<S, F>(router: axum::Router<S>, configure: F) -> Result<Self>
    where
        S: Clone + Send + Sync + 'static,
        axum::Router<S>: Into<axum::Router>,
        F: FnOnce(ClientConfigBuilder) -> ClientConfigBuilder,
    {
        // Connections queue on the bound socket until the task accepts them.
        let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;

        let config = configure(
            ClientConfig::builder(addr.ip().to_string(), addr.port())
                .ssl(false)
                .request_timeout_ms(TEST_REQUEST_TIMEOUT_MS)
                .connect_timeout_ms(TEST_CONNECT_TIMEOUT_MS),
        )
        .build();
        let client = InfomarkClient::from_config(&config)?;

        let (shutdown, stopped) = oneshot::channel::<()>();
        let app: axum::Router = router.into();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    stopped.await.ok();
                })
                .await
        });
        debug!("Mock InfoMark server listening on {}", addr);

        Ok(Self {
            addr,
            config,
            client,
            task: Some(ServeTask { shutdown, handle }),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Configuration the client was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn client(&self) -> &InfomarkClient {
        &self.client
    }

    /// Stop accepting connections and wait for in-flight requests
    pub async fn shutdown(mut self) -> Result<()> {
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        task.shutdown.send(()).ok();
        match task.handle.await {
            Ok(served) => Ok(served?),
            Err(join) => Err(io::Error::other(join).into()),
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.handle.abort();
        }
    }
}
