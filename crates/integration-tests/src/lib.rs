//! Integration tests for AfriShop.
//!
//! The storefront keeps all state in memory, so every test spawns its own
//! server in-process on an ephemeral port and drives it over real HTTP.
//! Each server starts from the seeded launch catalog with no orders and an
//! empty session store, so tests are fully isolated from each other.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p afrishop-integration-tests
//! ```

use afrishop_storefront::config::StorefrontConfig;
use afrishop_storefront::state::AppState;

/// A storefront server running in-process for one test.
pub struct TestServer {
    /// Base URL of the spawned server, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
    /// Client with a cookie store, so the cart session persists across
    /// requests the way a browser's would.
    pub client: reqwest::Client,
}

impl TestServer {
    /// Spawn a storefront with the seeded launch catalog.
    ///
    /// # Panics
    ///
    /// Panics when the listener cannot bind or the client cannot build;
    /// both abort the test.
    pub async fn spawn() -> Self {
        let state = AppState::new(StorefrontConfig::default());
        Self::spawn_with_state(state).await
    }

    /// Spawn a storefront over explicit application state.
    ///
    /// # Panics
    ///
    /// Panics when the listener cannot bind or the client cannot build.
    pub async fn spawn_with_state(state: AppState) -> Self {
        let app = afrishop_storefront::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server error");
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: format!("http://{addr}"),
            client,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
