//! Common test utilities and fixtures for integration tests.
//!
//! Tests run against the real router with in-memory configuration, so no
//! environment variables or network services are required.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use answer_check_backend::config::ServerConfig;
use answer_check_backend::{build_router, AppState};

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a test context with default configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a test context with custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        Self {
            app: build_router(AppState::new(config)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server for this context.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
