//! Test helper module for mock-server based test isolation
//!
//! Every test gets its own mockito server on a random port, so tests can run
//! in parallel without sharing expectations.

use docverify_api::{ApiResult, ClientConfig};
use mockito::{Server, ServerGuard};

use crate::http_repositories::HttpRepositories;

/// Test context holding a mock backend and repositories pointed at it
pub struct TestContext {
    pub server: ServerGuard,
    pub repos: HttpRepositories,
}

impl TestContext {
    pub fn repos(&self) -> &HttpRepositories {
        &self.repos
    }
}

/// Install a fmt subscriber honouring `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Setup a test context with default configuration
///
/// # Example
///
/// ```ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error>> {
///     let mut ctx = setup_test_context().await?;
///     let mock = ctx.server.mock("GET", "/audit/audits").create_async().await;
///
///     // Perform requests through ctx.repos()...
///
///     mock.assert_async().await;
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> ApiResult<TestContext> {
    setup_test_context_with(|_| {}).await
}

/// Setup a test context after letting the caller adjust the configuration
pub async fn setup_test_context_with<F>(customize: F) -> ApiResult<TestContext>
where
    F: FnOnce(&mut ClientConfig),
{
    init_tracing();
    let server = Server::new_async().await;
    let mut config = ClientConfig {
        base_url: server.url(),
        ..ClientConfig::default()
    };
    customize(&mut config);
    let repos = HttpRepositories::new(&config)?;
    Ok(TestContext { server, repos })
}
