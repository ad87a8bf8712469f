use jokes::domain::favorites::FavoritesStore;
use jokes::domain::joke::JokeFetcher;
use jokes::infrastructure::repositories::{FileKeyValueRepository, HttpJokeRepository};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use test_context::AsyncTestContext;

pub mod mock_server;

use mock_server::MockJokeServer;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(2);

pub struct TestContext {
    pub server: MockJokeServer,
    data_dir: TempDir,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            // Each test gets its own mock service and data directory
            let server = MockJokeServer::start().await;
            let data_dir = tempfile::tempdir().expect("Failed to create data dir");

            Self { server, data_dir }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // The data directory is removed when TempDir drops
        }
    }
}

impl TestContext {
    pub fn data_dir(&self) -> &Path {
        self.data_dir.path()
    }

    /// Fetcher wired to the mock joke service
    pub fn fetcher(&self) -> JokeFetcher {
        fetcher_for(&self.server.base_url, TEST_TIMEOUT)
    }

    /// Favorites store over the test data directory, as loaded at app startup
    pub async fn load_favorites(&self) -> FavoritesStore {
        FavoritesStore::load(Arc::new(FileKeyValueRepository::new(self.data_dir()))).await
    }
}

pub fn fetcher_for(base_url: &str, timeout: Duration) -> JokeFetcher {
    let repo = HttpJokeRepository::new(timeout).expect("Failed to build HTTP client");
    JokeFetcher::new(Arc::new(repo), base_url)
}
