//! Common test utilities and fixtures for integration tests.
//!
//! Every context runs against an in-memory SQLite store and a seeded random
//! source, so the tests need no external services.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use vocab_core::WordRecord;
use vocab_drill_server::db::{SqliteRepository, WordStore};
use vocab_drill_server::services::dictionary::Dictionary;
use vocab_drill_server::{build_router, AppState};

/// Test context wrapping a router over a fresh store.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Context with an empty collection.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Context whose store already holds `records`.
    pub fn with_records(records: Vec<WordRecord>) -> Self {
        let repository =
            SqliteRepository::open_in_memory().expect("Failed to open in-memory store");
        for record in records {
            let word = vocab_core::Word::from_record(record);
            repository.insert(&word).expect("Failed to seed word");
        }

        let dictionary = Dictionary::load(Box::new(repository), ChaCha8Rng::seed_from_u64(42))
            .expect("Failed to load dictionary");

        Self {
            app: build_router(AppState::new(dictionary)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
