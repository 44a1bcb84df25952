//! Test database helper utilities
//!
//! Connects to the Postgres instance named by `TEST_DATABASE_URL` and the
//! Redis instance named by `TEST_REDIS_URL`. Suites call the constructors and
//! skip with a note when the variables are unset, so the suite runs anywhere
//! without requiring live backing services.

use sqlx::PgPool;
use std::sync::Once;

use eventra::config::RedisConfig;
use eventra::database::DatabaseService;
use eventra::session::SessionStore;

static INIT: Once = Once::new();

/// Test database handle with migrations applied
pub struct TestDatabase {
    pub pool: PgPool,
}

impl TestDatabase {
    /// Connect and migrate, or `None` when `TEST_DATABASE_URL` is unset
    pub async fn connect() -> Option<Self> {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt::try_init();
        });

        let url = std::env::var("TEST_DATABASE_URL").ok()?;

        let pool = PgPool::connect(&url)
            .await
            .expect("failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations");

        Some(Self { pool })
    }

    /// Repositories over the test pool
    pub fn database(&self) -> DatabaseService {
        DatabaseService::new(self.pool.clone())
    }

    /// Wipe the workflow tables so each test starts clean
    pub async fn reset(&self) {
        sqlx::query("TRUNCATE registrations, events, students RESTART IDENTITY CASCADE")
            .execute(&self.pool)
            .await
            .expect("failed to reset test database");
    }
}

/// Session store against `TEST_REDIS_URL`, or `None` when unset
pub async fn connect_sessions() -> Option<SessionStore> {
    let url = std::env::var("TEST_REDIS_URL").ok()?;

    let config = RedisConfig {
        url,
        prefix: "eventra_test:".to_string(),
        session_ttl_seconds: 600,
    };

    Some(
        SessionStore::new(config)
            .await
            .expect("failed to connect to test redis"),
    )
}
