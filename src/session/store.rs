//! Session storage implementation
//!
//! This module persists the "currently logged in" student per opaque session
//! token using Redis, including serialization, TTL handling, and clearing.

use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RedisConfig;
use crate::models::Student;
use crate::utils::errors::Result;

/// What a session remembers: the student identifier that gates page access
/// plus a denormalized snapshot of the student row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub student_id: i64,
    pub student: Student,
    pub established_at: DateTime<Utc>,
}

/// Redis-backed session store
#[derive(Clone)]
pub struct SessionStore {
    connection_manager: redis::aio::ConnectionManager,
    config: RedisConfig,
}

impl SessionStore {
    /// Create a new session store instance
    pub async fn new(config: RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            config,
        })
    }

    /// Establish a session for a student under the given token
    pub async fn establish(&self, token: &str, student: &Student) -> Result<()> {
        let key = self.session_key(token);
        let data = SessionData {
            student_id: student.id,
            student: student.clone(),
            established_at: Utc::now(),
        };
        let serialized = serde_json::to_string(&data)?;

        let mut conn = self.connection_manager.clone();
        conn.set_ex::<_, _, ()>(&key, serialized, self.config.session_ttl_seconds)
            .await?;

        debug!(student_id = student.id, key = %key, "Session established");
        Ok(())
    }

    /// The identifier of the currently logged-in student, if any.
    /// Pages gate access on this and send the caller back to login on `None`.
    pub async fn current(&self, token: &str) -> Result<Option<i64>> {
        Ok(self.load(token).await?.map(|data| data.student_id))
    }

    /// The denormalized student snapshot stored at login/signup time
    pub async fn snapshot(&self, token: &str) -> Result<Option<Student>> {
        Ok(self.load(token).await?.map(|data| data.student))
    }

    /// Clear the session unconditionally. Idempotent: clearing an absent
    /// session is not an error.
    pub async fn clear(&self, token: &str) -> Result<()> {
        let key = self.session_key(token);
        let mut conn = self.connection_manager.clone();

        let deleted: u32 = conn.del(&key).await?;
        debug!(key = %key, deleted = deleted, "Session cleared");

        Ok(())
    }

    async fn load(&self, token: &str) -> Result<Option<SessionData>> {
        let key = self.session_key(token);
        let mut conn = self.connection_manager.clone();

        let serialized: Option<String> = conn.get(&key).await?;

        match serialized {
            Some(data) => {
                let session: SessionData = serde_json::from_str(&data)?;
                debug!(student_id = session.student_id, key = %key, "Session loaded");
                Ok(Some(session))
            }
            None => {
                debug!(key = %key, "No session found");
                Ok(None)
            }
        }
    }

    /// Get the Redis key for a session token
    fn session_key(&self, token: &str) -> String {
        format!("{}session:{}", self.config.prefix, token)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
