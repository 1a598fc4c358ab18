use std::sync::Arc;

use tower_sessions::{MemoryStore, Session};

mod auth;

/// Builds a fresh session over an in-memory store for callback tests.
fn test_session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}
