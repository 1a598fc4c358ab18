use std::sync::Arc;

use tower_sessions::{MemoryStore, Session};

mod guard;

/// Builds a fresh session over an in-memory store for guard and wrapper
/// tests.
fn test_session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}
