//! The session store: durable per-user, per-session conversation memory.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use reelchat_core::types::{Role, Turn};

use crate::snapshot::{self, MemoryMap};

/// Durable mapping of user -> session -> ordered turn list.
///
/// Every mutating call rewrites the full snapshot (when persistence is
/// enabled). The internal mutex makes individual calls safe to issue from
/// multiple threads, but the read-modify-write-flush cycle is not a
/// transaction: concurrent appends to the same session must be serialized
/// by the caller.
pub struct SessionStore {
    state: Mutex<MemoryMap>,
    snapshot_path: Option<PathBuf>,
}

impl SessionStore {
    /// Open a store persisted at `path`, loading any existing snapshot.
    ///
    /// A missing or corrupt snapshot starts the store empty; opening never
    /// fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = snapshot::load(&path);
        debug!(
            users = state.len(),
            path = %path.display(),
            "Session store opened"
        );
        Self {
            state: Mutex::new(state),
            snapshot_path: Some(path),
        }
    }

    /// Create a store with no backing file. Used in tests and ephemeral runs.
    pub fn in_memory() -> Self {
        Self {
            state: Mutex::new(MemoryMap::new()),
            snapshot_path: None,
        }
    }

    /// Idempotent session creation. Flushes only when something was created.
    pub fn ensure_session(&self, user_id: &str, session_id: &str) {
        let created = {
            let mut state = self.lock();
            let sessions = state.entry(user_id.to_string()).or_default();
            if sessions.contains_key(session_id) {
                false
            } else {
                sessions.insert(session_id.to_string(), Vec::new());
                true
            }
        };
        if created {
            self.flush();
        }
    }

    /// Append one turn, creating the session if absent, and flush.
    pub fn append_turn(&self, user_id: &str, session_id: &str, role: Role, content: &str) {
        {
            let mut state = self.lock();
            state
                .entry(user_id.to_string())
                .or_default()
                .entry(session_id.to_string())
                .or_default()
                .push(Turn::new(role, content));
        }
        self.flush();
    }

    /// Serialize the last `window` turns as `"role: content"` lines.
    ///
    /// Returns the empty string when the session is absent or has no turns.
    pub fn recent_context(&self, user_id: &str, session_id: &str, window: usize) -> String {
        let state = self.lock();
        let Some(turns) = state.get(user_id).and_then(|s| s.get(session_id)) else {
            return String::new();
        };
        let start = turns.len().saturating_sub(window);
        turns[start..]
            .iter()
            .map(|t| format!("{}: {}", t.role, t.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full turn list for a session. Absent sessions read as empty.
    pub fn history(&self, user_id: &str, session_id: &str) -> Vec<Turn> {
        let state = self.lock();
        state
            .get(user_id)
            .and_then(|s| s.get(session_id))
            .cloned()
            .unwrap_or_default()
    }

    /// Empty a session's turn list without removing the session itself.
    pub fn clear_session(&self, user_id: &str, session_id: &str) {
        {
            let mut state = self.lock();
            if let Some(turns) = state.get_mut(user_id).and_then(|s| s.get_mut(session_id)) {
                turns.clear();
            }
        }
        self.flush();
    }

    /// Remove a session. Absence is tolerated silently.
    pub fn delete_session(&self, user_id: &str, session_id: &str) {
        {
            let mut state = self.lock();
            if let Some(sessions) = state.get_mut(user_id) {
                sessions.remove(session_id);
            }
        }
        self.flush();
    }

    /// Remove a user and all their sessions. Absence is tolerated silently.
    pub fn delete_user(&self, user_id: &str) {
        {
            let mut state = self.lock();
            state.remove(user_id);
        }
        self.flush();
    }

    /// All known user ids.
    pub fn list_users(&self) -> Vec<String> {
        let state = self.lock();
        state.keys().cloned().collect()
    }

    /// All session ids for a user.
    pub fn list_sessions(&self, user_id: &str) -> Vec<String> {
        let state = self.lock();
        state
            .get(user_id)
            .map(|s| s.keys().cloned().collect())
            .unwrap_or_default()
    }

    // -- Private helpers --

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryMap> {
        // A panic while holding the lock leaves the map structurally intact,
        // so recover the guard rather than propagating poison.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write-through to the backing snapshot.
    ///
    /// Persistence failures are logged and swallowed: the in-memory state
    /// continues to serve the current process.
    fn flush(&self) {
        let Some(ref path) = self.snapshot_path else {
            return;
        };
        let state = self.lock();
        if let Err(e) = snapshot::save(path, &state) {
            warn!("Failed to flush session snapshot to {}: {}", path.display(), e);
        }
    }
}
