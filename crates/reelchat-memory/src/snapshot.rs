//! Whole-store snapshot serialization.
//!
//! The entire user -> session -> turns mapping is written as one JSON file,
//! overwritten wholesale on every mutation. Writes go to a temp file in the
//! same directory and are renamed into place so a process interruption never
//! leaves a half-written snapshot behind.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use reelchat_core::error::Result;
use reelchat_core::types::Turn;

/// In-memory shape of the persisted store.
pub type MemoryMap = HashMap<String, HashMap<String, Vec<Turn>>>;

/// Load a snapshot from disk, best-effort.
///
/// A missing file yields an empty map. An unreadable or corrupt file logs a
/// warning and also yields an empty map; startup never fails on a bad
/// snapshot.
pub fn load(path: &Path) -> MemoryMap {
    if !path.exists() {
        return MemoryMap::new();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read snapshot {}: {}. Starting empty.", path.display(), e);
            return MemoryMap::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(map) => map,
        Err(e) => {
            warn!(
                "Failed to parse snapshot {}: {}. Starting empty.",
                path.display(),
                e
            );
            MemoryMap::new()
        }
    }
}

/// Write the full store to disk atomically.
///
/// Serializes to `<path>.tmp` and renames over the target, so readers either
/// see the previous snapshot or the new one, never a partial file.
pub fn save(path: &Path, map: &MemoryMap) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string(map)?;
    // Append to the full name rather than swapping the extension, so
    // snapshots sharing a stem in one directory get distinct temp files.
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
