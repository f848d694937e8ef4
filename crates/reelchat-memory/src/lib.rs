//! Session memory for Reelchat.
//!
//! Maps user -> session -> ordered turn list, with best-effort whole-snapshot
//! JSON persistence. Absent users and sessions read as empty rather than
//! erroring; a failed flush logs and the in-memory state keeps serving.

pub mod snapshot;
pub mod store;

pub use store::SessionStore;
