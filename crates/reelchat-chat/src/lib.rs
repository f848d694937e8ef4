//! Orchestration core for Reelchat.
//!
//! Routes a natural-language request about a short video to exactly one
//! specialist capability (visual analysis, speech transcription, or report
//! generation), enforcing a single-task-per-request policy with deterministic
//! fallback, and records every turn in session memory.

pub mod classifier;
pub mod format;
pub mod graph;
pub mod handlers;
pub mod prompts;

pub use classifier::IntentClassifier;
pub use graph::{GraphConfig, Stage, TaskGraph};
