//! Collaborator interfaces for Reelchat.
//!
//! The orchestration graph treats every model engine and the report renderer
//! as an opaque async function behind a trait. Real inference backends live
//! outside this repository; what ships here are the contracts, scripted mock
//! implementations for tests and development, and a plain-text stub renderer
//! the binary can actually run.

use std::path::PathBuf;

use async_trait::async_trait;

use reelchat_core::error::Result;
use reelchat_core::types::ReportSpec;

pub mod mock;
pub mod renderer;

pub use mock::{MockSpeechToText, MockTextGeneration, MockVisionLanguage};
pub use renderer::OutlineRenderer;

// =============================================================================
// Message types
// =============================================================================

/// Role of a message sent to the text-generation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenRole {
    System,
    User,
}

/// One message in a text-generation request.
#[derive(Debug, Clone)]
pub struct GenMessage {
    pub role: GenRole,
    pub content: String,
}

impl GenMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: GenRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: GenRole::User,
            content: content.into(),
        }
    }
}

// =============================================================================
// Collaborator traits
// =============================================================================

/// Speech-to-text engine.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe the audio track of a media file.
    ///
    /// # Errors
    /// Fails when the file is empty, inaccessible, or carries no audio.
    async fn transcribe(&self, media_path: &str) -> Result<String>;
}

/// Vision-language engine.
#[async_trait]
pub trait VisionLanguage: Send + Sync {
    /// Answer a free-text prompt about a video's visual content.
    async fn describe(&self, video_path: &str, prompt: &str) -> Result<String>;
}

/// Text-generation engine.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Run one completion over an ordered message list and return the raw
    /// model output, reasoning segments and all.
    async fn complete(&self, messages: &[GenMessage]) -> Result<String>;
}

/// Document renderer turning a report spec into a file on disk.
#[async_trait]
pub trait ReportRenderer: Send + Sync {
    /// Render the spec and return the path of the produced artifact.
    async fn render(&self, spec: &ReportSpec) -> Result<PathBuf>;
}
