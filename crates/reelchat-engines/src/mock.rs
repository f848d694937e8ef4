//! Scripted mock collaborators.
//!
//! Deterministic stand-ins for the real inference engines, used by the test
//! suites and by the binary when no backend is wired up. Each mock either
//! replays scripted output or fails on demand so that the fail-soft handler
//! paths can be exercised.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use reelchat_core::error::{ReelchatError, Result};

use crate::{GenMessage, SpeechToText, TextGeneration, VisionLanguage};

// ---------------------------------------------------------------------------
// MockSpeechToText
// ---------------------------------------------------------------------------

/// Speech-to-text mock returning a fixed transcript.
#[derive(Debug, Clone)]
pub struct MockSpeechToText {
    transcript: String,
    fail: bool,
}

impl MockSpeechToText {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            fail: false,
        }
    }

    /// A mock whose every call fails, as if the audio were unreadable.
    pub fn failing() -> Self {
        Self {
            transcript: String::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl SpeechToText for MockSpeechToText {
    async fn transcribe(&self, media_path: &str) -> Result<String> {
        if self.fail {
            return Err(ReelchatError::Transcription(
                "No audio stream found".to_string(),
            ));
        }
        if media_path.is_empty() {
            return Err(ReelchatError::Transcription(
                "Media path is empty".to_string(),
            ));
        }
        tracing::debug!(media_path, "Mock transcription generated");
        Ok(self.transcript.clone())
    }
}

// ---------------------------------------------------------------------------
// MockVisionLanguage
// ---------------------------------------------------------------------------

/// Vision-language mock returning a fixed raw reply.
///
/// The reply is returned untouched, so tests can include the
/// `"Assistant:"` delimiter and response-prefix markers the formatter is
/// expected to strip.
#[derive(Debug, Clone)]
pub struct MockVisionLanguage {
    reply: String,
    fail: bool,
}

impl MockVisionLanguage {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl VisionLanguage for MockVisionLanguage {
    async fn describe(&self, video_path: &str, _prompt: &str) -> Result<String> {
        if self.fail {
            return Err(ReelchatError::Vision("Inference failed".to_string()));
        }
        if video_path.is_empty() {
            return Err(ReelchatError::Vision("Video path is empty".to_string()));
        }
        Ok(self.reply.clone())
    }
}

// ---------------------------------------------------------------------------
// MockTextGeneration
// ---------------------------------------------------------------------------

/// Text-generation mock replaying a queue of scripted outputs.
///
/// Each `complete` call pops the next scripted reply. Running past the end
/// of the script is an error, which keeps tests honest about how many model
/// calls a path issues.
pub struct MockTextGeneration {
    replies: Mutex<VecDeque<String>>,
    fail: bool,
}

impl MockTextGeneration {
    /// Script a sequence of replies, one per expected call.
    pub fn scripted(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            fail: false,
        }
    }

    /// Script a single reply.
    pub fn single(reply: impl Into<String>) -> Self {
        Self::scripted([reply.into()])
    }

    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl TextGeneration for MockTextGeneration {
    async fn complete(&self, messages: &[GenMessage]) -> Result<String> {
        if self.fail {
            return Err(ReelchatError::Generation("Model not available".to_string()));
        }
        if messages.is_empty() {
            return Err(ReelchatError::Generation("Empty message list".to_string()));
        }
        self.replies
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .ok_or_else(|| ReelchatError::Generation("No scripted reply left".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transcription_basic() {
        let stt = MockSpeechToText::new("hello world");
        let text = stt.transcribe("clip.mp4").await.unwrap();
        assert_eq!(text, "hello world");
    }

    #[tokio::test]
    async fn test_mock_transcription_empty_path() {
        let stt = MockSpeechToText::new("hello");
        assert!(stt.transcribe("").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_transcription_failing() {
        let stt = MockSpeechToText::failing();
        let err = stt.transcribe("clip.mp4").await.unwrap_err();
        assert!(matches!(err, ReelchatError::Transcription(_)));
    }

    #[tokio::test]
    async fn test_mock_vision_basic() {
        let vlm = MockVisionLanguage::new("Assistant: a cat on a sofa");
        let reply = vlm.describe("cat.mp4", "what do you see").await.unwrap();
        assert!(reply.contains("cat on a sofa"));
    }

    #[tokio::test]
    async fn test_mock_vision_failing() {
        let vlm = MockVisionLanguage::failing();
        assert!(vlm.describe("cat.mp4", "what").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_generation_replays_in_order() {
        let llm = MockTextGeneration::scripted(["first", "second"]);
        let messages = [GenMessage::user("q")];
        assert_eq!(llm.complete(&messages).await.unwrap(), "first");
        assert_eq!(llm.complete(&messages).await.unwrap(), "second");
    }

    #[tokio::test]
    async fn test_mock_generation_exhausted_script_errors() {
        let llm = MockTextGeneration::single("only");
        let messages = [GenMessage::user("q")];
        llm.complete(&messages).await.unwrap();
        assert!(llm.complete(&messages).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_generation_empty_messages_errors() {
        let llm = MockTextGeneration::single("reply");
        assert!(llm.complete(&[]).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_generation_failing() {
        let llm = MockTextGeneration::failing();
        let err = llm.complete(&[GenMessage::user("q")]).await.unwrap_err();
        assert!(matches!(err, ReelchatError::Generation(_)));
    }
}
