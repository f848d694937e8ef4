//! Visual analysis handler.

use std::sync::Arc;

use tracing::warn;

use reelchat_core::error::{ReelchatError, Result};
use reelchat_core::types::RequestContext;
use reelchat_engines::VisionLanguage;

use crate::format::extract_reply;
use crate::prompts::APOLOGY_MESSAGE;

/// Sends the video reference plus the user's query to the vision-language
/// collaborator and extracts the assistant reply from its raw output.
pub struct VisionHandler {
    vlm: Arc<dyn VisionLanguage>,
}

impl VisionHandler {
    pub fn new(vlm: Arc<dyn VisionLanguage>) -> Self {
        Self { vlm }
    }

    /// Run the handler, writing the response into the context. Failures
    /// collapse into the fixed apology.
    pub async fn run(&self, ctx: &mut RequestContext) {
        ctx.accumulated_response = match self.describe(ctx).await {
            Ok(raw) => extract_reply(&raw),
            Err(e) => {
                warn!(request_id = %ctx.request_id, error = %e, "Vision analysis failed");
                APOLOGY_MESSAGE.to_string()
            }
        };
    }

    async fn describe(&self, ctx: &RequestContext) -> Result<String> {
        let video_path = ctx
            .video_path
            .as_deref()
            .ok_or_else(|| ReelchatError::Vision("No video reference provided".to_string()))?;
        self.vlm.describe(video_path, &ctx.query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelchat_engines::MockVisionLanguage;

    fn context_with_video() -> RequestContext {
        RequestContext::new("u1", "s1", "what happens here?", Some("clip.mp4".into()))
    }

    #[tokio::test]
    async fn test_extracts_assistant_reply() {
        let raw = "🧠 Response: User: what happens here? Assistant: A goal is scored.";
        let handler = VisionHandler::new(Arc::new(MockVisionLanguage::new(raw)));
        let mut ctx = context_with_video();
        handler.run(&mut ctx).await;
        assert_eq!(ctx.accumulated_response, "A goal is scored.");
    }

    #[tokio::test]
    async fn test_reply_without_delimiter_passes_through() {
        let handler = VisionHandler::new(Arc::new(MockVisionLanguage::new("a cat sleeping")));
        let mut ctx = context_with_video();
        handler.run(&mut ctx).await;
        assert_eq!(ctx.accumulated_response, "a cat sleeping");
    }

    #[tokio::test]
    async fn test_collaborator_failure_yields_apology() {
        let handler = VisionHandler::new(Arc::new(MockVisionLanguage::failing()));
        let mut ctx = context_with_video();
        handler.run(&mut ctx).await;
        assert_eq!(ctx.accumulated_response, APOLOGY_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_video_reference_yields_apology() {
        let handler = VisionHandler::new(Arc::new(MockVisionLanguage::new("reply")));
        let mut ctx = RequestContext::new("u1", "s1", "what happens?", None);
        handler.run(&mut ctx).await;
        assert_eq!(ctx.accumulated_response, APOLOGY_MESSAGE);
    }
}
