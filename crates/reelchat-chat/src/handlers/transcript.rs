//! Speech transcription handler.

use std::sync::Arc;

use tracing::warn;

use reelchat_core::error::{ReelchatError, Result};
use reelchat_core::types::RequestContext;
use reelchat_engines::SpeechToText;

use crate::format::{fill_template, pick_template};
use crate::prompts::{ACK_TEMPLATES, APOLOGY_MESSAGE};

/// Transcribes the request's video and wraps the transcript in a random
/// acknowledgment template.
pub struct TranscriptHandler {
    stt: Arc<dyn SpeechToText>,
    template_seed: Option<u64>,
}

impl TranscriptHandler {
    pub fn new(stt: Arc<dyn SpeechToText>, template_seed: Option<u64>) -> Self {
        Self { stt, template_seed }
    }

    /// Run the handler, writing the response into the context.
    ///
    /// Any failure (missing video reference, collaborator error) produces
    /// the fixed apology instead of propagating.
    pub async fn run(&self, ctx: &mut RequestContext) {
        ctx.accumulated_response = match self.transcribe(ctx).await {
            Ok(transcript) => fill_template(
                pick_template(&ACK_TEMPLATES, self.template_seed),
                &transcript,
            ),
            Err(e) => {
                warn!(request_id = %ctx.request_id, error = %e, "Transcription failed");
                APOLOGY_MESSAGE.to_string()
            }
        };
    }

    async fn transcribe(&self, ctx: &RequestContext) -> Result<String> {
        let video_path = ctx.video_path.as_deref().ok_or_else(|| {
            ReelchatError::Transcription("No video reference provided".to_string())
        })?;
        self.stt.transcribe(video_path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelchat_engines::MockSpeechToText;

    fn context_with_video() -> RequestContext {
        RequestContext::new("u1", "s1", "transcribe this", Some("clip.mp4".into()))
    }

    #[tokio::test]
    async fn test_success_wraps_transcript_in_template() {
        let handler = TranscriptHandler::new(Arc::new(MockSpeechToText::new("hello world")), None);
        let mut ctx = context_with_video();
        handler.run(&mut ctx).await;

        assert!(ctx.accumulated_response.contains("hello world"));
        let matched = ACK_TEMPLATES
            .iter()
            .any(|t| fill_template(t, "hello world") == ctx.accumulated_response);
        assert!(matched, "response must be one of the ten templates");
    }

    #[tokio::test]
    async fn test_seeded_template_is_deterministic() {
        let stt: Arc<dyn SpeechToText> = Arc::new(MockSpeechToText::new("text"));
        let handler_a = TranscriptHandler::new(stt.clone(), Some(3));
        let handler_b = TranscriptHandler::new(stt, Some(3));

        let mut ctx_a = context_with_video();
        let mut ctx_b = context_with_video();
        handler_a.run(&mut ctx_a).await;
        handler_b.run(&mut ctx_b).await;
        assert_eq!(ctx_a.accumulated_response, ctx_b.accumulated_response);
    }

    #[tokio::test]
    async fn test_collaborator_failure_yields_apology() {
        let handler = TranscriptHandler::new(Arc::new(MockSpeechToText::failing()), None);
        let mut ctx = context_with_video();
        handler.run(&mut ctx).await;
        assert_eq!(ctx.accumulated_response, APOLOGY_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_video_reference_yields_apology() {
        let handler = TranscriptHandler::new(Arc::new(MockSpeechToText::new("text")), None);
        let mut ctx = RequestContext::new("u1", "s1", "transcribe this", None);
        handler.run(&mut ctx).await;
        assert_eq!(ctx.accumulated_response, APOLOGY_MESSAGE);
    }
}
