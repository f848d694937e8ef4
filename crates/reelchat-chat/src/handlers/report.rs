//! Report generation handler.
//!
//! Two-step: a second model call turns the session's recent history into a
//! `generate_file` instruction, then the rendering collaborator produces the
//! artifact. Every failure along the way collapses into the apology and a
//! cleared artifact path.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use reelchat_core::error::{ReelchatError, Result};
use reelchat_core::types::{ReportSpec, RequestContext};
use reelchat_engines::{GenMessage, ReportRenderer, TextGeneration};
use reelchat_memory::SessionStore;

use crate::format::{pick_template, strip_reasoning};
use crate::prompts::{APOLOGY_MESSAGE, REPORT_SYSTEM_PROMPT, SUCCESS_TEMPLATES};

/// Builds a report spec from conversation history and hands it to the
/// renderer.
pub struct ReportHandler {
    llm: Arc<dyn TextGeneration>,
    renderer: Arc<dyn ReportRenderer>,
    store: Arc<SessionStore>,
    context_window: usize,
    template_seed: Option<u64>,
}

impl ReportHandler {
    pub fn new(
        llm: Arc<dyn TextGeneration>,
        renderer: Arc<dyn ReportRenderer>,
        store: Arc<SessionStore>,
        context_window: usize,
        template_seed: Option<u64>,
    ) -> Self {
        Self {
            llm,
            renderer,
            store,
            context_window,
            template_seed,
        }
    }

    /// Run the handler, writing the response and artifact path into the
    /// context.
    pub async fn run(&self, ctx: &mut RequestContext) {
        match self.generate(ctx).await {
            Ok(path) => {
                ctx.artifact_path = Some(path);
                ctx.accumulated_response =
                    pick_template(&SUCCESS_TEMPLATES, self.template_seed).to_string();
            }
            Err(e) => {
                warn!(request_id = %ctx.request_id, error = %e, "Report generation failed");
                ctx.artifact_path = None;
                ctx.accumulated_response = APOLOGY_MESSAGE.to_string();
            }
        }
    }

    async fn generate(&self, ctx: &RequestContext) -> Result<PathBuf> {
        // Reload rather than reuse loaded_history: the window for report
        // content is its own concern.
        let history =
            self.store
                .recent_context(&ctx.user_id, &ctx.session_id, self.context_window);

        let user_message = format!(
            "Based on our chat history:\n{}\n{}",
            history, ctx.query
        );
        let messages = [
            GenMessage::system(REPORT_SYSTEM_PROMPT),
            GenMessage::user(&user_message),
        ];

        let raw = self.llm.complete(&messages).await?;
        let spec = parse_report_call(&strip_reasoning(&raw))?;
        self.renderer.render(&spec).await
    }
}

/// Parse a cleaned report-model output into a `ReportSpec`.
///
/// Expects one JSON object with an `args` member matching the
/// `generate_file` signature; anything else is an error.
pub fn parse_report_call(cleaned: &str) -> Result<ReportSpec> {
    let value: serde_json::Value = serde_json::from_str(cleaned)?;
    let args = value
        .get("args")
        .cloned()
        .ok_or_else(|| ReelchatError::Serialization("Missing `args` object".to_string()))?;
    let spec: ReportSpec = serde_json::from_value(args)?;
    Ok(spec)
}
