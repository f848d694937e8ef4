//! The orchestration graph: load context, classify, dispatch, finalize.
//!
//! One request flows through one execution as a synchronous pipeline of
//! stages; every collaborator call is awaited to completion before the graph
//! advances. The only branch point sits after classification, and its
//! transition is a pure function of the routing decision.

use std::sync::Arc;

use tracing::info;

use reelchat_core::types::{RequestContext, Role, Route, RoutingDecision, TaskKind};
use reelchat_engines::{ReportRenderer, SpeechToText, TextGeneration, VisionLanguage};
use reelchat_memory::SessionStore;

use crate::classifier::IntentClassifier;
use crate::handlers::{ReportHandler, TranscriptHandler, VisionHandler};

/// Stages of one graph execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadContext,
    Classify,
    Transcript,
    Vision,
    Report,
    Finalize,
}

/// Transition out of the classify stage. Deterministic, no hidden state.
pub fn next_stage(decision: &RoutingDecision) -> Stage {
    match decision.route {
        Route::Task(TaskKind::TranscriptAnalysis) => Stage::Transcript,
        Route::Task(TaskKind::VideoAnalysis) => Stage::Vision,
        Route::Task(TaskKind::ReportGeneration) => Stage::Report,
        Route::Reject => Stage::Finalize,
    }
}

/// Tunables for a graph instance.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Recent turns loaded for classification context and report content.
    pub context_window: usize,
    /// Fixed seed for template selection; `None` for real randomness.
    pub template_seed: Option<u64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            context_window: 8,
            template_seed: None,
        }
    }
}

/// The task dispatcher.
///
/// Owns the classifier and the three handlers; collaborators arrive by
/// injection here, once, instead of being threaded through request data.
pub struct TaskGraph {
    classifier: IntentClassifier,
    transcript: TranscriptHandler,
    vision: VisionHandler,
    report: ReportHandler,
    store: Arc<SessionStore>,
    config: GraphConfig,
}

impl TaskGraph {
    pub fn new(
        llm: Arc<dyn TextGeneration>,
        stt: Arc<dyn SpeechToText>,
        vlm: Arc<dyn VisionLanguage>,
        renderer: Arc<dyn ReportRenderer>,
        store: Arc<SessionStore>,
        config: GraphConfig,
    ) -> Self {
        let classifier = IntentClassifier::new(llm.clone());
        let transcript = TranscriptHandler::new(stt, config.template_seed);
        let vision = VisionHandler::new(vlm);
        let report = ReportHandler::new(
            llm,
            renderer,
            store.clone(),
            config.context_window,
            config.template_seed,
        );
        Self {
            classifier,
            transcript,
            vision,
            report,
            store,
            config,
        }
    }

    /// Execute one request end to end.
    ///
    /// Infallible by design: every failure mode inside the graph resolves to
    /// a user-visible response, and the turn is always recorded — the
    /// returned context carries both the final response and any artifact.
    pub async fn run(&self, mut ctx: RequestContext) -> RequestContext {
        let mut stage = Stage::LoadContext;

        loop {
            info!(request_id = %ctx.request_id, stage = ?stage, "Entering stage");
            match stage {
                Stage::LoadContext => {
                    self.store.ensure_session(&ctx.user_id, &ctx.session_id);
                    ctx.loaded_history = self.store.recent_context(
                        &ctx.user_id,
                        &ctx.session_id,
                        self.config.context_window,
                    );
                    stage = Stage::Classify;
                }
                Stage::Classify => {
                    let decision = self.classifier.classify(&ctx.query).await;
                    // On a rejection this text is the final response; task
                    // stages overwrite it.
                    ctx.accumulated_response = decision.raw_text.clone();
                    stage = next_stage(&decision);
                }
                Stage::Transcript => {
                    self.transcript.run(&mut ctx).await;
                    stage = Stage::Finalize;
                }
                Stage::Vision => {
                    self.vision.run(&mut ctx).await;
                    stage = Stage::Finalize;
                }
                Stage::Report => {
                    self.report.run(&mut ctx).await;
                    stage = Stage::Finalize;
                }
                Stage::Finalize => {
                    self.store
                        .append_turn(&ctx.user_id, &ctx.session_id, Role::Human, &ctx.query);
                    self.store.append_turn(
                        &ctx.user_id,
                        &ctx.session_id,
                        Role::Ai,
                        &ctx.accumulated_response,
                    );
                    return ctx;
                }
            }
        }
    }
}
