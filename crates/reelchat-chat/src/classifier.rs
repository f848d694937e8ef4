//! Intent classification: one constrained model call, parsed into a route.

use std::sync::Arc;

use tracing::{debug, warn};

use reelchat_core::types::{Route, RoutingDecision, TaskKind};
use reelchat_engines::{GenMessage, TextGeneration};

use crate::format::strip_reasoning;
use crate::prompts::{APOLOGY_MESSAGE, ROUTER_SYSTEM_PROMPT};

/// Wraps a single text-generation call with the fixed router instruction and
/// turns the raw output into a routing decision.
pub struct IntentClassifier {
    llm: Arc<dyn TextGeneration>,
}

impl IntentClassifier {
    pub fn new(llm: Arc<dyn TextGeneration>) -> Self {
        Self { llm }
    }

    /// Classify one free-text query.
    ///
    /// Never fails: a collaborator error becomes a rejection whose raw text
    /// is the fixed apology, so the turn still completes with a response.
    pub async fn classify(&self, query: &str) -> RoutingDecision {
        let messages = [
            GenMessage::system(ROUTER_SYSTEM_PROMPT),
            GenMessage::user(query),
        ];

        let raw = match self.llm.complete(&messages).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Router model call failed");
                return RoutingDecision {
                    route: Route::Reject,
                    raw_text: APOLOGY_MESSAGE.to_string(),
                };
            }
        };

        let cleaned = strip_reasoning(&raw);
        let route = parse_route(&cleaned);
        debug!(?route, "Query classified");
        RoutingDecision {
            route,
            raw_text: cleaned,
        }
    }
}

/// Parse cleaned router output into a route.
///
/// Valid JSON with a recognized `Task_name` or `agent_name` selects that
/// task. Categories are checked in a fixed order (video, transcript,
/// report), so output whose two fields name different tasks resolves to the
/// earliest matching category. Valid JSON with unrecognized values, and
/// anything that is not JSON at all (including the literal mercy message),
/// both collapse into `Reject` — the caller shows the raw text either way.
pub fn parse_route(cleaned: &str) -> Route {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(cleaned) else {
        return Route::Reject;
    };

    let by_task = value
        .get("Task_name")
        .and_then(|v| v.as_str())
        .and_then(TaskKind::from_task_name);
    let by_agent = value
        .get("agent_name")
        .and_then(|v| v.as_str())
        .and_then(TaskKind::from_agent_name);

    for kind in [
        TaskKind::VideoAnalysis,
        TaskKind::TranscriptAnalysis,
        TaskKind::ReportGeneration,
    ] {
        if by_task == Some(kind) || by_agent == Some(kind) {
            return Route::Task(kind);
        }
    }
    Route::Reject
}
