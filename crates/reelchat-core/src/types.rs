//! Shared domain types for the Reelchat system.
//!
//! Everything that crosses a crate boundary lives here: conversation turns,
//! routing decisions, the per-request context flowing through the task graph,
//! and the report specification consumed by the rendering collaborator.

use std::fmt;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Conversation turns
// =============================================================================

/// Who authored a turn in a session's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Human,
    Ai,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Human => write!(f, "Human"),
            Role::Ai => write!(f, "AI"),
        }
    }
}

/// One message in a session's history. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    /// Wall-clock arrival time as epoch seconds.
    pub created_at: i64,
}

impl Turn {
    /// Create a turn stamped with the current wall-clock time.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now().timestamp(),
        }
    }
}

// =============================================================================
// Routing
// =============================================================================

/// The task categories the intent classifier can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    VideoAnalysis,
    TranscriptAnalysis,
    ReportGeneration,
}

impl TaskKind {
    /// Map a classifier `Task_name` value to a task kind.
    pub fn from_task_name(name: &str) -> Option<Self> {
        match name {
            "video_analysis" => Some(TaskKind::VideoAnalysis),
            "transcript_analysis" => Some(TaskKind::TranscriptAnalysis),
            "report_generation" => Some(TaskKind::ReportGeneration),
            _ => None,
        }
    }

    /// Map a classifier `agent_name` value to a task kind.
    pub fn from_agent_name(name: &str) -> Option<Self> {
        match name {
            "video_analyst" => Some(TaskKind::VideoAnalysis),
            "transcript_analyst" => Some(TaskKind::TranscriptAnalysis),
            "report_analyst" => Some(TaskKind::ReportGeneration),
            _ => None,
        }
    }
}

/// Where the dispatcher sends a request after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Task(TaskKind),
    Reject,
}

/// Transient output of the intent classifier.
///
/// Produced once per request, consumed immediately by the dispatcher, never
/// persisted. `raw_text` is the classifier's literal (reasoning-stripped)
/// output; on a rejection it becomes the user-visible response verbatim.
#[derive(Debug, Clone)]
pub struct RoutingDecision {
    pub route: Route,
    pub raw_text: String,
}

// =============================================================================
// Request context
// =============================================================================

/// The unit of work flowing through the orchestration graph.
///
/// Owned exclusively by one graph execution; the only shared state is the
/// session store. Collaborator handles are *not* carried here — the graph
/// receives them by injection at construction time.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlates log lines across the stages of one execution.
    pub request_id: Uuid,
    pub user_id: String,
    pub session_id: String,
    pub query: String,
    pub video_path: Option<String>,
    /// Serialized recent turns, loaded by the first graph stage.
    pub loaded_history: String,
    /// The response under construction; whatever is here at finalize time is
    /// what the user sees and what gets appended as the AI turn.
    pub accumulated_response: String,
    /// Path of a generated report artifact, when the report stage ran and
    /// succeeded. `None` doubles as the failure sentinel.
    pub artifact_path: Option<PathBuf>,
}

impl RequestContext {
    pub fn new(
        user_id: impl Into<String>,
        session_id: impl Into<String>,
        query: impl Into<String>,
        video_path: Option<String>,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            user_id: user_id.into(),
            session_id: session_id.into(),
            query: query.into(),
            video_path,
            loaded_history: String::new(),
            accumulated_response: String::new(),
            artifact_path: None,
        }
    }
}

// =============================================================================
// Report specification
// =============================================================================

/// Output format of a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Pptx,
}

impl ReportFormat {
    /// File extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Pptx => "pptx",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// One titled block of report body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub heading: String,
    pub content: String,
}

/// Instructions for the rendering collaborator, parsed from the report
/// model's `args` JSON object. Consumed once; not persisted beyond the
/// resulting artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSpec {
    pub file_type: ReportFormat,
    pub title: String,
    pub sections: Vec<ReportSection>,
    /// Output filename stem, no extension.
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_output_path() -> String {
    "output_file".to_string()
}
