//! Reelchat application binary - composition root.
//!
//! Ties the crates together into a single executable:
//! 1. Load configuration from TOML
//! 2. Open the session store (JSON snapshot)
//! 3. Wire collaborator engines into the task graph
//! 4. Run the requested command (one chat turn, or session maintenance)
//!
//! The engines wired here are the stub implementations from
//! `reelchat-engines`; real inference backends plug in behind the same
//! traits without touching the graph.

mod cli;

use std::sync::Arc;

use clap::Parser;

use reelchat_chat::prompts::REJECTION_MESSAGE;
use reelchat_chat::{GraphConfig, TaskGraph};
use reelchat_core::types::RequestContext;
use reelchat_core::ReelchatConfig;
use reelchat_engines::{
    MockSpeechToText, MockTextGeneration, MockVisionLanguage, OutlineRenderer,
};
use reelchat_memory::SessionStore;

use cli::{CannedRoute, CliArgs, Command};

/// Replies the stub router replays for a canned route.
fn scripted_replies(route: CannedRoute) -> Vec<String> {
    match route {
        CannedRoute::Video => vec![
            r#"{"Task_name": "video_analysis", "agent_name": "video_analyst"}"#.to_string(),
        ],
        CannedRoute::Transcript => vec![
            r#"{"Task_name": "transcript_analysis", "agent_name": "transcript_analyst"}"#
                .to_string(),
        ],
        CannedRoute::Report => vec![
            r#"{"Task_name": "report_generation", "agent_name": "report_analyst"}"#.to_string(),
            serde_json::json!({
                "tool_name": "generate_file",
                "args": {
                    "file_type": "pdf",
                    "title": "Session Summary",
                    "sections": [
                        {"heading": "Recap", "content": "Summary of the session so far."}
                    ],
                    "output_path": "session_summary"
                }
            })
            .to_string(),
        ],
        CannedRoute::Reject => vec![REJECTION_MESSAGE.to_string()],
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first; the log level may come from it.
    let config_file = args.resolve_config_path();
    let config = ReelchatConfig::load_or_default(&config_file);

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Reelchat v{}", env!("CARGO_PKG_VERSION"));

    // Storage.
    let data_dir = args.resolve_data_dir(&config.general.data_dir);
    std::fs::create_dir_all(&data_dir)?;
    let snapshot_path = data_dir.join(&config.memory.snapshot_file);
    let store = Arc::new(SessionStore::open(&snapshot_path));
    tracing::info!(path = %snapshot_path.display(), "Session store opened");

    match args.command {
        Command::Ask { query, video, route } => {
            // Stub engines; see module docs.
            let llm = Arc::new(MockTextGeneration::scripted(scripted_replies(route)));
            let stt = Arc::new(MockSpeechToText::new(
                "(stub transcript; no speech-to-text backend wired)",
            ));
            let vlm = Arc::new(MockVisionLanguage::new(
                "Assistant: (stub visual description; no vision backend wired)",
            ));
            let renderer = Arc::new(OutlineRenderer::new(
                data_dir.join(&config.report.output_dir),
            ));

            let graph = TaskGraph::new(
                llm,
                stt,
                vlm,
                renderer,
                store.clone(),
                GraphConfig {
                    context_window: config.memory.context_window,
                    template_seed: None,
                },
            );

            let ctx = RequestContext::new(&args.user, &args.session, &query, video);
            let out = graph.run(ctx).await;

            println!("{}", out.accumulated_response);
            if let Some(path) = out.artifact_path {
                println!("Report written to {}", path.display());
            }
        }

        Command::History => {
            for turn in store.history(&args.user, &args.session) {
                println!("{}: {}", turn.role, turn.content);
            }
        }

        Command::Sessions => {
            for user in store.list_users() {
                for session in store.list_sessions(&user) {
                    println!("{} / {}", user, session);
                }
            }
        }

        Command::ClearSession => {
            store.clear_session(&args.user, &args.session);
            println!("Cleared session {} for {}", args.session, args.user);
        }

        Command::DeleteSession => {
            store.delete_session(&args.user, &args.session);
            println!("Deleted session {} for {}", args.session, args.user);
        }

        Command::DeleteUser => {
            store.delete_user(&args.user);
            println!("Deleted user {}", args.user);
        }
    }

    Ok(())
}
