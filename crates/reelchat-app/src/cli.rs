//! CLI argument definitions for the Reelchat application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Reelchat — a conversational analyst for short videos.
#[derive(Parser, Debug)]
#[command(name = "reelchat", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// User namespace for session memory.
    #[arg(short = 'u', long = "user", global = true, default_value = "user1")]
    pub user: String,

    /// Session id within the user's namespace.
    #[arg(short = 's', long = "session", global = true, default_value = "session1")]
    pub session: String,

    /// Data directory for the session snapshot and generated reports.
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one request/response turn through the task graph.
    Ask {
        /// The natural-language request.
        query: String,

        /// Path of the video the request is about.
        #[arg(long = "video")]
        video: Option<String>,

        /// Canned routing decision emitted by the stub text-generation
        /// engine. Wire a real backend to classify for real.
        #[arg(long = "route", value_enum, default_value_t = CannedRoute::Transcript)]
        route: CannedRoute,
    },

    /// Print the full turn history of the session.
    History,

    /// List known users and their sessions.
    Sessions,

    /// Empty the session's turn list but keep the session.
    ClearSession,

    /// Remove the session and its turns.
    DeleteSession,

    /// Remove the user and all their sessions.
    DeleteUser,
}

/// Routing decisions the stub router can replay.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CannedRoute {
    Video,
    Transcript,
    Report,
    Reject,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > REELCHAT_CONFIG env var > platform default
    /// (~/.reelchat/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("REELCHAT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the data directory.
    ///
    /// Priority: --data-dir flag > config file value (with ~ expanded).
    pub fn resolve_data_dir(&self, config_data_dir: &str) -> PathBuf {
        if let Some(ref p) = self.data_dir {
            return p.clone();
        }
        expand_home(config_data_dir)
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Expand a leading ~ to the home directory in a path string.
fn expand_home(path: &str) -> PathBuf {
    if path.starts_with("~/") || path.starts_with("~\\") {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(&path[2..])
    } else {
        PathBuf::from(path)
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".reelchat").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".reelchat").join("config.toml");
    }
    PathBuf::from("config.toml")
}
