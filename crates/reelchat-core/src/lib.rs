pub mod config;
pub mod error;
pub mod types;

pub use config::ReelchatConfig;
pub use error::{ReelchatError, Result};
pub use types::*;
