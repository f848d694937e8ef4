//! Task handlers: one per specialist capability.
//!
//! Each handler adapts a collaborator into the graph's response contract:
//! it writes its result into the request context's accumulated response and
//! never lets a collaborator error escape — failures collapse into the fixed
//! apology text.

pub mod report;
pub mod transcript;
pub mod vision;

pub use report::ReportHandler;
pub use transcript::TranscriptHandler;
pub use vision::VisionHandler;
