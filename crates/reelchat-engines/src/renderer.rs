//! Plain-text stub renderer.
//!
//! Real PDF/slide generation is an external collaborator. This renderer
//! satisfies the same contract by writing the report spec as a readable
//! outline, so the full pipeline can run end-to-end without a document
//! backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use reelchat_core::error::Result;
use reelchat_core::types::ReportSpec;

use crate::ReportRenderer;

/// Renderer writing reports as plain-text outlines.
///
/// The output file takes the extension of the requested format (`.pdf` or
/// `.pptx`) so callers see the path shape a real backend would produce.
pub struct OutlineRenderer {
    output_dir: PathBuf,
}

impl OutlineRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl ReportRenderer for OutlineRenderer {
    async fn render(&self, spec: &ReportSpec) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let file_name = format!("{}.{}", spec.output_path, spec.file_type.extension());
        let path = self.output_dir.join(file_name);

        let mut body = String::new();
        body.push_str(&spec.title);
        body.push('\n');
        body.push_str(&"=".repeat(spec.title.chars().count().max(1)));
        body.push('\n');
        for section in &spec.sections {
            body.push('\n');
            body.push_str(&section.heading);
            body.push('\n');
            body.push_str(&"-".repeat(section.heading.chars().count().max(1)));
            body.push('\n');
            body.push_str(&section.content);
            body.push('\n');
        }

        std::fs::write(&path, body)?;
        tracing::info!(path = %path.display(), format = %spec.file_type, "Report rendered");
        Ok(path)
    }
}
