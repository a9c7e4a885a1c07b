use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::ScheduleSource;
use crate::common::constants::LOCAL_FILE_SOURCE;
use crate::common::error::Result;
use crate::domain::SourceDocument;

/// Reads a saved document from disk, for debugging and offline runs.
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ScheduleSource for LocalFileSource {
    fn source_name(&self) -> &'static str {
        LOCAL_FILE_SOURCE
    }

    async fn fetch_document(&self) -> Result<SourceDocument> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        let is_markup = matches!(
            self.path.extension().and_then(|ext| ext.to_str()),
            Some("html") | Some("htm")
        ) || body.trim_start().starts_with('<');
        debug!(path = %self.path.display(), is_markup, "read local document");
        Ok(if is_markup {
            SourceDocument::Markup(body)
        } else {
            SourceDocument::Text(body)
        })
    }
}
