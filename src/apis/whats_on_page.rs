use async_trait::async_trait;
use tracing::{info, instrument};

use super::ScheduleSource;
use crate::common::constants::{BROWSER_USER_AGENT, WHATS_ON_PAGE_SOURCE};
use crate::common::error::Result;
use crate::domain::SourceDocument;

/// Fetches the cinema's what's-on page as markup for the extractor chain.
pub struct WhatsOnPageSource {
    url: String,
}

impl WhatsOnPageSource {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

#[async_trait]
impl ScheduleSource for WhatsOnPageSource {
    fn source_name(&self) -> &'static str {
        WHATS_ON_PAGE_SOURCE
    }

    #[instrument(skip(self))]
    async fn fetch_document(&self) -> Result<SourceDocument> {
        let client = reqwest::Client::new();
        info!("HTTP GET request to: {}", self.url);
        let resp = client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?
            .error_for_status()?;
        let body = resp.text().await?;
        info!("fetched {} bytes of markup", body.len());
        Ok(SourceDocument::Markup(body))
    }
}
