pub mod factory;
mod local_file;
mod showtimes_api;
mod whats_on_page;

pub use local_file::LocalFileSource;
pub use showtimes_api::ShowtimesApiSource;
pub use whats_on_page::WhatsOnPageSource;

use crate::common::error::Result;
use crate::domain::SourceDocument;

/// One way of obtaining the day's raw schedule document. Sources own all
/// I/O concerns (timeouts, credentials, retries); the pipeline only ever
/// sees a document or an error.
#[async_trait::async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Short identifier used in config, the CLI and the snapshot `source`
    /// field.
    fn source_name(&self) -> &'static str;

    async fn fetch_document(&self) -> Result<SourceDocument>;
}
