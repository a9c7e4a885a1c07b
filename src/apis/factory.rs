use super::{ScheduleSource, ShowtimesApiSource, WhatsOnPageSource};
use crate::common::constants::{SHOWTIMES_API_SOURCE, WHATS_ON_PAGE_SOURCE};
use crate::config::AppConfig;

/// Creates the named acquisition source, or None when the name is unknown
/// or the source is not configured.
pub fn create_source(name: &str, config: &AppConfig) -> Option<Box<dyn ScheduleSource>> {
    match name {
        WHATS_ON_PAGE_SOURCE => Some(Box::new(WhatsOnPageSource::new(
            config.sources.whats_on_url.clone(),
        ))),
        SHOWTIMES_API_SOURCE => config
            .sources
            .showtimes_api_url
            .clone()
            .map(|url| Box::new(ShowtimesApiSource::new(url)) as Box<dyn ScheduleSource>),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sources_are_constructed() {
        let mut config = AppConfig::default();
        config.sources.showtimes_api_url = Some("https://example.test/api".to_string());
        let source = create_source(WHATS_ON_PAGE_SOURCE, &config).unwrap();
        assert_eq!(source.source_name(), WHATS_ON_PAGE_SOURCE);
        let source = create_source(SHOWTIMES_API_SOURCE, &config).unwrap();
        assert_eq!(source.source_name(), SHOWTIMES_API_SOURCE);
    }

    #[test]
    fn test_unknown_or_unconfigured_sources_are_none() {
        let config = AppConfig::default();
        assert!(create_source("carrier-pigeon", &config).is_none());
        // No API URL configured.
        assert!(create_source(SHOWTIMES_API_SOURCE, &config).is_none());
    }
}
